//! Fixed-width wire records for layout transmission.
//!
//! Record format (device → client), one per button:
//!
//! ```text
//! ┌────┬───┬───┬───────┬────────┬────────┬─────────┬───────┬────────┐
//! │ ID │ X │ Y │ WIDTH │ HEIGHT │ BORDER │ IMG LEN │ LABEL │ IMAGE  │
//! │ 1B │ 1B│ 1B│ 1B    │ 1B     │ 1B     │ 1B      │ 50B   │ 256B   │
//! └────┴───┴───┴───────┴────────┴────────┴─────────┴───────┴────────┘
//! ```
//!
//! Every record is exactly [`RECORD_LEN`] bytes regardless of whether an
//! image is attached; the fixed widths are the framing, so both sides agree
//! on record boundaries without parsing the text fields. The image-length
//! byte tells the client how much of the image field is meaningful (0 means
//! no image); when it is 0 the image field contents are unspecified.

use crate::button::{Button, MAX_IMAGE_LEN, MAX_LABEL_LEN};

/// Label field width: visible bytes plus a NUL terminator
pub const LABEL_FIELD_LEN: usize = MAX_LABEL_LEN + 1;

/// Image field width: image bytes plus a NUL terminator
pub const IMAGE_FIELD_LEN: usize = MAX_IMAGE_LEN + 1;

/// Total record size in bytes
pub const RECORD_LEN: usize = 7 + LABEL_FIELD_LEN + IMAGE_FIELD_LEN;

// Field offsets
const OFF_ID: usize = 0;
const OFF_X: usize = 1;
const OFF_Y: usize = 2;
const OFF_WIDTH: usize = 3;
const OFF_HEIGHT: usize = 4;
const OFF_BORDER: usize = 5;
const OFF_IMAGE_LEN: usize = 6;
const OFF_LABEL: usize = 7;
const OFF_IMAGE: usize = OFF_LABEL + LABEL_FIELD_LEN;

/// Errors that can occur while decoding a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RecordError {
    /// Fewer than [`RECORD_LEN`] bytes available
    Incomplete,
    /// Label or image bytes are not valid UTF-8
    InvalidText,
}

impl Button {
    /// Encode this button into a fixed-width wire record.
    ///
    /// The label field is NUL-padded; the image field is written only when
    /// an image is attached, so callers that reuse buffers should zero them
    /// between records.
    pub fn encode(&self, out: &mut [u8; RECORD_LEN]) {
        out[OFF_ID] = self.id;
        out[OFF_X] = self.x;
        out[OFF_Y] = self.y;
        out[OFF_WIDTH] = self.width;
        out[OFF_HEIGHT] = self.height;
        out[OFF_BORDER] = u8::from(self.border);
        out[OFF_IMAGE_LEN] = self.image.as_ref().map_or(0, |img| img.len() as u8);

        out[OFF_LABEL..OFF_LABEL + LABEL_FIELD_LEN].fill(0);
        out[OFF_LABEL..OFF_LABEL + self.label.len()].copy_from_slice(self.label.as_bytes());

        if let Some(image) = &self.image {
            out[OFF_IMAGE..OFF_IMAGE + image.len()].copy_from_slice(image.as_bytes());
            out[OFF_IMAGE + image.len()] = 0;
        }
    }

    /// Decode a wire record back into a button.
    ///
    /// Used by host-side test harnesses and client simulations; the device
    /// itself only encodes.
    pub fn decode(bytes: &[u8]) -> Result<Self, RecordError> {
        if bytes.len() < RECORD_LEN {
            return Err(RecordError::Incomplete);
        }

        let label_field = &bytes[OFF_LABEL..OFF_LABEL + LABEL_FIELD_LEN];
        let label_len = label_field
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(MAX_LABEL_LEN)
            .min(MAX_LABEL_LEN);
        let label =
            core::str::from_utf8(&label_field[..label_len]).map_err(|_| RecordError::InvalidText)?;

        let image_len = bytes[OFF_IMAGE_LEN] as usize;
        let image = if image_len > 0 {
            let image_bytes = &bytes[OFF_IMAGE..OFF_IMAGE + image_len];
            Some(core::str::from_utf8(image_bytes).map_err(|_| RecordError::InvalidText)?)
        } else {
            None
        };

        let mut button = Button::new(
            bytes[OFF_X],
            bytes[OFF_Y],
            bytes[OFF_WIDTH],
            bytes[OFF_HEIGHT],
            label,
        )
        .with_border(bytes[OFF_BORDER] != 0);
        button.id = bytes[OFF_ID];
        if let Some(image) = image {
            button = button.with_image(image);
        }
        Ok(button)
    }
}
