//! Button definitions shared by the device registry and the wire codec.

use heapless::String;

/// Maximum number of buttons a device exposes in one layout
pub const MAX_BUTTONS: usize = 16;

/// Maximum visible label length in bytes (the wire field adds a terminator)
pub const MAX_LABEL_LEN: usize = 49;

/// Maximum image reference length in bytes
pub const MAX_IMAGE_LEN: usize = 255;

/// One interactive button of the device layout.
///
/// `id` is assigned by the registry at registration time; the value set by
/// the constructors is a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    /// Layout identifier (0-15), assigned at registration
    pub id: u8,
    /// Horizontal position of the top-left corner
    pub x: u8,
    /// Vertical position of the top-left corner
    pub y: u8,
    /// Width in layout units
    pub width: u8,
    /// Height in layout units
    pub height: u8,
    /// Whether the client draws a border around the button
    pub border: bool,
    /// Label text, truncated to [`MAX_LABEL_LEN`] bytes
    pub label: String<MAX_LABEL_LEN>,
    /// Optional image reference, truncated to [`MAX_IMAGE_LEN`] bytes
    pub image: Option<String<MAX_IMAGE_LEN>>,
}

impl Button {
    /// Create a button with a border and no image.
    ///
    /// Labels longer than [`MAX_LABEL_LEN`] bytes are truncated at a
    /// character boundary.
    pub fn new(x: u8, y: u8, width: u8, height: u8, label: &str) -> Self {
        Self {
            id: 0,
            x,
            y,
            width,
            height,
            border: true,
            label: bounded(label),
            image: None,
        }
    }

    /// Set the border flag.
    pub fn with_border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    /// Attach an image reference, truncated to [`MAX_IMAGE_LEN`] bytes.
    pub fn with_image(mut self, image: &str) -> Self {
        self.image = Some(bounded(image));
        self
    }
}

/// Copy `text` into a bounded string, truncating at a character boundary.
fn bounded<const N: usize>(text: &str) -> String<N> {
    let mut end = text.len().min(N);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let mut out = String::new();
    // Cannot fail: the slice was just bounded to the capacity
    let _ = out.push_str(&text[..end]);
    out
}
