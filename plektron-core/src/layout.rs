//! Chunked layout transmission.
//!
//! A full layout transfer is one count byte followed by one fixed-width
//! record per button (see `plektron_protocol::record`). Records are larger
//! than what a constrained link accepts in a single write, so each record
//! is split into chunks no bigger than the link's declared maximum, with a
//! service tick after every write. The tick lets the link flush its
//! outbound buffer before the next chunk lands; skipping it overruns the
//! link on long transfers.

use plektron_protocol::{Button, RECORD_LEN};

use crate::transport::LinkIo;

/// Errors that can occur when sending the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutError {
    /// No buttons are registered; nothing was written
    Empty,
}

/// Send the complete layout over `io`.
///
/// Writes the count byte, then every record in registration order. Fails
/// before writing anything if `buttons` is empty.
pub fn send_layout(buttons: &[Button], io: &mut dyn LinkIo) -> Result<(), LayoutError> {
    if buttons.is_empty() {
        return Err(LayoutError::Empty);
    }

    io.write(&[buttons.len() as u8]);
    for button in buttons {
        // Fresh zeroed buffer per record: the image field of a record
        // without an image must not leak the previous record's bytes
        let mut record = [0u8; RECORD_LEN];
        button.encode(&mut record);
        write_chunked(io, &record);
    }
    Ok(())
}

/// Write `data` in chunks the link accepts, servicing it after each write.
fn write_chunked(io: &mut dyn LinkIo, data: &[u8]) {
    let max = io.max_write_len().max(1);
    for chunk in data.chunks(max) {
        io.write(chunk);
        io.service();
    }
}
