//! Two-byte command frames (client → device).
//!
//! Frame format:
//!
//! ```text
//! ┌─────────┬──────────┐
//! │ COMMAND │ ARGUMENT │
//! │ 1B      │ 1B       │
//! └─────────┴──────────┘
//! ```
//!
//! Command table:
//!
//! | command | meaning                | argument  |
//! |---------|------------------------|-----------|
//! | `0x00`  | request current layout | ignored   |
//! | `0x01`  | press button           | button id |
//! | other   | no-op                  | -         |
//!
//! The transport is free to fragment a frame across deliveries, so
//! [`CommandReader`] holds a command byte whose argument has not arrived yet
//! and completes the frame from the next delivery.

/// Size of a command frame in bytes
pub const FRAME_LEN: usize = 2;

/// Request the current button layout
pub const CMD_REQUEST_LAYOUT: u8 = 0x00;

/// Press the button named by the argument byte
pub const CMD_PRESS: u8 = 0x01;

/// A decoded command frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Client wants the full layout retransmitted
    RequestLayout,
    /// Client pressed the button with this id
    Press {
        /// Button id as assigned at registration
        button: u8,
    },
    /// Unrecognized command byte; defined as a no-op
    Unknown {
        /// The raw command byte
        command: u8,
    },
}

impl Command {
    /// Decode a complete frame.
    pub fn decode(command: u8, argument: u8) -> Self {
        match command {
            CMD_REQUEST_LAYOUT => Command::RequestLayout,
            CMD_PRESS => Command::Press { button: argument },
            other => Command::Unknown { command: other },
        }
    }

    /// Encode this command into a frame (for testing or client simulation).
    pub fn encode(&self) -> [u8; FRAME_LEN] {
        match *self {
            Command::RequestLayout => [CMD_REQUEST_LAYOUT, 0],
            Command::Press { button } => [CMD_PRESS, button],
            Command::Unknown { command } => [command, 0],
        }
    }
}

/// Incremental reader that reassembles command frames from a byte stream.
#[derive(Debug, Clone, Default)]
pub struct CommandReader {
    pending: Option<u8>,
}

impl CommandReader {
    /// Create a reader with no buffered half-frame.
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Discard any buffered half-frame.
    pub fn reset(&mut self) {
        self.pending = None;
    }

    /// Whether a command byte is waiting for its argument.
    pub fn has_partial(&self) -> bool {
        self.pending.is_some()
    }

    /// Feed a single byte to the reader.
    ///
    /// Returns the decoded command once its second byte arrives.
    pub fn feed(&mut self, byte: u8) -> Option<Command> {
        match self.pending.take() {
            Some(command) => Some(Command::decode(command, byte)),
            None => {
                self.pending = Some(byte);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;

    fn feed_all(reader: &mut CommandReader, bytes: &[u8]) -> Vec<Command> {
        bytes.iter().filter_map(|&b| reader.feed(b)).collect()
    }

    #[test]
    fn test_decode_table() {
        assert_eq!(Command::decode(0x00, 0xFF), Command::RequestLayout);
        assert_eq!(Command::decode(0x01, 9), Command::Press { button: 9 });
        assert_eq!(Command::decode(0x02, 9), Command::Unknown { command: 0x02 });
    }

    #[test]
    fn test_encode_roundtrip() {
        let cmd = Command::Press { button: 3 };
        let [c, a] = cmd.encode();
        assert_eq!(Command::decode(c, a), cmd);
    }

    #[test]
    fn test_reader_whole_frames() {
        let mut reader = CommandReader::new();
        let cmds = feed_all(&mut reader, &[0x00, 0x00, 0x01, 4]);
        assert_eq!(
            cmds,
            [Command::RequestLayout, Command::Press { button: 4 }]
        );
        assert!(!reader.has_partial());
    }

    #[test]
    fn test_reader_buffers_split_frame() {
        let mut reader = CommandReader::new();

        // First delivery ends mid-frame
        assert!(feed_all(&mut reader, &[0x01]).is_empty());
        assert!(reader.has_partial());

        // Next delivery completes it
        let cmds = feed_all(&mut reader, &[7, 0x00, 0x00]);
        assert_eq!(cmds, [Command::Press { button: 7 }, Command::RequestLayout]);
    }

    #[test]
    fn test_reader_reset_discards_half_frame() {
        let mut reader = CommandReader::new();
        reader.feed(0x01);
        reader.reset();
        // The next byte starts a new frame instead of completing the old one
        assert_eq!(reader.feed(0x00), None);
        assert_eq!(reader.feed(0x05), Some(Command::RequestLayout));
    }
}

#[cfg(test)]
mod props {
    extern crate std;

    use std::vec::Vec;

    use proptest::prelude::*;

    use super::*;

    fn frames_of(bytes: &[u8]) -> Vec<Command> {
        bytes
            .chunks_exact(FRAME_LEN)
            .map(|frame| Command::decode(frame[0], frame[1]))
            .collect()
    }

    proptest! {
        /// Splitting a stream at arbitrary delivery boundaries must never
        /// change or drop the decoded frames.
        #[test]
        fn reader_ignores_delivery_boundaries(
            stream in proptest::collection::vec(any::<u8>(), 0..48),
            cuts in proptest::collection::vec(0usize..48, 0..6),
        ) {
            let mut reader = CommandReader::new();
            let mut seen = Vec::new();

            let mut cuts: Vec<usize> = cuts.iter().map(|&c| c.min(stream.len())).collect();
            cuts.sort_unstable();
            cuts.push(stream.len());

            let mut start = 0;
            for cut in cuts {
                for &byte in &stream[start..cut] {
                    if let Some(cmd) = reader.feed(byte) {
                        seen.push(cmd);
                    }
                }
                start = cut;
            }

            prop_assert_eq!(seen, frames_of(&stream));
        }
    }
}
