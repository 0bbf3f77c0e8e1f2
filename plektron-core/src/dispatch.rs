//! Command dispatch.
//!
//! The engine consumes the client's command stream and routes every
//! completed frame: layout requests go to the chunked layout writer, press
//! commands go to the registry. Malformed input never takes the engine
//! down; an unknown command is a defined no-op and an out-of-range button
//! id is reported and dropped.

use plektron_protocol::{Command, CommandReader};

use crate::layout::send_layout;
use crate::registry::Registry;
use crate::transport::LinkIo;

/// Protocol engine: the registry plus the incremental command reader.
///
/// One engine exists per server and lives wherever the delivery mode puts
/// it - inside the transport's read callback, or behind `poll()`.
pub struct Engine {
    registry: Registry,
    reader: CommandReader,
}

impl Engine {
    /// Build an engine around a populated registry.
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            reader: CommandReader::new(),
        }
    }

    /// Feed received bytes, dispatching every frame they complete.
    ///
    /// A trailing half-frame is buffered by the reader and completed on
    /// the next call. Returns the number of frames processed.
    pub fn feed(&mut self, bytes: &[u8], io: &mut dyn LinkIo) -> usize {
        let mut frames = 0;
        for &byte in bytes {
            if let Some(command) = self.reader.feed(byte) {
                self.dispatch(command, io);
                frames += 1;
            }
        }
        frames
    }

    fn dispatch(&mut self, command: Command, io: &mut dyn LinkIo) {
        match command {
            Command::RequestLayout => {
                if send_layout(self.registry.snapshot(), io).is_err() {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("layout requested with no registered buttons");
                }
            }
            Command::Press { button } => {
                if self.registry.invoke(button).is_err() {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("press for unregistered button {}", button);
                }
            }
            Command::Unknown { command: _raw } => {
                #[cfg(feature = "defmt")]
                defmt::trace!("ignoring unknown command {}", _raw);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::rc::Rc;
    use core::cell::Cell;
    use std::vec::Vec;

    use plektron_protocol::{Button, RECORD_LEN};

    use super::*;

    struct NullLink {
        writes: Vec<usize>,
    }

    impl NullLink {
        fn new() -> Self {
            Self { writes: Vec::new() }
        }
    }

    impl LinkIo for NullLink {
        fn service(&mut self) {}

        fn max_write_len(&self) -> usize {
            64
        }

        fn write(&mut self, bytes: &[u8]) {
            self.writes.push(bytes.len());
        }
    }

    fn engine_with_counter() -> (Engine, Rc<Cell<u32>>) {
        let mut registry = Registry::new();
        let presses = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&presses);
        registry
            .register(Button::new(0, 0, 10, 10, "go"), move || {
                counter.set(counter.get() + 1)
            })
            .unwrap();
        (Engine::new(registry), presses)
    }

    #[test]
    fn test_press_invokes_handler_once() {
        let (mut engine, presses) = engine_with_counter();
        let mut link = NullLink::new();

        assert_eq!(engine.feed(&[0x01, 0], &mut link), 1);
        assert_eq!(presses.get(), 1);
        assert!(link.writes.is_empty());
    }

    #[test]
    fn test_unregistered_press_is_swallowed() {
        let (mut engine, presses) = engine_with_counter();
        let mut link = NullLink::new();

        assert_eq!(engine.feed(&[0x01, 12], &mut link), 1);
        assert_eq!(presses.get(), 0);
    }

    #[test]
    fn test_unknown_command_is_noop() {
        let (mut engine, presses) = engine_with_counter();
        let mut link = NullLink::new();

        assert_eq!(engine.feed(&[0x02, 0xAB], &mut link), 1);
        assert_eq!(presses.get(), 0);
        assert!(link.writes.is_empty());
    }

    #[test]
    fn test_layout_request_writes_layout() {
        let (mut engine, _) = engine_with_counter();
        let mut link = NullLink::new();

        engine.feed(&[0x00, 0x00], &mut link);
        assert_eq!(link.writes.iter().sum::<usize>(), 1 + RECORD_LEN);
    }

    #[test]
    fn test_layout_request_on_empty_registry_is_nonfatal() {
        let mut engine = Engine::new(Registry::new());
        let mut link = NullLink::new();

        assert_eq!(engine.feed(&[0x00, 0x00], &mut link), 1);
        assert!(link.writes.is_empty());

        // The engine stays usable afterwards
        assert_eq!(engine.feed(&[0x02, 0], &mut link), 1);
    }

    #[test]
    fn test_split_frame_across_feeds() {
        let (mut engine, presses) = engine_with_counter();
        let mut link = NullLink::new();

        assert_eq!(engine.feed(&[0x01], &mut link), 0);
        assert_eq!(presses.get(), 0);
        assert_eq!(engine.feed(&[0x00], &mut link), 1);
        assert_eq!(presses.get(), 1);
    }

    #[test]
    fn test_frame_count_over_long_stream() {
        let (mut engine, presses) = engine_with_counter();
        let mut link = NullLink::new();

        // Three frames and a trailing half-frame
        let stream = [0x01, 0x00, 0x02, 0xFF, 0x01, 0x00, 0x01];
        assert_eq!(engine.feed(&stream, &mut link), 3);
        assert_eq!(presses.get(), 2);
    }
}
