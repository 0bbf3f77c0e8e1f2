//! Server facade: configuration, delivery-mode selection, teardown.
//!
//! Lifecycle: a [`ServerBuilder`] collects buttons, handlers, and settings
//! while nothing is on the air; [`ServerBuilder::start`] binds the
//! transport, picks the delivery mode once, and yields a running
//! [`Server`]; dropping (or [`Server::stop`]) releases the transport and
//! every registered handler.
//!
//! The delivery mode is a sum type fixed at start:
//!
//! - **Callback**: the engine moves into the transport's read callback and
//!   runs from the link's own execution context. There is nothing left for
//!   `poll()` to drive, so calling it is a defined no-op.
//! - **Polling**: the engine stays behind `poll()` and the caller supplies
//!   the scheduling loop, one frame per call at most.
//!
//! Either way there is exactly one producer by construction, so no locking
//! is involved anywhere.

use alloc::boxed::Box;

use heapless::String;
use plektron_protocol::{Button, FRAME_LEN};

use crate::dispatch::Engine;
use crate::registry::{Registry, RegistryError};
use crate::transport::Transport;

/// Maximum broadcast name length in bytes
pub const MAX_NAME_LEN: usize = 10;

/// Broadcast name used when the application sets none
pub const DEFAULT_NAME: &str = "plektron";

/// Errors that can occur when configuring the broadcast name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NameError {
    /// An empty name was supplied; the previous name is kept
    Empty,
}

/// Collects the button set and device settings before the link comes up.
pub struct ServerBuilder {
    registry: Registry,
    name: String<MAX_NAME_LEN>,
}

impl ServerBuilder {
    /// Start configuring a server with the default broadcast name.
    pub fn new() -> Self {
        let mut name = String::new();
        // Cannot fail: the default fits the capacity
        let _ = name.push_str(DEFAULT_NAME);
        Self {
            registry: Registry::new(),
            name,
        }
    }

    /// Register a button and its press handler.
    ///
    /// Returns the assigned id. The button set is frozen once
    /// [`start`](ServerBuilder::start) is called.
    pub fn add_button(
        &mut self,
        button: Button,
        handler: impl FnMut() + 'static,
    ) -> Result<u8, RegistryError> {
        self.registry.register(button, handler)
    }

    /// Set the broadcast name.
    ///
    /// Names longer than [`MAX_NAME_LEN`] bytes are silently truncated at
    /// a character boundary; an empty name is rejected and the previous
    /// name kept.
    pub fn set_device_name(&mut self, name: &str) -> Result<(), NameError> {
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        let mut end = name.len().min(MAX_NAME_LEN);
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        self.name.clear();
        // Cannot fail: the slice was just bounded to the capacity
        let _ = self.name.push_str(&name[..end]);
        Ok(())
    }

    /// Number of buttons registered so far.
    pub fn button_count(&self) -> usize {
        self.registry.len()
    }

    /// Bind the transport and bring the server up.
    ///
    /// The delivery mode is chosen here, once: a callback-capable link
    /// gets the engine installed as its read callback; anything else runs
    /// in polling mode and the caller drives [`Server::poll`].
    pub fn start<T: Transport>(self, mut transport: T) -> Server<T> {
        let mut engine = Engine::new(self.registry);
        let delivery = if transport.supports_async() {
            transport.register_read_callback(Box::new(move |io, bytes| {
                engine.feed(bytes, io);
                // Split frames are buffered by the reader, so every byte
                // handed over counts as consumed
                bytes.len()
            }));
            Delivery::Callback
        } else {
            Delivery::Polling { engine }
        };
        Server {
            transport,
            delivery,
            name: self.name,
        }
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Delivery mode, fixed at start
enum Delivery {
    /// The engine lives inside the transport's read callback
    Callback,
    /// The caller drives the engine through [`Server::poll`]
    Polling { engine: Engine },
}

/// A running server, exclusive owner of its transport.
pub struct Server<T: Transport> {
    transport: T,
    delivery: Delivery,
    name: String<MAX_NAME_LEN>,
}

impl<T: Transport> Server<T> {
    /// The configured broadcast name.
    pub fn device_name(&self) -> &str {
        &self.name
    }

    /// Whether the caller is expected to drive [`poll`](Server::poll).
    pub fn is_polling(&self) -> bool {
        matches!(self.delivery, Delivery::Polling { .. })
    }

    /// Advance the protocol by at most one frame.
    ///
    /// Services the link, then consumes exactly one command frame if a
    /// client is connected and a full frame is buffered. Returns whether a
    /// frame was consumed. In callback mode this is a no-op returning
    /// false - the link delivers bytes on its own there.
    ///
    /// A layout request blocks this call for the full chunked
    /// transmission; the caller owns the scheduling loop.
    pub fn poll(&mut self) -> bool {
        let Delivery::Polling { engine } = &mut self.delivery else {
            return false;
        };
        self.transport.service();
        if !self.transport.is_connected() {
            return false;
        }
        if self.transport.available_bytes() < FRAME_LEN {
            return false;
        }
        let frame = [self.transport.read_byte(), self.transport.read_byte()];
        engine.feed(&frame, &mut self.transport);
        true
    }

    /// Stop the server, dropping the transport together with every
    /// registered button and handler.
    pub fn stop(self) {}
}
