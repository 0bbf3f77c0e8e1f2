//! Fixed-capacity storage for buttons and their press handlers.

use alloc::boxed::Box;

use heapless::Vec;
use plektron_protocol::{Button, MAX_BUTTONS};

/// Action invoked when the client presses a button.
///
/// Any no-argument invocable works: closures with captured state, function
/// pointers, or hand-written callables boxed by the caller.
pub type Handler = Box<dyn FnMut()>;

/// Errors that can occur when registering or invoking buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// The registry already holds [`MAX_BUTTONS`] buttons
    Full,
    /// No button is registered under the requested id
    InvalidIndex,
}

/// Owns the device's buttons and their handlers, paired by index.
///
/// Ids are assigned sequentially in registration order and stay stable for
/// the registry's lifetime; there is no removal. The id counter is the
/// registry's own length, so independent registries cannot interfere with
/// each other's assignments.
#[derive(Default)]
pub struct Registry {
    buttons: Vec<Button, MAX_BUTTONS>,
    handlers: Vec<Handler, MAX_BUTTONS>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            buttons: Vec::new(),
            handlers: Vec::new(),
        }
    }

    /// Store a button and its handler, assigning the next sequential id.
    ///
    /// Fails with [`RegistryError::Full`] once [`MAX_BUTTONS`] buttons are
    /// registered; the registry is left unchanged in that case.
    pub fn register(
        &mut self,
        mut button: Button,
        handler: impl FnMut() + 'static,
    ) -> Result<u8, RegistryError> {
        if self.buttons.is_full() {
            return Err(RegistryError::Full);
        }
        let id = self.buttons.len() as u8;
        button.id = id;
        // Cannot fail: fullness was checked and both vecs grow in step
        let _ = self.buttons.push(button);
        let _ = self.handlers.push(Box::new(handler));
        Ok(id)
    }

    /// Invoke the handler registered under `id`.
    ///
    /// The id comes straight off the wire, so it is bounds-checked here
    /// rather than trusted.
    pub fn invoke(&mut self, id: u8) -> Result<(), RegistryError> {
        let handler = self
            .handlers
            .get_mut(id as usize)
            .ok_or(RegistryError::InvalidIndex)?;
        handler();
        Ok(())
    }

    /// Ordered read-only view of the registered buttons.
    pub fn snapshot(&self) -> &[Button] {
        &self.buttons
    }

    /// Number of registered buttons.
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    /// Whether no buttons are registered.
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}
