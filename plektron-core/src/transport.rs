//! Wireless link abstractions.
//!
//! These traits are the boundary to the external link stack (a BLE module
//! or similar). The engine never assumes more about the link than what is
//! declared here; in particular a link is not assumed to accept large
//! writes in one call, which is why [`LinkIo::max_write_len`] exists.

use alloc::boxed::Box;

/// Outbound half of a link: writing, plus the service hook that drives the
/// link's internal processing.
pub trait LinkIo {
    /// Drive internal link processing. Must be called periodically, and is
    /// called between chunked writes so the link can drain its outbound
    /// buffer.
    fn service(&mut self);

    /// Largest number of bytes a single [`write`](LinkIo::write) accepts.
    fn max_write_len(&self) -> usize;

    /// Queue bytes for transmission. Callers never pass more than
    /// [`max_write_len`](LinkIo::max_write_len) bytes at once.
    fn write(&mut self, bytes: &[u8]);
}

/// Callback invoked by an async-capable link when bytes arrive.
///
/// The link calls it from its own execution context, passing its outbound
/// half and the received bytes, and gets back the number of bytes consumed.
/// The callback must not block and must not wait on further link events;
/// any response it produces is written through the provided [`LinkIo`]
/// within the same invocation.
pub type ReadCallback = Box<dyn FnMut(&mut dyn LinkIo, &[u8]) -> usize>;

/// Full link contract required by the server facade.
pub trait Transport: LinkIo {
    /// Whether the link delivers inbound bytes through a registered
    /// callback. Queried once at start; the answer must not change while
    /// the link is alive.
    fn supports_async(&self) -> bool;

    /// Install the read callback. Only meaningful when
    /// [`supports_async`](Transport::supports_async) returns true; a
    /// subsequent registration replaces (and drops) the previous callback.
    fn register_read_callback(&mut self, callback: ReadCallback);

    /// Whether a client is currently connected.
    fn is_connected(&self) -> bool;

    /// Number of received bytes waiting to be read.
    fn available_bytes(&self) -> usize;

    /// Read one received byte. Only called when
    /// [`available_bytes`](Transport::available_bytes) reports at least one.
    fn read_byte(&mut self) -> u8;
}
