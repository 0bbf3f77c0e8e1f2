//! Board-agnostic server engine for the Plektron remote button-deck.
//!
//! A Plektron device exposes a fixed set of up to sixteen buttons to a
//! handheld client over a bandwidth-limited wireless link and routes the
//! client's presses back to device-side callbacks. This crate contains
//! everything above the link layer:
//!
//! - [`registry`]: fixed-capacity ownership of buttons and press handlers
//! - [`layout`]: chunked, flow-controlled layout transmission
//! - [`dispatch`]: the command engine fed by either delivery mode
//! - [`server`]: the facade that picks callback or polling delivery at
//!   start-up
//! - [`transport`]: the contract the external link stack implements
//!
//! The wire format itself lives in `plektron-protocol`.
//!
//! # Example
//!
//! ```no_run
//! use plektron_core::{Button, ServerBuilder};
//! # struct Radio;
//! # impl plektron_core::LinkIo for Radio {
//! #     fn service(&mut self) {}
//! #     fn max_write_len(&self) -> usize { 64 }
//! #     fn write(&mut self, _bytes: &[u8]) {}
//! # }
//! # impl plektron_core::Transport for Radio {
//! #     fn supports_async(&self) -> bool { false }
//! #     fn register_read_callback(&mut self, _cb: plektron_core::ReadCallback) {}
//! #     fn is_connected(&self) -> bool { false }
//! #     fn available_bytes(&self) -> usize { 0 }
//! #     fn read_byte(&mut self) -> u8 { 0 }
//! # }
//! # let radio = Radio;
//! let mut builder = ServerBuilder::new();
//! builder.set_device_name("den-deck").unwrap();
//! builder
//!     .add_button(Button::new(0, 0, 120, 60, "Play"), || { /* toggle playback */ })
//!     .unwrap();
//!
//! let mut server = builder.start(radio);
//! while server.is_polling() {
//!     server.poll();
//! }
//! ```

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod dispatch;
pub mod layout;
pub mod registry;
pub mod server;
pub mod transport;

pub use dispatch::Engine;
pub use layout::{send_layout, LayoutError};
pub use plektron_protocol::Button;
pub use registry::{Handler, Registry, RegistryError};
pub use server::{NameError, Server, ServerBuilder, DEFAULT_NAME, MAX_NAME_LEN};
pub use transport::{LinkIo, ReadCallback, Transport};
