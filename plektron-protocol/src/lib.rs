//! Wire format for the Plektron remote button-deck.
//!
//! A Plektron device exposes an ordered set of up to sixteen buttons to a
//! handheld client over a packetized wireless link. This crate defines both
//! directions of the wire format and nothing else — no I/O, no transport
//! assumptions.
//!
//! # Device → client: layout transfer
//!
//! One count byte followed by that many fixed-width records:
//!
//! ```text
//! ┌───────┬──────────┬──────────┬───
//! │ COUNT │ RECORD 0 │ RECORD 1 │ ...
//! │ 1B    │ 313B     │ 313B     │
//! └───────┴──────────┴──────────┴───
//! ```
//!
//! See [`record`] for the per-button record layout.
//!
//! # Client → device: command stream
//!
//! A stream of two-byte `(command, argument)` frames; see [`command`].

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod command;
pub mod record;

pub use button::{Button, MAX_BUTTONS, MAX_IMAGE_LEN, MAX_LABEL_LEN};
pub use command::{Command, CommandReader, CMD_PRESS, CMD_REQUEST_LAYOUT, FRAME_LEN};
pub use record::{RecordError, RECORD_LEN};
