//! Transport-agnostic draw controller for the AniMe-Matrix lid panel
//!
//! This crate contains the device-facing control flow that does not depend
//! on any specific USB stack:
//!
//! - [`Transport`] trait for the host's blocking control-transfer channel
//! - Draw lifecycle state machine (init handshake, draw cycles, shutdown)
//! - [`Controller`] tying the `animatrix-protocol` frame encoder to a
//!   transport
//! - [`StatusCode`] for thin host bindings
//!
//! A draw cycle is three sequential sends (first page, second page,
//! flush), each of which must be acknowledged in full. The model is
//! single-threaded and blocking throughout: one logical writer per
//! controller, no internal locking, no retry.

#![no_std]
#![deny(unsafe_code)]

pub mod controller;
pub mod state;
pub mod status;
pub mod traits;

pub use controller::{ControlError, Controller};
pub use state::{DrawEvent, DrawState};
pub use status::StatusCode;
pub use traits::{TransferError, Transport};
