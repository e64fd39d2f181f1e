//! Hardware abstraction traits
//!
//! The one seam between this crate and the outside world: a blocking
//! control-transfer channel supplied by the host.

pub mod transport;

pub use transport::{Transport, TransferError};
