//! Control-transfer transport trait
//!
//! Implementations own device discovery, the open handle, and the USB
//! setup packet (see `animatrix_protocol::usb` for the constants). This
//! crate only hands them finished 640-byte packets, one blocking call at a
//! time.

use animatrix_protocol::PACKET_LEN;

/// Errors reported by a transport implementation
///
/// Never retried at this layer; the caller decides whether to rerun a
/// whole draw cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferError {
    /// The transfer did not complete in time
    Timeout,
    /// The device rejected the request
    Stall,
    /// The device handle is gone
    Disconnected,
}

/// One blocking control-transfer channel to the panel
///
/// Both methods block until the transfer completes or fails and report the
/// acknowledged byte count; a send only counts as successful when the
/// device acknowledges all [`PACKET_LEN`] bytes, which the controller
/// checks.
pub trait Transport {
    /// Send one packet
    fn transfer(&mut self, packet: &[u8; PACKET_LEN]) -> Result<usize, TransferError>;

    /// Send the one-time init handshake packet
    fn initialize_handshake(&mut self, packet: &[u8; PACKET_LEN]) -> Result<usize, TransferError>;
}
