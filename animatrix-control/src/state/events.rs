//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawEvent {
    /// Init handshake acknowledged in full by the device
    HandshakeOk,
    /// A draw cycle began sending packets
    DrawStarted,
    /// All three packets of a cycle were acknowledged
    DrawFinished,
    /// A send failed or came up short; the cycle was aborted
    DrawFailed,
    /// Controller shut down; no further device I/O
    Shutdown,
}
