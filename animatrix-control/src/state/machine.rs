//! Draw state machine
//!
//! The controller's lifecycle is explicit, finite, and deterministic.
//! `Drawing` is entered and left inside one blocking draw call; `Closed`
//! is terminal, and nothing ever returns to `Uninitialized`. Recovery
//! means a new controller on a fresh transport handle.

use super::events::DrawEvent;

/// Controller lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawState {
    /// Created, init handshake not yet acknowledged
    Uninitialized,
    /// Handshake done, idle between draw cycles
    Ready,
    /// A draw cycle's three sends are in flight
    Drawing,
    /// Shut down or failed handshake; terminal
    Closed,
}

impl DrawState {
    /// Check if the handshake has completed
    pub fn is_initialized(&self) -> bool {
        matches!(self, DrawState::Ready | DrawState::Drawing)
    }

    /// Check if this is the terminal state
    pub fn is_closed(&self) -> bool {
        matches!(self, DrawState::Closed)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: DrawEvent) -> Self {
        use DrawEvent::*;
        use DrawState::*;

        match (self, event) {
            (Uninitialized, HandshakeOk) => Ready,

            (Ready, DrawStarted) => Drawing,
            // Both outcomes return to Ready; the caller decides whether
            // to rerun the cycle
            (Drawing, DrawFinished) => Ready,
            (Drawing, DrawFailed) => Ready,

            (_, Shutdown) => Closed,

            // Default: stay in current state
            _ => self,
        }
    }
}
