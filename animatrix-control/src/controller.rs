//! Draw controller
//!
//! Ties the frame encoder to a transport and walks the draw state machine.
//! One controller serves one device handle; a failed or short handshake
//! closes the controller for good, and a closed controller never touches
//! the transport again.

use animatrix_protocol::page::init_packet;
use animatrix_protocol::{FrameEncoder, LogicalFrame, ShapeError, PACKET_LEN};

use crate::state::{DrawEvent, DrawState};
use crate::traits::{TransferError, Transport};

/// Errors surfaced by controller operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlError {
    /// Operation needs a completed init handshake
    NotInitialized,
    /// Controller has shut down; bind a new one to a fresh handle
    Closed,
    /// Caller-supplied data does not fit the panel geometry
    Shape(ShapeError),
    /// The transport reported a failure
    Transfer(TransferError),
    /// The device acknowledged fewer than [`PACKET_LEN`] bytes
    ShortTransfer { sent: usize },
}

impl From<ShapeError> for ControlError {
    fn from(err: ShapeError) -> Self {
        ControlError::Shape(err)
    }
}

impl From<TransferError> for ControlError {
    fn from(err: TransferError) -> Self {
        ControlError::Transfer(err)
    }
}

/// Panel controller bound to one transport handle
///
/// Single-writer: callers serialize draw requests externally; the page
/// buffers are mutated in place on every prepare and lent to the transport
/// read-only for the duration of each send.
pub struct Controller<T: Transport> {
    transport: T,
    encoder: FrameEncoder,
    state: DrawState,
}

impl<T: Transport> Controller<T> {
    /// Bind a controller to a transport; the init handshake has not run yet
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            encoder: FrameEncoder::new(),
            state: DrawState::Uninitialized,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> DrawState {
        self.state
    }

    /// Borrow the encoder and its packed pages
    pub fn encoder(&self) -> &FrameEncoder {
        &self.encoder
    }

    /// Run the one-time init handshake
    ///
    /// Idempotent once `Ready`. The device must acknowledge the full
    /// packet; anything less closes the controller permanently.
    pub fn initialize(&mut self) -> Result<(), ControlError> {
        match self.state {
            DrawState::Closed => return Err(ControlError::Closed),
            DrawState::Ready | DrawState::Drawing => return Ok(()),
            DrawState::Uninitialized => {}
        }

        let packet = init_packet();
        match self.transport.initialize_handshake(&packet) {
            Ok(sent) if sent == PACKET_LEN => {
                self.state = self.state.transition(DrawEvent::HandshakeOk);
                Ok(())
            }
            Ok(sent) => {
                self.state = self.state.transition(DrawEvent::Shutdown);
                Err(ControlError::ShortTransfer { sent })
            }
            Err(err) => {
                self.state = self.state.transition(DrawEvent::Shutdown);
                Err(ControlError::Transfer(err))
            }
        }
    }

    /// Reshape and pack a flat buffer into the page buffers
    ///
    /// Pure CPU work, so it is allowed before `initialize`; only a closed
    /// controller rejects it. Nothing is sent until [`Self::draw`].
    pub fn prepare(&mut self, flat: &[u8]) -> Result<(), ControlError> {
        if self.state.is_closed() {
            return Err(ControlError::Closed);
        }
        let frame = LogicalFrame::from_flat(flat)?;
        self.encoder.encode(&frame)?;
        Ok(())
    }

    /// Run one draw cycle: first page, second page, flush, in that order
    ///
    /// Each send must be acknowledged in full; any failure aborts the
    /// remaining sends and the controller returns to `Ready` so the caller
    /// can decide whether to rerun the cycle.
    pub fn draw(&mut self) -> Result<(), ControlError> {
        self.ensure_ready()?;

        self.state = self.state.transition(DrawEvent::DrawStarted);
        let result = self.send_pages();
        let outcome = if result.is_ok() {
            DrawEvent::DrawFinished
        } else {
            DrawEvent::DrawFailed
        };
        self.state = self.state.transition(outcome);
        result
    }

    /// Pack an all-dark frame and run a draw cycle
    pub fn clear(&mut self) -> Result<(), ControlError> {
        self.ensure_ready()?;
        self.encoder.encode(&LogicalFrame::zeroed())?;
        self.draw()
    }

    /// Shut the controller down; terminal
    pub fn close(&mut self) {
        self.state = self.state.transition(DrawEvent::Shutdown);
    }

    fn ensure_ready(&self) -> Result<(), ControlError> {
        match self.state {
            DrawState::Uninitialized => Err(ControlError::NotInitialized),
            DrawState::Closed => Err(ControlError::Closed),
            DrawState::Ready | DrawState::Drawing => Ok(()),
        }
    }

    fn send_pages(&mut self) -> Result<(), ControlError> {
        let Self {
            transport, encoder, ..
        } = self;
        send(transport, encoder.first_page())?;
        send(transport, encoder.second_page())?;
        send(transport, encoder.flush())?;
        Ok(())
    }
}

fn send<T: Transport>(transport: &mut T, packet: &[u8; PACKET_LEN]) -> Result<(), ControlError> {
    let sent = transport.transfer(packet)?;
    if sent != PACKET_LEN {
        return Err(ControlError::ShortTransfer { sent });
    }
    Ok(())
}
