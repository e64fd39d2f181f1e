//! AniMe-Matrix lid panel wire format
//!
//! This crate owns everything about how a frame of per-LED intensity bytes
//! becomes the three 640-byte control-transfer packets the panel accepts:
//!
//! ```text
//! flat buffer (1815B)
//!   └─ reshape ─▶ LogicalFrame (55 variable-width rows)
//!                    └─ encode ─▶ first page ─▶ second page ─▶ flush
//! ```
//!
//! The panel is non-rectangular: 55 rows, 33 elements wide at the hinge
//! tapering to 9 at the corner. The geometry table maps every logical
//! element to its byte offset in one of the two pages; two rows need
//! special handling (row 0 drops an element, row 20 straddles both pages).
//!
//! Transports, device discovery, and the draw state machine live in
//! `animatrix-control`; this crate performs no I/O.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod encoder;
pub mod frame;
pub mod geometry;
pub mod page;
pub mod usb;

pub use encoder::FrameEncoder;
pub use frame::{LogicalFrame, Row, ShapeError, FRAME_LEN, ROW_STRIDE};
pub use geometry::{PageTarget, RowGeometry, RowRole, MATRIX_ROWS, MAX_ROW_WIDTH};
pub use page::{init_packet, PACKET_LEN, PAGE_HEADER_LEN};
