//! Frame encoder: logical rows to device pages
//!
//! Owns the three packet buffers a draw cycle sends. Both page buffers are
//! rewritten from scratch on every successful encode; the flush packet is
//! constant. Validation happens before any buffer is touched, so a failed
//! encode leaves the previous pages fully intact; there is no partially
//! packed state to observe.

use crate::frame::{LogicalFrame, Row, ShapeError};
use crate::geometry::{
    self, PageTarget, RowGeometry, RowRole, MATRIX_ROWS, SPLIT_SECOND_ELEMENTS,
    SPLIT_SECOND_OFFSET_END,
};
use crate::page::{
    flush_packet, FIRST_PAGE_HEADER, PACKET_LEN, PAGE_HEADER_LEN, SECOND_PAGE_HEADER,
};

/// Packs a [`LogicalFrame`] into the two device pages
///
/// One encoder serves one controller; the buffers are reused across draw
/// calls and exposed only as shared borrows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameEncoder {
    first: [u8; PACKET_LEN],
    second: [u8; PACKET_LEN],
    flush: [u8; PACKET_LEN],
}

impl Default for FrameEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameEncoder {
    /// Create an encoder with dark pages and the constant flush packet
    pub fn new() -> Self {
        Self {
            first: [0; PACKET_LEN],
            second: [0; PACKET_LEN],
            flush: flush_packet(),
        }
    }

    /// Pack a frame into the page buffers
    ///
    /// Every row must match its geometry width; the first mismatch aborts
    /// the encode before any buffer is written.
    pub fn encode(&mut self, frame: &LogicalFrame) -> Result<(), ShapeError> {
        if frame.row_count() != MATRIX_ROWS {
            return Err(ShapeError::RowCountMismatch {
                rows: frame.row_count(),
            });
        }
        for (row, data) in frame.rows().enumerate() {
            let width = geometry::ROWS[row].width();
            if data.len() != width {
                return Err(ShapeError::RowWidthMismatch {
                    row,
                    len: data.len(),
                });
            }
        }

        self.first.fill(0);
        self.second.fill(0);
        self.first[..PAGE_HEADER_LEN].copy_from_slice(&FIRST_PAGE_HEADER);
        self.second[..PAGE_HEADER_LEN].copy_from_slice(&SECOND_PAGE_HEADER);

        for (row, data) in frame.rows().enumerate() {
            self.place_row(row, &geometry::ROWS[row], data);
        }
        Ok(())
    }

    /// Write one row at its geometry offsets; elements map to descending
    /// offsets from `offset_end`
    fn place_row(&mut self, row: usize, geo: &RowGeometry, data: &Row) {
        let end = geo.offset_end();
        match geometry::role(row) {
            // Element 0 of the head row has no physical cell; elements 1..
            // each shift down one offset
            RowRole::Head => {
                for (j, &level) in data.iter().skip(1).enumerate() {
                    self.first[end - j] = level;
                }
            }
            // Elements 0..=22 descend from byte 29 of the second page,
            // elements 23..=25 descend from `offset_end` in the first page
            RowRole::Split => {
                for (j, &level) in data.iter().take(SPLIT_SECOND_ELEMENTS).enumerate() {
                    self.second[SPLIT_SECOND_OFFSET_END - j] = level;
                }
                for (j, &level) in data.iter().enumerate().skip(SPLIT_SECOND_ELEMENTS) {
                    self.first[end - j] = level;
                }
            }
            RowRole::Normal => {
                let page = match geo.page {
                    PageTarget::First => &mut self.first,
                    PageTarget::Second => &mut self.second,
                    // The table pins row 20 as the only split row
                    PageTarget::Split => return,
                };
                for (j, &level) in data.iter().enumerate() {
                    page[end - j] = level;
                }
            }
        }
    }

    /// First device page, ready to transfer
    pub fn first_page(&self) -> &[u8; PACKET_LEN] {
        &self.first
    }

    /// Second device page, ready to transfer
    pub fn second_page(&self) -> &[u8; PACKET_LEN] {
        &self.second
    }

    /// Flush packet that commits both pages
    pub fn flush(&self) -> &[u8; PACKET_LEN] {
        &self.flush
    }
}
