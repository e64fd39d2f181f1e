//! Logical frame: the caller's view of the panel
//!
//! Callers hand the host API one flat byte buffer per draw. The buffer is
//! always [`FRAME_LEN`] (55 × 33) bytes; each row reads its elements from a
//! 55-byte stride at `row * 55`, and only the first `width(row)` bytes of a
//! stride are consumed. The stride is a fixed device-host contract, not the
//! widest row width: strides of rows 33..=54 begin at or past the end of
//! the buffer, and bytes addressed past the end read as zero.

use heapless::Vec;

use crate::geometry::{self, MATRIX_ROWS, MAX_ROW_WIDTH};

/// Required length of a flat input buffer, in bytes
pub const FRAME_LEN: usize = MATRIX_ROWS * MAX_ROW_WIDTH;

/// Bytes between consecutive row strides in a flat input buffer
pub const ROW_STRIDE: usize = MATRIX_ROWS;

/// One row of intensity bytes
pub type Row = Vec<u8, MAX_ROW_WIDTH>;

/// Errors for logical data that does not fit the panel geometry
///
/// Always caller-recoverable; nothing has been sent to the device when one
/// of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShapeError {
    /// Flat buffer length is not [`FRAME_LEN`]
    WrongLength { len: usize },
    /// Frame does not hold exactly [`MATRIX_ROWS`] rows
    RowCountMismatch { rows: usize },
    /// Row `row` holds `len` elements instead of its geometry width
    RowWidthMismatch { row: usize, len: usize },
}

/// A full frame of per-element intensity bytes, 55 variable-width rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalFrame {
    rows: Vec<Row, MATRIX_ROWS>,
}

impl Default for LogicalFrame {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl LogicalFrame {
    /// Create an all-dark frame with every row at its geometry width
    pub fn zeroed() -> Self {
        let mut rows = Vec::new();
        for geo in geometry::ROWS.iter() {
            let mut row = Row::new();
            // Capacity is MAX_ROW_WIDTH and no width exceeds it
            let _ = row.resize(geo.width(), 0);
            let _ = rows.push(row);
        }
        Self { rows }
    }

    /// Reshape a flat buffer into rows
    ///
    /// The buffer must be exactly [`FRAME_LEN`] bytes. Row `i` consumes
    /// `width(i)` bytes starting at `i * ROW_STRIDE`; stride bytes past a
    /// row's width are padding, and stride bytes past the end of the
    /// buffer read as zero.
    pub fn from_flat(flat: &[u8]) -> Result<Self, ShapeError> {
        if flat.len() != FRAME_LEN {
            return Err(ShapeError::WrongLength { len: flat.len() });
        }

        let mut rows = Vec::new();
        for (i, geo) in geometry::ROWS.iter().enumerate() {
            let stride = i * ROW_STRIDE;
            let mut row = Row::new();
            for j in 0..geo.width() {
                let level = flat.get(stride + j).copied().unwrap_or(0);
                let _ = row.push(level);
            }
            let _ = rows.push(row);
        }
        Ok(Self { rows })
    }

    /// Number of rows held
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Borrow a row
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Mutably borrow a row
    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    /// Iterate over all rows
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Set one element's intensity; returns false if out of range
    pub fn set(&mut self, row: usize, col: usize, level: u8) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = level;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ROWS;

    #[test]
    fn test_zeroed_matches_geometry() {
        let frame = LogicalFrame::zeroed();
        assert_eq!(frame.row_count(), MATRIX_ROWS);
        for (i, geo) in ROWS.iter().enumerate() {
            let row = frame.row(i).unwrap();
            assert_eq!(row.len(), geo.width(), "row {i}");
            assert!(row.iter().all(|&level| level == 0));
        }
    }

    #[test]
    fn test_from_flat_rejects_wrong_lengths() {
        for len in [0usize, 1, 1814, 1816, FRAME_LEN * 2] {
            let flat = [0u8; FRAME_LEN * 2];
            assert_eq!(
                LogicalFrame::from_flat(&flat[..len]),
                Err(ShapeError::WrongLength { len }),
                "length {len}"
            );
        }
    }

    #[test]
    fn test_from_flat_reads_row_strides() {
        let mut flat = [0u8; FRAME_LEN];
        flat[0] = 0x11; // row 0, element 0
        flat[32] = 0x22; // row 0, element 32
        flat[ROW_STRIDE] = 0x33; // row 1, element 0
        flat[32 * ROW_STRIDE + 5] = 0x44; // row 32, element 5

        let frame = LogicalFrame::from_flat(&flat).unwrap();
        assert_eq!(frame.row(0).unwrap()[0], 0x11);
        assert_eq!(frame.row(0).unwrap()[32], 0x22);
        assert_eq!(frame.row(1).unwrap()[0], 0x33);
        assert_eq!(frame.row(32).unwrap()[5], 0x44);
    }

    #[test]
    fn test_stride_padding_is_ignored() {
        let mut flat = [0u8; FRAME_LEN];
        // Row 1 is 33 wide; bytes 33..=54 of its stride are padding
        flat[ROW_STRIDE + 33] = 0xff;
        flat[ROW_STRIDE + 54] = 0xff;

        let frame = LogicalFrame::from_flat(&flat).unwrap();
        assert!(frame.row(1).unwrap().iter().all(|&level| level == 0));
    }

    /// Strides of rows 33..=54 start at or past byte 1815, so those rows
    /// always read dark no matter what the buffer holds.
    #[test]
    fn test_rows_past_buffer_end_read_zero() {
        let flat = [0xffu8; FRAME_LEN];
        let frame = LogicalFrame::from_flat(&flat).unwrap();
        for i in 0..33 {
            assert!(
                frame.row(i).unwrap().iter().all(|&level| level == 0xff),
                "row {i}"
            );
        }
        for i in 33..MATRIX_ROWS {
            assert!(
                frame.row(i).unwrap().iter().all(|&level| level == 0),
                "row {i}"
            );
        }
    }

    #[test]
    fn test_set_bounds() {
        let mut frame = LogicalFrame::zeroed();
        assert!(frame.set(54, 8, 0x7f));
        assert_eq!(frame.row(54).unwrap()[8], 0x7f);
        assert!(!frame.set(54, 9, 0x7f)); // row 54 is 9 wide
        assert!(!frame.set(MATRIX_ROWS, 0, 0x7f));
    }
}
