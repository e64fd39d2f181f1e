//! Physical geometry of the lid panel
//!
//! The panel is a diagonal-edged grid of 55 rows. Row widths shrink from 33
//! elements at the hinge down to 9 at the lid corner. Each row occupies a
//! contiguous, descending run of byte offsets inside one of the two device
//! pages; the table below records the inclusive offset span `start..=end`
//! per row, exactly as the device firmware addresses them.
//!
//! Two rows are irregular and stay explicit case branches everywhere:
//!
//! - Row 0 (the head row): logical element 0 has no physical cell. The
//!   remaining elements shift down one offset each, so byte `start` of the
//!   span is never written.
//! - Row 20 (the split row): its first 23 elements live in the SECOND page
//!   at offsets descending from byte 29; its last 3 elements live in the
//!   FIRST page at the top of that page's data region.

/// Number of rows on the panel
pub const MATRIX_ROWS: usize = 55;

/// Width of the widest row, in elements
pub const MAX_ROW_WIDTH: usize = 33;

/// Index of the head row (drops its first logical element)
pub const HEAD_ROW: usize = 0;

/// Index of the split row (straddles both pages)
pub const SPLIT_ROW: usize = 20;

/// Number of split-row elements that land in the second page
pub const SPLIT_SECOND_ELEMENTS: usize = 23;

/// Second-page offset of the split row's first element; later elements
/// descend from here
pub const SPLIT_SECOND_OFFSET_END: usize = 29;

/// Which device page a row's bytes land in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PageTarget {
    /// First 640-byte page (rows 0..=19)
    First,
    /// Second 640-byte page (rows 21..=54)
    Second,
    /// Straddles both pages (row 20 only)
    Split,
}

/// Placement rule a row follows when packed into the pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RowRole {
    /// Row 0: first logical element dropped, rest written in reverse
    Head,
    /// Row 20: written partly into each page
    Split,
    /// Every other row: written in reverse into its single page
    Normal,
}

/// One row of the geometry table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RowGeometry {
    /// Lowest byte offset of the row's span within its page
    pub start: u16,
    /// Highest byte offset; the row's first logical element maps here
    pub end: u16,
    /// Page the span belongs to (for the split row, `end` addresses the
    /// first page and the second-page portion uses the split constants)
    pub page: PageTarget,
}

impl RowGeometry {
    /// Number of addressable elements in this row
    pub const fn width(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    /// Page offset of the row's first logical element; element `j` maps to
    /// `offset_end - j`
    pub const fn offset_end(&self) -> usize {
        self.end as usize
    }
}

const fn first(start: u16, end: u16) -> RowGeometry {
    RowGeometry {
        start,
        end,
        page: PageTarget::First,
    }
}

const fn second(start: u16, end: u16) -> RowGeometry {
    RowGeometry {
        start,
        end,
        page: PageTarget::Second,
    }
}

const fn split(start: u16, end: u16) -> RowGeometry {
    RowGeometry {
        start,
        end,
        page: PageTarget::Split,
    }
}

/// The full geometry table, row 0 at the hinge edge
pub const ROWS: [RowGeometry; MATRIX_ROWS] = [
    // First page, rows 0..=19
    first(7, 39), // head row: byte 7 is never written
    first(41, 73),
    first(76, 108),
    first(109, 141),
    first(144, 176),
    first(177, 209),
    first(211, 243),
    first(244, 275),
    first(277, 308),
    first(309, 339),
    first(341, 371),
    first(372, 401),
    first(403, 432),
    first(433, 461),
    first(463, 491),
    first(492, 519),
    first(521, 548),
    first(549, 575),
    first(577, 603),
    first(604, 629),
    // Split row 20: elements 0..=22 go to the second page at 29..=7,
    // elements 23..=25 go to the first page at 633..=631
    split(631, 656),
    // Second page, rows 21..=54
    second(30, 54),
    second(56, 80),
    second(81, 104),
    second(106, 129),
    second(130, 152),
    second(154, 176),
    second(177, 198),
    second(200, 221),
    second(222, 242),
    second(244, 264),
    second(265, 284),
    second(286, 305),
    second(306, 324),
    second(326, 344),
    second(345, 362),
    second(364, 381),
    second(382, 398),
    second(400, 416),
    second(417, 432),
    second(434, 449),
    second(450, 464),
    second(466, 480),
    second(481, 494),
    second(496, 509),
    second(510, 522),
    second(524, 536),
    second(537, 548),
    second(550, 561),
    second(562, 572),
    second(574, 584),
    second(585, 594),
    second(596, 605),
    second(606, 614),
    second(616, 624),
];

/// Look up a row's geometry
pub fn row_geometry(row: usize) -> Option<&'static RowGeometry> {
    ROWS.get(row)
}

/// Placement rule for a row index
pub fn role(row: usize) -> RowRole {
    match row {
        HEAD_ROW => RowRole::Head,
        SPLIT_ROW => RowRole::Split,
        _ => RowRole::Normal,
    }
}

/// Total addressable elements across all rows (sum of row widths)
pub const ELEMENT_COUNT: usize = 1215;

/// Physical cells on the panel; one less than [`ELEMENT_COUNT`] because the
/// head row drops its first element
pub const CELL_COUNT: usize = ELEMENT_COUNT - 1;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{PACKET_LEN, PAGE_HEADER_LEN};

    /// Widths must run 33 for rows 0..=6, then repeat each width twice on
    /// the way down to 9.
    #[test]
    fn test_row_widths_follow_panel_shape() {
        for row in 0..7 {
            assert_eq!(ROWS[row].width(), MAX_ROW_WIDTH, "row {row}");
        }
        let mut expected = 32;
        for pair in ROWS[7..].chunks(2) {
            assert_eq!(pair.len(), 2);
            assert_eq!(pair[0].width(), expected);
            assert_eq!(pair[1].width(), expected);
            expected -= 1;
        }
        assert_eq!(expected, 8); // last pair was 9 wide
    }

    #[test]
    fn test_element_count() {
        let total: usize = ROWS.iter().map(RowGeometry::width).sum();
        assert_eq!(total, ELEMENT_COUNT);
        assert_eq!(CELL_COUNT, 1214);
    }

    #[test]
    fn test_page_partition() {
        for (row, geo) in ROWS.iter().enumerate() {
            let expected = match row {
                0..=19 => PageTarget::First,
                SPLIT_ROW => PageTarget::Split,
                _ => PageTarget::Second,
            };
            assert_eq!(geo.page, expected, "row {row}");
        }
    }

    #[test]
    fn test_roles() {
        assert_eq!(role(HEAD_ROW), RowRole::Head);
        assert_eq!(role(SPLIT_ROW), RowRole::Split);
        for row in 1..MATRIX_ROWS {
            if row != SPLIT_ROW {
                assert_eq!(role(row), RowRole::Normal, "row {row}");
            }
        }
    }

    /// Every written cell must land in the data region of its page, and no
    /// two rows may share a cell.
    #[test]
    fn test_written_cells_are_disjoint_and_in_bounds() {
        fn mark(page: &mut [bool; PACKET_LEN], offset: usize) {
            assert!(offset >= PAGE_HEADER_LEN, "offset {offset} under header");
            assert!(offset < PACKET_LEN, "offset {offset} out of page");
            assert!(!page[offset], "offset {offset} written twice");
            page[offset] = true;
        }

        let mut first_page = [false; PACKET_LEN];
        let mut second_page = [false; PACKET_LEN];

        for (row, geo) in ROWS.iter().enumerate() {
            let end = geo.offset_end();
            match role(row) {
                RowRole::Head => {
                    for j in 0..geo.width() - 1 {
                        mark(&mut first_page, end - j);
                    }
                }
                RowRole::Split => {
                    for j in 0..SPLIT_SECOND_ELEMENTS {
                        mark(&mut second_page, SPLIT_SECOND_OFFSET_END - j);
                    }
                    for j in SPLIT_SECOND_ELEMENTS..geo.width() {
                        mark(&mut first_page, end - j);
                    }
                }
                RowRole::Normal => {
                    for j in 0..geo.width() {
                        match geo.page {
                            PageTarget::First => mark(&mut first_page, end - j),
                            PageTarget::Second => mark(&mut second_page, end - j),
                            PageTarget::Split => unreachable!("only row 20 splits"),
                        }
                    }
                }
            }
        }

        let written = first_page.iter().chain(second_page.iter());
        assert_eq!(written.filter(|&&cell| cell).count(), CELL_COUNT);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(row_geometry(0).unwrap().offset_end(), 39);
        assert_eq!(row_geometry(SPLIT_ROW).unwrap().offset_end(), 656);
        assert_eq!(row_geometry(54).unwrap().width(), 9);
        assert!(row_geometry(MATRIX_ROWS).is_none());
    }
}
