//! Fixed grid of the roster image: column widths, row heights and the
//! vertical position of every row in a block.

use crate::layout_constants::{IMAGE_HEIGHT, IMAGE_WIDTH};

/// Pixel width of every grid column, left to right
pub const COLUMN_WIDTHS: [u32; 17] = [
    176, // name
    1,   // border
    64,  // level
    88,  // gear score
    72,  // album
    56,  // mount
    1,   // border
    64,  // awards
    1,   // border
    20, 20, 20, // potions
    1,  // border
    64, 64, 64, 64, // treasure, instructor, pet, knights
];

pub const COL_NAME: usize = 0;
pub const COL_LEVEL: usize = 2;
pub const COL_GEAR: usize = 3;
pub const COL_ALBUM: usize = 4;
pub const COL_MOUNT: usize = 5;
pub const COL_AWARDS: usize = 7;
pub const COL_POTIONS: usize = 9;
pub const COL_TREASURE: usize = 13;
pub const COL_INSTRUCTOR: usize = 14;
pub const COL_PET: usize = 15;
pub const COL_KNIGHTS: usize = 16;

/// Columns drawn as full-height vertical borders
pub const FULL_BORDERS: [usize; 3] = [1, 8, 12];
/// Border between mount and awards, starting below the group headers
pub const INNER_BORDER: usize = 6;

pub const HEADER_ROW_HEIGHTS: [u32; 2] = [18, 17];
pub const RULE_HEIGHT: u32 = 2;
pub const DATA_ROW_HEIGHT: u32 = 17;
pub const SEPARATOR_HEIGHT: u32 = 1;

const _: () = {
    let mut sum = 0;
    let mut i = 0;
    while i < COLUMN_WIDTHS.len() {
        sum += COLUMN_WIDTHS[i];
        i += 1;
    }
    assert!(sum == IMAGE_WIDTH);
    // two header rows, the rule, 25 pairs of rows with a separator each
    assert!(HEADER_ROW_HEIGHTS[0] + HEADER_ROW_HEIGHTS[1] + RULE_HEIGHT
        + 25 * (2 * DATA_ROW_HEIGHT + SEPARATOR_HEIGHT) == IMAGE_HEIGHT);
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Upper and lower halves; the lower one gets the odd pixel
    pub fn split_rows(&self) -> (Rect, Rect) {
        let top = self.height / 2;
        (
            Rect { height: top, ..*self },
            Rect { y: self.y + top, height: self.height - top, ..*self },
        )
    }
}

/// Left edge of a column
pub fn column_x(col: usize) -> u32 {
    COLUMN_WIDTHS[..col].iter().sum()
}

/// Width of `span` columns starting at `col`
pub fn span_width(col: usize, span: usize) -> u32 {
    COLUMN_WIDTHS[col..col + span].iter().sum()
}

/// Area covered by columns `col..col + span` between `y` and `y + height`
pub fn cell_rect(col: usize, span: usize, y: u32, height: u32) -> Rect {
    Rect {
        x: column_x(col),
        y,
        width: span_width(col, span),
        height,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Header(usize),
    Rule,
    Data(usize),
    Separator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSlot {
    pub kind: RowKind,
    pub y: u32,
    pub height: u32,
}

/// Vertical layout of a block with `data_rows` players.
///
/// Data rows come in pairs; a separator follows every second one.
pub fn row_plan(data_rows: usize) -> Vec<RowSlot> {
    let mut slots = Vec::with_capacity(3 + data_rows + data_rows / 2);
    let mut y = 0;
    let mut push = |kind, height| {
        slots.push(RowSlot { kind, y, height });
        y += height;
    };

    push(RowKind::Header(0), HEADER_ROW_HEIGHTS[0]);
    push(RowKind::Header(1), HEADER_ROW_HEIGHTS[1]);
    push(RowKind::Rule, RULE_HEIGHT);
    for i in 0..data_rows {
        push(RowKind::Data(i), DATA_ROW_HEIGHT);
        if i % 2 == 1 {
            push(RowKind::Separator, SEPARATOR_HEIGHT);
        }
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_rows() {
        let rect = Rect { x: 4, y: 10, width: 72, height: 17 };
        let (top, bottom) = rect.split_rows();
        assert_eq!(top, Rect { x: 4, y: 10, width: 72, height: 8 });
        assert_eq!(bottom, Rect { x: 4, y: 18, width: 72, height: 9 });
        assert_eq!(bottom.bottom(), rect.bottom());
    }

    #[test]
    fn test_column_positions() {
        assert_eq!(column_x(COL_NAME), 0);
        assert_eq!(column_x(COL_LEVEL), 177);
        assert_eq!(column_x(COL_POTIONS), 523);
        assert_eq!(column_x(COL_KNIGHTS), 776);
        assert_eq!(span_width(COL_POTIONS, 3), 60);
        assert_eq!(column_x(COL_KNIGHTS) + span_width(COL_KNIGHTS, 1), IMAGE_WIDTH);
    }

    #[test]
    fn test_row_plan_separators_after_pairs() {
        let plan = row_plan(5);
        let kinds: Vec<RowKind> = plan.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RowKind::Header(0),
                RowKind::Header(1),
                RowKind::Rule,
                RowKind::Data(0),
                RowKind::Data(1),
                RowKind::Separator,
                RowKind::Data(2),
                RowKind::Data(3),
                RowKind::Separator,
                RowKind::Data(4),
            ]
        );
        assert_eq!(plan[3].y, 37);
        assert_eq!(plan[5].y, 37 + 2 * DATA_ROW_HEIGHT);
    }

    #[test]
    fn test_full_block_fills_image() {
        let plan = row_plan(50);
        let last = plan.last().unwrap();
        assert_eq!(last.kind, RowKind::Separator);
        assert_eq!(last.y + last.height, IMAGE_HEIGHT);
    }
}
