pub const PARK_HEIGHT: usize = 5;
pub const PARK_MIN_WIDTH: usize = 5;
pub const TRUNK: char = '|';
pub const TRUNK_HEIGHT: usize = 2;
// Foliage band widths stacked on the trunk, bottom band first
pub const CANOPY: [usize; 3] = [5, 3, 1];

pub const LOT_HEIGHT: usize = 1;
// Underscores in a trash pattern stand for blanks
pub const TRASH_BLANK: char = '_';
