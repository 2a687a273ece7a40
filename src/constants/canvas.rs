pub const CORNER: char = '+';
pub const HORIZONTAL: char = '-';
pub const VERTICAL: char = '|';
pub const BLANK: char = ' ';
