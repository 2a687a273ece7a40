use super::Shape;
use crate::{
    constants::{
        canvas::BLANK,
        street::{LOT_HEIGHT, TRASH_BLANK},
    },
    error::InvalidElement,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyLot {
    width: usize,
    trash: String,
}

impl EmptyLot {
    pub fn new(width: usize, trash: &str) -> Result<Self, InvalidElement> {
        if width == 0 {
            return Err(InvalidElement::Zero("lot width"));
        }
        if trash.is_empty() {
            return Err(InvalidElement::EmptyTrash);
        }
        let trash = trash.chars().map(|c| if c == TRASH_BLANK { BLANK } else { c }).collect();
        Ok(EmptyLot { width, trash })
    }

    /// The trash pattern with blanks already in place of underscores.
    pub fn trash(&self) -> &str {
        &self.trash
    }
}

impl Shape for EmptyLot {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        LOT_HEIGHT
    }

    fn row_at(&self, level: usize) -> String {
        if level != 1 {
            return self.blank();
        }
        // Longer patterns are cut, shorter ones repeat until the lot is full
        self.trash.chars().cycle().take(self.width).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_underscores_become_blanks() {
        let lot = EmptyLot::new(3, "x_y").unwrap();
        assert_eq!(lot.trash(), "x y");
        assert!(!lot.trash().contains('_'));
        assert_eq!(lot.row_at(1), "x y");
    }

    #[test]
    fn test_short_pattern_repeats() {
        let lot = EmptyLot::new(8, "ab_").unwrap();
        assert_eq!(lot.row_at(1), "ab ab ab");
    }

    #[test]
    fn test_long_pattern_truncates() {
        let lot = EmptyLot::new(2, "hello").unwrap();
        assert_eq!(lot.row_at(1), "he");
    }

    #[test]
    fn test_only_ground_level() {
        let lot = EmptyLot::new(4, "~").unwrap();
        assert_eq!(lot.height(), 1);
        assert_eq!(lot.row_at(1), "~~~~");
        assert_eq!(lot.row_at(2), "    ");
    }

    #[test]
    fn test_rejects_empty_lot() {
        assert_eq!(EmptyLot::new(0, "x"), Err(InvalidElement::Zero("lot width")));
        assert_eq!(EmptyLot::new(3, ""), Err(InvalidElement::EmptyTrash));
    }
}
