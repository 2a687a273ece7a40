use super::Shape;
use crate::error::InvalidElement;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Building {
    width: usize,
    height: usize,
    brick: char,
}

impl Building {
    pub fn new(width: usize, height: usize, brick: char) -> Result<Self, InvalidElement> {
        if width == 0 {
            return Err(InvalidElement::Zero("building width"));
        }
        if height == 0 {
            return Err(InvalidElement::Zero("building height"));
        }
        Ok(Building { width, height, brick })
    }

    pub fn brick(&self) -> char {
        self.brick
    }
}

impl Shape for Building {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn row_at(&self, level: usize) -> String {
        if (1..=self.height).contains(&level) {
            std::iter::repeat_n(self.brick, self.width).collect()
        } else {
            self.blank()
        }
    }
}
