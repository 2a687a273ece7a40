use super::Shape;
use crate::{
    constants::{
        canvas::BLANK,
        street::{CANOPY, PARK_HEIGHT, PARK_MIN_WIDTH, TRUNK, TRUNK_HEIGHT},
    },
    error::InvalidElement,
};

/// A park holding a single tree centered on its lot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Park {
    width: usize,
    foliage: char,
}

impl Park {
    pub fn new(width: usize, foliage: char) -> Result<Self, InvalidElement> {
        if width < PARK_MIN_WIDTH || width % 2 == 0 {
            return Err(InvalidElement::ParkWidth(width));
        }
        Ok(Park { width, foliage })
    }

    pub fn foliage(&self) -> char {
        self.foliage
    }

    fn band(&self, band: usize, fill: char) -> String {
        let pad = (self.width - band) / 2;
        let mut line = String::with_capacity(self.width);
        line.extend(std::iter::repeat_n(BLANK, pad));
        line.extend(std::iter::repeat_n(fill, band));
        line.extend(std::iter::repeat_n(BLANK, pad));
        line
    }
}

impl Shape for Park {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        PARK_HEIGHT
    }

    fn row_at(&self, level: usize) -> String {
        match level {
            0 => self.blank(),
            level if level <= TRUNK_HEIGHT => self.band(1, TRUNK),
            level => match CANOPY.get(level - TRUNK_HEIGHT - 1) {
                Some(&band) => self.band(band, self.foliage),
                None => self.blank(),
            },
        }
    }
}
