use derive_deref::Deref;
use strum::Display;

use crate::{constants::canvas::BLANK, error::ParseError, parser};

mod building;
mod lot;
mod park;

pub use building::Building;
pub use lot::EmptyLot;
pub use park::Park;

pub use crate::parser::UnknownTokens;

/// Something that can be drawn as part of a street.
///
/// Rows are addressed by level: level 1 sits on the ground and higher levels
/// stack on top of it. Every row is exactly `width()` characters wide.
pub trait Shape {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    fn row_at(&self, level: usize) -> String;

    fn blank(&self) -> String {
        std::iter::repeat_n(BLANK, self.width()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ElementKind {
    #[strum(to_string = "building")]
    Building,
    #[strum(to_string = "park")]
    Park,
    #[strum(to_string = "empty lot")]
    EmptyLot,
}

impl ElementKind {
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'b' => Some(Self::Building),
            'p' => Some(Self::Park),
            'e' => Some(Self::EmptyLot),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Building(Building),
    Park(Park),
    EmptyLot(EmptyLot),
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Building(_) => ElementKind::Building,
            Self::Park(_) => ElementKind::Park,
            Self::EmptyLot(_) => ElementKind::EmptyLot,
        }
    }

    fn shape(&self) -> &dyn Shape {
        match self {
            Self::Building(building) => building,
            Self::Park(park) => park,
            Self::EmptyLot(lot) => lot,
        }
    }
}

impl Shape for Element {
    fn width(&self) -> usize {
        self.shape().width()
    }

    fn height(&self) -> usize {
        self.shape().height()
    }

    fn row_at(&self, level: usize) -> String {
        self.shape().row_at(level)
    }
}

impl From<Building> for Element {
    fn from(building: Building) -> Self {
        Self::Building(building)
    }
}

impl From<Park> for Element {
    fn from(park: Park) -> Self {
        Self::Park(park)
    }
}

impl From<EmptyLot> for Element {
    fn from(lot: EmptyLot) -> Self {
        Self::EmptyLot(lot)
    }
}

/// The elements of a street, left to right, all standing on the same ground.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct Street(Vec<Element>);

impl Street {
    pub fn new(elements: Vec<Element>) -> Self {
        Self(elements)
    }

    pub fn parse(line: &str, unknown_tokens: UnknownTokens) -> Result<Self, ParseError> {
        parser::parse_street(line, unknown_tokens)
    }

    pub fn max_height(&self) -> usize {
        self.0.iter().map(|element| element.height()).max().unwrap_or(0)
    }

    pub fn total_width(&self) -> usize {
        self.0.iter().map(|element| element.width()).sum()
    }

    /// Composed row `row`, counted from 1 at the top of the tallest element.
    pub fn row(&self, row: usize) -> String {
        let max_height = self.max_height();
        if row == 0 || row > max_height {
            return std::iter::repeat_n(BLANK, self.total_width()).collect();
        }
        let level = max_height - row + 1;
        self.0.iter().map(|element| element.row_at(level)).collect()
    }

    /// Every composed row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        (1..=self.max_height()).map(|row| self.row(row))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> Street {
        Street::new(vec![
            Building::new(4, 3, '#').unwrap().into(),
            Park::new(5, '*').unwrap().into(),
            EmptyLot::new(3, "x_y").unwrap().into(),
        ])
    }

    #[test]
    fn test_dimensions() {
        let street = sample();
        assert_eq!(street.max_height(), 5);
        assert_eq!(street.total_width(), 12);
        assert_eq!(street.len(), 3);
    }

    #[test]
    fn test_empty_street() {
        let street = Street::default();
        assert_eq!(street.max_height(), 0);
        assert_eq!(street.total_width(), 0);
        assert_eq!(street.rows().count(), 0);
    }

    #[test]
    fn test_rows_top_to_bottom() {
        let rows: Vec<String> = sample().rows().collect();
        assert_eq!(
            rows,
            vec!["      *     ", "     ***    ", "####*****   ", "####  |     ", "####  |  x y"]
        );
    }

    #[test]
    fn test_every_row_spans_total_width() {
        let street = Street::new(vec![
            Building::new(2, 9, '█').unwrap().into(),
            EmptyLot::new(7, "ab_").unwrap().into(),
            Park::new(9, '@').unwrap().into(),
        ]);
        assert_eq!(street.rows().count(), 9);
        for row in street.rows() {
            assert_eq!(row.chars().count(), street.total_width());
        }
    }

    #[test]
    fn test_row_out_of_range_is_blank() {
        let street = sample();
        assert_eq!(street.row(0), " ".repeat(12));
        assert_eq!(street.row(6), " ".repeat(12));
    }

    #[test]
    fn test_element_dispatch() {
        let element: Element = Park::new(7, '&').unwrap().into();
        assert_eq!(element.kind(), ElementKind::Park);
        assert_eq!(element.width(), 7);
        assert_eq!(element.height(), 5);
        assert_eq!(element.row_at(5), "   &   ");
        assert_eq!(element.kind().to_string(), "park");
        assert_eq!(ElementKind::EmptyLot.to_string(), "empty lot");
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(ElementKind::from_tag('b'), Some(ElementKind::Building));
        assert_eq!(ElementKind::from_tag('p'), Some(ElementKind::Park));
        assert_eq!(ElementKind::from_tag('e'), Some(ElementKind::EmptyLot));
        assert_eq!(ElementKind::from_tag('x'), None);
    }
}
