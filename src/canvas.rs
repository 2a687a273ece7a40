use std::fmt;

use crate::{
    constants::canvas::{BLANK, CORNER, HORIZONTAL, VERTICAL},
    street::Street,
};

/// A street framed by a border, with one blank row of sky above the tallest element.
#[derive(Debug, Clone, Copy)]
pub struct Canvas<'a> {
    street: &'a Street,
}

impl<'a> Canvas<'a> {
    pub fn new(street: &'a Street) -> Self {
        Canvas { street }
    }

    pub fn lines(&self) -> Vec<String> {
        let width = self.street.total_width();
        let border = framed(CORNER, std::iter::repeat_n(HORIZONTAL, width).collect::<String>());

        let mut lines = Vec::with_capacity(self.street.max_height() + 3);
        lines.push(border.clone());
        if !self.street.is_empty() {
            lines.push(framed(VERTICAL, std::iter::repeat_n(BLANK, width).collect::<String>()));
        }
        lines.extend(self.street.rows().map(|row| framed(VERTICAL, row)));
        lines.push(border);
        lines
    }
}

fn framed(edge: char, inner: String) -> String {
    let mut line = String::with_capacity(inner.len() + 2);
    line.push(edge);
    line.push_str(&inner);
    line.push(edge);
    line
}

impl fmt::Display for Canvas<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::street::UnknownTokens;

    fn render(line: &str) -> String {
        let street = Street::parse(line, UnknownTokens::Reject).unwrap();
        Canvas::new(&street).to_string()
    }

    #[test]
    fn test_sample_street() {
        assert_snapshot!(render("b_4,3,# p_5,* e_3,x_y"), @r"
+------------+
|            |
|      *     |
|     ***    |
|####*****   |
|####  |     |
|####  |  x y|
+------------+
");
    }

    #[test]
    fn test_tall_building_sets_height() {
        assert_snapshot!(render("e_5,._o p_7,@ b_2,7,= e_4,~"), @r"
+------------------+
|                  |
|            ==    |
|            ==    |
|        @   ==    |
|       @@@  ==    |
|      @@@@@ ==    |
|        |   ==    |
|. o.    |   ==~~~~|
+------------------+
");
    }

    #[test]
    fn test_empty_street() {
        let street = Street::default();
        assert_eq!(Canvas::new(&street).lines(), vec!["++", "++"]);
    }

    #[test]
    fn test_lines_share_width() {
        let street = Street::parse("b_3,2,X e_9,abc p_5,^", UnknownTokens::Reject).unwrap();
        let lines = Canvas::new(&street).lines();
        assert_eq!(lines.len(), street.max_height() + 3);
        assert_eq!(lines[0], format!("+{}+", "-".repeat(17)));
        assert_eq!(lines[1], format!("|{}|", " ".repeat(17)));
        assert_eq!(lines.first(), lines.last());
        for line in &lines {
            assert_eq!(line.chars().count(), 19);
        }
    }

    #[test]
    fn test_single_lot() {
        let street = Street::parse("e_6,_=", UnknownTokens::Reject).unwrap();
        assert_eq!(Canvas::new(&street).lines(), vec!["+------+", "|      |", "| = = =|", "+------+"]);
    }
}
