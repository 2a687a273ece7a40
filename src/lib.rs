//! Render a one-line description of a city street as bordered ASCII art.
//!
//! ```
//! use street_art::{canvas::Canvas, street::{Street, UnknownTokens}};
//!
//! let street = Street::parse("b_2,2,# e_3,o_", UnknownTokens::Reject).unwrap();
//! assert_eq!(Canvas::new(&street).to_string(), "+-----+\n|     |\n|##   |\n|##o o|\n+-----+");
//! ```

pub mod canvas;
pub mod constants;
pub mod error;
pub mod parser;
pub mod street;
