use std::fmt;

pub mod board;
pub mod error;
pub mod geometry;
pub mod piece;

#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum Color {
    White,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}
