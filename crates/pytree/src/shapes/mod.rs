//! The two primitive units a branch is made of.

mod square;
mod triangle;

pub use square::Square;
pub use triangle::Triangle;
