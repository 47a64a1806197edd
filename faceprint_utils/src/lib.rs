pub mod bits;
pub mod colors;
pub mod limits;
pub mod random;
