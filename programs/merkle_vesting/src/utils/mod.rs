pub mod merkle;
pub mod token;

pub use merkle::*;
pub use token::*;
