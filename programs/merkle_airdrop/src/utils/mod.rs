pub mod leaf;
pub mod merkle;
pub mod merkle_tree;
pub mod token;

pub use leaf::*;
pub use merkle::*;
pub use merkle_tree::*;
pub use token::*;
