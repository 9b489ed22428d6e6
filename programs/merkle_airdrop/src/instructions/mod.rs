pub mod initialize;
pub mod set_root;
pub mod claim;
pub mod query;

pub use initialize::*;
pub use set_root::*;
pub use claim::*;
pub use query::*;
