pub mod env;
pub mod backend;

pub use env::*;
pub use backend::*;
