pub mod market;
pub mod recommend;
pub mod validate;

pub use market::*;
pub use recommend::*;
pub use validate::*;
