pub mod catalog;
pub mod common;
pub mod insight;
pub mod lookup;
pub mod recommendation;
pub mod reference;

pub use catalog::*;
pub use common::*;
pub use insight::*;
pub use lookup::*;
pub use recommendation::*;
pub use reference::*;
