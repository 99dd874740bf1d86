//! Consumer side of the HTTP API: a typed client, the state a view renders
//! from, and the company order and listing flows, which never leave the
//! client.

pub mod drafts;
pub mod http;
pub mod submission;
pub mod view;

pub use drafts::*;
pub use http::*;
pub use submission::*;
pub use view::*;
