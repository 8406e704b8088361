//! ksearch 固有のドメイン型（型と不変条件）

pub mod command;
pub mod fields;
pub mod link;
pub mod query;
pub mod result;

pub use command::{AppTarget, KsCommand, OutputTarget};
pub use query::SearchQuery;
pub use result::ResultRow;
