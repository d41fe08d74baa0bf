pub mod extract;
mod graphql;
pub mod problem;
mod search;
pub mod session;
pub mod snippet;
pub mod submission;

pub use extract::{CodeExtractor, PatternExtractor};
pub use session::Session;
