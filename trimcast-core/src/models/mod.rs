pub mod query;
pub mod session;

pub use query::{UserQuery, FEATURE_COLUMNS, TARGET_COLUMN};
pub use session::SessionLogEntry;
