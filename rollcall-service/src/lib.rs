// Rollcall Service Library
// Record loading, search and view derivation for the voter lookup tool

pub mod error;
pub mod record;
pub mod search;
pub mod source;
pub mod view;

// Re-export commonly used types
pub use error::{LoadError, LoadResult};
pub use record::{Field, FieldValue, Record};
pub use search::{filter_records, record_matches, SEARCH_FIELDS};
pub use source::{
    load_or_empty, parse_records, FileSource, RecordSource, StaticSource, DEFAULT_DATA_PATH,
};
pub use view::{BrowserView, DISPLAY_LIMIT};
