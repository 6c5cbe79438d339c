pub mod search;

pub use search::{SearchClient, SearchError, SearchQuery, YelpClient};
