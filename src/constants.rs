use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Upper bound on the recently viewed list kept per user.
pub const RECENTLY_VIEWED_LIMIT: usize = 10;

/// Page parameters sent with every job search.
pub const SEARCH_PAGE: u32 = 1;
pub const SEARCH_NUM_PAGES: u32 = 1;

/// Number of listings indexed when a new chat category is loaded.
pub const DEFAULT_INDEX_RESULTS: u32 = 10;
