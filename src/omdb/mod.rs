//! Movie lookups against the OMDb search API.

mod client;
mod error;
mod types;

pub use client::{ClientError, MovieLookup, OmdbClient};
pub use error::{LookupError, LookupErrorKind, LookupFailure};
pub use types::{parse_search_response, MovieSummary};
