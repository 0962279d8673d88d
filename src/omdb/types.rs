//! Wire types for the OMDb search endpoint and the summary built from them.

use serde::Deserialize;

use super::error::LookupError;

/// Placeholder OMDb uses for missing fields.
const NOT_AVAILABLE: &str = "N/A";

/// Basic metadata for the best match of a title search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieSummary {
    /// Poster URL, absent when OMDb has none.
    pub poster: Option<String>,
    pub title: String,
    pub year: String,
    /// IMDb identifier (e.g., "tt0371746").
    pub external_id: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    /// Kept raw so only the first hit has to be well formed.
    #[serde(rename = "Search", default)]
    search: Option<Vec<serde_json::Value>>,
    /// Set by OMDb on negative answers, e.g. "Movie not found!".
    #[serde(rename = "Error", default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Poster", default)]
    poster: Option<String>,
}

impl From<SearchHit> for MovieSummary {
    fn from(hit: SearchHit) -> Self {
        let poster = hit
            .poster
            .filter(|url| !url.trim().is_empty() && url != NOT_AVAILABLE);
        Self {
            poster,
            title: hit.title,
            year: hit.year,
            external_id: hit.imdb_id,
        }
    }
}

/// Parse a search response body and keep the first match.
pub fn parse_search_response(title: &str, body: &str) -> Result<MovieSummary, LookupError> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|source| LookupError::Decode {
            title: title.to_string(),
            source,
        })?;

    match response.search.and_then(|hits| hits.into_iter().next()) {
        Some(first) => {
            let hit: SearchHit =
                serde_json::from_value(first).map_err(|source| LookupError::Decode {
                    title: title.to_string(),
                    source,
                })?;
            Ok(hit.into())
        }
        None => Err(LookupError::NotFound {
            title: title.to_string(),
            reason: response
                .error
                .unwrap_or_else(|| "empty result list".to_string()),
        }),
    }
}
