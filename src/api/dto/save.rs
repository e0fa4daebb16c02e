//! DTOs for the save endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request body of `POST /save`.
///
/// ```json
/// {"target-url": "https://example.com", "alias": "my-link"}
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// URL to redirect to; required and must be well-formed.
    #[serde(rename = "target-url")]
    #[validate(url)]
    pub target_url: String,

    /// Optional client-chosen alias; generated when absent or empty.
    #[serde(default)]
    pub alias: Option<String>,
}

impl SaveRequest {
    /// Returns the client alias, treating an empty string as absent.
    pub fn requested_alias(&self) -> Option<&str> {
        self.alias.as_deref().filter(|alias| !alias.is_empty())
    }
}
