//! Inventory fetch from the ChemTrack backend.

use chemtrack_inventory::ChemicalRecord;
use thiserror::Error;

/// Errors from the one-shot inventory fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request failed in transit or the body could not be decoded as
    /// a JSON array of chemical records.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}")]
    Status {
        /// The HTTP status code the backend answered with.
        status: reqwest::StatusCode,
    },
}

/// Fetches the chemical inventory from the backend.
///
/// Issues exactly one `GET /api/v1/chemicals` request, optionally scoped
/// to a single school, with no retry or backoff; the caller decides how
/// to degrade on failure.
pub async fn fetch_chemicals(
    base_url: &str,
    school: Option<&str>,
) -> Result<Vec<ChemicalRecord>, FetchError> {
    let client = reqwest::Client::new();

    let mut request = client.get(chemicals_url(base_url));
    if let Some(school) = school {
        request = request.query(&[("school", school)]);
    }

    let response = request.send().await?;
    if !response.status().is_success() {
        return Err(FetchError::Status {
            status: response.status(),
        });
    }

    Ok(response.json().await?)
}

/// The chemical listing endpoint for a backend base URL.
fn chemicals_url(base_url: &str) -> String {
    format!("{}/api/v1/chemicals", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chemicals_url_tolerates_trailing_slash() {
        assert_eq!(
            chemicals_url("http://localhost:8080"),
            "http://localhost:8080/api/v1/chemicals"
        );
        assert_eq!(
            chemicals_url("http://localhost:8080/"),
            "http://localhost:8080/api/v1/chemicals"
        );
    }
}
