// Player info API client
// GET {base}?uid={uid} for the JSON record, and a second endpoint for the
// generated profile-card image.

use reqwest::StatusCode;
use thiserror::Error;

use crate::models::player::PlayerRecord;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("player not found")]
    NotFound,
    #[error("API returned status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Malformed(#[source] serde_json::Error),
}

/// 404 means the player does not exist; any other non-2xx is an API error.
pub fn classify_status(status: StatusCode) -> Result<(), ApiError> {
    if status == StatusCode::NOT_FOUND {
        Err(ApiError::NotFound)
    } else if !status.is_success() {
        Err(ApiError::Status(status.as_u16()))
    } else {
        Ok(())
    }
}

/// A 200 body that is not valid JSON is a distinct failure from transport
/// errors; it surfaces as the generic unexpected-error message.
pub fn parse_record(raw: &str) -> Result<PlayerRecord, ApiError> {
    serde_json::from_str(raw).map_err(ApiError::Malformed)
}

pub async fn get_player(
    client: &reqwest::Client,
    base_url: &str,
    uid: &str,
) -> Result<PlayerRecord, ApiError> {
    let response = client.get(base_url).query(&[("uid", uid)]).send().await?;
    classify_status(response.status())?;
    let raw = response.text().await?;
    parse_record(&raw)
}

/// Best-effort fetch of the rendered profile card. Callers log failures and
/// carry on without the image.
pub async fn fetch_profile_card(
    client: &reqwest::Client,
    base_url: &str,
    uid: &str,
) -> anyhow::Result<Vec<u8>> {
    let response = client.get(base_url).query(&[("uid", uid)]).send().await?;
    if !response.status().is_success() {
        anyhow::bail!("profile card endpoint returned {}", response.status());
    }
    Ok(response.bytes().await?.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_not_found() {
        assert!(matches!(
            classify_status(StatusCode::NOT_FOUND),
            Err(ApiError::NotFound)
        ));
    }

    #[test]
    fn test_classify_server_error() {
        assert!(matches!(
            classify_status(StatusCode::INTERNAL_SERVER_ERROR),
            Err(ApiError::Status(500))
        ));
        assert!(matches!(
            classify_status(StatusCode::TOO_MANY_REQUESTS),
            Err(ApiError::Status(429))
        ));
    }

    #[test]
    fn test_classify_success() {
        assert!(classify_status(StatusCode::OK).is_ok());
    }

    #[test]
    fn test_parse_malformed_body() {
        assert!(matches!(
            parse_record("<html>502 Bad Gateway</html>"),
            Err(ApiError::Malformed(_))
        ));
        assert!(matches!(parse_record(""), Err(ApiError::Malformed(_))));
    }

    #[test]
    fn test_parse_valid_body() {
        let record = parse_record(r#"{"basicInfo": {"nickname": "Ace"}}"#).unwrap();
        assert_eq!(record.basic_info.unwrap().nickname.as_deref(), Some("Ace"));
    }
}
