use mbm_content::{ContentError, ContentRecord, parse_records};
use thiserror::Error;

use crate::dom;
use crate::paths::content_url;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },
    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Fetch and parse the document for `T`'s domain.
///
/// # Errors
/// Returns an error when the request fails, the server answers with a
/// non-success status, or the body is not a JSON array of records.
#[allow(clippy::future_not_send)]
pub async fn try_fetch_records<T: ContentRecord>() -> Result<Vec<T>, FetchError> {
    let url = content_url(T::DOMAIN);
    let response = dom::fetch_response(&url)
        .await
        .map_err(|err| FetchError::Request(dom::js_error_message(&err)))?;

    if !response.ok() {
        return Err(FetchError::Http {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    let text = dom::response_text(&response)
        .await
        .map_err(|err| FetchError::Request(dom::js_error_message(&err)))?;
    Ok(parse_records(&text)?)
}

/// Fetch the records for `T`'s domain, yielding an empty list on failure.
///
/// One failing domain never affects another; the failure is reported on the
/// browser console and through `log`.
#[allow(clippy::future_not_send)]
pub async fn fetch_records<T: ContentRecord>() -> Vec<T> {
    match try_fetch_records::<T>().await {
        Ok(records) => records,
        Err(err) => {
            let message = format!("Failed to load {} content: {err}", T::DOMAIN);
            log::error!("{message}");
            dom::console_error(&message);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mbm_content::ContentDomain;

    #[test]
    fn errors_describe_the_failure() {
        let http = FetchError::Http {
            status: 404,
            status_text: "Not Found".into(),
        };
        assert_eq!(http.to_string(), "HTTP 404: Not Found");

        let shape: FetchError = ContentError::NotAnArray(ContentDomain::Pricing).into();
        assert!(shape.to_string().contains("pricing"));
    }
}
