// src/api/fetch.rs
//! The fetch-and-decode routine shared by every joke source.
//!
//! One call builds one GET request, sends it once through the given
//! transport and either decodes a 200 response into the requested record
//! or reports the single stage that failed. Nothing is retried or cached.

use super::sources::{JokeSource, CHUCK_NORRIS, DAD_JOKES};
use super::transport::Transport;
use crate::constants::{ACCEPT_JSON, ERROR_BODY_PREVIEW_LENGTH, USER_AGENT};
use crate::error::FetchError;
use crate::model::{ChuckNorrisJoke, DadJoke};
use reqwest::blocking::Request;
use reqwest::header::{self, HeaderValue};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::io::Read;

/// Fetches a random Chuck Norris fact.
pub fn fetch_chuck_norris_joke<T>(transport: &T) -> Result<ChuckNorrisJoke, FetchError>
where
    T: Transport + ?Sized,
{
    fetch_joke(transport, &CHUCK_NORRIS)
}

/// Fetches a random dad joke.
pub fn fetch_dad_joke<T>(transport: &T) -> Result<DadJoke, FetchError>
where
    T: Transport + ?Sized,
{
    fetch_joke(transport, &DAD_JOKES)
}

/// Fetches one record of type `J` from `source`.
///
/// The body is only read when the status is 200 OK, so a server error page
/// is reported as `UnexpectedStatus` and never as a decode failure.
pub fn fetch_joke<J, T>(transport: &T, source: &JokeSource) -> Result<J, FetchError>
where
    J: DeserializeOwned,
    T: Transport + ?Sized,
{
    let request = build_request(source)?;

    log::debug!("Requesting {} from {}", source.subject, source.endpoint);

    let mut response = transport
        .execute(request)
        .map_err(|cause| FetchError::Transport {
            joke_source: *source,
            cause,
        })?;

    if response.status != StatusCode::OK {
        log::debug!("{} answered {}", source.api, response.status);
        return Err(FetchError::UnexpectedStatus {
            joke_source: *source,
            status: response.status.as_u16(),
        });
    }

    let mut body = Vec::new();
    response
        .body
        .read_to_end(&mut body)
        .map_err(|cause| FetchError::BodyRead {
            joke_source: *source,
            cause,
        })?;

    serde_json::from_slice(&body).map_err(|cause| {
        log::debug!(
            "Failed to parse {} response: {} (body: {})",
            source.subject,
            cause,
            body_preview(&body)
        );
        FetchError::Decode {
            joke_source: *source,
            cause,
        }
    })
}

/// Builds the GET request both joke APIs expect.
fn build_request(source: &JokeSource) -> Result<Request, FetchError> {
    let construction_failed = |reason: String| FetchError::RequestConstruction {
        joke_source: *source,
        reason,
    };

    let url = Url::parse(source.endpoint)
        .map_err(|e| construction_failed(format!("invalid URL '{}': {}", source.endpoint, e)))?;

    let mut request = Request::new(Method::GET, url);
    let headers = request.headers_mut();
    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT_JSON));
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_str(USER_AGENT)
            .map_err(|e| construction_failed(format!("invalid User-Agent header: {}", e)))?,
    );

    Ok(request)
}

fn body_preview(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if text.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let head: String = text.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", head)
    } else {
        text.into_owned()
    }
}
