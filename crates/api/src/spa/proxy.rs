//! Reverse proxy to the frontend dev server.

use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, header};
use axum::response::Response;

use crate::error::ApiError;

#[derive(Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    upstream: String,
}

impl ProxyState {
    /// Redirects are never followed: a 3xx from the dev server goes back to
    /// the browser as-is.
    pub fn new(upstream: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self {
            client,
            upstream: upstream.into().trim_end_matches('/').to_string(),
        })
    }
}

/// Builds a router that forwards every request it receives to `upstream`.
pub fn router(upstream: impl Into<String>) -> Result<Router, reqwest::Error> {
    Ok(Router::new()
        .fallback(forward)
        .with_state(ProxyState::new(upstream)?))
}

/// Forwards method, path, query, end-to-end headers and body upstream, then
/// relays the upstream status, headers and body back.
///
/// Protocol upgrades (the dev server's hot-reload WebSocket) are refused with
/// 501; only plain request/response exchanges are relayed.
#[tracing::instrument(skip_all, fields(method = %request.method(), path = %request.uri().path()))]
pub async fn forward(
    State(state): State<ProxyState>,
    request: Request,
) -> Result<Response, ApiError> {
    if request.headers().contains_key(header::UPGRADE) {
        return Err(ApiError::NotImplemented(format!(
            "protocol upgrade on {} is not proxied",
            request.uri().path()
        )));
    }

    let (parts, body) = request.into_parts();
    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let url = format!("{}{}", state.upstream, path_and_query);

    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|e| ApiError::Internal(format!("failed to read request body: {e}")))?;

    let upstream_response = state
        .client
        .request(parts.method, &url)
        .headers(end_to_end_headers(&parts.headers))
        .body(body)
        .send()
        .await
        .map_err(|e| ApiError::BadGateway(format!("dev server request to {url} failed: {e}")))?;

    let status = upstream_response.status();
    let headers = end_to_end_headers(upstream_response.headers());
    let bytes = upstream_response
        .bytes()
        .await
        .map_err(|e| ApiError::BadGateway(format!("dev server response from {url} failed: {e}")))?;

    tracing::debug!(%status, len = bytes.len(), "relayed dev server response");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

/// Copies `headers` minus hop-by-hop headers and those the client library
/// recomputes for the new connection.
fn end_to_end_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| !is_hop_by_hop(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

fn is_hop_by_hop(name: &HeaderName) -> bool {
    name == header::CONNECTION
        || name == header::HOST
        || name == header::CONTENT_LENGTH
        || name == header::PROXY_AUTHENTICATE
        || name == header::PROXY_AUTHORIZATION
        || name == header::TE
        || name == header::TRAILER
        || name == header::TRANSFER_ENCODING
        || name == header::UPGRADE
        || name.as_str() == "keep-alive"
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn trailing_slash_trimmed_from_upstream() {
        let state = ProxyState::new("http://localhost:5173/").unwrap();
        assert_eq!(state.upstream, "http://localhost:5173");
    }

    #[test]
    fn hop_by_hop_headers_are_dropped() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:5000"));
        headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert("keep-alive", HeaderValue::from_static("timeout=5"));
        headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("text/html"));
        headers.insert("x-custom", HeaderValue::from_static("1"));

        let forwarded = end_to_end_headers(&headers);

        assert_eq!(forwarded.len(), 2);
        assert_eq!(forwarded[header::ACCEPT], "text/html");
        assert_eq!(forwarded["x-custom"], "1");
    }
}
