//! HTTP client wrapper - builds, sends and prints one request

use std::io::Write;

use futures_util::StreamExt;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};

use crate::constants::{self, ACCEPT_JSON};
use crate::error::EhError;
use crate::models::Request;
use crate::network::dump;

/// Build the wire request for `request`
pub fn build_request(
    client: &reqwest::Client,
    request: &Request,
) -> Result<reqwest::Request, EhError> {
    let mut req_builder = client
        .request(request.method.into(), &request.url)
        .header(USER_AGENT, constants::USER_AGENT)
        .header(AUTHORIZATION, request.credentials.basic_header())
        .header(CONTENT_TYPE, request.content_type);

    if request.accept_json {
        req_builder = req_builder.header(ACCEPT, ACCEPT_JSON);
    }

    if let Some(body) = &request.body {
        req_builder = req_builder.body(body.clone());
    }

    req_builder.build().map_err(EhError::Request)
}

/// Execute `request` and write the response body to `out`.
///
/// With `verbose`, the outgoing request and the response head are dumped to
/// `out` before the body. An empty response body prints nothing.
pub async fn execute_request<W: Write>(
    client: &reqwest::Client,
    request: &Request,
    verbose: bool,
    out: &mut W,
) -> Result<(), EhError> {
    let http_request = build_request(client, request)?;

    if verbose {
        write_dump(out, "Request Dump", &dump::request(&http_request))?;
    }

    tracing::info!(method = request.method.as_str(), url = %request.url, "Sending request");
    let resp = client
        .execute(http_request)
        .await
        .map_err(EhError::Transport)?;
    tracing::info!(status = resp.status().as_u16(), "Response received");

    if verbose {
        write_dump(out, "Response Dump", &dump::response(&resp))?;
    }

    let body = read_body(resp).await?;
    tracing::debug!(bytes = body.len(), "Response body read");

    if !body.is_empty() {
        out.write_all(&body).map_err(EhError::Output)?;
        out.write_all(b"\n").map_err(EhError::Output)?;
    }
    out.flush().map_err(EhError::Output)
}

/// Drain the response body stream into memory
async fn read_body(resp: reqwest::Response) -> Result<Vec<u8>, EhError> {
    let mut stream = resp.bytes_stream();
    let mut body = Vec::new();
    while let Some(chunk) = stream.next().await {
        let bytes = chunk.map_err(EhError::ResponseRead)?;
        body.extend_from_slice(&bytes);
    }
    Ok(body)
}

fn write_dump<W: Write>(out: &mut W, label: &str, dump: &str) -> Result<(), EhError> {
    write!(out, "{}:\n{}\n\n", label, dump).map_err(EhError::Output)?;
    // Dumps stay visible even if the call that follows fails
    out.flush().map_err(EhError::Output)
}

/// Create an HTTP client with default configuration. No timeout is set.
pub fn create_client() -> Result<reqwest::Client, EhError> {
    reqwest::Client::builder().build().map_err(EhError::Request)
}
