//! Invocation pipeline
//!
//! Configure -> load body -> build request -> (dump) -> send -> (dump) ->
//! read body -> print. Each step runs once and any error ends the run.

use std::io::{BufRead, Write};

use crate::body;
use crate::config::Config;
use crate::error::EhError;
use crate::models::Request;
use crate::network::{create_client, execute_request};

/// Run one request described by `config`, reading a stdin body from `stdin`
/// and writing dumps and the response body to `out`.
pub async fn run<R: BufRead, W: Write>(
    config: &Config,
    stdin: R,
    out: &mut W,
) -> Result<(), EhError> {
    let body = body::load(&config.body_source, stdin)?;
    tracing::debug!(
        source = ?config.body_source,
        bytes = body.as_ref().map(Vec::len),
        "Request body loaded"
    );

    let request = Request::new(config, body);
    let client = create_client()?;
    execute_request(&client, &request, config.verbose, out).await
}
