//! Configuration resolution
//!
//! Merges command-line flags with the `EHURI` / `EHAUTH` environment
//! variables into one immutable [`Config`]. Every problem found is
//! reported together so the user can fix them in one go.

use crate::cli::Args;
use crate::constants::{
    ENV_AUTH, ENV_URI, MSG_MALFORMED_AUTH, MSG_MISSING_AUTH, MSG_MISSING_URI,
};
use crate::error::EhError;
use crate::models::{BodySource, Credentials};

/// Everything one invocation needs, resolved once at startup
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base endpoint with trailing slashes removed
    pub endpoint: String,
    pub credentials: Credentials,
    pub segments: Vec<String>,
    pub body_source: BodySource,
    pub accept_json: bool,
    pub verbose: bool,
}

impl Config {
    /// Resolve flags against the environment. `env` looks up a variable by
    /// name; empty values count as unset.
    pub fn resolve<F>(args: Args, env: F) -> Result<Self, EhError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |flag: Option<String>, var: &str| {
            flag.or_else(|| env(var)).filter(|v| !v.is_empty())
        };

        let mut problems = Vec::new();

        let endpoint = lookup(args.ehuri, ENV_URI);
        if endpoint.is_none() {
            problems.push(MSG_MISSING_URI.to_string());
        }

        let credentials = match lookup(args.ehauth, ENV_AUTH) {
            None => {
                problems.push(MSG_MISSING_AUTH.to_string());
                None
            }
            Some(raw) => {
                let parsed = Credentials::parse(&raw);
                if parsed.is_none() {
                    problems.push(MSG_MALFORMED_AUTH.to_string());
                }
                parsed
            }
        };

        match (endpoint, credentials) {
            (Some(endpoint), Some(credentials)) => Ok(Config {
                endpoint: strip_trailing_slashes(&endpoint).to_string(),
                credentials,
                segments: args.segments,
                body_source: BodySource::select(args.file, args.stdin),
                accept_json: args.json,
                verbose: args.verbose,
            }),
            _ => Err(EhError::Configuration(problems)),
        }
    }

    /// Resolve against the process environment
    pub fn from_process_env(args: Args) -> Result<Self, EhError> {
        Config::resolve(args, |key| std::env::var(key).ok())
    }

    /// Endpoint and path segments joined with '/'
    pub fn target_uri(&self) -> String {
        std::iter::once(self.endpoint.as_str())
            .chain(self.segments.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("/")
    }
}

fn strip_trailing_slashes(uri: &str) -> &str {
    uri.trim_end_matches('/')
}
