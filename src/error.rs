//! Error type shared by every stage of an invocation
//!
//! Every variant is terminal: the binary prints it to stderr and exits 1.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum EhError {
    /// Missing or malformed endpoint/credentials. Holds one message per problem.
    #[error("{}", .0.join("\n"))]
    Configuration(Vec<String>),

    #[error("Error reading {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading stdin: {0}")]
    ReadStdin(#[source] io::Error),

    #[error("Invalid request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("{}", describe_transport(.0))]
    Transport(#[source] reqwest::Error),

    #[error("Error reading body: {0}")]
    ResponseRead(#[source] reqwest::Error),

    #[error("Error writing output: {0}")]
    Output(#[source] io::Error),
}

impl EhError {
    /// Lines to print on stderr, one per problem
    pub fn messages(&self) -> Vec<String> {
        match self {
            EhError::Configuration(problems) => problems.clone(),
            other => vec![other.to_string()],
        }
    }
}

fn describe_transport(e: &reqwest::Error) -> String {
    if e.is_connect() {
        format!("Connection failed: {}", e)
    } else if e.is_timeout() {
        format!("Request timed out: {}", e)
    } else {
        format!("Request failed: {}", e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_lists_every_problem() {
        let err = EhError::Configuration(vec!["first".into(), "second".into()]);
        assert_eq!(err.to_string(), "first\nsecond");
        assert_eq!(err.messages(), vec!["first", "second"]);
    }

    #[test]
    fn read_file_error_names_the_path() {
        let err = EhError::ReadFile {
            path: PathBuf::from("/nope/body.bin"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Error reading /nope/body.bin: not found");
        assert_eq!(err.messages().len(), 1);
    }
}
