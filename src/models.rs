use std::path::PathBuf;

use base64::Engine;

use crate::config::Config;
use crate::constants::{CONTENT_TYPE_BINARY, CONTENT_TYPE_TEXT};

/// HTTP Method enum
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    GET,
    POST,
}

impl HttpMethod {
    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::GET => reqwest::Method::GET,
            HttpMethod::POST => reqwest::Method::POST,
        }
    }
}

/// Basic-auth credentials parsed from `user:secret`
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub secret: String,
}

impl Credentials {
    /// Exactly two colon-separated fields; anything else is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(user), Some(secret), None) => Some(Credentials {
                user: user.to_string(),
                secret: secret.to_string(),
            }),
            _ => None,
        }
    }

    /// Value for the `Authorization` header
    pub fn basic_header(&self) -> String {
        let credentials = format!("{}:{}", self.user, self.secret);
        let encoded = base64::engine::general_purpose::STANDARD.encode(credentials);
        format!("Basic {}", encoded)
    }
}

// Keeps the secret out of logs and panic messages.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("secret", &"***")
            .finish()
    }
}

/// Where the request body comes from
#[derive(Clone, Debug, Default, PartialEq)]
pub enum BodySource {
    #[default]
    None,
    File(PathBuf),
    Stdin,
}

impl BodySource {
    /// A file path beats stdin when both are requested
    pub fn select(file: Option<PathBuf>, stdin: bool) -> Self {
        match file {
            Some(path) => BodySource::File(path),
            None if stdin => BodySource::Stdin,
            None => BodySource::None,
        }
    }
}

/// A fully resolved request, ready to hand to the HTTP client
#[derive(Clone, Debug)]
pub struct Request {
    pub method: HttpMethod,
    pub url: String,
    pub content_type: &'static str,
    pub accept_json: bool,
    pub credentials: Credentials,
    pub body: Option<Vec<u8>>,
}

impl Request {
    /// Any body turns the call into a binary POST; no body means a plain GET.
    pub fn new(config: &Config, body: Option<Vec<u8>>) -> Self {
        let (method, content_type) = match body {
            Some(_) => (HttpMethod::POST, CONTENT_TYPE_BINARY),
            None => (HttpMethod::GET, CONTENT_TYPE_TEXT),
        };
        Request {
            method,
            url: config.target_uri(),
            content_type,
            accept_json: config.accept_json,
            credentials: config.credentials.clone(),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            endpoint: "http://x".into(),
            credentials: Credentials::parse("abc:def").unwrap(),
            segments: vec!["items".into()],
            body_source: BodySource::None,
            accept_json: false,
            verbose: false,
        }
    }

    #[test]
    fn test_parse_credentials() {
        let creds = Credentials::parse("abc:def").unwrap();
        assert_eq!(creds.user, "abc");
        assert_eq!(creds.secret, "def");

        let empty_user = Credentials::parse(":def").unwrap();
        assert_eq!(empty_user.user, "");

        assert!(Credentials::parse("malformed").is_none());
        assert!(Credentials::parse("a:b:c").is_none());
    }

    #[test]
    fn test_basic_header_encoding() {
        let creds = Credentials::parse("abc:def").unwrap();
        assert_eq!(creds.basic_header(), "Basic YWJjOmRlZg==");
    }

    #[test]
    fn test_debug_hides_secret() {
        let creds = Credentials::parse("abc:hunter2").unwrap();
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("abc"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_body_source_precedence() {
        let path = PathBuf::from("in.bin");
        assert_eq!(
            BodySource::select(Some(path.clone()), true),
            BodySource::File(path)
        );
        assert_eq!(BodySource::select(None, true), BodySource::Stdin);
        assert_eq!(BodySource::select(None, false), BodySource::None);
    }

    #[test]
    fn test_request_without_body_is_get() {
        let req = Request::new(&config(), None);
        assert_eq!(req.method, HttpMethod::GET);
        assert_eq!(req.content_type, "text/plain");
        assert_eq!(req.url, "http://x/items");
        assert!(req.body.is_none());
    }

    #[test]
    fn test_request_with_body_is_binary_post() {
        let req = Request::new(&config(), Some(b"payload".to_vec()));
        assert_eq!(req.method, HttpMethod::POST);
        assert_eq!(req.content_type, "application/octet-stream");
        assert_eq!(req.body.as_deref(), Some(&b"payload"[..]));
    }
}
