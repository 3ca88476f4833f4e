//! Command-line flags
//!
//! The flag set keeps the single-dash long options `-ehuri` and `-ehauth`
//! that existing scripts pass. clap only understands long options with two
//! dashes, so argv goes through [`normalize_args`] before parsing.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Long options that may be spelled with a single dash
const SINGLE_DASH_LONGS: [&str; 2] = ["ehuri", "ehauth"];

/// Flags whose value is the following argument
const VALUE_FLAGS: [&str; 3] = ["f", "ehuri", "ehauth"];

/// Issue one basic-auth request against the configured API endpoint
#[derive(Parser, Debug, Clone, Default, PartialEq)]
#[command(name = "eh", disable_version_flag = true)]
pub struct Args {
    /// Show software version and exit
    #[arg(short = 'V')]
    pub show_version: bool,

    /// Read input data for the API call from stdin
    #[arg(short = 'c')]
    pub stdin: bool,

    /// Ask the server for JSON output (Accept: application/json)
    #[arg(short = 'j')]
    pub json: bool,

    /// Show full headers sent and received during the API call
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Read input data for the API call from FILE (takes precedence over -c)
    #[arg(short = 'f', value_name = "FILE", allow_hyphen_values = true)]
    pub file: Option<PathBuf>,

    /// Override the EHURI environment variable
    #[arg(long = "ehuri", value_name = "URI", allow_hyphen_values = true)]
    pub ehuri: Option<String>,

    /// Override the EHAUTH environment variable
    #[arg(long = "ehauth", value_name = "USER:SECRET", allow_hyphen_values = true)]
    pub ehauth: Option<String>,

    /// Path segments appended to the endpoint, joined with '/'
    #[arg(value_name = "SEGMENT")]
    pub segments: Vec<String>,
}

impl Args {
    /// Parse the process arguments
    pub fn from_env() -> Self {
        Args::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Prepare argv for clap.
///
/// `-ehuri` / `-ehauth` (and their `=VALUE` forms) get a second dash. Flag
/// parsing stops at the first positional argument: a `--` is inserted before
/// it so that everything from there on is a path segment, even `-5` or `-v`.
/// Arguments after an explicit `--` are left untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut out: Vec<OsString> = args.next().into_iter().collect();

    while let Some(arg) = args.next() {
        if arg == "--" {
            out.push(arg);
            out.extend(args);
            break;
        }

        let Some((name, inline_value)) = arg.to_str().and_then(flag_name) else {
            out.push(OsString::from("--"));
            out.push(arg);
            out.extend(args);
            break;
        };
        let takes_value = !inline_value && VALUE_FLAGS.contains(&name);

        let single_dash_long = !arg.to_string_lossy().starts_with("--")
            && SINGLE_DASH_LONGS.contains(&name);
        if single_dash_long {
            let mut long = OsString::from("-");
            long.push(&arg);
            out.push(long);
        } else {
            out.push(arg);
        }

        if takes_value {
            out.extend(args.next());
        }
    }

    out
}

/// Name of a flag argument and whether it carries `=VALUE`. `None` for
/// positionals, including a lone `-`.
fn flag_name(arg: &str) -> Option<(&str, bool)> {
    let rest = arg.strip_prefix('-')?;
    let rest = rest.strip_prefix('-').unwrap_or(rest);
    if rest.is_empty() {
        return None;
    }
    Some(match rest.split_once('=') {
        Some((name, _)) => (name, true),
        None => (rest, false),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        let mut argv = vec!["eh"];
        argv.extend_from_slice(args);
        Args::try_parse_from(normalize_args(argv)).unwrap()
    }

    #[test]
    fn test_single_dash_long_flags() {
        let args = parse(&["-ehuri", "http://api", "-ehauth=abc:def"]);
        assert_eq!(args.ehuri.as_deref(), Some("http://api"));
        assert_eq!(args.ehauth.as_deref(), Some("abc:def"));
    }

    #[test]
    fn test_double_dash_long_flags_still_work() {
        let args = parse(&["--ehuri", "http://api", "--ehauth", "abc:def"]);
        assert_eq!(args.ehuri.as_deref(), Some("http://api"));
        assert_eq!(args.ehauth.as_deref(), Some("abc:def"));
    }

    #[test]
    fn test_short_flags_and_segments() {
        let args = parse(&["-c", "-j", "-v", "-f", "body.bin", "users", "42"]);
        assert!(args.stdin);
        assert!(args.json);
        assert!(args.verbose);
        assert_eq!(args.file, Some(PathBuf::from("body.bin")));
        assert_eq!(args.segments, vec!["users", "42"]);
    }

    #[test]
    fn test_version_flag_is_bare() {
        let args = parse(&["-V"]);
        assert!(args.show_version);
        assert!(args.ehuri.is_none());
    }

    #[test]
    fn test_no_flags() {
        let args = parse(&[]);
        assert_eq!(args, Args::default());
    }

    #[test]
    fn test_flags_stop_at_first_segment() {
        let args = parse(&["items", "-5"]);
        assert_eq!(args.segments, vec!["items", "-5"]);

        let args = parse(&["users", "-v"]);
        assert_eq!(args.segments, vec!["users", "-v"]);
        assert!(!args.verbose);

        let args = parse(&["-v", "-ehuri", "http://api", "users", "-ehauth", "x"]);
        assert!(args.verbose);
        assert_eq!(args.ehuri.as_deref(), Some("http://api"));
        assert!(args.ehauth.is_none());
        assert_eq!(args.segments, vec!["users", "-ehauth", "x"]);
    }

    #[test]
    fn test_flag_values_are_not_segments() {
        let args = parse(&["-f", "-body.bin", "upload"]);
        assert_eq!(args.file, Some(PathBuf::from("-body.bin")));
        assert_eq!(args.segments, vec!["upload"]);
    }

    #[test]
    fn test_normalize_inserts_separator_before_segments() {
        let out = normalize_args(["eh", "-j", "a", "-b"]);
        assert_eq!(out, vec!["eh", "-j", "--", "a", "-b"]);
    }

    #[test]
    fn test_normalize_leaves_other_args_alone() {
        let out = normalize_args(["eh", "-v", "-ehurix", "--", "-ehuri"]);
        assert_eq!(out, vec!["eh", "-v", "-ehurix", "--", "-ehuri"]);
    }
}
