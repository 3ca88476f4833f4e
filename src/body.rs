//! Request body loading

use std::fs;
use std::io::BufRead;

use crate::error::EhError;
use crate::models::BodySource;

/// Load the body named by `source`. `stdin` is only read for
/// [`BodySource::Stdin`].
pub fn load<R: BufRead>(source: &BodySource, stdin: R) -> Result<Option<Vec<u8>>, EhError> {
    match source {
        BodySource::None => Ok(None),
        BodySource::File(path) => fs::read(path)
            .map(Some)
            .map_err(|source| EhError::ReadFile {
                path: path.clone(),
                source,
            }),
        BodySource::Stdin => read_lines(stdin).map(Some),
    }
}

/// Drain `reader` line by line until EOF. Only complete lines are kept,
/// terminators included; trailing bytes with no `\n` are dropped.
fn read_lines<R: BufRead>(mut reader: R) -> Result<Vec<u8>, EhError> {
    let mut body = Vec::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        reader
            .read_until(b'\n', &mut line)
            .map_err(EhError::ReadStdin)?;
        if line.last() != Some(&b'\n') {
            break;
        }
        body.extend_from_slice(&line);
    }
    Ok(body)
}
