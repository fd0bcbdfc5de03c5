//! Reading transcript sources and writing reflowed output.

use crate::error::{Error, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read a whole file as UTF-8 text.
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    let bytes = fs::read(path).map_err(|source| Error::Source {
        origin: origin.clone(),
        source,
    })?;
    decode(bytes, origin)
}

/// Read everything from `reader` as UTF-8 text.
///
/// `origin` names the source in error messages (e.g. `<stdin>`).
pub fn read_from<R: Read>(mut reader: R, origin: &str) -> Result<String> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| Error::Source {
            origin: origin.to_string(),
            source,
        })?;
    decode(bytes, origin.to_string())
}

fn decode(bytes: Vec<u8>, origin: String) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| Error::Decode {
        origin,
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}

/// Write `text` to a file, replacing any previous content.
pub fn write_sink<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, text).map_err(|source| Error::Sink {
        target: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn test_read_from_utf8() {
        let text = read_from("héllo\n".as_bytes(), "<memory>").unwrap();
        assert_eq!(text, "héllo\n");
    }

    #[test]
    fn test_read_from_invalid_utf8() {
        let err = read_from(&b"ok\xff\xfe"[..], "<memory>").unwrap_err();
        assert!(matches!(
            err,
            Error::Decode {
                valid_up_to: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_read_from_failing_reader() {
        let err = read_from(FailingReader, "<stdin>").unwrap_err();
        assert!(err.is_source());
        assert!(err.to_string().contains("<stdin>"));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_source("/nonexistent/uncolumn/input.txt").unwrap_err();
        assert!(matches!(err, Error::Source { .. }));
    }
}
