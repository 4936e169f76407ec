//! Text and JSON file input.
//!
//! Scripts, events and render configurations are exported by the parish
//! application as UTF-8 files. Some editors prepend a byte order mark, which
//! both the TOML and JSON parsers reject, so it is removed here before the
//! content is handed on.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Reads a UTF-8 text file and returns its content with a leading byte
/// order mark removed.
///
/// # Examples
///
/// ```no_run
/// use parish_liturgy::fileio::read_text;
///
/// # fn main() -> parish_liturgy::Result<()> {
/// let toml = read_text("render.toml")?;
/// println!("{}", toml);
/// # Ok(())
/// # }
/// ```
pub fn read_text<P: AsRef<Path>>(filename: P) -> Result<String> {
    let path = filename.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(strip_bom(content))
}

/// Reads a JSON file and decodes it into `T`.
///
/// Used for events (`MasterEvent`), scripts (`Script`) and Mass records
/// exported from the database layer.
pub fn read_json<T, P>(filename: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = filename.as_ref();
    let content = read_text(path)?;
    serde_json::from_str(&content).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn strip_bom(content: String) -> String {
    match content.strip_prefix('\u{FEFF}') {
        Some(rest) => rest.to_string(),
        None => content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_text_strips_bom() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("\u{FEFF}language = \"es\"\n".as_bytes()).unwrap();

        let text = read_text(file.path()).unwrap();
        assert_eq!(text, "language = \"es\"\n");
    }

    #[test]
    fn test_read_text_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_read_json_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let err = read_json::<serde_json::Value, _>(file.path()).unwrap_err();
        match err {
            Error::Json { path, .. } => assert_eq!(path, file.path()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_json_decodes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"name\": \"St. Mary\"}").unwrap();

        let value: serde_json::Value = read_json(file.path()).unwrap();
        assert_eq!(value["name"], "St. Mary");
    }
}
