//! Country data read from a JSON dump on disk.
//!
//! The dump has the same shape as the `/all` response. It is re-read on
//! every fetch so `Refresh` picks up edits.

use crate::model::{CountryCode, FetchError, RawCountry};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Read-only JSON dump of country records.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// # Errors
    ///
    /// Returns `FetchError::FileNotFound` if `path` does not exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, FetchError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FetchError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every record in the dump.
    ///
    /// # Errors
    ///
    /// `FetchError::FileNotFound` if the file was removed since construction,
    /// `FetchError::Io` on read failures, `FetchError::Decode` on bad JSON.
    pub fn load(&self) -> Result<Vec<RawCountry>, FetchError> {
        if !self.path.exists() {
            return Err(FetchError::FileNotFound {
                path: self.path.clone(),
            });
        }
        let file = File::open(&self.path)?;
        parse_records(BufReader::new(file), &self.path.display().to_string())
    }

    /// Records whose `cca3` equals `code`, ignoring case.
    ///
    /// # Errors
    ///
    /// As [`Self::load`].
    pub fn find(&self, code: &CountryCode) -> Result<Vec<RawCountry>, FetchError> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|raw| {
                raw.cca3
                    .as_deref()
                    .is_some_and(|c| c.trim().eq_ignore_ascii_case(code.as_str()))
            })
            .collect())
    }
}

/// Decode a JSON array of records from `reader`.
///
/// # Errors
///
/// Returns `FetchError::Decode` naming `source_name` when the JSON is not a
/// list of objects.
pub fn parse_records<R: Read>(reader: R, source_name: &str) -> Result<Vec<RawCountry>, FetchError> {
    serde_json::from_reader(reader).map_err(|e| FetchError::Decode {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const DUMP: &str = r#"[
        {"name":{"common":"France"},"cca3":"FRA","continents":["Europe"]},
        {"name":{"common":"Japan"},"cca3":"JPN","continents":["Asia"]}
    ]"#;

    #[test]
    fn new_rejects_missing_file() {
        let result = FileSource::new("/nonexistent/countries.json");
        assert!(matches!(result, Err(FetchError::FileNotFound { .. })));
    }

    #[test]
    fn load_reads_every_record() {
        let path = std::env::temp_dir().join("atlas_file_source_load.json");
        fs::write(&path, DUMP).unwrap();

        let source = FileSource::new(&path).unwrap();
        let records = source.load().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].cca3.as_deref(), Some("FRA"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn find_matches_code_case_insensitively() {
        let path = std::env::temp_dir().join("atlas_file_source_find.json");
        fs::write(&path, DUMP.replace("\"JPN\"", "\"jpn\"")).unwrap();

        let source = FileSource::new(&path).unwrap();
        let found = source.find(&CountryCode::new("JPN").unwrap()).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].continents.as_deref(), Some(&["Asia".to_string()][..]));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn parse_records_names_source_on_error() {
        let err = parse_records("{".as_bytes(), "dump.json").unwrap_err();
        match err {
            FetchError::Decode { source_name, .. } => assert_eq!(source_name, "dump.json"),
            other => panic!("expected Decode, got {other:?}"),
        }
    }

    #[test]
    fn parse_records_accepts_empty_list() {
        assert!(parse_records("[]".as_bytes(), "empty").unwrap().is_empty());
    }
}
