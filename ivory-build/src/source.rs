//! File access with the build's permissive read policy.
//!
//! A missing input reads as empty content. Any other read failure, malformed
//! JSON, and every write failure is an error.

use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::BuildError;

/// Read a text file, or an empty string if it does not exist.
pub fn read_text(path: &Path) -> Result<String, BuildError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("Missing input {}, treating as empty", path.display());
            Ok(String::new())
        }
        Err(e) => Err(BuildError::io(path, e)),
    }
}

/// Read and parse a JSON file, or `T::default()` if it does not exist.
pub fn read_json<T: DeserializeOwned + Default>(path: &Path) -> Result<T, BuildError> {
    let content = read_text(path)?;
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(&content).map_err(|e| BuildError::json(path, e))
}

/// Write `data` as two-space indented JSON, creating parent directories.
/// Any existing file is replaced.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<(), BuildError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| BuildError::io(parent, e))?;
    }
    let serialized = serde_json::to_string_pretty(data).map_err(|e| BuildError::json(path, e))?;
    std::fs::write(path, serialized).map_err(|e| BuildError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_text_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(read_text(&tmp.path().join("nope.txt")).unwrap(), "");
    }

    #[test]
    fn missing_json_is_default() {
        let tmp = TempDir::new().unwrap();
        let v: Vec<u32> = read_json(&tmp.path().join("nope.json")).unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        std::fs::write(&path, "[1, 2").unwrap();
        let err = read_json::<Vec<u32>>(&path).unwrap_err();
        assert!(matches!(err, BuildError::Json { .. }));
    }

    #[test]
    fn write_creates_dirs_and_indents() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("public").join("data").join("out.json");
        write_json(&path, &vec![1, 2]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[\n  1,\n  2\n]");
    }

    #[test]
    fn write_into_a_file_path_fails() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let err = write_json(&blocker.join("out.json"), &1).unwrap_err();
        assert!(matches!(err, BuildError::Io { .. }));
    }
}
