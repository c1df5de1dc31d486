//! File-backed list of recognized place names, consumed by presentation
//! layers for autocomplete. Not part of the aggregation path: an unknown
//! city is still looked up against the sources.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("failed to read places file '{0}'")]
    Read(PathBuf, #[source] std::io::Error),
}

/// Reads a newline-delimited list of place names, skipping blank lines.
pub async fn read_places(path: impl AsRef<Path>) -> Result<Vec<String>, PlacesError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .await
        .map_err(|e| PlacesError::Read(path.to_path_buf(), e))?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn reads_places_and_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Helsinki\n\nTurku\n  Hyvinkää  \n").unwrap();

        let places = read_places(file.path()).await.unwrap();
        assert_eq!(places, ["Helsinki", "Turku", "Hyvinkää"]);
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let result = read_places("/nonexistent/places.txt").await;
        assert!(matches!(result, Err(PlacesError::Read(_, _))));
    }
}
