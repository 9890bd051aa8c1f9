use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::RefinerError;
use crate::models::RefinerDocument;

/// Parse a refiner document from JSON text
pub fn parse_refiners(contents: &str) -> Result<RefinerDocument, RefinerError> {
    serde_json::from_str(contents).map_err(|source| RefinerError::Parse { source })
}

/// Load a refiner document from a JSON file
pub fn load_refiners<P: AsRef<Path>>(path: P) -> Result<RefinerDocument, RefinerError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| RefinerError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse_refiners(&contents)?;

    info!(
        path = %path.display(),
        facets = document.available_filters.len(),
        "loaded refiners"
    );
    Ok(document)
}

/// Save a refiner document to a JSON file with pretty printing
pub fn save_refiners<P: AsRef<Path>>(document: &RefinerDocument, path: P) -> Result<(), RefinerError> {
    let path = path.as_ref();
    let json =
        serde_json::to_string_pretty(document).map_err(|source| RefinerError::Serialize { source })?;
    fs::write(path, json).map_err(|source| RefinerError::Write {
        path: path.to_path_buf(),
        source,
    })
}
