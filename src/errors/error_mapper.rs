use refiners_core::RefinerError;
use std::io::ErrorKind;
use std::path::Path;

/// Map refiner loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_file_load_error(error: &RefinerError, path: &Path) -> (String, String, String) {
    match (error, error.io_kind()) {
        (RefinerError::Parse { source }, _) => (
            "Invalid Refiner File".to_string(),
            "The file is not a valid refiner document.".to_string(),
            format!(
                "{}\n\nExpected an object with 'availableFilters' and 'refinersConfiguration'.",
                source
            ),
        ),
        (_, Some(ErrorKind::NotFound)) => (
            "File Not Found".to_string(),
            "The file could not be found.".to_string(),
            format!(
                "Path: {}\n\nPlease verify the file exists and you have permission to read it.",
                path.display()
            ),
        ),
        (_, Some(ErrorKind::PermissionDenied)) => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to read this file:\n{}", path.display()),
        ),
        _ => (
            "Error Loading File".to_string(),
            "Failed to load refiner file.".to_string(),
            error.to_string(),
        ),
    }
}

/// Map reload errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_reload_error(error: &RefinerError, path: &Path) -> (String, String, String) {
    match error.io_kind() {
        Some(ErrorKind::NotFound) => (
            "File Not Found".to_string(),
            "The file could not be found.".to_string(),
            format!(
                "Path: {}\n\nThe file may have been moved or deleted.",
                path.display()
            ),
        ),
        _ => {
            let (_, message, details) = map_file_load_error(error, path);
            ("Error Reloading File".to_string(), message, details)
        }
    }
}
