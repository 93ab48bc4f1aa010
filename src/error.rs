pub use masterror::{AppError, AppResult};

/// Create file read error
pub fn file_read_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to read file '{}': {}", path, source))
}

/// Create config error
pub fn config_error(message: impl Into<String>) -> AppError {
    AppError::bad_request(message.into())
}

/// Create error for an output format name that is not text, json or yaml
pub fn invalid_format_error(name: &str) -> AppError {
    config_error(format!(
        "Unknown output format '{}' (expected one of: text, json, yaml)",
        name
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_read_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let msg = file_read_error("/tmp/q.sql", io_error).to_string();
        assert!(!msg.is_empty());
    }

    #[test]
    fn test_invalid_format_error() {
        let msg = invalid_format_error("xml").to_string();
        assert!(!msg.is_empty());
    }
}
