use thiserror::Error;

/// Errors that may occur when selecting from or editing a [Splitter](crate::splitter::Splitter).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SplitError {
    /// The splitter holds no items, so there is nothing to select.
    #[error("no items to select from")]
    NoItems,
    /// The referenced item index does not exist.
    #[error("item index {index} out of range for {len} items")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The number of items held at the time.
        len: usize
    }
}

/// Errors that may occur when loading a splitter from a JSON document.
///
/// Individual records are never rejected (missing or odd fields fall back
/// to defaults), so these only cover a document that cannot be read at all.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON, or is not an array of records.
    #[error("invalid split configuration: {0}")]
    Json(#[from] serde_json::Error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!("no items to select from", SplitError::NoItems.to_string());
        assert_eq!(
            "item index 3 out of range for 2 items",
            SplitError::IndexOutOfRange { index: 3, len: 2 }.to_string()
        );
    }

    #[test]
    fn test_config_error_from_json() {
        let e: ConfigError = serde_json::from_str::<Vec<u32>>("{").unwrap_err().into();
        assert!(e.to_string().starts_with("invalid split configuration"));
    }
}
