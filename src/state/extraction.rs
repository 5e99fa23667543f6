use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SplitError};

/// One raw entry from the extraction collaborator.
///
/// The extractor's contract: quantities already expanded into individual
/// entries, prices already normalized to the language's decimal convention,
/// calories `0` used as "unknown".
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractedEntry {
    pub item: String,
    pub price: f64,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub description: String,
}

/// The full extraction result for one receipt photo.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionResult {
    /// Two-letter receipt language code.
    #[serde(default = "default_language")]
    pub language: String,
    pub items: Vec<ExtractedEntry>,
}

fn default_language() -> String {
    "en".to_string()
}

/// Load an extraction result from a JSON file.
///
/// An empty item list is an error: the session is never started with
/// nothing to split.
pub fn load_extraction<P: AsRef<Path>>(path: P) -> Result<ExtractionResult> {
    let content = fs::read_to_string(path)?;
    let result: ExtractionResult = serde_json::from_str(&content)?;

    if result.items.is_empty() {
        return Err(SplitError::EmptyExtraction);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_extraction() {
        let json = r#"{
            "language": "es",
            "items": [
                {"item": "Lomo a lo pobre", "price": 12500, "calories": 1400, "description": "Steak with fries and eggs."},
                {"item": "Bebida", "price": 2000}
            ]
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let result = load_extraction(file.path()).unwrap();
        assert_eq!(result.language, "es");
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].item, "Lomo a lo pobre");
        // Omitted fields default
        assert_eq!(result.items[1].calories, 0.0);
        assert_eq!(result.items[1].description, "");
    }

    #[test]
    fn test_load_extraction_defaults_language() {
        let json = r#"{"items": [{"item": "Tea", "price": 3.5}]}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let result = load_extraction(file.path()).unwrap();
        assert_eq!(result.language, "en");
    }

    #[test]
    fn test_load_extraction_empty_is_error() {
        let json = r#"{"language": "en", "items": []}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(
            load_extraction(file.path()),
            Err(SplitError::EmptyExtraction)
        ));
    }

    #[test]
    fn test_load_extraction_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();

        assert!(matches!(
            load_extraction(file.path()),
            Err(SplitError::Json(_))
        ));
    }
}
