//! Unit tests for ParseOptions

use core_types::{ParseOptions, DEFAULT_FILE_NAME, DEFAULT_MAX_DEPTH};

#[cfg(test)]
mod parse_options_tests {
    use super::*;

    #[test]
    fn test_builder_methods() {
        let options = ParseOptions::default()
            .with_file_name("level.oreo")
            .with_max_depth(8);

        assert_eq!(options.file_name, "level.oreo");
        assert_eq!(options.max_depth, 8);
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let options: ParseOptions = serde_json::from_str(r#"{ "file_name": "x.oreo" }"#).unwrap();

        assert_eq!(options.file_name, "x.oreo");
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_deserialize_empty_object() {
        let options: ParseOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.file_name, DEFAULT_FILE_NAME);
    }
}
