//! Unit tests for Location

use core_types::Location;

#[cfg(test)]
mod location_tests {
    use super::*;

    #[test]
    fn test_location_creation() {
        let loc = Location {
            start: 10,
            end: 15,
            line: 3,
            column: 5,
        };

        assert_eq!(loc, Location::new(10, 15, 3, 5));
        assert_eq!(loc.len(), 5);
    }

    #[test]
    fn test_location_zero_values() {
        let loc = Location::default();

        assert_eq!(loc.start, 0);
        assert_eq!(loc.end, 0);
        assert_eq!(loc.line, 0);
        assert_eq!(loc.column, 0);
        assert!(loc.is_empty());
    }

    #[test]
    fn test_location_to_keeps_start_line_and_column() {
        let keyword = Location::new(0, 2, 1, 1);
        let body = Location::new(8, 20, 3, 2);

        let span = keyword.to(body);

        assert_eq!(span.start, 0);
        assert_eq!(span.end, 20);
        assert_eq!(span.line, 1);
        assert_eq!(span.column, 1);
    }

    #[test]
    fn test_location_is_copy() {
        let a = Location::new(1, 2, 1, 2);
        let b = a;
        assert_eq!(a, b);
    }

    #[test]
    fn test_location_serializes_all_fields() {
        let json = serde_json::to_value(Location::new(1, 4, 2, 3)).unwrap();
        assert_eq!(json["start"], 1);
        assert_eq!(json["end"], 4);
        assert_eq!(json["line"], 2);
        assert_eq!(json["column"], 3);
    }
}
