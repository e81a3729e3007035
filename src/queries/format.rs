//! Output line formatting.

/// Separator between fields of a printed result row.
pub const FIELD_SEPARATOR: &str = " :: ";

/// Join decoded field values into one delimited line, in column order.
/// NULL fields arrive as empty strings and keep their position.
pub fn format_row_line(values: &[String]) -> String {
    values.join(FIELD_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_field_has_no_separator() {
        let line = format_row_line(&["only".to_string()]);
        assert_eq!(line, "only");
    }

    #[test]
    fn test_fields_joined_in_order() {
        let values = vec![
            "10003357".to_string(),
            "150".to_string(),
            "MG".to_string(),
        ];
        assert_eq!(format_row_line(&values), "10003357 :: 150 :: MG");
    }

    #[test]
    fn test_null_fields_keep_their_position() {
        let values = vec![
            "10003357".to_string(),
            String::new(),
            "ORAL".to_string(),
        ];
        let line = format_row_line(&values);
        assert_eq!(line, "10003357 ::  :: ORAL");
        assert_eq!(line.matches(FIELD_SEPARATOR).count(), 2);
    }

    #[test]
    fn test_twenty_fields_produce_nineteen_separators() {
        let values: Vec<String> = (0..20).map(|i| format!("f{i}")).collect();
        let line = format_row_line(&values);
        assert_eq!(line.matches(FIELD_SEPARATOR).count(), 19);
        assert!(line.starts_with("f0 :: f1"));
        assert!(line.ends_with("f18 :: f19"));
    }
}
