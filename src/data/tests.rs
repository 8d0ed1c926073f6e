//! Tests for data module

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::error::AnalyzerError;
    use std::io::Write;

    fn load(csv: &str) -> Dataset {
        Dataset::from_csv_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_load_csv() {
        let ds = load("id,text\n1,hello\n2,\"quoted, with comma\"\n");
        assert_eq!(ds.headers(), &["id".to_string(), "text".to_string()]);
        assert_eq!(ds.len(), 2);
        let texts: Vec<&str> = ds.column("text").unwrap().collect();
        assert_eq!(texts, vec!["hello", "quoted, with comma"]);
    }

    #[test]
    fn test_header_only_is_empty_dataset() {
        let ds = load("text\n");
        assert!(ds.is_empty());
        assert_eq!(ds.headers().len(), 1);
    }

    #[test]
    fn test_ragged_rows_are_unreadable() {
        let err = Dataset::from_csv_reader("text,id\nhello,1,oops\n".as_bytes()).unwrap_err();
        assert!(matches!(err, AnalyzerError::UnreadableInput(_)));
    }

    #[test]
    fn test_empty_input_is_unreadable() {
        let err = Dataset::from_csv_reader("".as_bytes()).unwrap_err();
        assert!(matches!(err, AnalyzerError::UnreadableInput(_)));
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let err = Dataset::from_csv_path("/nonexistent/reviews.csv").unwrap_err();
        assert!(matches!(err, AnalyzerError::UnreadableInput(_)));
    }

    #[test]
    fn test_from_csv_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reviews.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "Review,stars").unwrap();
        writeln!(file, "Great product,5").unwrap();

        let ds = Dataset::from_csv_path(&path).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.column_index("Review"), Some(0));
    }

    #[test]
    fn test_new_rejects_width_mismatch() {
        let err = Dataset::new(
            vec!["text".to_string(), "id".to_string()],
            vec![vec!["only one".to_string()]],
        )
        .unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_find_text_column_case_insensitive() {
        assert_eq!(find_text_column(&["id", "TEXT"]), Some(1));
        assert_eq!(find_text_column(&["Review"]), Some(0));
        assert_eq!(find_text_column(&["id", "Comment"]), Some(1));
        assert_eq!(find_text_column(&["id", "body"]), None);
    }

    #[test]
    fn test_find_text_column_first_in_column_order() {
        assert_eq!(find_text_column(&["review", "text"]), Some(0));
        assert_eq!(find_text_column(&["id", "comment", "Review"]), Some(1));
    }

    #[test]
    fn test_resolve_renames_to_canonical() {
        let mut ds = load("id,Review\n1,Nice\n");
        let original = ds.resolve_text_column().unwrap();
        assert_eq!(original, "Review");
        assert_eq!(ds.headers()[1], TEXT_COLUMN);
        let texts: Vec<&str> = ds.column(TEXT_COLUMN).unwrap().collect();
        assert_eq!(texts, vec!["Nice"]);
    }

    #[test]
    fn test_resolve_keeps_canonical_name() {
        let mut ds = load("text,comment\na,b\n");
        assert_eq!(ds.resolve_text_column().unwrap(), "text");
        assert_eq!(ds.headers(), &["text".to_string(), "comment".to_string()]);
    }

    #[test]
    fn test_resolve_missing_column() {
        let mut ds = load("id,body\n1,hello\n");
        match ds.resolve_text_column() {
            Err(AnalyzerError::MissingTextColumn { available }) => {
                assert_eq!(available, vec!["id".to_string(), "body".to_string()]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_from_texts() {
        let ds = Dataset::from_texts(vec!["a", "b"]);
        assert_eq!(ds.headers(), &[TEXT_COLUMN.to_string()]);
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn test_write_csv_quotes_fields() {
        let ds = Dataset::new(
            vec!["text".to_string()],
            vec![vec!["hello, world".to_string()]],
        )
        .unwrap();
        let mut out = Vec::new();
        ds.write_csv(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "text\n\"hello, world\"\n");
    }
}
