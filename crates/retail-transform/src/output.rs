//! Serialization of transformed records for the sink

use crate::models::OutputRecord;

/// Render records as a pretty-printed JSON array.
pub fn to_json_pretty(records: &[OutputRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::models::PRODUCT_RECORD_KIND;

    #[test]
    fn test_empty_batch_is_empty_array() {
        assert_eq!(to_json_pretty(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_records_render_in_order() {
        let records = vec![
            OutputRecord {
                kind: PRODUCT_RECORD_KIND.to_string(),
                id: "g1".to_string(),
                title: "Book A".to_string(),
                description: String::new(),
                author: String::new(),
            },
            OutputRecord {
                kind: PRODUCT_RECORD_KIND.to_string(),
                id: "g2".to_string(),
                title: "Book B".to_string(),
                description: "desc".to_string(),
                author: "Jane Doe".to_string(),
            },
        ];

        let json = to_json_pretty(&records).unwrap();
        assert!(json.starts_with("[\n  {\n    \"type\": \"PP\","));
        assert!(json.find("\"g1\"").unwrap() < json.find("\"g2\"").unwrap());

        let parsed: Vec<OutputRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, records);
    }
}
