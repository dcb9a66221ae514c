use crate::types::scoring::Dataset;
use std::io::Read;

/// Reads `{ "<dimension>": { "<criterion>": <number> } }`.
pub fn parse_measurements<R: Read>(reader: R) -> Result<Dataset, serde_json::Error> {
    serde_json::from_reader(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::Dimension;

    #[test]
    fn parses_nested_object() {
        let dataset = parse_measurements(
            r#"{
                "security": { "critical_vulnerabilities": 0, "owasp_top10": 100 },
                "experience": { "user_error_rate": 0.7 }
            }"#
            .as_bytes(),
        )
        .expect("json should parse");

        assert_eq!(dataset[&Dimension::Security]["owasp_top10"], 100.0);
        assert_eq!(dataset[&Dimension::Experience]["user_error_rate"], 0.7);
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn unknown_dimension_is_rejected() {
        let err = parse_measurements(r#"{ "bugs": { "critical": 1 } }"#.as_bytes())
            .expect_err("json should fail");
        assert!(err.to_string().contains("unknown variant"));
    }

    #[test]
    fn non_numeric_value_is_rejected() {
        let result = parse_measurements(r#"{ "defects": { "mtbf": "high" } }"#.as_bytes());
        assert!(result.is_err());
    }
}
