//! Stored feature list encoding.
//!
//! A car's features are persisted as a JSON array of strings in a text
//! column. Reading them back goes through [`decode_features`]; callers that
//! serve the catalog fall back to an empty list when the stored text is
//! malformed rather than failing the request.

/// The stored feature text could not be decoded into a list of strings.
#[derive(thiserror::Error, Debug)]
#[error("malformed stored feature list: {0}")]
pub struct MalformedStoredData(#[from] serde_json::Error);

/// Decode a stored feature list.
///
/// `None` and blank text decode to an empty list.
///
/// # Errors
///
/// Returns [`MalformedStoredData`] if the text is not a JSON array of strings.
///
/// # Examples
///
/// ```
/// use car_expo_core::decode_features;
///
/// assert_eq!(decode_features(Some(r#"["ABS","GPS"]"#)).unwrap(), vec!["ABS", "GPS"]);
/// assert!(decode_features(None).unwrap().is_empty());
/// assert!(decode_features(Some("ABS, GPS")).is_err());
/// ```
pub fn decode_features(raw: Option<&str>) -> Result<Vec<String>, MalformedStoredData> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Vec::new()),
        Some(text) => Ok(serde_json::from_str(text)?),
    }
}

/// Encode a feature list for storage.
#[must_use]
pub fn encode_features(features: &[String]) -> String {
    // Serializing a slice of strings cannot fail.
    serde_json::to_string(features).unwrap_or_else(|_| "[]".to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_list() {
        let features = decode_features(Some(r#"["All-Wheel Drive","Roof Rails"]"#)).unwrap();
        assert_eq!(features, vec!["All-Wheel Drive", "Roof Rails"]);
    }

    #[test]
    fn test_decode_missing_and_blank() {
        assert!(decode_features(None).unwrap().is_empty());
        assert!(decode_features(Some("")).unwrap().is_empty());
        assert!(decode_features(Some("   ")).unwrap().is_empty());
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode_features(Some("[]")).unwrap().is_empty());
    }

    #[test]
    fn test_decode_malformed() {
        assert!(decode_features(Some("not json")).is_err());
        assert!(decode_features(Some(r#"["unterminated"#)).is_err());
    }

    #[test]
    fn test_decode_wrong_shape() {
        // Valid JSON, but not an array of strings
        assert!(decode_features(Some(r#"{"a":1}"#)).is_err());
        assert!(decode_features(Some("[1,2,3]")).is_err());
        assert!(decode_features(Some("null")).is_err());
    }

    #[test]
    fn test_encode_matches_decode() {
        let features = vec!["Safety Sense 2.0".to_owned(), "Apple CarPlay".to_owned()];
        let stored = encode_features(&features);
        assert_eq!(stored, r#"["Safety Sense 2.0","Apple CarPlay"]"#);
        assert_eq!(decode_features(Some(&stored)).unwrap(), features);
    }
}
