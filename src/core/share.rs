//! Shareable progress URLs
//!
//! A snapshot of non-default progress is serialized to JSON, base64-encoded,
//! and carried in the `share` query parameter of a path-scoped URL. Decoding
//! reverses the chain; every failure mode is reported, never thrown.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use url::Url;

use crate::core::models::ShareableState;

/// Query parameter carrying the encoded snapshot
pub const SHARE_PARAM: &str = "share";

/// Encode a snapshot as base64(JSON)
#[must_use]
pub fn encode_share_state(state: &ShareableState) -> String {
    // ShareableState always serializes; its fields are plain maps and strings.
    let json = serde_json::to_string(state).unwrap_or_default();
    BASE64.encode(json.as_bytes())
}

/// Decode a base64(JSON) snapshot
///
/// # Errors
/// Returns an error for bad base64, non-UTF-8 content, or JSON that does not
/// match the snapshot shape
pub fn decode_share_state(encoded: &str) -> Result<ShareableState, String> {
    let bytes = BASE64
        .decode(encoded)
        .map_err(|e| format!("Invalid base64 in share parameter: {e}"))?;
    let json =
        String::from_utf8(bytes).map_err(|e| format!("Share parameter is not UTF-8: {e}"))?;
    serde_json::from_str(&json).map_err(|e| format!("Invalid share payload: {e}"))
}

/// Build the path-scoped shareable URL `{base}/path/{slug}?share={encoded}`
#[must_use]
pub fn build_share_url(base_url: &str, state: &ShareableState) -> String {
    let base = base_url.trim_end_matches('/');
    let encoded = encode_share_state(state);
    format!("{base}/path/{}?{SHARE_PARAM}={encoded}", state.path_slug)
}

/// Extract the raw `share` parameter value from a URL
///
/// The value is taken verbatim from the query string: base64 uses `+` and
/// `/`, which form-decoding would mangle.
#[must_use]
pub fn extract_share_param(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let query = parsed.query()?;
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("share=").map(ToString::to_string))
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::NodeStatus;
    use std::collections::BTreeMap;

    fn snapshot() -> ShareableState {
        let mut progress = BTreeMap::new();
        progress.insert("cs101".to_string(), NodeStatus::Completed);
        progress.insert("cs201".to_string(), NodeStatus::InProgress);
        ShareableState {
            path_slug: "software-engineering".to_string(),
            progress,
        }
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let state = snapshot();
        let decoded = decode_share_state(&encode_share_state(&state)).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn test_decode_rejects_bad_base64() {
        assert!(decode_share_state("!!!not-base64!!!").is_err());
    }

    #[test]
    fn test_decode_rejects_bad_json() {
        let encoded = BASE64.encode(b"not json at all");
        assert!(decode_share_state(&encoded).is_err());
    }

    #[test]
    fn test_decode_rejects_missing_fields() {
        let encoded = BASE64.encode(br#"{"progress": {}}"#);
        assert!(decode_share_state(&encoded).is_err());
    }

    #[test]
    fn test_build_url_shape() {
        let url = build_share_url("https://roadmaps.example.edu/", &snapshot());
        assert!(url.starts_with("https://roadmaps.example.edu/path/software-engineering?share="));
    }

    #[test]
    fn test_extract_param_round_trip() {
        let state = snapshot();
        let url = build_share_url("https://roadmaps.example.edu", &state);
        let param = extract_share_param(&url).unwrap();
        assert_eq!(decode_share_state(&param).unwrap(), state);
    }

    #[test]
    fn test_extract_param_missing() {
        assert!(extract_share_param("https://roadmaps.example.edu/path/x").is_none());
        assert!(extract_share_param("https://roadmaps.example.edu/path/x?other=1").is_none());
        assert!(extract_share_param("not a url").is_none());
    }
}
