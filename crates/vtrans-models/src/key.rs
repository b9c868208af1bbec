//! Object-key derivation for transcode jobs.
//!
//! S3 notifications deliver object keys URL-encoded the way query strings
//! are: spaces become `+`, everything else percent-escaped. The derivation
//! chain here reverses that encoding, reinstates the `+`-for-space key
//! convention used in the bucket, and truncates at the first `.` to obtain
//! the prefix under which all job outputs are grouped.

use thiserror::Error;

/// Result type for key derivation.
pub type KeyResult<T> = Result<T, KeyError>;

/// Errors that can occur while deriving keys from a notification record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("Object key is not valid URL encoding: {0}")]
    InvalidEncoding(String),
}

impl KeyError {
    pub fn invalid_encoding(msg: impl Into<String>) -> Self {
        Self::InvalidEncoding(msg.into())
    }
}

/// Decode a URL-encoded object key from an S3 notification.
///
/// Treats `+` as a space before percent-decoding, matching the encoding
/// S3 applies to keys in event payloads.
pub fn decode_object_key(raw: &str) -> KeyResult<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| KeyError::invalid_encoding(format!("{raw}: {e}")))
}

/// Reinstate the bucket key convention: every space becomes a `+`.
pub fn source_key(decoded_key: &str) -> String {
    decoded_key.replace(' ', "+")
}

/// Derive the output-key prefix: the portion of the source key before the
/// FIRST `.`, or the whole key when it has none. Legacy behavior — a key
/// like `a.b.mov` yields `a`, not `a.b`.
pub fn output_key_prefix(source_key: &str) -> &str {
    match source_key.find('.') {
        Some(dot) => &source_key[..dot],
        None => source_key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plus_as_space() {
        assert_eq!(
            decode_object_key("movies/My+Clip.mov").unwrap(),
            "movies/My Clip.mov"
        );
    }

    #[test]
    fn test_decode_percent_escapes() {
        assert_eq!(
            decode_object_key("docs/r%C3%A9sum%C3%A9.mov").unwrap(),
            "docs/résumé.mov"
        );
    }

    #[test]
    fn test_decode_invalid_utf8_fails() {
        assert!(matches!(
            decode_object_key("clips/%FF.mov"),
            Err(KeyError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_source_key_reinstates_plus() {
        assert_eq!(source_key("movies/My Clip.mov"), "movies/My+Clip.mov");
        assert_eq!(source_key("no-spaces.mov"), "no-spaces.mov");
    }

    #[test]
    fn test_prefix_strips_extension() {
        assert_eq!(output_key_prefix("movies/My+Clip.mov"), "movies/My+Clip");
    }

    #[test]
    fn test_prefix_without_dot_is_whole_key() {
        assert_eq!(output_key_prefix("clip"), "clip");
    }

    #[test]
    fn test_prefix_splits_on_first_dot() {
        assert_eq!(output_key_prefix("a.b.mov"), "a");
    }

    #[test]
    fn test_full_derivation_chain() {
        let decoded = decode_object_key("movies/My+Clip.mov").unwrap();
        let source = source_key(&decoded);
        assert_eq!(source, "movies/My+Clip.mov");
        assert_eq!(output_key_prefix(&source), "movies/My+Clip");
    }
}
