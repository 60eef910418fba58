//! The sealed note envelope and its text codec.
//!
//! On disk a note is a small pretty-printed JSON document:
//!
//! ```text
//! {
//!   "version": "1.0",
//!   "hint": "<plaintext hint>",
//!   "encodedData": "<base64 ciphertext, or empty>"
//! }
//! ```
//!
//! An empty file is a note that has never been saved and decodes to the
//! sentinel envelope.

use serde::{Deserialize, Serialize};

use crate::crypto::EncryptionService;
use crate::error::{Result, SealnoteError};

/// Envelope format written by this version.
pub const FORMAT_VERSION: &str = "1.0";

/// Envelope formats this version can read.
pub const SUPPORTED_VERSIONS: &[&str] = &[FORMAT_VERSION];

/// File extension that identifies sealed notes.
pub const NOTE_EXTENSION: &str = "encrypted";

/// Persisted note envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Envelope {
    pub version: String,
    pub hint: String,
    #[serde(rename = "encodedData")]
    pub encoded_data: String,
}

impl Envelope {
    /// A current-version envelope.
    pub fn new(hint: impl Into<String>, encoded_data: impl Into<String>) -> Self {
        Self {
            version: FORMAT_VERSION.to_string(),
            hint: hint.into(),
            encoded_data: encoded_data.into(),
        }
    }

    /// The envelope of a note that has never been saved.
    pub fn sentinel() -> Self {
        Self::new("", "")
    }

    /// Whether no body has ever been sealed into this envelope.
    pub fn is_sentinel(&self) -> bool {
        self.encoded_data.is_empty()
    }

    /// Hint as shown next to the unlock prompt, empty when there is no hint.
    pub fn format_hint(&self) -> String {
        format_hint(&self.hint)
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::sentinel()
    }
}

/// Format a hint for display: `"Hint: <hint>"`, or empty for no hint.
pub fn format_hint(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("Hint: {}", hint)
    }
}

/// Whether a file extension marks a sealed note.
pub fn is_supported_extension(extension: &str) -> bool {
    extension == NOTE_EXTENSION
}

/// Serialize an envelope to its persisted text.
pub fn encode(envelope: &Envelope) -> Result<String> {
    Ok(serde_json::to_string_pretty(envelope)?)
}

/// Parse persisted text into an envelope.
///
/// # Errors
///
/// Returns `SealnoteError::Format` if the text is not an envelope, names an
/// unsupported version, or carries encoded data that is not base64.
pub fn decode(raw: &str) -> Result<Envelope> {
    if raw.is_empty() {
        return Ok(Envelope::sentinel());
    }

    let envelope: Envelope = serde_json::from_str(raw)
        .map_err(|e| SealnoteError::Format(format!("Invalid note envelope: {}", e)))?;

    if !SUPPORTED_VERSIONS.contains(&envelope.version.as_str()) {
        return Err(SealnoteError::Format(format!(
            "Unsupported envelope version: {}",
            envelope.version
        )));
    }

    if !envelope.encoded_data.is_empty() {
        EncryptionService::<crate::crypto::AgeCipher>::from_storage_text(&envelope.encoded_data)?;
    }

    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_raw_is_sentinel() {
        let envelope = decode("").unwrap();
        assert_eq!(envelope, Envelope::new("", ""));
        assert_eq!(envelope.version, FORMAT_VERSION);
        assert!(envelope.is_sentinel());
    }

    #[test]
    fn test_round_trip() {
        let envelopes = [
            Envelope::sentinel(),
            Envelope::new("fav", "YWJj"),
            Envelope::new("quotes \" and \\ and\nnewlines", "aGVsbG8="),
            Envelope::new("ünïcødé 🔐", ""),
        ];
        for envelope in envelopes {
            assert_eq!(decode(&encode(&envelope).unwrap()).unwrap(), envelope);
        }
    }

    #[test]
    fn test_round_trip_awkward_hints_and_long_data() {
        use base64::engine::general_purpose::STANDARD;
        use base64::Engine;

        let hints = [
            String::new(),
            "\u{0}\u{1}\t\r\u{1b}[31mred\u{7f}".to_string(),
            "line\u{2028}separator\u{2029}and </script>".to_string(),
            "h".repeat(10_000),
        ];
        let data: Vec<String> = [0usize, 1, 2, 3, 64, 1_000, 70_000]
            .iter()
            .map(|len| {
                let bytes: Vec<u8> = (0..*len).map(|i| (i % 256) as u8).collect();
                STANDARD.encode(bytes)
            })
            .collect();

        for hint in &hints {
            for encoded in &data {
                let envelope = Envelope::new(hint.clone(), encoded.clone());
                let text = encode(&envelope).unwrap();
                assert!(!text.contains('\u{0}'));
                assert!(!text.contains('\u{1b}'));
                assert_eq!(decode(&text).unwrap(), envelope);
            }
        }
    }

    #[test]
    fn test_encode_is_pretty_and_ordered() {
        let text = encode(&Envelope::new("fav", "YWJj")).unwrap();
        assert_eq!(
            text,
            "{\n  \"version\": \"1.0\",\n  \"hint\": \"fav\",\n  \"encodedData\": \"YWJj\"\n}"
        );
    }

    #[test]
    fn test_decode_accepts_reordered_keys() {
        let raw = r#"{"encodedData": "", "hint": "h", "version": "1.0"}"#;
        assert_eq!(decode(raw).unwrap(), Envelope::new("h", ""));
    }

    #[test]
    fn test_missing_field_is_format_error() {
        let result = decode(r#"{"version": "1.0", "hint": ""}"#);
        assert!(matches!(result, Err(SealnoteError::Format(_))));
    }

    #[test]
    fn test_unknown_field_is_format_error() {
        let raw = r#"{"version": "1.0", "hint": "", "encodedData": "", "password": "x"}"#;
        assert!(matches!(decode(raw), Err(SealnoteError::Format(_))));
    }

    #[test]
    fn test_unknown_version_is_format_error() {
        let raw = r#"{"version": "2.0", "hint": "", "encodedData": ""}"#;
        let err = decode(raw).unwrap_err();
        assert!(err.to_string().contains("Unsupported envelope version: 2.0"));
    }

    #[test]
    fn test_invalid_base64_is_format_error() {
        let raw = r#"{"version": "1.0", "hint": "", "encodedData": "%%%"}"#;
        assert!(matches!(decode(raw), Err(SealnoteError::Format(_))));
    }

    #[test]
    fn test_not_json_is_format_error() {
        assert!(matches!(decode("hello"), Err(SealnoteError::Format(_))));
        assert!(matches!(decode("   "), Err(SealnoteError::Format(_))));
    }

    #[test]
    fn test_format_hint() {
        assert_eq!(format_hint(""), "");
        assert_eq!(Envelope::new("fav", "").format_hint(), "Hint: fav");
    }

    #[test]
    fn test_supported_extension() {
        assert!(is_supported_extension("encrypted"));
        assert!(!is_supported_extension("md"));
    }
}
