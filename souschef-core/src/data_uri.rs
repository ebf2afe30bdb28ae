//! Base64 data URI handling for inline image payloads.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataUriError {
    #[error("Not a data URI")]
    NotDataUri,
    #[error("Data URI is not base64-encoded")]
    NotBase64,
}

/// Returns true if the string looks like an image data URI.
pub fn is_image_data_uri(uri: &str) -> bool {
    uri.starts_with("data:image")
}

/// A parsed `data:<mime>;base64,<payload>` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    pub mime_type: String,
    pub data: String,
}

impl DataUri {
    /// Parse a data URI into its MIME type and base64 payload.
    pub fn parse(uri: &str) -> Result<Self, DataUriError> {
        let rest = uri.strip_prefix("data:").ok_or(DataUriError::NotDataUri)?;
        let (mime_type, data) = rest.split_once(";base64,").ok_or(DataUriError::NotBase64)?;

        Ok(Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })
    }

    /// Encode raw bytes as a data URI payload.
    pub fn encode(mime_type: &str, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.to_string(),
            data: STANDARD.encode(bytes),
        }
    }

    /// Render back into `data:<mime>;base64,<payload>` form.
    pub fn to_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_data_uri() {
        assert!(is_image_data_uri("data:image/png;base64,abc"));
        assert!(is_image_data_uri("data:image/jpeg;base64,abc"));
        assert!(!is_image_data_uri("data:text/plain;base64,abc"));
        assert!(!is_image_data_uri("https://example.com/photo.png"));
    }

    #[test]
    fn test_parse() {
        let uri = DataUri::parse("data:image/jpeg;base64,/9j/4AAQ").unwrap();

        assert_eq!(uri.mime_type, "image/jpeg");
        assert_eq!(uri.data, "/9j/4AAQ");
    }

    #[test]
    fn test_parse_rejects_non_data_uri() {
        let result = DataUri::parse("https://example.com/photo.png");

        assert!(matches!(result, Err(DataUriError::NotDataUri)));
    }

    #[test]
    fn test_parse_rejects_non_base64_uri() {
        let result = DataUri::parse("data:image/png,rawbytes");

        assert!(matches!(result, Err(DataUriError::NotBase64)));
    }

    #[test]
    fn test_encode_round_trips_through_to_uri() {
        let uri = DataUri::encode("image/png", b"hello");

        assert_eq!(uri.to_uri(), "data:image/png;base64,aGVsbG8=");
        assert_eq!(DataUri::parse(&uri.to_uri()).unwrap(), uri);
    }
}
