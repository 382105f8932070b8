//! Local image payload helpers: base64 and data-URI handling.

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;

/// Base64-encode raw bytes (standard alphabet, padded).
pub fn encode_bytes_to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Read a local file into memory and return its contents as bare base64.
pub async fn encode_file_to_base64(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(encode_bytes_to_base64(&bytes))
}

/// Prefix bare base64 with a `data:<mime>;base64,` header.
pub fn to_data_uri(mime: &str, base64: &str) -> String {
    format!("data:{};base64,{}", mime, base64)
}

/// Strip a `data:...;base64,` header if present; bare base64 passes through unchanged.
pub fn strip_data_uri_prefix(input: &str) -> &str {
    match input.strip_prefix("data:") {
        Some(rest) => rest.split_once(',').map(|(_, data)| data).unwrap_or(""),
        None => input,
    }
}

/// MIME type declared by a data URI, if any. Uploads check it before decoding.
pub fn data_uri_mime(input: &str) -> Option<&str> {
    let header = input.strip_prefix("data:")?.split_once(',')?.0;
    let mime = header.split(';').next().unwrap_or("");
    (!mime.is_empty()).then_some(mime)
}

/// Decode bare base64 or a data URI back to bytes.
pub fn decode_base64(input: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(strip_data_uri_prefix(input).trim())
        .context("Invalid base64 payload")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Write;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_known_bytes() {
        assert_eq!(encode_bytes_to_base64(b"hello"), "aGVsbG8=");
        assert_eq!(encode_bytes_to_base64(&[]), "");
    }

    #[tokio::test]
    async fn test_encode_file_round_trip_through_data_uri() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(PNG_HEADER).expect("Failed to write");

        let encoded = encode_file_to_base64(file.path()).await.expect("Should encode");
        assert!(!encoded.starts_with("data:"));

        let uri = to_data_uri("image/png", &encoded);
        assert_eq!(decode_base64(&uri).expect("Should decode"), PNG_HEADER);
    }

    #[tokio::test]
    async fn test_encode_missing_file_is_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let result = encode_file_to_base64(dir.path().join("missing.png")).await;
        assert!(result.unwrap_err().to_string().contains("Failed to read"));
    }

    #[test]
    fn test_strip_data_uri_prefix() {
        assert_eq!(strip_data_uri_prefix("data:image/jpeg;base64,QUJD"), "QUJD");
        assert_eq!(strip_data_uri_prefix("QUJD"), "QUJD");
        assert_eq!(strip_data_uri_prefix("data:image/png;base64"), "");
    }

    #[test]
    fn test_data_uri_mime() {
        assert_eq!(data_uri_mime("data:image/webp;base64,AAAA"), Some("image/webp"));
        assert_eq!(data_uri_mime("AAAA"), None);
        assert_eq!(data_uri_mime("data:;base64,AAAA"), None);
    }

    #[test]
    fn test_decode_invalid_base64() {
        assert!(decode_base64("not base64!!").is_err());
    }

    proptest! {
        #[test]
        fn prop_data_uri_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            let uri = to_data_uri("image/png", &encode_bytes_to_base64(&bytes));
            prop_assert_eq!(decode_base64(&uri).unwrap(), bytes);
        }
    }
}
