use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

/// Decoded inline logo payload from a `data:image/...;base64,` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Error enumeration for logo persistence failures. The create path treats
/// these as soft: it falls back to keeping the inline payload.
#[derive(Debug, thiserror::Error)]
pub enum LogoError {
    #[error("logo storage failed: {0}")]
    Backend(String),
    #[error("logo storage is not configured")]
    Disabled,
}

/// Durable storage for logo images; returns a stable URL for the record.
pub trait LogoStore: Send + Sync {
    fn store(&self, file_name: &str, image: &InlineImage) -> Result<String, LogoError>;
}

/// Deployments without Drive credentials use this store; every create then
/// keeps the inline payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledLogoStore;

impl LogoStore for DisabledLogoStore {
    fn store(&self, _file_name: &str, _image: &InlineImage) -> Result<String, LogoError> {
        Err(LogoError::Disabled)
    }
}

/// Parse an inline `data:image/...;base64,` URL. Anything else (already a
/// URL, malformed payload, non-image mime) returns `None` and the value is
/// passed through untouched.
pub fn parse_data_url(raw: &str) -> Option<InlineImage> {
    let rest = raw.strip_prefix("data:")?;
    let (mime_type, payload) = rest.split_once(";base64,")?;
    if !mime_type.starts_with("image/") {
        return None;
    }

    let bytes = BASE64.decode(payload.trim()).ok()?;
    Some(InlineImage {
        mime_type: mime_type.to_string(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_inline_png_payloads() {
        let encoded = BASE64.encode([0x89, b'P', b'N', b'G']);
        let image = parse_data_url(&format!("data:image/png;base64,{encoded}"))
            .expect("valid data url");
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.bytes, vec![0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn rejects_non_image_and_non_data_values() {
        assert!(parse_data_url("https://example.com/logo.png").is_none());
        assert!(parse_data_url("data:text/plain;base64,aGk=").is_none());
        assert!(parse_data_url("data:image/png;base64,not-base64!!").is_none());
    }

    #[test]
    fn disabled_store_always_fails_soft() {
        let image = InlineImage {
            mime_type: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        };
        assert!(matches!(
            DisabledLogoStore.store("logo.png", &image),
            Err(LogoError::Disabled)
        ));
    }
}
