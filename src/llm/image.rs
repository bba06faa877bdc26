// ABOUTME: Base64 inline image payload exchanged with image-capable models
// ABOUTME: Parses and renders data URLs and validates image MIME types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use formfit_core::errors::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};

/// Image carried inline as base64, as the Gemini API expects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineImage {
    /// MIME type, always `image/*`
    pub mime_type: String,
    /// Base64 payload without the data URL prefix
    pub data: String,
}

impl InlineImage {
    /// Build from a MIME type and an already encoded payload
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the MIME type is not an image type or the
    /// payload is not valid base64
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> AppResult<Self> {
        let mime_type = mime_type.into();
        let data = data.into();
        validate_mime(&mime_type)?;
        STANDARD.decode(data.as_bytes()).map_err(|e| {
            AppError::invalid_input(format!("Image payload is not valid base64: {e}"))
                .with_source(e)
        })?;
        Ok(Self { mime_type, data })
    }

    /// Encode raw image bytes
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the MIME type is not an image type
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> AppResult<Self> {
        let mime_type = mime_type.into();
        validate_mime(&mime_type)?;
        Ok(Self {
            mime_type,
            data: STANDARD.encode(bytes),
        })
    }

    /// Parse a `data:image/png;base64,...` URL
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for a malformed URL and `InvalidInput` for a
    /// non-image MIME type or a bad payload
    pub fn from_data_url(url: &str) -> AppResult<Self> {
        let malformed = || {
            AppError::new(
                ErrorCode::InvalidFormat,
                "Expected a data URL of the form data:<mime>;base64,<payload>",
            )
        };
        let rest = url.trim().strip_prefix("data:").ok_or_else(malformed)?;
        let (header, payload) = rest.split_once(',').ok_or_else(malformed)?;
        let mime_type = header.strip_suffix(";base64").ok_or_else(malformed)?;
        Self::new(mime_type, payload)
    }

    /// Render as a data URL
    #[must_use]
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Decode the payload to raw bytes
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the payload is not valid base64
    pub fn to_bytes(&self) -> AppResult<Vec<u8>> {
        STANDARD.decode(self.data.as_bytes()).map_err(|e| {
            AppError::invalid_input(format!("Image payload is not valid base64: {e}"))
                .with_source(e)
        })
    }

    /// Guess the MIME type from a file extension
    #[must_use]
    pub fn mime_for_path(path: &Path) -> Option<&'static str> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "png" => Some("image/png"),
            "jpg" | "jpeg" => Some("image/jpeg"),
            "webp" => Some("image/webp"),
            "gif" => Some("image/gif"),
            "heic" => Some("image/heic"),
            _ => None,
        }
    }

    /// Usual file extension for the MIME type
    #[must_use]
    pub fn file_extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/jpeg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            "image/heic" => "heic",
            _ => "png",
        }
    }
}

fn validate_mime(mime_type: &str) -> AppResult<()> {
    match mime_type.strip_prefix("image/") {
        Some(subtype) if !subtype.is_empty() => Ok(()),
        _ => Err(AppError::invalid_input(format!(
            "Unsupported MIME type '{mime_type}', expected an image type"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_parse_and_render() {
        let image = InlineImage::from_data_url("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "iVBORw0KGgo=");
        assert_eq!(image.to_data_url(), "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn test_rejects_non_image_mime() {
        let err = InlineImage::from_data_url("data:text/plain;base64,aGVsbG8=").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);

        let err = InlineImage::from_bytes("application/pdf", b"%PDF").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_rejects_malformed_urls() {
        for url in ["image/png;base64,AAAA", "data:image/png,AAAA", "data:image/png;base64"] {
            let err = InlineImage::from_data_url(url).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidFormat, "{url}");
        }
        let err = InlineImage::from_data_url("data:image/png;base64,@@@").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_bytes_survive_encoding() {
        let image = InlineImage::from_bytes("image/jpeg", &[0xFF, 0xD8, 0xFF]).unwrap();
        assert_eq!(image.to_bytes().unwrap(), vec![0xFF, 0xD8, 0xFF]);
        assert_eq!(image.file_extension(), "jpg");
    }

    #[test]
    fn test_mime_guess() {
        assert_eq!(InlineImage::mime_for_path(Path::new("me.JPG")), Some("image/jpeg"));
        assert_eq!(InlineImage::mime_for_path(Path::new("notes.txt")), None);
    }
}
