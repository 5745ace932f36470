// src/publish.rs
//! Public profile URLs and their scannable QR encoding.

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;

#[derive(Debug, Clone)]
pub struct QrOptions {
    /// Minimum edge length of the rendered image, in pixels.
    pub width: u32,
    /// Render the quiet-zone margin around the code.
    pub quiet_zone: bool,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            width: 300,
            quiet_zone: true,
        }
    }
}

/// Derives stable public profile URLs from a configured base.
#[derive(Debug, Clone)]
pub struct Publisher {
    base_url: String,
}

impl Publisher {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Deterministic public profile URL for a resume identifier.
    pub fn profile_url(&self, resume_id: &str) -> String {
        format!("{}/profile/{}", self.base_url, resume_id)
    }

    /// Recover the resume identifier from a profile URL (last path segment).
    pub fn resume_id_from_url(url: &str) -> Option<&str> {
        url.rsplit('/').next().filter(|segment| !segment.is_empty())
    }
}

/// Encode a URL as a PNG QR image. Pure function of its input.
pub fn qr_png(url: &str, options: &QrOptions) -> Result<Vec<u8>> {
    let code = QrCode::new(url.as_bytes())
        .map_err(|e| anyhow::anyhow!("QR encoding failed: {e}"))?;

    let image = code
        .render::<Luma<u8>>()
        .min_dimensions(options.width, options.width)
        .quiet_zone(options.quiet_zone)
        .build();

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(image)
        .write_to(&mut std::io::Cursor::new(&mut png), ImageFormat::Png)
        .context("Failed to encode QR image as PNG")?;

    Ok(png)
}

/// Base64 data URL for embedding the QR image directly in a JSON response.
pub fn qr_data_url(url: &str, options: &QrOptions) -> Result<String> {
    let png = qr_png(url, options)?;
    Ok(format!("data:image/png;base64,{}", BASE64.encode(png)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_url_round_trip() {
        let publisher = Publisher::new("http://localhost:5173");
        let resume_id = "0b9fa5f2-6c24-4c44-b747-6e5d9f2f7b1a";
        let url = publisher.profile_url(resume_id);
        assert_eq!(url, format!("http://localhost:5173/profile/{resume_id}"));
        assert_eq!(Publisher::resume_id_from_url(&url), Some(resume_id));
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let publisher = Publisher::new("https://example.com/");
        assert_eq!(publisher.profile_url("abc"), "https://example.com/profile/abc");
    }

    #[test]
    fn test_qr_png_is_valid_png() {
        let png = qr_png("http://localhost:5173/profile/abc", &QrOptions::default()).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }

    #[test]
    fn test_qr_data_url_prefix_and_determinism() {
        let options = QrOptions::default();
        let a = qr_data_url("http://localhost:5173/profile/abc", &options).unwrap();
        let b = qr_data_url("http://localhost:5173/profile/abc", &options).unwrap();
        assert!(a.starts_with("data:image/png;base64,"));
        assert_eq!(a, b);
    }
}
