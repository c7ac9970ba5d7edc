//! アップロード画像の検証と表示用参照の生成

use crate::error::{Result, ScanError};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;

/// 受け付ける画像形式のMIMEタイプ
///
/// デコーダを持つ形式のみ。ICOはブラウザによって表記が2通りある。
pub const ACCEPTED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/bmp",
    "image/x-icon",
    "image/vnd.microsoft.icon",
];

/// ファイル選択の `accept` 属性値
pub fn accept_attribute() -> String {
    ACCEPTED_MIME_TYPES.join(",")
}

/// 受け付けるMIMEタイプか。大文字小文字とパラメータは無視する
pub fn accepts_mime(mime_type: &str) -> bool {
    let essence = mime_type.split(';').next().unwrap_or_default().trim();
    ACCEPTED_MIME_TYPES
        .iter()
        .any(|m| m.eq_ignore_ascii_case(essence))
}

/// 検証済みのスキャン画像
///
/// `data_url` はそのまま `<img src>` に使える。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanImage {
    pub file_name: String,
    pub mime_type: String,
    pub width: u32,
    pub height: u32,
    pub byte_len: usize,
    #[serde(skip)]
    pub data_url: String,
}

impl ScanImage {
    /// バイト列をデコードして検証する
    ///
    /// 形式は拡張子ではなく中身から判定する。
    pub fn decode(file_name: &str, bytes: &[u8]) -> Result<ScanImage> {
        if bytes.is_empty() {
            return Err(ScanError::InvalidInput(format!("{file_name} is empty")));
        }

        let format = image::guess_format(bytes).map_err(|_| {
            ScanError::InvalidInput(format!("{file_name} is not a supported image format"))
        })?;

        let decoded = image::load_from_memory_with_format(bytes, format)
            .map_err(|e| ScanError::InvalidInput(format!("{file_name}: {e}")))?;

        let mime_type = format.to_mime_type().to_string();
        let data_url = format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes));

        Ok(ScanImage {
            file_name: file_name.to_string(),
            mime_type,
            width: decoded.width(),
            height: decoded.height(),
            byte_len: bytes.len(),
            data_url,
        })
    }
}

#[cfg(test)]
pub(crate) fn encoded_bytes(width: u32, height: u32, format: image::ImageFormat) -> Vec<u8> {
    let img = image::DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
        width,
        height,
        image::Rgba([34, 139, 34, 255]),
    ));
    let mut buf = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buf, format).expect("エンコード失敗");
    buf.into_inner()
}

#[cfg(test)]
pub(crate) fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    encoded_bytes(width, height, image::ImageFormat::Png)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_png() {
        let bytes = png_bytes(4, 3);
        let image = ScanImage::decode("leaf.png", &bytes).expect("デコード失敗");

        assert_eq!(image.file_name, "leaf.png");
        assert_eq!(image.mime_type, "image/png");
        assert_eq!((image.width, image.height), (4, 3));
        assert_eq!(image.byte_len, bytes.len());
        assert!(image.data_url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_format_sniffed_from_content() {
        // 拡張子が嘘でも中身で判定
        let bytes = png_bytes(2, 2);
        let image = ScanImage::decode("leaf.jpg", &bytes).expect("デコード失敗");
        assert_eq!(image.mime_type, "image/png");
    }

    #[test]
    fn test_decode_empty() {
        let err = ScanImage::decode("empty.jpg", &[]).unwrap_err();
        assert!(matches!(err, ScanError::InvalidInput(_)));
    }

    #[test]
    fn test_decode_text_file() {
        let err = ScanImage::decode("notes.jpg", b"hello, not an image").unwrap_err();
        assert!(matches!(err, ScanError::InvalidInput(_)));
    }

    #[test]
    fn test_accepted_formats_decode() {
        use image::ImageFormat;

        let formats = [
            (ImageFormat::Jpeg, "image/jpeg"),
            (ImageFormat::Png, "image/png"),
            (ImageFormat::Gif, "image/gif"),
            (ImageFormat::WebP, "image/webp"),
            (ImageFormat::Bmp, "image/bmp"),
            (ImageFormat::Ico, "image/x-icon"),
        ];
        for (format, mime) in formats {
            let bytes = encoded_bytes(4, 4, format);
            let image = ScanImage::decode("leaf", &bytes)
                .unwrap_or_else(|e| panic!("{:?} が受け付けられない: {}", format, e));
            assert_eq!(image.mime_type, mime);
            assert_eq!((image.width, image.height), (4, 4));
            assert!(accepts_mime(mime));
        }
    }

    #[test]
    fn test_svg_is_not_accepted() {
        let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4">
<rect width="4" height="4" fill="green"/></svg>"#;
        let err = ScanImage::decode("leaf.svg", svg).unwrap_err();
        assert!(matches!(err, ScanError::InvalidInput(_)));
        assert!(!accepts_mime("image/svg+xml"));
        assert!(!accepts_mime("image/avif"));
    }

    #[test]
    fn test_accepts_mime_variants() {
        assert!(accepts_mime("IMAGE/PNG"));
        assert!(accepts_mime("image/vnd.microsoft.icon"));
        assert!(accepts_mime("image/jpeg; charset=binary"));
        assert!(!accepts_mime(""));
        assert!(!accepts_mime("text/plain"));
    }

    #[test]
    fn test_accept_attribute_lists_every_type() {
        let accept = accept_attribute();
        for mime in ACCEPTED_MIME_TYPES {
            assert!(accept.split(',').any(|m| m == *mime));
        }
        assert!(!accept.contains("image/*"));
    }

    #[test]
    fn test_decode_truncated_png() {
        let bytes = png_bytes(8, 8);
        let err = ScanImage::decode("broken.png", &bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, ScanError::InvalidInput(_)));
    }
}
