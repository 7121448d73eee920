//! 评分文件的类型识别
//!
//! 按扩展名确定上传给评分服务的 MIME 类型，并用魔术字节确认文件内容与扩展名相符。

use std::path::Path;

/// 评分服务接受的文件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Jpeg,
    Png,
    Webp,
    Heic,
    Heif,
    Pdf,
}

impl MediaType {
    /// 从文件路径的扩展名识别，不区分大小写
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(MediaType::Jpeg),
            "png" => Some(MediaType::Png),
            "webp" => Some(MediaType::Webp),
            "heic" => Some(MediaType::Heic),
            "heif" => Some(MediaType::Heif),
            "pdf" => Some(MediaType::Pdf),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            MediaType::Jpeg => "image/jpeg",
            MediaType::Png => "image/png",
            MediaType::Webp => "image/webp",
            MediaType::Heic => "image/heic",
            MediaType::Heif => "image/heif",
            MediaType::Pdf => "application/pdf",
        }
    }

    pub fn is_image(&self) -> bool {
        !matches!(self, MediaType::Pdf)
    }

    /// 检查文件头是否与类型匹配
    pub fn matches_magic(&self, data: &[u8]) -> bool {
        if data.is_empty() {
            return false;
        }

        match self {
            MediaType::Png => data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]),
            MediaType::Jpeg => data.starts_with(&[0xFF, 0xD8, 0xFF]),
            MediaType::Webp => data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP",
            // ISO BMFF 容器：偏移 4 处为 "ftyp"，随后是品牌标识
            MediaType::Heic | MediaType::Heif => {
                data.len() >= 12
                    && &data[4..8] == b"ftyp"
                    && matches!(
                        &data[8..12],
                        b"heic" | b"heix" | b"hevc" | b"hevx" | b"mif1" | b"msf1"
                    )
            }
            MediaType::Pdf => data.starts_with(b"%PDF"),
        }
    }
}

/// 扩展名（带点号）用于错误提示
pub fn display_extension(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default()
}
