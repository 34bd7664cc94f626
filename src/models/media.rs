//! File attachments for multipart submissions

use std::path::Path;

use crate::utils::errors::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAttachment {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl MediaAttachment {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Read an attachment from disk, guessing the MIME type from the extension
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let mime_type = guess_mime_type(path).to_string();
        Ok(Self { mime_type, bytes })
    }

    /// Subtype of the MIME type, used as file extension (`image/png` -> `png`)
    pub fn extension(&self) -> &str {
        self.mime_type
            .split_once('/')
            .map(|(_, sub)| sub)
            .filter(|sub| !sub.is_empty())
            .unwrap_or("bin")
    }
}

fn guess_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_from_mime() {
        assert_eq!(MediaAttachment::new("image/png", vec![]).extension(), "png");
        assert_eq!(MediaAttachment::new("video/mp4", vec![]).extension(), "mp4");
        assert_eq!(MediaAttachment::new("garbage", vec![]).extension(), "bin");
    }

    #[test]
    fn test_guess_mime_type() {
        assert_eq!(guess_mime_type(Path::new("a/b/photo.JPG")), "image/jpeg");
        assert_eq!(guess_mime_type(Path::new("clip.mov")), "video/quicktime");
        assert_eq!(guess_mime_type(Path::new("noext")), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_from_path_reads_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("cover.png");
        tokio::fs::write(&file, b"\x89PNG").await.unwrap();

        let media = MediaAttachment::from_path(&file).await.unwrap();
        assert_eq!(media.mime_type, "image/png");
        assert_eq!(media.bytes, b"\x89PNG".to_vec());
    }
}
