use std::path::{Path, PathBuf};
use std::{fs, io};

/// Metadata of a file the user offered for "processing". The bytes are
/// never read: validation looks at size and declared type only, and
/// nothing is ever uploaded anywhere.
#[derive(Debug, Clone)]
pub struct UploadCandidate {
    pub size: u64,
    pub mime_type: String,
}

impl UploadCandidate {
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let metadata = fs::metadata(path)?;
        Ok(Self {
            size: metadata.len(),
            mime_type: mime_for_path(path).to_string(),
        })
    }

    /// Builds a candidate from a drag-and-drop event. Native drops carry a
    /// path; web drops carry the bytes inline.
    pub fn from_dropped(file: &egui::DroppedFile) -> io::Result<Self> {
        if let Some(bytes) = &file.bytes {
            return Ok(Self {
                size: bytes.len() as u64,
                mime_type: mime_for_path(&PathBuf::from(&file.name)).to_string(),
            });
        }
        match &file.path {
            Some(path) => Self::from_path(path),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                "dropped file carries neither path nor bytes",
            )),
        }
    }
}

/// MIME type declared by the file's extension. Unknown extensions map to
/// the generic octet-stream type, which the allow-set rejects.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Why a candidate was turned away. The `Display` text is shown to the
/// user as-is; rejections never crash the app or advance the flow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error("file too big! keep it under 10MB 💅")]
    TooLarge,
    #[error("we only accept PNG, JPG, GIF, or WEBP! 💅")]
    UnsupportedType,
    #[error("couldn't read that file! try another one 💅")]
    Unreadable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_guess_covers_allowed_extensions() {
        assert_eq!(mime_for_path(Path::new("selfie.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("selfie.jpeg")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("selfie.png")), "image/png");
        assert_eq!(mime_for_path(Path::new("selfie.gif")), "image/gif");
        assert_eq!(mime_for_path(Path::new("selfie.webp")), "image/webp");
    }

    #[test]
    fn mime_guess_defaults_to_octet_stream() {
        assert_eq!(
            mime_for_path(Path::new("resume.pdf")),
            "application/octet-stream"
        );
        assert_eq!(
            mime_for_path(Path::new("no_extension")),
            "application/octet-stream"
        );
    }

    #[test]
    fn candidate_from_dropped_bytes_uses_inline_length_and_name() {
        let file = egui::DroppedFile {
            name: "selfie.webp".to_string(),
            bytes: Some(vec![0u8; 2048].into()),
            ..Default::default()
        };

        let candidate = UploadCandidate::from_dropped(&file).expect("candidate");
        assert_eq!(candidate.size, 2048);
        assert_eq!(candidate.mime_type, "image/webp");
    }

    #[test]
    fn candidate_from_dropped_path_reads_metadata() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("selfie.gif");
        std::fs::write(&path, vec![0u8; 321]).expect("write");

        let file = egui::DroppedFile {
            name: "selfie.gif".to_string(),
            path: Some(path),
            ..Default::default()
        };

        let candidate = UploadCandidate::from_dropped(&file).expect("candidate");
        assert_eq!(candidate.size, 321);
        assert_eq!(candidate.mime_type, "image/gif");
    }

    #[test]
    fn empty_drop_is_rejected_with_an_error() {
        let file = egui::DroppedFile::default();
        assert!(UploadCandidate::from_dropped(&file).is_err());
    }

    #[test]
    fn candidate_from_path_reads_metadata_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("selfie.png");
        std::fs::write(&path, vec![0u8; 1234]).expect("write");

        let candidate = UploadCandidate::from_path(&path).expect("candidate");
        assert_eq!(candidate.size, 1234);
        assert_eq!(candidate.mime_type, "image/png");
    }
}
