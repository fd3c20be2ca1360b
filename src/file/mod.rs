// src/file/mod.rs
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;

pub mod export;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_TXT: &str = "text/plain";

const MIME_UNKNOWN: &str = "application/octet-stream";

/// What the flow knows about a selected resume file. Only the description
/// travels through the app; the content stays on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }
}

/// MIME type inferred from the file name extension. Desktop file pickers
/// hand us bare paths, so the extension is the only signal available.
pub fn mime_for_name(name: &str) -> &'static str {
    let extension = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");
    match extension.to_ascii_lowercase().as_str() {
        "pdf" => MIME_PDF,
        "docx" => MIME_DOCX,
        "txt" => MIME_TXT,
        _ => MIME_UNKNOWN,
    }
}

/// Builds an [`UploadedFile`] description from a path on disk.
pub fn inspect(path: &Path) -> Result<UploadedFile> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("Failed to read file metadata for {}", path.display()))?;
    if !metadata.is_file() {
        return Err(anyhow!("Not a regular file: {}", path.display()));
    }
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow!("Invalid file path: {}", path.display()))?;
    let mime_type = mime_for_name(&name).to_string();

    Ok(UploadedFile {
        name,
        size_bytes: metadata.len(),
        mime_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_known_extensions() {
        assert_eq!(mime_for_name("resume.pdf"), MIME_PDF);
        assert_eq!(mime_for_name("resume.docx"), MIME_DOCX);
        assert_eq!(mime_for_name("resume.txt"), MIME_TXT);
    }

    #[test]
    fn test_mime_is_case_insensitive() {
        assert_eq!(mime_for_name("RESUME.PDF"), MIME_PDF);
        assert_eq!(mime_for_name("Resume.Docx"), MIME_DOCX);
    }

    #[test]
    fn test_unknown_extension_maps_to_octet_stream() {
        assert_eq!(mime_for_name("resume.zip"), MIME_UNKNOWN);
        assert_eq!(mime_for_name("resume"), MIME_UNKNOWN);
    }

    #[test]
    fn test_inspect_describes_file_on_disk() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, b"plain text resume").expect("write test file");

        let file = inspect(&path).expect("inspect file");
        assert_eq!(file.name, "resume.txt");
        assert_eq!(file.size_bytes, 17);
        assert_eq!(file.mime_type, MIME_TXT);
    }

    #[test]
    fn test_inspect_rejects_directory() {
        let dir = tempfile::tempdir().expect("create temp dir");
        assert!(inspect(dir.path()).is_err());
    }

    #[test]
    fn test_inspect_missing_file_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        assert!(inspect(&dir.path().join("missing.pdf")).is_err());
    }
}
