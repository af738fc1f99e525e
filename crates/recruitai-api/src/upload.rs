// Client-side checks before a resume leaves the machine
use std::path::Path;

use crate::client::ApiError;

/// Extensions the parsing service knows how to read
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["pdf", "docx", "txt"];

pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    Docx,
    Text,
}

impl ResumeFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "pdf" => Some(ResumeFormat::Pdf),
            "docx" => Some(ResumeFormat::Docx),
            "txt" => Some(ResumeFormat::Text),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ResumeFormat::Pdf => "application/pdf",
            ResumeFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ResumeFormat::Text => "text/plain",
        }
    }
}

/// A resume that passed the local checks, ready to be sent as multipart
#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub file_name: String,
    pub format: ResumeFormat,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub async fn read(path: &Path, max_bytes: u64) -> Result<Self, ApiError> {
        let format = ResumeFormat::from_path(path)
            .ok_or_else(|| ApiError::UnsupportedFile(path.display().to_string()))?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| ApiError::UnsupportedFile(path.display().to_string()))?
            .to_string();

        let size = tokio::fs::metadata(path).await?.len();
        if size > max_bytes {
            return Err(ApiError::FileTooLarge {
                size,
                limit: max_bytes,
            });
        }

        let bytes = tokio::fs::read(path).await?;

        Ok(Self {
            file_name,
            format,
            bytes,
        })
    }
}
