use std::path::Path;

use infer::Infer;
use tokio::fs;

use crate::errors::UploadError;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const DOC_MIME: &str = "application/msword";
pub const TEXT_MIME: &str = "text/plain";

/// A resume file that passed validation and is ready to be sent for parsing.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Reads an uploaded temp file and validates it as a resume.
///
/// - `original_filename`: the client-supplied name, if any
/// - `file_path`: where actix-multipart spooled the upload
/// - `max_size`: upper bound in bytes
pub async fn read_resume_file(
    original_filename: Option<&str>,
    file_path: &Path,
    max_size: usize,
) -> Result<ResumeUpload, UploadError> {
    let metadata = fs::metadata(file_path)
        .await
        .map_err(|e| UploadError::Multipart(e.to_string()))?;
    if metadata.len() > max_size as u64 {
        return Err(UploadError::TooLarge(max_size));
    }

    let bytes = fs::read(file_path)
        .await
        .map_err(|e| UploadError::Multipart(e.to_string()))?;

    validate_resume(original_filename.unwrap_or("resume"), bytes, max_size)
}

/// Checks size and content type of an in-memory upload. The type comes
/// from the file's magic bytes; the extension only disambiguates ZIP
/// containers and plain text.
pub fn validate_resume(
    file_name: &str,
    bytes: Vec<u8>,
    max_size: usize,
) -> Result<ResumeUpload, UploadError> {
    if bytes.is_empty() {
        return Err(UploadError::EmptyFile);
    }
    if bytes.len() > max_size {
        return Err(UploadError::TooLarge(max_size));
    }

    let content_type = detect_content_type(file_name, &bytes)?;

    Ok(ResumeUpload {
        file_name: file_name.to_string(),
        content_type,
        bytes,
    })
}

fn detect_content_type(file_name: &str, bytes: &[u8]) -> Result<&'static str, UploadError> {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match Infer::new().get(bytes).map(|kind| kind.mime_type()) {
        Some(PDF_MIME) => Ok(PDF_MIME),
        Some(DOCX_MIME) => Ok(DOCX_MIME),
        Some(DOC_MIME) => Ok(DOC_MIME),
        // Some DOCX files are only recognised as a generic archive
        Some("application/zip") if ext.as_deref() == Some("docx") => Ok(DOCX_MIME),
        Some(other) => Err(UploadError::UnsupportedType(other.to_string())),
        None if std::str::from_utf8(bytes).is_ok() => Ok(TEXT_MIME),
        None => Err(UploadError::UnsupportedType(
            ext.unwrap_or_else(|| "unknown".to_string()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PDF_BYTES: &[u8] = b"%PDF-1.7\n1 0 obj\n<<>>\nendobj\n";

    #[test]
    fn pdf_is_detected_from_magic_bytes() {
        let upload = validate_resume("cv.pdf", PDF_BYTES.to_vec(), 1024).unwrap();
        assert_eq!(upload.content_type, PDF_MIME);
        assert_eq!(upload.file_name, "cv.pdf");
    }

    #[test]
    fn plain_text_is_accepted() {
        let upload = validate_resume("cv.txt", b"Jane Doe\nRust developer".to_vec(), 1024).unwrap();
        assert_eq!(upload.content_type, TEXT_MIME);
    }

    #[test]
    fn empty_and_oversized_files_are_rejected() {
        assert!(matches!(validate_resume("cv.pdf", Vec::new(), 1024), Err(UploadError::EmptyFile)));
        assert!(matches!(
            validate_resume("cv.pdf", PDF_BYTES.to_vec(), 4),
            Err(UploadError::TooLarge(4))
        ));
    }

    #[test]
    fn images_are_rejected() {
        let png = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
        assert!(matches!(
            validate_resume("cv.png", png, 1024),
            Err(UploadError::UnsupportedType(_))
        ));
    }
}
