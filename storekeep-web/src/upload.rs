//! Image upload: pre-flight validation and sequential bulk upload.
//!
//! Files are uploaded one at a time, never in parallel, so partial-failure
//! reporting can name the specific failing file and everything uploaded
//! before (and after) a failure stays recorded.

use async_trait::async_trait;
use shared::models::UploadResponse;

use crate::error::ApiError;

/// Upper bound on a single upload.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// A file queued for upload, fully read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// Original file name, used in failure reports and as alt text.
    pub name: String,
    /// Declared media type, e.g. `image/png`.
    pub content_type: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

/// Client-side pre-flight checks: size limit and image media type.
pub fn validate_upload(file: &UploadFile) -> Result<(), ApiError> {
    if file.bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ApiError::Validation(format!(
            "{} is too large (max 5 MB)",
            file.name
        )));
    }
    if !file.content_type.starts_with("image/") {
        return Err(ApiError::Validation(format!(
            "{} is not an image",
            file.name
        )));
    }
    Ok(())
}

/// Anything that can store a single file and hand back its URL.
#[async_trait(?Send)]
pub trait FileUploader {
    /// Upload one file.
    async fn upload_file(&self, file: &UploadFile) -> Result<UploadResponse, ApiError>;
}

/// A successfully stored image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    /// The original file name.
    pub file_name: String,
    /// Where the stored image is served from.
    pub url: String,
}

/// One file that could not be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFailure {
    /// The original file name.
    pub file_name: String,
    /// Why it failed.
    pub error: ApiError,
}

/// Result of a bulk upload: successes in original order, plus per-file
/// failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkUploadOutcome {
    /// Stored images, in the order their files were queued.
    pub uploaded: Vec<UploadedImage>,
    /// Files that were rejected or failed to upload.
    pub failures: Vec<UploadFailure>,
}

impl BulkUploadOutcome {
    /// Whether every queued file was stored.
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Upload a batch of files strictly in sequence.
///
/// A file that fails validation or upload is recorded against its name and
/// the remaining files are still attempted.
pub async fn upload_all(uploader: &impl FileUploader, files: &[UploadFile]) -> BulkUploadOutcome {
    let mut outcome = BulkUploadOutcome::default();
    for file in files {
        if let Err(error) = validate_upload(file) {
            outcome.failures.push(UploadFailure {
                file_name: file.name.clone(),
                error,
            });
            continue;
        }
        match uploader.upload_file(file).await {
            Ok(response) => outcome.uploaded.push(UploadedImage {
                file_name: file.name.clone(),
                url: response.url,
            }),
            Err(error) => outcome.failures.push(UploadFailure {
                file_name: file.name.clone(),
                error,
            }),
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn image(name: &str, size: usize) -> UploadFile {
        UploadFile {
            name: name.to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![0u8; size],
        }
    }

    #[derive(Default)]
    struct StubUploader {
        attempted: RefCell<Vec<String>>,
        fail_on: Option<String>,
    }

    #[async_trait(?Send)]
    impl FileUploader for StubUploader {
        async fn upload_file(&self, file: &UploadFile) -> Result<UploadResponse, ApiError> {
            self.attempted.borrow_mut().push(file.name.clone());
            if self.fail_on.as_deref() == Some(file.name.as_str()) {
                return Err(ApiError::Request {
                    status: 500,
                    message: "storage unavailable".to_string(),
                });
            }
            Ok(UploadResponse {
                url: format!("https://cdn.example.com/{}", file.name),
            })
        }
    }

    #[test]
    fn rejects_oversized_files() {
        let file = image("huge.png", MAX_UPLOAD_BYTES + 1);
        let error = validate_upload(&file).unwrap_err();
        assert!(matches!(error, ApiError::Validation(_)));
        assert!(error.to_string().contains("huge.png"));
    }

    #[test]
    fn accepts_files_at_the_limit() {
        assert!(validate_upload(&image("max.png", MAX_UPLOAD_BYTES)).is_ok());
    }

    #[test]
    fn rejects_non_image_media_types() {
        let file = UploadFile {
            name: "notes.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            bytes: vec![0u8; 10],
        };
        let error = validate_upload(&file).unwrap_err();
        assert!(error.to_string().contains("not an image"));
    }

    #[test]
    fn oversized_file_mid_batch_does_not_stop_later_uploads() {
        let files = vec![
            image("one.png", 10),
            image("two.png", 10),
            image("three.png", MAX_UPLOAD_BYTES + 1),
            image("four.png", 10),
            image("five.png", 10),
        ];
        let uploader = StubUploader::default();
        let outcome = block_on(upload_all(&uploader, &files));

        let uploaded: Vec<&str> = outcome
            .uploaded
            .iter()
            .map(|image| image.file_name.as_str())
            .collect();
        assert_eq!(uploaded, ["one.png", "two.png", "four.png", "five.png"]);

        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].file_name, "three.png");
        assert!(matches!(
            outcome.failures[0].error,
            ApiError::Validation(_)
        ));

        // The oversized file never reached the uploader.
        assert_eq!(
            *uploader.attempted.borrow(),
            ["one.png", "two.png", "four.png", "five.png"]
        );
    }

    #[test]
    fn server_failure_mid_batch_still_attempts_the_rest() {
        let files = vec![image("a.png", 1), image("b.png", 1), image("c.png", 1)];
        let uploader = StubUploader {
            fail_on: Some("b.png".to_string()),
            ..StubUploader::default()
        };
        let outcome = block_on(upload_all(&uploader, &files));

        assert_eq!(outcome.uploaded.len(), 2);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].file_name, "b.png");
        assert_eq!(outcome.failures[0].error.status(), Some(500));
        assert_eq!(*uploader.attempted.borrow(), ["a.png", "b.png", "c.png"]);
        assert!(!outcome.all_succeeded());
    }

    #[test]
    fn empty_batch_succeeds_vacuously() {
        let uploader = StubUploader::default();
        let outcome = block_on(upload_all(&uploader, &[]));
        assert!(outcome.all_succeeded());
        assert!(outcome.uploaded.is_empty());
    }
}
