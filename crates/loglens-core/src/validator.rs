//! Upload validation gate
//!
//! Pure pre-check run by the caller before any ingestion starts. No I/O.

/// Validates a candidate upload's filename and byte size
pub struct FileValidator;

impl FileValidator {
    /// Extensions accepted for upload, lowercase, without the leading dot
    pub const ALLOWED_EXTENSIONS: &'static [&'static str] = &["log"];

    /// Maximum accepted file size (100 MiB)
    pub const MAX_SIZE_BYTES: u64 = 100 * 1024 * 1024;

    fn extension(filename: &str) -> Option<String> {
        std::path::Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
    }

    /// Check a candidate upload.
    ///
    /// Returns `(true, None)` when accepted, `(false, Some(reason))` when
    /// rejected. The extension check runs before the size check, so a file
    /// failing both reports the format reason.
    pub fn validate(filename: &str, size_bytes: u64) -> (bool, Option<String>) {
        let allowed = Self::extension(filename)
            .map(|ext| Self::ALLOWED_EXTENSIONS.contains(&ext.as_str()))
            .unwrap_or(false);

        if !allowed {
            return (false, Some("Upload only valid file format (.log)".to_string()));
        }

        if size_bytes > Self::MAX_SIZE_BYTES {
            return (
                false,
                Some(format!(
                    "File too large. Maximum allowed size is {} bytes",
                    Self::MAX_SIZE_BYTES
                )),
            );
        }

        (true, None)
    }
}
