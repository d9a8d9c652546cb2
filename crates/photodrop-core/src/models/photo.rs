use bytes::Bytes;

/// One photo selected in the host form.
///
/// The handle is owned by the hosting environment and read-only here: the
/// declared filename, content type, and data are taken as-is.
#[derive(Debug, Clone)]
pub struct PhotoFile {
    /// Filename as declared by the host environment.
    pub filename: String,
    /// Declared MIME type. Not validated and not forwarded to storage; the
    /// storage service detects the format itself.
    pub content_type: String,
    /// File content.
    pub data: Bytes,
}

impl PhotoFile {
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    /// Size of the file content in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }
}
