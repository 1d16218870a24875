use base64::{engine::general_purpose::STANDARD, Engine as _};

/// MIME type assumed for every cover image; content is not sniffed.
pub const JPEG_MIME_TYPE: &str = "image/jpeg";

/// Cover image bytes plus an assumed MIME type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImage {
    /// Raw image bytes
    pub data: Vec<u8>,
    /// MIME type (always "image/jpeg" for downloaded and local images)
    pub mime_type: String,
}

impl CoverImage {
    /// Create a cover image with an explicit MIME type
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }

    /// Create a cover image assumed to be JPEG
    pub fn jpeg(data: Vec<u8>) -> Self {
        Self::new(data, JPEG_MIME_TYPE)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the data as a base64-encoded string
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.data)
    }

    /// Get the image as a `data:` URL for rendering
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.to_base64())
    }
}
