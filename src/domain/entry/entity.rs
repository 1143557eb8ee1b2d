use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// One logged planet
/// Name and description are stored already trimmed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Planet name, unique (case-insensitive) within the log
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Image as a `data:` URL, or null when the planet has no picture
    pub image: Option<String>,
}

impl Entry {
    /// Build an entry from raw draft input
    /// The image upload (if any) is encoded so it survives a reload
    pub fn from_draft(name: &str, description: &str, image: Option<&ImageUpload>) -> Self {
        Self {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            image: image.map(ImageUpload::to_data_url),
        }
    }

    /// Case-insensitive, whitespace-insensitive name comparison
    pub fn has_name(&self, candidate: &str) -> bool {
        self.name.trim().to_lowercase() == candidate.trim().to_lowercase()
    }
}

/// A file picked in the image input, before validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUpload {
    /// Uploaded file name, informational only
    pub file_name: String,

    /// MIME type reported by the file picker
    pub mime_type: String,

    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Size in bytes
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
