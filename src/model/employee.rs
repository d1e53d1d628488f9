use base64::Engine;
use serde::{Deserialize, Serialize};

/// Inline file attachment: base64 payload plus the declared media type, the
/// shape the upload endpoints return for preview.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub content: String,
    pub mediaType: String,
    pub fileName: Option<String>,
}

impl Attachment {
    pub fn from_bytes(bytes: &[u8], media_type: &str, file_name: Option<String>) -> Self {
        Attachment {
            content: base64::engine::general_purpose::STANDARD.encode(bytes),
            mediaType: media_type.to_string(),
            fileName: file_name,
        }
    }

    /// Raw bytes of the inline payload.
    pub fn decoded(&self) -> Result<Vec<u8>, base64::DecodeError> {
        base64::engine::general_purpose::STANDARD.decode(&self.content)
    }
}

/// Staff record. Deletion is soft (`isActive`/`isDelete`); the hard delete
/// endpoint exists but the console only issues it per selected row.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: Option<u64>,
    pub firstName: String,
    pub lastName: String,
    pub email: String,
    pub mobile: String,
    pub secondaryMobile: Option<String>,
    pub doorNo: Option<String>,
    pub street: Option<String>,
    pub city: String,
    pub district: Option<String>,
    pub state: String,
    pub country: String,
    pub workLocation: Option<String>,
    pub salesType: Option<String>,
    pub availability: Option<String>,
    pub experience: Option<String>,
    pub skills: Option<Vec<String>>,
    pub portfolio: Option<String>,
    pub reason: Option<String>,
    pub profileImage: Option<Attachment>,
    pub idDocument: Option<Attachment>,
    pub createdAt: Option<String>,
    pub createdBy: Option<String>,
    pub updatedAt: Option<String>,
    pub updatedBy: Option<String>,
    #[serde(default = "default_true")]
    pub isActive: bool,
    #[serde(default)]
    pub isDelete: bool,
}

fn default_true() -> bool {
    true
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstName, self.lastName)
    }
}
