use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use utoipa::ToSchema;

//
// ──────────────────────────────────────────────────────────
// Field identifiers
// ──────────────────────────────────────────────────────────
//

/// Every input of the profile form, named the way the stored JSON names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    Name,
    Surname,
    JobTitle,
    Phone,
    Email,
    Address,
    Pitch,
    Visibility,
    Avatar,
}

impl ProfileField {
    pub const ALL: [ProfileField; 9] = [
        ProfileField::Name,
        ProfileField::Surname,
        ProfileField::JobTitle,
        ProfileField::Phone,
        ProfileField::Email,
        ProfileField::Address,
        ProfileField::Pitch,
        ProfileField::Visibility,
        ProfileField::Avatar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Surname => "surname",
            ProfileField::JobTitle => "jobTitle",
            ProfileField::Phone => "phone",
            ProfileField::Email => "email",
            ProfileField::Address => "address",
            ProfileField::Pitch => "pitch",
            ProfileField::Visibility => "visibility",
            ProfileField::Avatar => "avatar",
        }
    }

    /// Human label used in validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Name",
            ProfileField::Surname => "Surname",
            ProfileField::JobTitle => "Job Title",
            ProfileField::Phone => "Phone",
            ProfileField::Email => "Email",
            ProfileField::Address => "Address",
            ProfileField::Pitch => "Pitch",
            ProfileField::Visibility => "Visibility",
            ProfileField::Avatar => "Avatar",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown profile field: {0}")]
pub struct UnknownFieldError(pub String);

impl FromStr for ProfileField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Visibility
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Visibility {
    #[default]
    Private,
    Public,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Private => "Private",
            Visibility::Public => "Public",
        }
    }
}

impl FromStr for Visibility {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Private" => Ok(Visibility::Private),
            "Public" => Ok(Visibility::Public),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ──────────────────────────────────────────────────────────
// Avatar
// ──────────────────────────────────────────────────────────
//

/// A file picked by the user, kept raw until validation runs.
#[derive(Clone, PartialEq, Eq)]
pub struct AvatarFile {
    file_name: String,
    media_type: String,
    bytes: Arc<[u8]>,
}

impl AvatarFile {
    pub fn new(file_name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Media type as declared by the sender, not sniffed from content.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }
}

impl fmt::Debug for AvatarFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvatarFile")
            .field("file_name", &self.file_name)
            .field("media_type", &self.media_type)
            .field("size_bytes", &self.size_bytes())
            .finish()
    }
}

/// Renderable stand-in for the avatar (a `data:` URI). This is what gets persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct AvatarPreview(String);

impl AvatarPreview {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

//
// ──────────────────────────────────────────────────────────
// Draft (working values) and validated record
// ──────────────────────────────────────────────────────────
//

/// Raw values as currently entered in the form. Nothing here is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub surname: String,
    pub job_title: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub pitch: String,
    pub visibility: String,
    pub avatar_file: Option<AvatarFile>,
    pub avatar_preview: Option<AvatarPreview>,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            surname: String::new(),
            job_title: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            pitch: String::new(),
            visibility: Visibility::default().to_string(),
            avatar_file: None,
            avatar_preview: None,
        }
    }
}

impl ProfileDraft {
    /// Mutable slot of a text field, `None` for the avatar.
    pub fn text_mut(&mut self, field: ProfileField) -> Option<&mut String> {
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Surname => &mut self.surname,
            ProfileField::JobTitle => &mut self.job_title,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Email => &mut self.email,
            ProfileField::Address => &mut self.address,
            ProfileField::Pitch => &mut self.pitch,
            ProfileField::Visibility => &mut self.visibility,
            ProfileField::Avatar => return None,
        };
        Some(slot)
    }
}

impl From<ProfileRecord> for ProfileDraft {
    fn from(record: ProfileRecord) -> Self {
        Self {
            name: record.name,
            surname: record.surname,
            job_title: record.job_title.unwrap_or_default(),
            phone: record.phone,
            email: record.email,
            address: record.address.unwrap_or_default(),
            pitch: record.pitch.unwrap_or_default(),
            visibility: record.visibility.to_string(),
            avatar_file: None,
            avatar_preview: record.avatar,
        }
    }
}

/// A schema-valid profile, the only shape that ever reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub name: String,
    pub surname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    pub phone: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, deserialize_with = "deserialize_avatar")]
    pub avatar: Option<AvatarPreview>,
}

// Older records may carry `"avatar": {}` (a serialized file handle). Anything that
// is not a string is dropped rather than failing the whole record.
fn deserialize_avatar<'de, D>(deserializer: D) -> Result<Option<AvatarPreview>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(uri)) if !uri.is_empty() => Some(AvatarPreview(uri)),
        _ => None,
    })
}
