use crate::shared::error::NeoError;
use crate::shared::Result;

/// Maximum length for NEO identifiers (security limit)
const MAX_NEO_ID_LENGTH: usize = 32;

/// NewType wrapper for a NeoWs object identifier
///
/// The id ends up in a URL path, so anything beyond ASCII alphanumerics
/// is rejected before a request is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NeoId(String);

impl NeoId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let id = id.trim().to_string();

        if id.is_empty() {
            return Err(NeoError::InvalidNeoId {
                id,
                reason: "id cannot be empty".to_string(),
            }
            .into());
        }

        if id.len() > MAX_NEO_ID_LENGTH {
            return Err(NeoError::InvalidNeoId {
                reason: format!(
                    "id is too long ({} bytes). Maximum allowed: {} bytes",
                    id.len(),
                    MAX_NEO_ID_LENGTH
                ),
                id,
            }
            .into());
        }

        if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(NeoError::InvalidNeoId {
                id,
                reason: "id contains invalid characters. Only ASCII letters and digits are allowed"
                    .to_string(),
            }
            .into());
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NeoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
