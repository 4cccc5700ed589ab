//! Subject identifiers and looked-up profile records.

use std::fmt;

use serde_json::{Map, Value};

/// Validation errors for subject identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubjectIdValidationError {
    /// The identifier was blank once trimmed.
    #[error("subject id must not be empty")]
    Empty,
}

/// Opaque identifier of the subject named by the entry URL.
///
/// ## Invariants
/// - Non-empty once trimmed; surrounding whitespace is removed.
///
/// # Examples
/// ```
/// use portal::domain::SubjectId;
///
/// let id = SubjectId::new(" R7V5CT ").unwrap();
/// assert_eq!(id.as_ref(), "R7V5CT");
/// assert!(SubjectId::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubjectId(String);

impl SubjectId {
    /// Validate and construct an identifier.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, SubjectIdValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(SubjectIdValidationError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for SubjectId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Profile record returned by a successful lookup.
///
/// The record's fields are server-defined; the portal treats them as an
/// opaque JSON object and only renders them.
#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    id: SubjectId,
    fields: Map<String, Value>,
}

impl Subject {
    /// Pair the requested identifier with the record the server returned.
    pub fn new(id: SubjectId, fields: Map<String, Value>) -> Self {
        Self { id, fields }
    }

    /// Identifier the lookup was issued for.
    pub fn id(&self) -> &SubjectId {
        &self.id
    }

    /// Looked-up fields exactly as returned.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Convenience accessor for a single field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}
