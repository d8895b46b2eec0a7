//! Course data model.
//!
//! The JSON field names (`courseid`, `coursename`, `price`, `author`,
//! `fullname`, `website`) are the public wire contract of the service and
//! must not be renamed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by the course constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseValidationError {
    /// The identifier was empty or whitespace.
    EmptyId,
    /// The course name was empty or whitespace.
    EmptyName,
}

impl fmt::Display for CourseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "course id must not be empty"),
            Self::EmptyName => write!(f, "course name must not be empty"),
        }
    }
}

impl std::error::Error for CourseValidationError {}

/// Server-assigned course identifier.
///
/// Identifiers are opaque strings. Counter-allocated identifiers are decimal
/// numbers, which [`CourseId::sequence_number`] exposes so the store can
/// resume its counter past existing records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseId(String);

impl CourseId {
    /// Validate and construct a [`CourseId`].
    ///
    /// # Errors
    /// Returns [`CourseValidationError::EmptyId`] when `id` is blank.
    ///
    /// # Examples
    /// ```
    /// use courses_backend::domain::CourseId;
    ///
    /// let id = CourseId::new("42").expect("valid id");
    /// assert_eq!(id.sequence_number(), Some(42));
    /// assert!(CourseId::new("  ").is_err());
    /// ```
    pub fn new(id: impl Into<String>) -> Result<Self, CourseValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CourseValidationError::EmptyId);
        }
        Ok(Self(id))
    }

    /// Numeric value of a counter-allocated identifier.
    #[must_use]
    pub fn sequence_number(&self) -> Option<u64> {
        if self.0.bytes().all(|b| b.is_ascii_digit()) {
            self.0.parse().ok()
        } else {
            None
        }
    }
}

impl AsRef<str> for CourseId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CourseId> for String {
    fn from(value: CourseId) -> Self {
        value.0
    }
}

impl TryFrom<String> for CourseId {
    type Error = CourseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Course title. Must contain at least one non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseName(String);

impl CourseName {
    /// Validate and construct a [`CourseName`].
    ///
    /// # Errors
    /// Returns [`CourseValidationError::EmptyName`] when `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, CourseValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CourseValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for CourseName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CourseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CourseName> for String {
    fn from(value: CourseName) -> Self {
        value.0
    }
}

impl TryFrom<String> for CourseName {
    type Error = CourseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Who wrote a course. Owned by exactly one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "fullname")]
    full_name: String,
    website: String,
}

impl Author {
    /// Construct an author record. Neither field is validated.
    pub fn new(full_name: impl Into<String>, website: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            website: website.into(),
        }
    }

    /// Author's full name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Author's website.
    #[must_use]
    pub fn website(&self) -> &str {
        &self.website
    }
}

/// Validated course contents without an identifier.
///
/// Drafts are what clients submit on create and update; the store turns a
/// draft into a [`Course`] by attaching an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDraft {
    name: CourseName,
    price: i64,
    author: Option<Author>,
}

impl CourseDraft {
    /// Assemble a draft from validated parts.
    pub fn new(name: CourseName, price: i64, author: Option<Author>) -> Self {
        Self {
            name,
            price,
            author,
        }
    }

    /// Course name.
    #[must_use]
    pub fn name(&self) -> &CourseName {
        &self.name
    }

    /// Course price.
    #[must_use]
    pub fn price(&self) -> i64 {
        self.price
    }

    /// Optional author.
    #[must_use]
    pub fn author(&self) -> Option<&Author> {
        self.author.as_ref()
    }

    /// Attach `id`, producing a stored course.
    #[must_use]
    pub fn into_course(self, id: CourseId) -> Course {
        Course { id, draft: self }
    }
}

/// A stored course.
///
/// ## Invariants
/// - `id` is non-empty.
/// - `name` is non-empty once trimmed of whitespace.
///
/// # Examples
/// ```
/// use courses_backend::domain::{Author, Course, CourseDraft, CourseId, CourseName};
///
/// let course = CourseDraft::new(
///     CourseName::new("Rust").expect("valid name"),
///     299,
///     Some(Author::new("Ferris", "https://rustacean.net")),
/// )
/// .into_course(CourseId::new("3").expect("valid id"));
///
/// let json = serde_json::to_value(&course).expect("serialise");
/// assert_eq!(json["courseid"], "3");
/// assert_eq!(json["author"]["fullname"], "Ferris");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CourseDto", into = "CourseDto")]
pub struct Course {
    id: CourseId,
    draft: CourseDraft,
}

impl Course {
    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> &CourseId {
        &self.id
    }

    /// Course name.
    #[must_use]
    pub fn name(&self) -> &CourseName {
        self.draft.name()
    }

    /// Course price.
    #[must_use]
    pub fn price(&self) -> i64 {
        self.draft.price()
    }

    /// Optional author.
    #[must_use]
    pub fn author(&self) -> Option<&Author> {
        self.draft.author()
    }
}

#[derive(Serialize, Deserialize)]
struct CourseDto {
    #[serde(rename = "courseid")]
    id: String,
    #[serde(rename = "coursename")]
    name: String,
    price: i64,
    author: Option<Author>,
}

impl From<Course> for CourseDto {
    fn from(value: Course) -> Self {
        let Course { id, draft } = value;
        Self {
            id: id.into(),
            name: draft.name.into(),
            price: draft.price,
            author: draft.author,
        }
    }
}

impl TryFrom<CourseDto> for Course {
    type Error = CourseValidationError;

    fn try_from(value: CourseDto) -> Result<Self, Self::Error> {
        let id = CourseId::new(value.id)?;
        let name = CourseName::new(value.name)?;
        Ok(CourseDraft::new(name, value.price, value.author).into_course(id))
    }
}

#[cfg(test)]
mod tests;
