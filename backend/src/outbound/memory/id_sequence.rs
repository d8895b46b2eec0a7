//! Course identifier allocation.

use uuid::Uuid;

use crate::domain::{CourseId, ports::CourseRepositoryError};

/// How the store allocates identifiers for new courses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// Decimal counter continuing past the largest numeric id in the store.
    #[default]
    Sequential,
    /// Random UUID v4 strings.
    Uuid,
}

/// Stateful allocator owned by the store and advanced under its write guard.
#[derive(Debug, Clone)]
pub(crate) enum IdSequence {
    Sequential { next: u64 },
    Uuid,
}

impl IdSequence {
    /// Build an allocator that will not reissue any id in `existing`.
    pub(crate) fn resume<'a>(
        strategy: IdStrategy,
        existing: impl IntoIterator<Item = &'a CourseId>,
    ) -> Self {
        match strategy {
            IdStrategy::Sequential => {
                let highest = existing
                    .into_iter()
                    .filter_map(CourseId::sequence_number)
                    .max()
                    .unwrap_or(0);
                Self::Sequential {
                    next: highest.saturating_add(1),
                }
            }
            IdStrategy::Uuid => Self::Uuid,
        }
    }

    /// Allocate the next identifier.
    pub(crate) fn allocate(&mut self) -> Result<CourseId, CourseRepositoryError> {
        let raw = match self {
            Self::Sequential { next } => {
                let current = *next;
                *next = current
                    .checked_add(1)
                    .ok_or(CourseRepositoryError::IdExhausted)?;
                current.to_string()
            }
            Self::Uuid => Uuid::new_v4().to_string(),
        };
        CourseId::new(raw).map_err(|_| CourseRepositoryError::IdExhausted)
    }
}
