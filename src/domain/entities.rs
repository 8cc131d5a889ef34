//! Domain entities. Pure data structures for the core business.
//!
//! No storage or terminal types here; adapters map to and from these.

use super::decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A project assembled from console prompts but not yet stored.
///
/// Optional fields are `None` rather than empty strings; the input reader
/// guarantees that before a draft is ever built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub name: Option<String>,
    pub estimated_hours: Option<Decimal>,
    pub actual_hours: Option<Decimal>,
    /// Nominally 1-5; not range-checked here.
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
}

/// A stored project: the submitted draft plus the identifier assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: Option<String>,
    pub estimated_hours: Option<Decimal>,
    pub actual_hours: Option<Decimal>,
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
}

impl Project {
    pub fn from_draft(id: i64, draft: ProjectDraft) -> Self {
        Self {
            id,
            name: draft.name,
            estimated_hours: draft.estimated_hours,
            actual_hours: draft.actual_hours,
            difficulty: draft.difficulty,
            notes: draft.notes,
        }
    }
}

struct Field<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for Field<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => fmt::Display::fmt(v, f),
            None => f.write_str("none"),
        }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID={}, name={}, estimated hours={}, actual hours={}, difficulty={}, notes={}",
            self.id,
            Field(&self.name),
            Field(&self.estimated_hours),
            Field(&self.actual_hours),
            Field(&self.difficulty),
            Field(&self.notes),
        )
    }
}
