//! # Records
//!
//! A [`Record`] is one entry in the roster. Its `id` and `created_at` are assigned once,
//! at creation, and never change afterwards. Only `name`, `email` and `role` are mutable.
//!
//! New records start life as a [`Draft`] (the contents of the "add" form). A draft is
//! validated at the input boundary and cleared once it has been committed.
//!
//! Changes to existing records are described by a [`RecordPatch`]: each field is optional
//! and only the fields that are set get replaced.
//!
//! ## Persisted Shape
//!
//! Records serialize with camelCase keys so the stored collection reads as:
//!
//! ```text
//! [{ "id": "...", "name": "...", "email": "...", "role": "...", "createdAt": "2024-05-01T09:30:00Z" }]
//! ```

use crate::error::{Result, RosterError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl Record {
    pub fn new(name: String, email: String, role: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            role,
            created_at: Utc::now(),
        }
    }

    pub fn from_draft(draft: &Draft) -> Self {
        Self::new(
            draft.name.trim().to_string(),
            draft.email.trim().to_string(),
            draft.role.trim().to_string(),
        )
    }

    /// Replaces the patched fields. `id` and `created_at` are never touched.
    pub fn apply(&mut self, patch: &RecordPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(role) = &patch.role {
            self.role = role.clone();
        }
    }

    /// Case-insensitive substring match against name, email and role.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.role.to_lowercase().contains(needle)
    }
}

/// Input for a new record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Draft {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Checks the required-field constraints of the add form.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("role", &self.role),
        ] {
            if value.trim().is_empty() {
                return Err(RosterError::Validation(format!("{} is required", field)));
            }
        }
        if !is_email_like(&self.email) {
            return Err(RosterError::Validation(format!(
                "'{}' is not a valid email address",
                self.email
            )));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Loose address check: `local@domain`, both sides non-empty, no whitespace.
pub fn is_email_like(s: &str) -> bool {
    let s = s.trim();
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    match s.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// A partial update of a record's mutable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl RecordPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// A patch that replaces every mutable field with the values in `record`.
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: Some(record.name.clone()),
            email: Some(record.email.clone()),
            role: Some(record.role.clone()),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.role.is_none()
    }
}
