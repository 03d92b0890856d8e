//! Resource and role models.
//!
//! Resources are the staff members that tasks are assigned to. Each
//! resource carries a role reference and an active flag; proficiency
//! data lives in [`SkillLevel`](super::SkillLevel) records keyed by
//! resource id.

use serde::{Deserialize, Serialize};

/// A job profile (e.g. "Junior Engineer", "Level 3 Technician").
///
/// Candidate search can be restricted to resources holding a given role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Unique role identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
}

impl Role {
    /// Creates a new role.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A staff member eligible for task assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Role this resource holds.
    pub role_id: String,
    /// Contact address, if known.
    pub email: Option<String>,
    /// Inactive resources never appear in candidate search.
    pub active: bool,
}

impl Resource {
    /// Creates a new active resource.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role_id: role_id.into(),
            email: None,
            active: true,
        }
    }

    /// Sets the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Marks the resource as inactive (left the company, on leave).
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Whether this resource holds the given role.
    #[inline]
    pub fn has_role(&self, role_id: &str) -> bool {
        self.role_id == role_id
    }
}
