//! Skill catalog and proficiency models.
//!
//! A [`Skill`] is a named competency (e.g. "PLC S7-1200", "PROFIBUS DP
//! networks"); a [`SkillLevel`] records one resource's proficiency in one
//! skill. Proficiency is a five-step scale; the closed 1-5 range is
//! enforced by the [`Proficiency`] type rather than checked at use sites.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named competency in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Unique skill identifier.
    pub id: String,
    /// Unique human-readable name.
    pub name: String,
    /// Grouping label (e.g. "1. PLCs", "12. Networks"). May be empty.
    pub category: String,
}

impl Skill {
    /// Creates a new skill.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: String::new(),
        }
    }

    /// Sets the category label.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// Proficiency on the five-step scale.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Proficiency {
    Basic,
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Proficiency {
    /// Numeric level, 1 (Basic) through 5 (Expert).
    #[inline]
    pub fn level(self) -> u8 {
        match self {
            Self::Basic => 1,
            Self::Beginner => 2,
            Self::Intermediate => 3,
            Self::Advanced => 4,
            Self::Expert => 5,
        }
    }

    /// Coverage contribution as a percentage: `level / 5 * 100`.
    #[inline]
    pub fn coverage_percent(self) -> u32 {
        u32::from(self.level()) * 20
    }

    /// Display label, matching the catalog's level captions.
    pub fn label(self) -> &'static str {
        match self {
            Self::Basic => "1 - Basic",
            Self::Beginner => "2 - Beginner",
            Self::Intermediate => "3 - Intermediate",
            Self::Advanced => "4 - Advanced",
            Self::Expert => "5 - Expert",
        }
    }

    /// Parses a numeric level. Values outside 1-5 are rejected.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Basic),
            2 => Some(Self::Beginner),
            3 => Some(Self::Intermediate),
            4 => Some(Self::Advanced),
            5 => Some(Self::Expert),
            _ => None,
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A resource's proficiency in a specific skill.
///
/// At most one record may exist per `(resource, skill)` pair; see
/// [`validation`](crate::validation) for the integrity check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLevel {
    /// Resource this record belongs to.
    pub resource_id: String,
    /// Skill being rated.
    pub skill_id: String,
    /// Proficiency on the 1-5 scale.
    pub level: Proficiency,
}

impl SkillLevel {
    /// Creates a new proficiency record.
    pub fn new(
        resource_id: impl Into<String>,
        skill_id: impl Into<String>,
        level: Proficiency,
    ) -> Self {
        Self {
            resource_id: resource_id.into(),
            skill_id: skill_id.into(),
            level,
        }
    }
}
