//! Candidate search: availability and skill-match.
//!
//! Answers "who could take this work?" for a date window, an optional
//! role filter, and an optional list of required skills. Each returned
//! [`Candidate`] is annotated with occupancy (busy or free, and when a
//! busy resource frees up) and a 0-100 skill-match score with per-skill
//! detail. Free candidates rank before busy ones; within each group,
//! better matches rank first.
//!
//! # Usage
//!
//! ```
//! use rms_availability::models::{Resource, Skill};
//! use rms_availability::search::{find_candidates, CandidateSearch};
//! use rms_availability::store::InMemoryStore;
//! use chrono::NaiveDate;
//!
//! let store = InMemoryStore::new()
//!     .with_resource(Resource::new("r1", "Ana", "eng"));
//!
//! let search = CandidateSearch::new()
//!     .with_window(
//!         NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
//!         NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
//!     )
//!     .with_required_skill(Skill::new("plc", "PLC S7-1200"));
//!
//! let candidates = find_candidates(&store, &search).unwrap();
//! assert_eq!(candidates[0].match_score, 0); // no proficiency recorded
//! assert!(!candidates[0].match_detail[0].satisfied);
//! ```

mod engine;

pub use engine::find_candidates;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Proficiency, Resource, Skill};

/// Search parameters for [`find_candidates`].
///
/// Both window bounds must be set for the search to run; with either
/// missing the search returns no candidates (the caller validates
/// presence upstream). Role and skill requirements are optional filters.
///
/// Required skills are passed as resolved catalog entries so the match
/// detail can name them; order is preserved in the detail.
#[derive(Debug, Clone, Default)]
pub struct CandidateSearch {
    /// First day of the window (inclusive).
    pub window_start: Option<NaiveDate>,
    /// Last day of the window (inclusive).
    pub window_end: Option<NaiveDate>,
    /// Restrict candidates to this role.
    pub role: Option<String>,
    /// Skills the work requires, in display order.
    pub required_skills: Vec<Skill>,
}

impl CandidateSearch {
    /// Creates an empty search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets both window bounds (inclusive).
    pub fn with_window(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.window_start = Some(start);
        self.window_end = Some(end);
        self
    }

    /// Restricts candidates to one role.
    pub fn with_role(mut self, role_id: impl Into<String>) -> Self {
        self.role = Some(role_id.into());
        self
    }

    /// Adds a required skill.
    pub fn with_required_skill(mut self, skill: Skill) -> Self {
        self.required_skills.push(skill);
        self
    }

    /// Sets the full required-skill list.
    pub fn with_required_skills(mut self, skills: Vec<Skill>) -> Self {
        self.required_skills = skills;
        self
    }
}

/// Per-skill coverage entry in a candidate's match detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMatch {
    /// Name of the required skill.
    pub skill: String,
    /// Recorded proficiency, `None` when the resource has no record.
    pub level: Option<Proficiency>,
    /// Whether the resource covers this skill at all.
    pub satisfied: bool,
}

impl SkillMatch {
    /// Proficiency caption for display; "none" when no record exists.
    pub fn level_label(&self) -> &'static str {
        match self.level {
            Some(level) => level.label(),
            None => "none",
        }
    }
}

/// A ranked search result: one resource with occupancy and match data.
///
/// Transient output, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// The resource under consideration.
    pub resource: Resource,
    /// Whether an open task of this resource overlaps the window.
    pub is_busy: bool,
    /// End date of the occupying task; only meaningful when busy.
    pub free_as_of: Option<NaiveDate>,
    /// Name of the occupying task; empty when free.
    pub conflicting_task: String,
    /// Required-skill coverage, 0-100. 100 when nothing was required.
    pub match_score: u8,
    /// Per-skill coverage, in requirement order. Empty when nothing
    /// was required.
    pub match_detail: Vec<SkillMatch>,
}

/// Failure of a candidate search.
///
/// Only an inverted window is a hard validation failure; store errors
/// pass through transparently and everything else degrades to defined
/// defaults.
#[derive(Debug, Error)]
pub enum SearchError<E: std::error::Error> {
    /// The window's start date is after its end date.
    #[error("window start {start} is after window end {end}")]
    InvalidRange {
        /// Requested window start.
        start: NaiveDate,
        /// Requested window end.
        end: NaiveDate,
    },
    /// The backing store failed; propagated untouched.
    #[error(transparent)]
    Store(#[from] E),
}
