//! Store interface for availability search.
//!
//! The engine reads resource, task, and proficiency data through the
//! [`AvailabilityStore`] trait: four eager, read-only queries. Each call
//! materializes its full result before the engine proceeds; there is no
//! deferred evaluation, and the engine issues no writes.
//!
//! Store failures (connectivity, timeouts) surface through the trait's
//! associated error type and propagate out of
//! [`find_candidates`](crate::search::find_candidates) untouched — the
//! engine never catches, retries, or masks them. Recovery policy belongs
//! to the caller.
//!
//! [`InMemoryStore`] is the bundled implementation: infallible, and the
//! fixture of choice in tests.

mod memory;

pub use memory::InMemoryStore;

use chrono::NaiveDate;

use crate::models::{Resource, SkillLevel, Task};

/// Read-only queries the availability engine needs.
///
/// # Ordering contract
///
/// `active_resources` must enumerate resources in ascending id order.
/// Candidate ranking is a stable sort over this enumeration, so the
/// store's order is what breaks ties between candidates that are equal
/// on occupancy and match score.
pub trait AvailabilityStore {
    /// Error produced by the backing store.
    type Error: std::error::Error;

    /// All active resources, optionally restricted to one role,
    /// in ascending id order.
    fn active_resources(&self, role_id: Option<&str>) -> Result<Vec<Resource>, Self::Error>;

    /// Assigned-or-not tasks with `completion < 100` whose inclusive date
    /// range overlaps `[start, end]` (`task.start <= end && task.end >= start`).
    fn incomplete_tasks_overlapping(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Task>, Self::Error>;

    /// Tasks assigned to `resource_id` with `completion < 100` and
    /// `end >= cutoff`. Used to find when a busy resource frees up.
    fn incomplete_tasks_ending_after(
        &self,
        resource_id: &str,
        cutoff: NaiveDate,
    ) -> Result<Vec<Task>, Self::Error>;

    /// The proficiency record for `(resource, skill)`, if one exists.
    fn skill_level(
        &self,
        resource_id: &str,
        skill_id: &str,
    ) -> Result<Option<SkillLevel>, Self::Error>;
}
