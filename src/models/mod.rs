//! Domain models for resource planning.
//!
//! Provides the entities the availability engine reads: staff resources
//! with role and skill data, projects and their tasks, and computed task
//! state. Creation and mutation of these entities belong to the embedding
//! application (CRUD screens, spreadsheet import); this crate only
//! consumes them.
//!
//! # Entities
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Resource` | A staff member eligible for task assignment |
//! | `Role` | A job profile (e.g. "Junior Engineer") |
//! | `Project` | A dated engagement owning tasks, tagged by business unit |
//! | `Task` | A unit of work with date range, completion %, optional assignee |
//! | `Skill` | A named competency in the catalog |
//! | `SkillLevel` | A resource's proficiency (1-5) in one skill |

mod project;
mod resource;
mod skill;
mod task;

pub use project::{BusinessUnit, Project};
pub use resource::{Resource, Role};
pub use skill::{Proficiency, Skill, SkillLevel};
pub use task::{Task, TaskStatus};
