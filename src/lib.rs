//! Availability and skill-match engine for resource planning.
//!
//! Provides the domain models, store interface, and search logic behind
//! "who is free for this task, in this window, with these skills".
//! Persistence, HTTP, and rendering live in the embedding service; this
//! crate is pure computation over data the store hands it.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Resource`, `Role`, `Project`, `Task`,
//!   `Skill`, `SkillLevel`, `Proficiency`, `TaskStatus`
//! - **`store`**: The `AvailabilityStore` query trait and `InMemoryStore`
//! - **`search`**: Candidate search — occupancy detection, skill-match
//!   scoring, ranking
//! - **`reporting`**: Dashboard KPIs and per-resource task reports
//! - **`validation`**: Dataset integrity checks (duplicate IDs, dangling
//!   references, invariant violations)
//!
//! # Architecture
//!
//! `search::find_candidates` is the crate's primary entry point. It is a
//! stateless, synchronous computation: a bounded sequence of eager store
//! queries followed by in-process scoring and ranking. Concurrent callers
//! need no coordination beyond what the store provides.
//!
//! # Example
//!
//! ```
//! use rms_availability::models::{Resource, Role, Task};
//! use rms_availability::search::{find_candidates, CandidateSearch};
//! use rms_availability::store::InMemoryStore;
//! use chrono::NaiveDate;
//!
//! let store = InMemoryStore::new()
//!     .with_role(Role::new("eng", "Engineer"))
//!     .with_resource(Resource::new("ana", "Ana", "eng"))
//!     .with_resource(Resource::new("luis", "Luis", "eng"))
//!     .with_task(
//!         Task::new("t1", "Panel wiring", "p1")
//!             .with_assignee("luis")
//!             .with_dates(
//!                 NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
//!                 NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(),
//!             )
//!             .with_completion(50),
//!     );
//!
//! let search = CandidateSearch::new().with_window(
//!     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
//! );
//! let candidates = find_candidates(&store, &search).unwrap();
//!
//! assert_eq!(candidates.len(), 2);
//! assert_eq!(candidates[0].resource.id, "ana"); // free, ranked first
//! assert!(candidates[1].is_busy);
//! ```

pub mod models;
pub mod reporting;
pub mod search;
pub mod store;
pub mod validation;
