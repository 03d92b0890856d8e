//! Search algorithm: universe selection, occupancy, scoring, ranking.
//!
//! # Algorithm
//!
//! 1. Enumerate active resources (optionally one role).
//! 2. Build the busy set: assignees of open tasks overlapping the window,
//!    one store scan, hash-set membership afterwards.
//! 3. For each busy resource, find the open task with the latest end date
//!    to report when the resource frees up.
//! 4. Score required-skill coverage per resource.
//! 5. Stable-sort: free before busy, then higher match score.
//!
//! # Complexity
//! O(R * S) store lookups plus one O(T) occupancy scan, where R =
//! candidate resources, S = required skills, T = open tasks in the window.

use std::collections::HashSet;

use chrono::NaiveDate;

use super::{Candidate, CandidateSearch, SearchError, SkillMatch};
use crate::models::{Skill, Task};
use crate::store::AvailabilityStore;

/// Finds and ranks candidate resources for a date window.
///
/// Returns an empty list when either window bound is missing or when no
/// resource matches the filters; fails only on an inverted window or a
/// store error. Reads the store, computes, and returns — no state is
/// kept between calls, so identical inputs over an unchanged store give
/// identical output.
pub fn find_candidates<S: AvailabilityStore>(
    store: &S,
    search: &CandidateSearch,
) -> Result<Vec<Candidate>, SearchError<S::Error>> {
    let (start, end) = match (search.window_start, search.window_end) {
        (Some(start), Some(end)) => (start, end),
        _ => return Ok(Vec::new()),
    };
    if start > end {
        return Err(SearchError::InvalidRange { start, end });
    }

    let resources = store.active_resources(search.role.as_deref())?;

    // Assignees of open tasks overlapping the window. Unassigned tasks
    // occupy nobody.
    let busy: HashSet<String> = store
        .incomplete_tasks_overlapping(start, end)?
        .into_iter()
        .filter_map(|task| task.assignee)
        .collect();

    let mut candidates = Vec::with_capacity(resources.len());
    for resource in resources {
        let is_busy = busy.contains(&resource.id);
        let (free_as_of, conflicting_task) = if is_busy {
            release_info(store, &resource.id, start)?
        } else {
            (None, String::new())
        };
        let (match_score, match_detail) =
            skill_match(store, &resource.id, &search.required_skills)?;

        candidates.push(Candidate {
            resource,
            is_busy,
            free_as_of,
            conflicting_task,
            match_score,
            match_detail,
        });
    }

    // Stable sort: ties on (busy, score) keep the store's id-ascending
    // enumeration order.
    candidates.sort_by(|a, b| {
        a.is_busy
            .cmp(&b.is_busy)
            .then(b.match_score.cmp(&a.match_score))
    });

    Ok(candidates)
}

/// When a busy resource frees up: end date and name of its open task
/// with the latest end among those not already over before the window.
///
/// Equal end dates resolve to the lowest task id. An empty query result
/// (store changed between scans) degrades to no date and an empty name.
fn release_info<S: AvailabilityStore>(
    store: &S,
    resource_id: &str,
    window_start: NaiveDate,
) -> Result<(Option<NaiveDate>, String), SearchError<S::Error>> {
    let mut last: Option<Task> = None;
    for task in store.incomplete_tasks_ending_after(resource_id, window_start)? {
        let replaces = match &last {
            None => true,
            Some(best) => task.end > best.end || (task.end == best.end && task.id < best.id),
        };
        if replaces {
            last = Some(task);
        }
    }

    Ok(match last {
        Some(task) => (Some(task.end), task.name),
        None => (None, String::new()),
    })
}

/// Required-skill coverage for one resource.
///
/// Each requirement contributes its proficiency's coverage percentage
/// (level / 5 * 100), or 0 when the resource has no record. The score is
/// the average over the requirement count, rounded half-up. An empty
/// requirement list is a vacuous 100 with no detail.
fn skill_match<S: AvailabilityStore>(
    store: &S,
    resource_id: &str,
    required: &[Skill],
) -> Result<(u8, Vec<SkillMatch>), SearchError<S::Error>> {
    if required.is_empty() {
        return Ok((100, Vec::new()));
    }

    let mut points: u32 = 0;
    let mut detail = Vec::with_capacity(required.len());
    for skill in required {
        let level = store
            .skill_level(resource_id, &skill.id)?
            .map(|record| record.level);
        if let Some(level) = level {
            points += level.coverage_percent();
        }
        detail.push(SkillMatch {
            skill: skill.name.clone(),
            level,
            satisfied: level.is_some(),
        });
    }

    let score = (f64::from(points) / required.len() as f64).round() as u8;
    Ok((score, detail))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Proficiency, Resource, Role, SkillLevel};
    use crate::store::InMemoryStore;
    use std::convert::Infallible;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn january() -> CandidateSearch {
        CandidateSearch::new().with_window(date(2026, 1, 1), date(2026, 1, 31))
    }

    fn plc() -> Skill {
        Skill::new("plc", "PLC S7-1200")
    }

    /// Ana free, Luis on an open task Jan 10-20, Luis knows PLC at level 4.
    fn sample_store() -> InMemoryStore {
        InMemoryStore::new()
            .with_role(Role::new("eng", "Engineer"))
            .with_resource(Resource::new("ana", "Ana", "eng"))
            .with_resource(Resource::new("luis", "Luis", "eng"))
            .with_skill(plc())
            .with_skill_level(SkillLevel::new("luis", "plc", Proficiency::Advanced))
            .with_task(
                Task::new("t1", "Panel wiring", "p1")
                    .with_assignee("luis")
                    .with_dates(date(2026, 1, 10), date(2026, 1, 20))
                    .with_completion(50),
            )
    }

    #[test]
    fn test_missing_window_returns_empty() {
        let store = sample_store();
        assert!(find_candidates(&store, &CandidateSearch::new())
            .unwrap()
            .is_empty());

        let mut start_only = CandidateSearch::new();
        start_only.window_start = Some(date(2026, 1, 1));
        assert!(find_candidates(&store, &start_only).unwrap().is_empty());
    }

    #[test]
    fn test_inverted_window_fails() {
        let store = sample_store();
        // Filters make no difference: range validation comes first.
        let search = CandidateSearch::new()
            .with_window(date(2026, 2, 1), date(2026, 1, 1))
            .with_role("eng")
            .with_required_skill(plc());

        let err = find_candidates(&store, &search).unwrap_err();
        assert!(matches!(
            err,
            SearchError::InvalidRange { start, end }
                if start == date(2026, 2, 1) && end == date(2026, 1, 1)
        ));
    }

    #[test]
    fn test_single_day_window_is_valid() {
        let store = sample_store();
        let search = CandidateSearch::new().with_window(date(2026, 1, 15), date(2026, 1, 15));
        let candidates = find_candidates(&store, &search).unwrap();
        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().any(|c| c.is_busy));
    }

    #[test]
    fn test_free_ranks_before_busy() {
        let candidates = find_candidates(&sample_store(), &january()).unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].resource.id, "ana");
        assert!(!candidates[0].is_busy);
        assert_eq!(candidates[0].free_as_of, None);
        assert_eq!(candidates[0].conflicting_task, "");

        assert_eq!(candidates[1].resource.id, "luis");
        assert!(candidates[1].is_busy);
        assert_eq!(candidates[1].free_as_of, Some(date(2026, 1, 20)));
        assert_eq!(candidates[1].conflicting_task, "Panel wiring");
    }

    #[test]
    fn test_vacuous_match_without_requirements() {
        for candidate in find_candidates(&sample_store(), &january()).unwrap() {
            assert_eq!(candidate.match_score, 100);
            assert!(candidate.match_detail.is_empty());
        }
    }

    #[test]
    fn test_occupancy_beats_score() {
        // Ana has no PLC record (score 0) but is free; she still wins.
        let search = january().with_required_skill(plc());
        let candidates = find_candidates(&sample_store(), &search).unwrap();

        assert_eq!(candidates[0].resource.id, "ana");
        assert_eq!(candidates[0].match_score, 0);
        assert!(!candidates[0].match_detail[0].satisfied);
        assert_eq!(candidates[0].match_detail[0].level_label(), "none");

        assert_eq!(candidates[1].resource.id, "luis");
        assert_eq!(candidates[1].match_score, 80);
        assert!(candidates[1].match_detail[0].satisfied);
        assert_eq!(candidates[1].match_detail[0].level, Some(Proficiency::Advanced));
    }

    #[test]
    fn test_completed_tasks_do_not_occupy() {
        let store = InMemoryStore::new()
            .with_resource(Resource::new("ana", "Ana", "eng"))
            .with_task(
                Task::new("t1", "Done work", "p1")
                    .with_assignee("ana")
                    .with_dates(date(2026, 1, 10), date(2026, 1, 20))
                    .with_completion(100),
            );

        let candidates = find_candidates(&store, &january()).unwrap();
        assert!(!candidates[0].is_busy);
    }

    #[test]
    fn test_unassigned_tasks_occupy_nobody() {
        let store = InMemoryStore::new()
            .with_resource(Resource::new("ana", "Ana", "eng"))
            .with_task(
                Task::new("t1", "Backlog item", "p1")
                    .with_dates(date(2026, 1, 10), date(2026, 1, 20)),
            );

        let candidates = find_candidates(&store, &january()).unwrap();
        assert!(!candidates[0].is_busy);
    }

    #[test]
    fn test_occupancy_inclusive_bounds() {
        // Task ends exactly on the window's first day: still busy.
        let store = InMemoryStore::new()
            .with_resource(Resource::new("ana", "Ana", "eng"))
            .with_task(
                Task::new("t1", "Handover", "p1")
                    .with_assignee("ana")
                    .with_dates(date(2025, 12, 20), date(2026, 1, 1)),
            );

        let candidates = find_candidates(&store, &january()).unwrap();
        assert!(candidates[0].is_busy);
        assert_eq!(candidates[0].free_as_of, Some(date(2026, 1, 1)));
    }

    #[test]
    fn test_release_date_is_latest_end() {
        let store = InMemoryStore::new()
            .with_resource(Resource::new("ana", "Ana", "eng"))
            .with_task(
                Task::new("t1", "Short task", "p1")
                    .with_assignee("ana")
                    .with_dates(date(2026, 1, 10), date(2026, 2, 5)),
            )
            .with_task(
                Task::new("t2", "Long task", "p1")
                    .with_assignee("ana")
                    .with_dates(date(2026, 1, 12), date(2026, 2, 10)),
            );

        let candidates = find_candidates(&store, &january()).unwrap();
        assert_eq!(candidates[0].free_as_of, Some(date(2026, 2, 10)));
        assert_eq!(candidates[0].conflicting_task, "Long task");
    }

    #[test]
    fn test_release_tie_breaks_on_lowest_id() {
        let store = InMemoryStore::new()
            .with_resource(Resource::new("ana", "Ana", "eng"))
            .with_task(
                Task::new("t9", "Later insert", "p1")
                    .with_assignee("ana")
                    .with_dates(date(2026, 1, 10), date(2026, 2, 5)),
            )
            .with_task(
                Task::new("t2", "Earlier id", "p1")
                    .with_assignee("ana")
                    .with_dates(date(2026, 1, 12), date(2026, 2, 5)),
            );

        let candidates = find_candidates(&store, &january()).unwrap();
        assert_eq!(candidates[0].conflicting_task, "Earlier id");
    }

    #[test]
    fn test_partial_coverage_averages() {
        // Expert in A (100), no record for B (0) -> round((100 + 0) / 2) = 50.
        let store = InMemoryStore::new()
            .with_resource(Resource::new("ana", "Ana", "eng"))
            .with_skill_level(SkillLevel::new("ana", "a", Proficiency::Expert));

        let search = january()
            .with_required_skill(Skill::new("a", "Skill A"))
            .with_required_skill(Skill::new("b", "Skill B"));
        let candidates = find_candidates(&store, &search).unwrap();

        assert_eq!(candidates[0].match_score, 50);
        let detail = &candidates[0].match_detail;
        assert_eq!(detail.len(), 2);
        assert_eq!(detail[0].skill, "Skill A");
        assert!(detail[0].satisfied);
        assert_eq!(detail[0].level_label(), "5 - Expert");
        assert_eq!(detail[1].skill, "Skill B");
        assert!(!detail[1].satisfied);
    }

    #[test]
    fn test_score_rounds_half_up() {
        // One Basic record over eight requirements: 20 / 8 = 2.5 -> 3.
        let mut store = InMemoryStore::new()
            .with_resource(Resource::new("ana", "Ana", "eng"))
            .with_skill_level(SkillLevel::new("ana", "s0", Proficiency::Basic));
        let mut search = january();
        for i in 0..8 {
            let id = format!("s{i}");
            store = store.with_skill(Skill::new(&id, format!("Skill {i}")));
            search = search.with_required_skill(Skill::new(&id, format!("Skill {i}")));
        }

        let candidates = find_candidates(&store, &search).unwrap();
        assert_eq!(candidates[0].match_score, 3);
    }

    #[test]
    fn test_role_filter_restricts_universe() {
        let store = sample_store().with_resource(Resource::new("zoe", "Zoe", "tech"));

        let engineers = find_candidates(&store, &january().with_role("eng")).unwrap();
        assert_eq!(engineers.len(), 2);
        assert!(engineers.iter().all(|c| c.resource.role_id == "eng"));

        let nobody = find_candidates(&store, &january().with_role("pm")).unwrap();
        assert!(nobody.is_empty());
    }

    #[test]
    fn test_inactive_resources_excluded() {
        let store = sample_store().with_resource(Resource::new("bea", "Bea", "eng").inactive());
        let candidates = find_candidates(&store, &january()).unwrap();
        assert!(candidates.iter().all(|c| c.resource.id != "bea"));
    }

    #[test]
    fn test_ranking_order_full() {
        // Two free and two busy resources with distinct scores.
        let busy_task = |id: &str, who: &str| {
            Task::new(id, format!("Task {id}"), "p1")
                .with_assignee(who)
                .with_dates(date(2026, 1, 5), date(2026, 1, 25))
        };
        let store = InMemoryStore::new()
            .with_resource(Resource::new("a", "A", "eng"))
            .with_resource(Resource::new("b", "B", "eng"))
            .with_resource(Resource::new("c", "C", "eng"))
            .with_resource(Resource::new("d", "D", "eng"))
            .with_skill_level(SkillLevel::new("b", "plc", Proficiency::Expert))
            .with_skill_level(SkillLevel::new("c", "plc", Proficiency::Intermediate))
            .with_skill_level(SkillLevel::new("d", "plc", Proficiency::Expert))
            .with_task(busy_task("t1", "c"))
            .with_task(busy_task("t2", "d"));

        let search = january().with_required_skill(plc());
        let candidates = find_candidates(&store, &search).unwrap();
        let ids: Vec<&str> = candidates.iter().map(|c| c.resource.id.as_str()).collect();

        // Free: b (100), a (0). Busy: d (100), c (60).
        assert_eq!(ids, vec!["b", "a", "d", "c"]);

        let busy_flags: Vec<bool> = candidates.iter().map(|c| c.is_busy).collect();
        assert_eq!(busy_flags, vec![false, false, true, true]);
    }

    #[test]
    fn test_equal_candidates_keep_id_order() {
        let store = InMemoryStore::new()
            .with_resource(Resource::new("m2", "Second", "eng"))
            .with_resource(Resource::new("m1", "First", "eng"));

        let candidates = find_candidates(&store, &january()).unwrap();
        let ids: Vec<&str> = candidates.iter().map(|c| c.resource.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m2"]);
    }

    #[test]
    fn test_search_is_deterministic() {
        let store = sample_store();
        let search = january().with_required_skill(plc());

        let first = find_candidates(&store, &search).unwrap();
        let second = find_candidates(&store, &search).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_universe_is_not_an_error() {
        let store = InMemoryStore::new();
        assert!(find_candidates(&store, &january()).unwrap().is_empty());
    }

    /// Store whose occupancy and release scans disagree: the release
    /// query finds nothing for a resource the busy set contains.
    struct DriftedStore(InMemoryStore);

    impl AvailabilityStore for DriftedStore {
        type Error = Infallible;

        fn active_resources(&self, role: Option<&str>) -> Result<Vec<Resource>, Self::Error> {
            self.0.active_resources(role)
        }

        fn incomplete_tasks_overlapping(
            &self,
            start: NaiveDate,
            end: NaiveDate,
        ) -> Result<Vec<Task>, Self::Error> {
            self.0.incomplete_tasks_overlapping(start, end)
        }

        fn incomplete_tasks_ending_after(
            &self,
            _resource_id: &str,
            _cutoff: NaiveDate,
        ) -> Result<Vec<Task>, Self::Error> {
            Ok(Vec::new())
        }

        fn skill_level(
            &self,
            resource_id: &str,
            skill_id: &str,
        ) -> Result<Option<SkillLevel>, Self::Error> {
            self.0.skill_level(resource_id, skill_id)
        }
    }

    #[test]
    fn test_missing_release_task_degrades() {
        let store = DriftedStore(sample_store());
        let candidates = find_candidates(&store, &january()).unwrap();

        let luis = candidates.iter().find(|c| c.resource.id == "luis").unwrap();
        assert!(luis.is_busy);
        assert_eq!(luis.free_as_of, None);
        assert_eq!(luis.conflicting_task, "");
    }

    #[derive(Debug, thiserror::Error)]
    #[error("store offline")]
    struct Offline;

    struct FailingStore;

    impl AvailabilityStore for FailingStore {
        type Error = Offline;

        fn active_resources(&self, _role: Option<&str>) -> Result<Vec<Resource>, Self::Error> {
            Err(Offline)
        }

        fn incomplete_tasks_overlapping(
            &self,
            _start: NaiveDate,
            _end: NaiveDate,
        ) -> Result<Vec<Task>, Self::Error> {
            Err(Offline)
        }

        fn incomplete_tasks_ending_after(
            &self,
            _resource_id: &str,
            _cutoff: NaiveDate,
        ) -> Result<Vec<Task>, Self::Error> {
            Err(Offline)
        }

        fn skill_level(
            &self,
            _resource_id: &str,
            _skill_id: &str,
        ) -> Result<Option<SkillLevel>, Self::Error> {
            Err(Offline)
        }
    }

    #[test]
    fn test_store_errors_propagate() {
        let err = find_candidates(&FailingStore, &january()).unwrap_err();
        assert!(matches!(err, SearchError::Store(Offline)));
        assert_eq!(err.to_string(), "store offline");
    }

    #[test]
    fn test_candidate_serializes() {
        let candidates = find_candidates(&sample_store(), &january()).unwrap();
        let json = serde_json::to_string(&candidates).unwrap();
        assert!(json.contains("\"is_busy\":true"));
        assert!(json.contains("Panel wiring"));
    }
}
