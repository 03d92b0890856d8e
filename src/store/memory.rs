//! In-memory store.
//!
//! Holds a full dataset in plain vectors and answers the
//! [`AvailabilityStore`] queries by scanning them. Intended for tests
//! and for embedders whose dataset is small enough to load whole;
//! database-backed deployments implement the trait against their own
//! engine instead.

use std::convert::Infallible;

use chrono::NaiveDate;

use super::AvailabilityStore;
use crate::models::{Project, Resource, Role, Skill, SkillLevel, Task};
use crate::validation::{self, ValidationResult};

/// An [`AvailabilityStore`] over in-memory vectors.
///
/// Populated with `with_*` builder calls. Queries are infallible.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    roles: Vec<Role>,
    resources: Vec<Resource>,
    projects: Vec<Project>,
    skills: Vec<Skill>,
    skill_levels: Vec<SkillLevel>,
    tasks: Vec<Task>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.push(role);
        self
    }

    /// Adds a resource.
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    /// Adds a project.
    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.push(project);
        self
    }

    /// Adds a skill to the catalog.
    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }

    /// Adds a proficiency record.
    pub fn with_skill_level(mut self, level: SkillLevel) -> Self {
        self.skill_levels.push(level);
        self
    }

    /// Adds a task.
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// All resources, active or not.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// All projects.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// All tasks.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// All roles.
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Looks up a catalog skill by id.
    pub fn skill(&self, skill_id: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == skill_id)
    }

    /// Checks dataset integrity (unique ids, reference integrity,
    /// completion and date invariants). See [`crate::validation`].
    pub fn validate(&self) -> ValidationResult {
        validation::validate_dataset(
            &self.roles,
            &self.projects,
            &self.resources,
            &self.skills,
            &self.skill_levels,
            &self.tasks,
        )
    }
}

impl AvailabilityStore for InMemoryStore {
    type Error = Infallible;

    fn active_resources(&self, role_id: Option<&str>) -> Result<Vec<Resource>, Self::Error> {
        let mut found: Vec<Resource> = self
            .resources
            .iter()
            .filter(|r| r.active)
            .filter(|r| role_id.is_none_or(|role| r.has_role(role)))
            .cloned()
            .collect();
        // Ordering contract: ascending id.
        found.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(found)
    }

    fn incomplete_tasks_overlapping(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Task>, Self::Error> {
        Ok(self
            .tasks
            .iter()
            .filter(|t| t.is_open() && t.overlaps(start, end))
            .cloned()
            .collect())
    }

    fn incomplete_tasks_ending_after(
        &self,
        resource_id: &str,
        cutoff: NaiveDate,
    ) -> Result<Vec<Task>, Self::Error> {
        Ok(self
            .tasks
            .iter()
            .filter(|t| t.assignee.as_deref() == Some(resource_id))
            .filter(|t| t.is_open() && t.end >= cutoff)
            .cloned()
            .collect())
    }

    fn skill_level(
        &self,
        resource_id: &str,
        skill_id: &str,
    ) -> Result<Option<SkillLevel>, Self::Error> {
        Ok(self
            .skill_levels
            .iter()
            .find(|l| l.resource_id == resource_id && l.skill_id == skill_id)
            .cloned())
    }
}
