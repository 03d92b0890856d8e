//! Dataset integrity validation.
//!
//! Checks structural integrity of a full planning dataset before it is
//! served to search or reporting. Detects:
//! - Duplicate IDs (roles, projects, resources, skills, tasks)
//! - Duplicate skill names (the catalog treats names as unique)
//! - Duplicate (resource, skill) proficiency pairs
//! - Dangling references (assignees, roles, projects, skills, predecessors)
//! - Completion percentages above 100
//! - Tasks ending before they start
//!
//! Errors accumulate: one pass reports every problem found, so an import
//! can surface all defects at once instead of stopping at the first.

use std::collections::HashSet;

use crate::models::{Project, Resource, Role, Skill, SkillLevel, Task};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities of the same type share an ID.
    DuplicateId,
    /// Two catalog skills share a name.
    DuplicateSkillName,
    /// A (resource, skill) pair has more than one proficiency record.
    DuplicateSkillLevel,
    /// A reference points to an entity that doesn't exist.
    UnknownReference,
    /// A task's completion percentage exceeds 100.
    CompletionOutOfRange,
    /// A task's end date precedes its start date.
    InvertedDates,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a full planning dataset.
///
/// Checks:
/// 1. No duplicate role, project, resource, skill, or task IDs
/// 2. Unique skill names in the catalog
/// 3. At most one proficiency record per (resource, skill) pair
/// 4. Proficiency records reference existing resources and skills
/// 5. Resources reference existing roles
/// 6. Tasks reference existing projects, assignees, required skills,
///    and predecessors
/// 7. Task completion within 0-100 and end date not before start date
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_dataset(
    roles: &[Role],
    projects: &[Project],
    resources: &[Resource],
    skills: &[Skill],
    skill_levels: &[SkillLevel],
    tasks: &[Task],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut role_ids = HashSet::new();
    for role in roles {
        if !role_ids.insert(role.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate role ID: {}", role.id),
            ));
        }
    }

    let mut project_ids = HashSet::new();
    for project in projects {
        if !project_ids.insert(project.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate project ID: {}", project.id),
            ));
        }
    }

    let mut resource_ids = HashSet::new();
    for resource in resources {
        if !resource_ids.insert(resource.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate resource ID: {}", resource.id),
            ));
        }
        if !role_ids.contains(resource.role_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!(
                    "Resource '{}' references unknown role '{}'",
                    resource.id, resource.role_id
                ),
            ));
        }
    }

    let mut skill_ids = HashSet::new();
    let mut skill_names = HashSet::new();
    for skill in skills {
        if !skill_ids.insert(skill.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate skill ID: {}", skill.id),
            ));
        }
        if !skill_names.insert(skill.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSkillName,
                format!("Duplicate skill name: {}", skill.name),
            ));
        }
    }

    let mut level_pairs = HashSet::new();
    for level in skill_levels {
        if !level_pairs.insert((level.resource_id.as_str(), level.skill_id.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSkillLevel,
                format!(
                    "Duplicate proficiency record for resource '{}', skill '{}'",
                    level.resource_id, level.skill_id
                ),
            ));
        }
        if !resource_ids.contains(level.resource_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!(
                    "Proficiency record references unknown resource '{}'",
                    level.resource_id
                ),
            ));
        }
        if !skill_ids.contains(level.skill_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!(
                    "Proficiency record references unknown skill '{}'",
                    level.skill_id
                ),
            ));
        }
    }

    let task_ids: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
    let mut seen_tasks = HashSet::new();
    for task in tasks {
        if !seen_tasks.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }
        if !project_ids.contains(task.project_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!(
                    "Task '{}' references unknown project '{}'",
                    task.id, task.project_id
                ),
            ));
        }
        if let Some(assignee) = &task.assignee {
            if !resource_ids.contains(assignee.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownReference,
                    format!("Task '{}' is assigned to unknown resource '{}'", task.id, assignee),
                ));
            }
        }
        if let Some(predecessor) = &task.predecessor {
            if !task_ids.contains(predecessor.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownReference,
                    format!(
                        "Task '{}' references unknown predecessor '{}'",
                        task.id, predecessor
                    ),
                ));
            }
        }
        for skill_id in &task.required_skills {
            if !skill_ids.contains(skill_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownReference,
                    format!("Task '{}' requires unknown skill '{}'", task.id, skill_id),
                ));
            }
        }
        if task.completion > 100 {
            errors.push(ValidationError::new(
                ValidationErrorKind::CompletionOutOfRange,
                format!(
                    "Task '{}' has completion {} (must be 0-100)",
                    task.id, task.completion
                ),
            ));
        }
        if task.end < task.start {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedDates,
                format!(
                    "Task '{}' ends {} before it starts {}",
                    task.id, task.end, task.start
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
