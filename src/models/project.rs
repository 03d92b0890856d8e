//! Project model.
//!
//! A project is a dated engagement for a client, owning a set of tasks.
//! Projects carry a cost center and a business unit; both drive the
//! dashboard groupings in [`reporting`](crate::reporting). The engine
//! itself never reads projects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Business unit a project belongs to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum BusinessUnit {
    #[default]
    Automation,
    Telecommunications,
    Energy,
}

impl BusinessUnit {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Automation => "Automation",
            Self::Telecommunications => "Telecommunications",
            Self::Energy => "Energy",
        }
    }
}

/// A dated engagement owning tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier.
    pub id: String,
    /// Project name.
    pub name: String,
    /// Accounting cost center (e.g. "AU43388").
    pub cost_center: String,
    /// Owning business unit.
    pub business_unit: BusinessUnit,
    /// Client name, if assigned.
    pub client: Option<String>,
    /// Planned start date.
    pub start: NaiveDate,
    /// Estimated completion date.
    pub estimated_end: NaiveDate,
    /// Free-form description.
    pub description: String,
}

impl Project {
    /// Creates a new project with default dates and the "General" cost center.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost_center: "General".to_string(),
            business_unit: BusinessUnit::default(),
            client: None,
            start: NaiveDate::default(),
            estimated_end: NaiveDate::default(),
            description: String::new(),
        }
    }

    /// Sets the planned start and estimated end dates.
    pub fn with_dates(mut self, start: NaiveDate, estimated_end: NaiveDate) -> Self {
        self.start = start;
        self.estimated_end = estimated_end;
        self
    }

    /// Sets the cost center.
    pub fn with_cost_center(mut self, cost_center: impl Into<String>) -> Self {
        self.cost_center = cost_center.into();
        self
    }

    /// Sets the business unit.
    pub fn with_business_unit(mut self, unit: BusinessUnit) -> Self {
        self.business_unit = unit;
        self
    }

    /// Sets the client.
    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
