//! Dashboard KPIs and per-resource reporting.
//!
//! Aggregations the management screens display: headline counters with
//! chart-ready groupings (`DashboardKpi`), and per-resource task lists
//! with workload statistics (`resource_report`).
//!
//! Both operate on plain slices of domain data; callers load the dataset
//! however they like (typically [`InMemoryStore`](crate::store::InMemoryStore)
//! accessors) and pass it in. Nothing here touches the store trait.

mod kpi;
mod report;

pub use kpi::{CostCenterGroup, DashboardKpi, ResourceLoad};
pub use report::{resource_report, ReportEntry, ReportFilter, ResourceReport, TaskStats};
