// src/status.rs
//! Project status derivation
//!
//! Turns a stored project status plus its requests into the status shown
//! on dashboards. Pure: the caller supplies `now`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{DerivedStatus, ProjectStatus, RequestStatus};

/// A request attached to a project, as handed over by the data layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub status: RequestStatus,
    pub due_date: DateTime<Utc>,
}

impl Request {
    pub fn new(status: RequestStatus, due_date: DateTime<Utc>) -> Self {
        Self { status, due_date }
    }

    /// Still open and past its due date
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.status.is_closed() && self.due_date < now
    }
}

/// A project with its child requests included
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub status: ProjectStatus,
    #[serde(rename = "Request", default)]
    pub requests: Option<Vec<Request>>,
}

impl Project {
    pub fn new(status: ProjectStatus, requests: Option<Vec<Request>>) -> Self {
        Self { status, requests }
    }

    pub fn derived_status(&self, now: DateTime<Utc>) -> DerivedStatus {
        resolve(self.status, self.requests.as_deref(), now)
    }
}

/// Derive the display status of a project
///
/// Cancelled and complete projects report as such. Otherwise any overdue
/// open request wins, then a fully closed request list means the project
/// is waiting on review. Everything else, including a project with no
/// requests at all, is in progress.
pub fn resolve(
    status: ProjectStatus,
    requests: Option<&[Request]>,
    now: DateTime<Utc>,
) -> DerivedStatus {
    match status {
        ProjectStatus::Cancelled => return DerivedStatus::Cancelled,
        ProjectStatus::Complete => return DerivedStatus::Complete,
        _ => {}
    }

    let Some(requests) = requests.filter(|r| !r.is_empty()) else {
        return DerivedStatus::InProgress;
    };

    if requests.iter().any(|r| r.is_overdue(now)) {
        return DerivedStatus::OverDue;
    }
    if requests.iter().all(|r| r.status.is_closed()) {
        return DerivedStatus::Review;
    }
    DerivedStatus::InProgress
}
