// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Closed, crate-owned versions of the record states handed over by the
//! data layer. Collaborators map into these at the boundary via `FromStr`
//! (or serde, which uses the same SCREAMING_SNAKE_CASE spelling).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle state stored on a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    #[default]
    Active,
    InProgress,
    Review,
    OverDue,
    Complete,
    Cancelled,
}

/// Lifecycle state stored on a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    #[default]
    Open,
    InProgress,
    Submitted,
    Complete,
    Cancelled,
}

impl RequestStatus {
    /// COMPLETE and CANCELLED requests need no further work
    pub fn is_closed(self) -> bool {
        matches!(self, RequestStatus::Complete | RequestStatus::Cancelled)
    }
}

/// Display status computed for a project — never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DerivedStatus {
    Cancelled,
    Complete,
    OverDue,
    Review,
    InProgress,
}

/// Coarse document category of an uploaded file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileType {
    Excel,
    Word,
    Pdf,
    Csv,
    #[default]
    Other,
}

macro_rules! wire_names {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Wire spelling used by the data layer
            pub fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok($ty::$variant),)+
                    other => Err(CoreError::UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

wire_names!(ProjectStatus, "project status", {
    Active => "ACTIVE",
    InProgress => "IN_PROGRESS",
    Review => "REVIEW",
    OverDue => "OVER_DUE",
    Complete => "COMPLETE",
    Cancelled => "CANCELLED",
});

wire_names!(RequestStatus, "request status", {
    Open => "OPEN",
    InProgress => "IN_PROGRESS",
    Submitted => "SUBMITTED",
    Complete => "COMPLETE",
    Cancelled => "CANCELLED",
});

wire_names!(DerivedStatus, "derived status", {
    Cancelled => "CANCELLED",
    Complete => "COMPLETE",
    OverDue => "OVER_DUE",
    Review => "REVIEW",
    InProgress => "IN_PROGRESS",
});

wire_names!(FileType, "file type", {
    Excel => "EXCEL",
    Word => "WORD",
    Pdf => "PDF",
    Csv => "CSV",
    Other => "OTHER",
});
