//! Complaints and their lifecycle.
//!
//! Status is a closed set. Any status may be set directly through add or
//! update; only `resolve_complaint` forces Resolved, and it insists on a
//! resolution text.

use crate::activity::ActivityKind;
use crate::clock;
use crate::customer::CustomerRef;
use crate::desk::Desk;
use crate::error::{DeskError, DeskResult};
use crate::types::{ComplaintId, CustomerId};
use crate::validate::require_text;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub const ALL: [ComplaintStatus; 3] = [Self::Open, Self::InProgress, Self::Resolved];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Open" => Some(Self::Open),
            "In Progress" => Some(Self::InProgress),
            "Resolved" => Some(Self::Resolved),
            _ => None,
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complaint row as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintRecord {
    pub complaint_id: ComplaintId,
    pub customer_id: CustomerId,
    pub description: String,
    pub date: String,
    pub status: ComplaintStatus,
    pub resolution: Option<String>,
}

/// A complaint joined with the customer's display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintRow {
    pub complaint_id: ComplaintId,
    pub customer_name: String,
    pub date: String,
    pub status: ComplaintStatus,
    pub description: String,
    pub resolution: Option<String>,
}

impl Desk {
    /// File a complaint against an existing customer. The filing date is
    /// stamped at call time and never changes.
    pub fn add_complaint(
        &mut self,
        customer: &CustomerRef,
        description: &str,
        status: ComplaintStatus,
    ) -> DeskResult<ComplaintId> {
        require_text("description", description)?;
        let target = self.resolve_customer(customer)?;
        let id = self.store.insert_complaint(
            target.customer_id,
            description,
            &clock::timestamp(),
            status,
        )?;
        log::info!("added complaint {id} for customer {}", target.customer_id);
        self.activity.record(
            ActivityKind::Complaint,
            format!("Added complaint for: {}", target.name),
        );
        Ok(id)
    }

    /// Overwrite a complaint's mutable fields. The filing date is untouched.
    pub fn update_complaint(
        &mut self,
        id: ComplaintId,
        customer: &CustomerRef,
        description: &str,
        status: ComplaintStatus,
        resolution: Option<&str>,
    ) -> DeskResult<()> {
        require_text("description", description)?;
        let target = self.resolve_customer(customer)?;
        let changed = self.store.update_complaint(
            id,
            target.customer_id,
            description,
            status,
            resolution,
        )?;
        if changed == 0 {
            return Err(DeskError::NotFound(format!("complaint {id}")));
        }
        log::info!("updated complaint {id}");
        self.activity
            .record(ActivityKind::Complaint, format!("Updated complaint #{id}"));
        Ok(())
    }

    /// Mark a complaint resolved. Requires a non-empty resolution text; safe
    /// to call again to replace the resolution.
    pub fn resolve_complaint(&mut self, id: ComplaintId, resolution: &str) -> DeskResult<()> {
        require_text("resolution", resolution)?;
        let changed = self.store.resolve_complaint(id, resolution)?;
        if changed == 0 {
            return Err(DeskError::NotFound(format!("complaint {id}")));
        }
        log::info!("resolved complaint {id}");
        self.activity
            .record(ActivityKind::Complaint, format!("Resolved complaint #{id}"));
        Ok(())
    }

    /// All complaints in filing order, joined with customer names.
    pub fn complaints(&self) -> DeskResult<Vec<ComplaintRow>> {
        self.store.complaints_with_customer()
    }

    pub fn get_complaint(&self, id: ComplaintId) -> DeskResult<Option<ComplaintRecord>> {
        self.store.get_complaint(id)
    }

    /// Complaints not yet resolved.
    pub fn open_complaint_count(&self) -> DeskResult<i64> {
        self.store.open_complaint_count()
    }

    pub fn resolved_complaint_count(&self) -> DeskResult<i64> {
        self.store.resolved_complaint_count()
    }
}
