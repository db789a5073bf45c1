//! Service plans.

use crate::activity::ActivityKind;
use crate::desk::Desk;
use crate::error::{DeskError, DeskResult};
use crate::types::PlanId;
use crate::validate::{require_amount, require_text};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRecord {
    pub plan_id: PlanId,
    pub name: String,
    pub speed: String,
    pub price: f64,
    pub data_limit: Option<String>,
    pub description: Option<String>,
}

impl Desk {
    pub fn add_plan(
        &mut self,
        name: &str,
        speed: &str,
        price: f64,
        data_limit: Option<&str>,
        description: Option<&str>,
    ) -> DeskResult<PlanId> {
        validate_plan_fields(name, speed, price)?;
        let id = self
            .store
            .insert_plan(name, speed, price, data_limit, description)?;
        log::info!("added plan {id} ({name})");
        self.activity
            .record(ActivityKind::Plan, format!("Added plan: {name}"));
        Ok(id)
    }

    pub fn update_plan(
        &mut self,
        id: PlanId,
        name: &str,
        speed: &str,
        price: f64,
        data_limit: Option<&str>,
        description: Option<&str>,
    ) -> DeskResult<()> {
        validate_plan_fields(name, speed, price)?;
        let changed = self
            .store
            .update_plan(id, name, speed, price, data_limit, description)?;
        if changed == 0 {
            return Err(DeskError::NotFound(format!("plan {id}")));
        }
        log::info!("updated plan {id} ({name})");
        self.activity
            .record(ActivityKind::Plan, format!("Updated plan: {name}"));
        Ok(())
    }

    /// Delete a plan unless customers still reference it. The guard blocks,
    /// it never cascades.
    pub fn delete_plan(&mut self, id: PlanId) -> DeskResult<()> {
        let Some(record) = self.store.get_plan(id)? else {
            return Err(DeskError::NotFound(format!("plan {id}")));
        };
        let subscribers = self.store.plan_customer_count(id)?;
        if subscribers > 0 {
            let noun = if subscribers == 1 { "customer" } else { "customers" };
            return Err(DeskError::Conflict(format!(
                "{subscribers} {noun} still on plan '{}'",
                record.name
            )));
        }
        self.store.delete_plan(id)?;
        log::info!("deleted plan {id} ({})", record.name);
        self.activity
            .record(ActivityKind::Plan, format!("Deleted plan: {}", record.name));
        Ok(())
    }

    /// All plans in insertion order.
    pub fn plans(&self) -> DeskResult<Vec<PlanRecord>> {
        self.store.plans()
    }

    pub fn get_plan(&self, id: PlanId) -> DeskResult<Option<PlanRecord>> {
        self.store.get_plan(id)
    }

    /// The plan with the most subscribers, ties broken by lowest plan id.
    /// `None` when no plan has any customers.
    pub fn most_popular_plan(&self) -> DeskResult<Option<(PlanRecord, i64)>> {
        self.store.most_popular_plan()
    }
}

fn validate_plan_fields(name: &str, speed: &str, price: f64) -> DeskResult<()> {
    require_text("name", name)?;
    require_text("speed", speed)?;
    require_amount("price", price)?;
    Ok(())
}
