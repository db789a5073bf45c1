//! Customer records and the operations on them.

use crate::activity::ActivityKind;
use crate::clock;
use crate::desk::Desk;
use crate::error::{DeskError, DeskResult};
use crate::types::{CustomerId, PlanId};
use crate::validate::require_text;
use serde::{Deserialize, Serialize};

/// A customer row as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub customer_id: CustomerId,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub plan_id: Option<PlanId>,
    pub registration_date: String,
}

/// A customer joined with its plan name for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRow {
    pub customer_id: CustomerId,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub plan_id: Option<PlanId>,
    pub registration_date: String,
    pub plan_name: Option<String>,
}

/// How complaint and billing forms point at a customer.
///
/// Name lookup mirrors the desk forms; on duplicate names the first match
/// (lowest id) wins. Callers wanting to be exact pass `Id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomerRef {
    Id(CustomerId),
    Name(String),
}

impl Desk {
    /// Register a customer. `plan_id`, if given, must reference an existing
    /// plan. The registration date is stamped at call time and never changes.
    pub fn add_customer(
        &mut self,
        name: &str,
        address: &str,
        phone: &str,
        email: &str,
        plan_id: Option<PlanId>,
    ) -> DeskResult<CustomerId> {
        validate_customer_fields(name, address, phone, email)?;
        self.check_plan_ref(plan_id)?;
        let id = self.store.insert_customer(
            name,
            address,
            phone,
            email,
            plan_id,
            &clock::timestamp(),
        )?;
        log::info!("added customer {id} ({name})");
        self.activity
            .record(ActivityKind::Customer, format!("Added customer: {name}"));
        Ok(id)
    }

    /// Overwrite a customer's mutable fields. Registration date is untouched.
    pub fn update_customer(
        &mut self,
        id: CustomerId,
        name: &str,
        address: &str,
        phone: &str,
        email: &str,
        plan_id: Option<PlanId>,
    ) -> DeskResult<()> {
        validate_customer_fields(name, address, phone, email)?;
        self.check_plan_ref(plan_id)?;
        let changed = self
            .store
            .update_customer(id, name, address, phone, email, plan_id)?;
        if changed == 0 {
            return Err(DeskError::NotFound(format!("customer {id}")));
        }
        log::info!("updated customer {id} ({name})");
        self.activity
            .record(ActivityKind::Customer, format!("Updated customer: {name}"));
        Ok(())
    }

    /// Remove a customer together with its complaints and bills, atomically.
    pub fn delete_customer(&mut self, id: CustomerId) -> DeskResult<()> {
        let Some(record) = self.store.get_customer(id)? else {
            return Err(DeskError::NotFound(format!("customer {id}")));
        };
        let Some((complaints, bills)) = self.store.delete_customer_cascade(id)? else {
            return Err(DeskError::NotFound(format!("customer {id}")));
        };
        log::info!(
            "deleted customer {id} ({}) with {complaints} complaints and {bills} bills",
            record.name
        );
        self.activity.record(
            ActivityKind::Customer,
            format!("Deleted customer: {}", record.name),
        );
        Ok(())
    }

    /// All customers in insertion order, joined with their plan name.
    pub fn customers(&self) -> DeskResult<Vec<CustomerRow>> {
        self.store.customers_with_plan()
    }

    pub fn get_customer(&self, id: CustomerId) -> DeskResult<Option<CustomerRecord>> {
        self.store.get_customer(id)
    }

    /// First customer with this exact name. Duplicate names resolve to the
    /// lowest id; see [`CustomerRef`].
    pub fn find_customer_by_name(&self, name: &str) -> DeskResult<Option<CustomerRecord>> {
        self.store.find_customer_by_name(name)
    }

    /// Resolve a form reference to a concrete customer.
    pub(crate) fn resolve_customer(&self, reference: &CustomerRef) -> DeskResult<CustomerRecord> {
        match reference {
            CustomerRef::Id(id) => self
                .store
                .get_customer(*id)?
                .ok_or_else(|| DeskError::Reference(format!("customer {id}"))),
            CustomerRef::Name(name) => self
                .store
                .find_customer_by_name(name)?
                .ok_or_else(|| DeskError::Reference(format!("customer '{name}'"))),
        }
    }

    fn check_plan_ref(&self, plan_id: Option<PlanId>) -> DeskResult<()> {
        if let Some(id) = plan_id {
            if self.store.get_plan(id)?.is_none() {
                return Err(DeskError::Reference(format!("plan {id}")));
            }
        }
        Ok(())
    }
}

fn validate_customer_fields(
    name: &str,
    address: &str,
    phone: &str,
    email: &str,
) -> DeskResult<()> {
    require_text("name", name)?;
    require_text("address", address)?;
    require_text("phone", phone)?;
    require_text("email", email)?;
    Ok(())
}
