//! Bills and payment state.

use crate::activity::ActivityKind;
use crate::clock;
use crate::customer::CustomerRef;
use crate::desk::Desk;
use crate::error::{DeskError, DeskResult};
use crate::types::{BillId, CustomerId};
use crate::validate::{require_amount, require_text};
use serde::{Deserialize, Serialize};

/// A bill row as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillRecord {
    pub bill_id: BillId,
    pub customer_id: CustomerId,
    pub amount: f64,
    pub due_date: String,
    pub paid: bool,
    pub payment_date: Option<String>,
}

/// A bill joined with the customer name and a derived Paid/Unpaid label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillRow {
    pub bill_id: BillId,
    pub customer_name: String,
    pub amount: f64,
    pub due_date: String,
    pub status: String,
}

/// Outcome of [`Desk::mark_bill_paid`]. Already-paid is reported distinctly,
/// not as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentOutcome {
    Paid,
    AlreadyPaid,
}

impl Desk {
    /// Issue a bill to an existing customer. The due date is caller-supplied
    /// text and is not parsed as a calendar date.
    pub fn generate_bill(
        &mut self,
        customer: &CustomerRef,
        amount: f64,
        due_date: &str,
    ) -> DeskResult<BillId> {
        require_amount("amount", amount)?;
        require_text("due date", due_date)?;
        let target = self.resolve_customer(customer)?;
        let id = self.store.insert_bill(target.customer_id, amount, due_date)?;
        log::info!("generated bill {id} for customer {}", target.customer_id);
        self.activity.record(
            ActivityKind::Billing,
            format!("Generated bill for: {}", target.name),
        );
        Ok(id)
    }

    /// Mark a bill paid, stamping the payment date exactly once. Paying an
    /// already-paid bill changes nothing and says so.
    pub fn mark_bill_paid(&mut self, id: BillId) -> DeskResult<PaymentOutcome> {
        let Some(bill) = self.store.get_bill(id)? else {
            return Err(DeskError::NotFound(format!("bill {id}")));
        };
        if bill.paid {
            log::warn!("bill {id} is already paid");
            return Ok(PaymentOutcome::AlreadyPaid);
        }
        self.store.mark_bill_paid(id, &clock::date_stamp())?;
        let name = self
            .store
            .get_customer(bill.customer_id)?
            .map(|c| c.name)
            .unwrap_or_else(|| bill.customer_id.to_string());
        log::info!("marked bill {id} paid");
        self.activity.record(
            ActivityKind::Billing,
            format!("Marked bill #{id} as paid for {name}"),
        );
        Ok(PaymentOutcome::Paid)
    }

    /// All bills in issue order, joined with customer names.
    pub fn bills(&self) -> DeskResult<Vec<BillRow>> {
        self.store.bills_with_customer()
    }

    pub fn get_bill(&self, id: BillId) -> DeskResult<Option<BillRecord>> {
        self.store.get_bill(id)
    }
}
