use super::DeskStore;
use crate::billing::{BillRecord, BillRow};
use crate::error::DeskResult;
use crate::types::{BillId, CustomerId};
use rusqlite::{params, OptionalExtension};

fn bill_row_mapper(row: &rusqlite::Row<'_>) -> rusqlite::Result<BillRecord> {
    Ok(BillRecord {
        bill_id: row.get(0)?,
        customer_id: row.get(1)?,
        amount: row.get(2)?,
        due_date: row.get(3)?,
        paid: row.get::<_, i32>(4)? != 0,
        payment_date: row.get(5)?,
    })
}

impl DeskStore {
    pub fn insert_bill(
        &self,
        customer_id: CustomerId,
        amount: f64,
        due_date: &str,
    ) -> DeskResult<BillId> {
        self.conn.execute(
            "INSERT INTO billing (customer_id, amount, due_date)
             VALUES (?1, ?2, ?3)",
            params![customer_id, amount, due_date],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_bill(&self, id: BillId) -> DeskResult<Option<BillRecord>> {
        self.conn
            .query_row(
                "SELECT bill_id, customer_id, amount, due_date, paid, payment_date
                 FROM billing WHERE bill_id = ?1",
                params![id],
                bill_row_mapper,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Flip paid and stamp the payment date. The paid guard keeps the stamp
    /// from ever being overwritten.
    pub fn mark_bill_paid(&self, id: BillId, payment_date: &str) -> DeskResult<usize> {
        let changed = self.conn.execute(
            "UPDATE billing SET paid = 1, payment_date = ?1
             WHERE bill_id = ?2 AND paid = 0",
            params![payment_date, id],
        )?;
        Ok(changed)
    }

    pub fn bills_with_customer(&self) -> DeskResult<Vec<BillRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT b.bill_id, c.name, b.amount, b.due_date,
                    CASE WHEN b.paid = 1 THEN 'Paid' ELSE 'Unpaid' END
             FROM billing b JOIN customers c ON b.customer_id = c.customer_id
             ORDER BY b.bill_id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(BillRow {
                bill_id: row.get(0)?,
                customer_name: row.get(1)?,
                amount: row.get(2)?,
                due_date: row.get(3)?,
                status: row.get(4)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
