use super::DeskStore;
use crate::customer::{CustomerRecord, CustomerRow};
use crate::error::DeskResult;
use crate::types::{CustomerId, PlanId};
use rusqlite::{params, OptionalExtension};

fn customer_row_mapper(row: &rusqlite::Row<'_>) -> rusqlite::Result<CustomerRecord> {
    Ok(CustomerRecord {
        customer_id: row.get(0)?,
        name: row.get(1)?,
        address: row.get(2)?,
        phone: row.get(3)?,
        email: row.get(4)?,
        plan_id: row.get(5)?,
        registration_date: row.get(6)?,
    })
}

impl DeskStore {
    pub fn insert_customer(
        &self,
        name: &str,
        address: &str,
        phone: &str,
        email: &str,
        plan_id: Option<PlanId>,
        registration_date: &str,
    ) -> DeskResult<CustomerId> {
        self.conn.execute(
            "INSERT INTO customers (name, address, phone, email, plan_id, registration_date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![name, address, phone, email, plan_id, registration_date],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Returns the number of rows changed (0 when the id is unknown).
    /// The registration date is never touched here.
    pub fn update_customer(
        &self,
        id: CustomerId,
        name: &str,
        address: &str,
        phone: &str,
        email: &str,
        plan_id: Option<PlanId>,
    ) -> DeskResult<usize> {
        let changed = self.conn.execute(
            "UPDATE customers
             SET name = ?1, address = ?2, phone = ?3, email = ?4, plan_id = ?5
             WHERE customer_id = ?6",
            params![name, address, phone, email, plan_id, id],
        )?;
        Ok(changed)
    }

    /// Delete a customer and everything referencing it as one atomic unit.
    /// Returns (complaints deleted, bills deleted), or None when the id is
    /// unknown — in which case nothing is removed.
    pub fn delete_customer_cascade(
        &mut self,
        id: CustomerId,
    ) -> DeskResult<Option<(usize, usize)>> {
        let tx = self.conn.transaction()?;
        let complaints = tx.execute("DELETE FROM complaints WHERE customer_id = ?1", params![id])?;
        let bills = tx.execute("DELETE FROM billing WHERE customer_id = ?1", params![id])?;
        let customers = tx.execute("DELETE FROM customers WHERE customer_id = ?1", params![id])?;
        if customers == 0 {
            tx.rollback()?;
            return Ok(None);
        }
        tx.commit()?;
        Ok(Some((complaints, bills)))
    }

    pub fn get_customer(&self, id: CustomerId) -> DeskResult<Option<CustomerRecord>> {
        self.conn
            .query_row(
                "SELECT customer_id, name, address, phone, email, plan_id, registration_date
                 FROM customers WHERE customer_id = ?1",
                params![id],
                customer_row_mapper,
            )
            .optional()
            .map_err(Into::into)
    }

    /// First customer with this exact name; lowest id wins on duplicates.
    pub fn find_customer_by_name(&self, name: &str) -> DeskResult<Option<CustomerRecord>> {
        self.conn
            .query_row(
                "SELECT customer_id, name, address, phone, email, plan_id, registration_date
                 FROM customers WHERE name = ?1
                 ORDER BY customer_id ASC LIMIT 1",
                params![name],
                customer_row_mapper,
            )
            .optional()
            .map_err(Into::into)
    }

    pub fn customers_with_plan(&self) -> DeskResult<Vec<CustomerRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT c.customer_id, c.name, c.address, c.phone, c.email,
                    c.plan_id, c.registration_date, p.name
             FROM customers c LEFT JOIN plans p ON c.plan_id = p.plan_id
             ORDER BY c.customer_id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(CustomerRow {
                customer_id: row.get(0)?,
                name: row.get(1)?,
                address: row.get(2)?,
                phone: row.get(3)?,
                email: row.get(4)?,
                plan_id: row.get(5)?,
                registration_date: row.get(6)?,
                plan_name: row.get(7)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub fn customer_count(&self) -> DeskResult<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM customers", [], |row| row.get(0))
            .map_err(Into::into)
    }

    /// Customers with a plan reference count as active.
    pub fn active_customer_count(&self) -> DeskResult<i64> {
        self.conn
            .query_row(
                "SELECT COUNT(*) FROM customers WHERE plan_id IS NOT NULL",
                [],
                |row| row.get(0),
            )
            .map_err(Into::into)
    }

    /// Most recent registrations, (name, registration_date) pairs.
    pub fn recent_registrations(&self, limit: usize) -> DeskResult<Vec<(String, String)>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, registration_date FROM customers
             ORDER BY registration_date DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
