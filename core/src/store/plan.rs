use super::DeskStore;
use crate::error::DeskResult;
use crate::plan::PlanRecord;
use crate::types::PlanId;
use rusqlite::{params, OptionalExtension};

fn plan_row_mapper(row: &rusqlite::Row<'_>) -> rusqlite::Result<PlanRecord> {
    Ok(PlanRecord {
        plan_id: row.get(0)?,
        name: row.get(1)?,
        speed: row.get(2)?,
        price: row.get(3)?,
        data_limit: row.get(4)?,
        description: row.get(5)?,
    })
}

impl DeskStore {
    pub fn insert_plan(
        &self,
        name: &str,
        speed: &str,
        price: f64,
        data_limit: Option<&str>,
        description: Option<&str>,
    ) -> DeskResult<PlanId> {
        self.conn.execute(
            "INSERT INTO plans (name, speed, price, data_limit, description)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![name, speed, price, data_limit, description],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Returns the number of rows changed (0 when the id is unknown).
    pub fn update_plan(
        &self,
        id: PlanId,
        name: &str,
        speed: &str,
        price: f64,
        data_limit: Option<&str>,
        description: Option<&str>,
    ) -> DeskResult<usize> {
        let changed = self.conn.execute(
            "UPDATE plans
             SET name = ?1, speed = ?2, price = ?3, data_limit = ?4, description = ?5
             WHERE plan_id = ?6",
            params![name, speed, price, data_limit, description, id],
        )?;
        Ok(changed)
    }

    pub fn delete_plan(&self, id: PlanId) -> DeskResult<usize> {
        let removed = self
            .conn
            .execute("DELETE FROM plans WHERE plan_id = ?1", params![id])?;
        Ok(removed)
    }

    pub fn get_plan(&self, id: PlanId) -> DeskResult<Option<PlanRecord>> {
        self.conn
            .query_row(
                "SELECT plan_id, name, speed, price, data_limit, description
                 FROM plans WHERE plan_id = ?1",
                params![id],
                plan_row_mapper,
            )
            .optional()
            .map_err(Into::into)
    }

    pub fn plans(&self) -> DeskResult<Vec<PlanRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT plan_id, name, speed, price, data_limit, description
             FROM plans ORDER BY plan_id ASC",
        )?;
        let rows = stmt.query_map([], plan_row_mapper)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub fn plan_count(&self) -> DeskResult<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM plans", [], |row| row.get(0))
            .map_err(Into::into)
    }

    /// Customers currently subscribed to this plan.
    pub fn plan_customer_count(&self, id: PlanId) -> DeskResult<i64> {
        self.conn
            .query_row(
                "SELECT COUNT(*) FROM customers WHERE plan_id = ?1",
                params![id],
                |row| row.get(0),
            )
            .map_err(Into::into)
    }

    /// The plan with the most subscribers, ties broken by lowest plan id.
    /// The inner join keeps zero-subscriber plans out, so an empty result
    /// means no plan has any customers.
    pub fn most_popular_plan(&self) -> DeskResult<Option<(PlanRecord, i64)>> {
        self.conn
            .query_row(
                "SELECT p.plan_id, p.name, p.speed, p.price, p.data_limit, p.description,
                        COUNT(c.customer_id) AS subscribers
                 FROM plans p JOIN customers c ON c.plan_id = p.plan_id
                 GROUP BY p.plan_id
                 ORDER BY subscribers DESC, p.plan_id ASC
                 LIMIT 1",
                [],
                |row| Ok((plan_row_mapper(row)?, row.get(6)?)),
            )
            .optional()
            .map_err(Into::into)
    }
}
