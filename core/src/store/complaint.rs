use super::DeskStore;
use crate::complaint::{ComplaintRecord, ComplaintRow, ComplaintStatus};
use crate::error::DeskResult;
use crate::types::{ComplaintId, CustomerId};
use rusqlite::{params, OptionalExtension};

fn read_status(idx: usize, raw: String) -> rusqlite::Result<ComplaintStatus> {
    ComplaintStatus::parse(&raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            format!("unknown complaint status '{raw}'").into(),
        )
    })
}

fn complaint_row_mapper(row: &rusqlite::Row<'_>) -> rusqlite::Result<ComplaintRecord> {
    Ok(ComplaintRecord {
        complaint_id: row.get(0)?,
        customer_id: row.get(1)?,
        description: row.get(2)?,
        date: row.get(3)?,
        status: read_status(4, row.get(4)?)?,
        resolution: row.get(5)?,
    })
}

impl DeskStore {
    pub fn insert_complaint(
        &self,
        customer_id: CustomerId,
        description: &str,
        date: &str,
        status: ComplaintStatus,
    ) -> DeskResult<ComplaintId> {
        self.conn.execute(
            "INSERT INTO complaints (customer_id, description, date, status)
             VALUES (?1, ?2, ?3, ?4)",
            params![customer_id, description, date, status.as_str()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Full overwrite of the mutable fields; the filing date stays.
    /// Returns the number of rows changed (0 when the id is unknown).
    pub fn update_complaint(
        &self,
        id: ComplaintId,
        customer_id: CustomerId,
        description: &str,
        status: ComplaintStatus,
        resolution: Option<&str>,
    ) -> DeskResult<usize> {
        let changed = self.conn.execute(
            "UPDATE complaints
             SET customer_id = ?1, description = ?2, status = ?3, resolution = ?4
             WHERE complaint_id = ?5",
            params![customer_id, description, status.as_str(), resolution, id],
        )?;
        Ok(changed)
    }

    /// Force status to Resolved and store the resolution text.
    pub fn resolve_complaint(&self, id: ComplaintId, resolution: &str) -> DeskResult<usize> {
        let changed = self.conn.execute(
            "UPDATE complaints SET status = 'Resolved', resolution = ?1
             WHERE complaint_id = ?2",
            params![resolution, id],
        )?;
        Ok(changed)
    }

    pub fn get_complaint(&self, id: ComplaintId) -> DeskResult<Option<ComplaintRecord>> {
        self.conn
            .query_row(
                "SELECT complaint_id, customer_id, description, date, status, resolution
                 FROM complaints WHERE complaint_id = ?1",
                params![id],
                complaint_row_mapper,
            )
            .optional()
            .map_err(Into::into)
    }

    pub fn complaints_with_customer(&self) -> DeskResult<Vec<ComplaintRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT co.complaint_id, c.name, co.date, co.status, co.description, co.resolution
             FROM complaints co JOIN customers c ON co.customer_id = c.customer_id
             ORDER BY co.complaint_id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(ComplaintRow {
                complaint_id: row.get(0)?,
                customer_name: row.get(1)?,
                date: row.get(2)?,
                status: read_status(3, row.get(3)?)?,
                description: row.get(4)?,
                resolution: row.get(5)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Open for dashboard purposes means anything not yet resolved.
    pub fn open_complaint_count(&self) -> DeskResult<i64> {
        self.conn
            .query_row(
                "SELECT COUNT(*) FROM complaints WHERE status != 'Resolved'",
                [],
                |row| row.get(0),
            )
            .map_err(Into::into)
    }

    pub fn resolved_complaint_count(&self) -> DeskResult<i64> {
        self.conn
            .query_row(
                "SELECT COUNT(*) FROM complaints WHERE status = 'Resolved'",
                [],
                |row| row.get(0),
            )
            .map_err(Into::into)
    }

    /// Most recent complaints, (customer name, description, date) triples.
    pub fn recent_complaints(&self, limit: usize) -> DeskResult<Vec<(String, String, String)>> {
        let mut stmt = self.conn.prepare(
            "SELECT c.name, co.description, co.date
             FROM complaints co JOIN customers c ON co.customer_id = c.customer_id
             ORDER BY co.date DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?))
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
