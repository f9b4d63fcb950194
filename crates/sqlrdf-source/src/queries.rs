//! Read operations: table listing, schema introspection, row materialization.

use rusqlite::params;

use crate::client::{quote_ident, Result, SqliteSource};
use crate::schema::{Column, Row, Table, Value};

/// A relational database the converter can read from.
///
/// Implementations must keep `content_of_table` positionally aligned with
/// `schema_of_table` for the same table, and must treat a table that does
/// not exist as having no columns and no rows.
pub trait RelationalSource {
    /// Names of all user tables.
    fn table_names(&self) -> Result<Vec<String>>;

    /// Ordered column descriptors of `table`; empty if the table does not exist.
    fn schema_of_table(&self, table: &str) -> Result<Vec<Column>>;

    /// All rows of `table` in storage order; empty if the table does not exist.
    fn content_of_table(&self, table: &str) -> Result<Vec<Row>>;

    /// Columns and rows of `table` together.
    fn read_table(&self, table: &str) -> Result<Table> {
        Ok(Table {
            name: table.to_string(),
            columns: self.schema_of_table(table)?,
            rows: self.content_of_table(table)?,
        })
    }
}

impl RelationalSource for SqliteSource {
    fn table_names(&self) -> Result<Vec<String>> {
        let mut stmt = self.inner().prepare(
            "SELECT name FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite\\_%' ESCAPE '\\'
             ORDER BY name",
        )?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        tracing::debug!(count = names.len(), "Listed tables");
        Ok(names)
    }

    fn schema_of_table(&self, table: &str) -> Result<Vec<Column>> {
        let mut stmt = self
            .inner()
            .prepare("SELECT name, type FROM pragma_table_info(?1) ORDER BY cid")?;
        let columns = stmt
            .query_map(params![table], |row| {
                let name: String = row.get(0)?;
                let declared: String = row.get(1)?;
                Ok(Column::new(&name, &declared))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        if columns.is_empty() {
            tracing::debug!(table, "Table has no columns or does not exist");
        }
        Ok(columns)
    }

    fn content_of_table(&self, table: &str) -> Result<Vec<Row>> {
        if self.schema_of_table(table)?.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!("SELECT * FROM {}", quote_ident(table));
        let mut stmt = self.inner().prepare(&sql)?;
        let width = stmt.column_count();
        let rows = stmt
            .query_map([], |row| {
                let mut values = Vec::with_capacity(width);
                for idx in 0..width {
                    values.push(Value::from(row.get_ref(idx)?));
                }
                Ok(Row::new(values))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        tracing::debug!(table, rows = rows.len(), "Materialized table");
        Ok(rows)
    }
}
