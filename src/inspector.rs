//! Sequential schema report over a [`SupabaseRestClient`].
//!
//! Every request is awaited before the next one is sent. A failed request is
//! reported inline and the run moves on; only a failing writer aborts it.

use crate::errors::AppError;
use crate::models::TableProbe;
use crate::supabase_client::SupabaseRestClient;
use std::io::{self, Write};

pub const DEFAULT_SCHEMA: &str = "public";

/// Tables whose column layout `check-db` prints.
pub const MAIN_TABLES: [&str; 5] = ["shops", "products", "discount_infos", "users", "profiles"];

/// Tables probed by `check-tables`.
pub const SURVEY_TABLES: [&str; 14] = [
    "users",
    "profiles",
    "shops",
    "brands",
    "categories",
    "products",
    "discounts",
    "discount_info",
    "discount_events",
    "subscriptions",
    "shop_subscriptions",
    "brand_subscriptions",
    "notifications",
    "translations",
];

pub struct SchemaInspector {
    client: SupabaseRestClient,
    schema: String,
    tables: Vec<String>,
}

impl SchemaInspector {
    /// Inspector over the `public` schema and [`MAIN_TABLES`].
    pub fn new(client: SupabaseRestClient) -> Self {
        Self {
            client,
            schema: DEFAULT_SCHEMA.to_string(),
            tables: MAIN_TABLES.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn with_tables(mut self, tables: &[&str]) -> Self {
        self.tables = tables.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn tables(&self) -> &[String] {
        &self.tables
    }

    /// Prints the table list of the schema, then the columns of each configured table.
    pub async fn run<W: Write>(&self, out: &mut W) -> io::Result<()> {
        tracing::info!(
            "Inspecting schema '{}' at {}",
            self.schema,
            self.client.base_url()
        );
        writeln!(out, "🔍 Checking Supabase database table structure...")?;

        self.print_tables(out).await?;

        for table in &self.tables {
            self.print_columns(table, out).await?;
        }

        writeln!(out, "\n✅ Database structure check complete!")?;
        Ok(())
    }

    /// Wider survey: table list, a one-row probe per configured table, every
    /// column of the schema grouped by table, then the realtime subscriptions.
    pub async fn survey<W: Write>(&self, out: &mut W) -> io::Result<()> {
        tracing::info!(
            "Surveying {} tables in schema '{}'",
            self.tables.len(),
            self.schema
        );
        writeln!(out, "🗄️ Checking Supabase table layout...")?;

        self.print_tables(out).await?;

        writeln!(out, "\n🔍 Individual tables:")?;
        for table in &self.tables {
            self.print_probe(table, out).await?;
        }

        self.print_schema_columns(out).await?;
        self.print_realtime(out).await?;

        writeln!(out, "\n✅ Table survey complete!")?;
        Ok(())
    }

    async fn print_tables<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n📋 Tables:")?;

        match self.client.list_tables(&self.schema).await {
            Ok(tables) => {
                for table in tables {
                    writeln!(out, "  • {}", table.table_name)?;
                }
            }
            Err(AppError::UnexpectedStatus { status, body }) => {
                writeln!(out, "❌ Failed to list tables: {}", status)?;
                writeln!(out, "{}", body)?;
            }
            Err(e) => {
                tracing::error!("Table listing failed: {}", e);
                writeln!(out, "❌ Error: {}", e)?;
            }
        }

        Ok(())
    }

    async fn print_columns<W: Write>(&self, table: &str, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n🔍 Columns of table {}:", table)?;

        match self.client.list_columns(table, &self.schema).await {
            Ok(columns) if columns.is_empty() => {
                writeln!(out, "  ❌ Table {} does not exist.", table)?;
            }
            Ok(columns) => {
                for column in columns {
                    writeln!(out, "  • {}", column.describe())?;
                }
            }
            Err(AppError::UnexpectedStatus { status, .. }) => {
                writeln!(out, "  ❌ Failed to fetch columns: {}", status)?;
            }
            Err(e) => {
                tracing::error!("Column listing for {} failed: {}", table, e);
                writeln!(out, "  ❌ Error: {}", e)?;
            }
        }

        Ok(())
    }

    async fn print_probe<W: Write>(&self, table: &str, out: &mut W) -> io::Result<()> {
        match self.client.probe_table(table).await {
            Ok(TableProbe::Populated) => writeln!(out, "  ✅ {} - exists (has data)", table),
            Ok(TableProbe::Empty) => writeln!(out, "  ✅ {} - exists (no data)", table),
            Ok(TableProbe::Missing) => writeln!(out, "  ❌ {} - does not exist", table),
            Ok(TableProbe::Failed(status)) => {
                writeln!(out, "  ⚠️ {} - error: {}", table, status)
            }
            Err(e) => {
                tracing::error!("Probe of {} failed: {}", table, e);
                writeln!(out, "  ⚠️ {} - error: {}", table, e)
            }
        }
    }

    async fn print_schema_columns<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n📊 Columns:")?;

        let columns = match self.client.list_schema_columns(&self.schema).await {
            Ok(columns) => columns,
            Err(AppError::UnexpectedStatus { status, .. }) => {
                return writeln!(out, "❌ Failed to fetch columns: {}", status);
            }
            Err(e) => return writeln!(out, "❌ Error: {}", e),
        };

        let mut current_table: Option<&str> = None;
        for record in &columns {
            if current_table != Some(record.table_name.as_str()) {
                writeln!(out, "\n📋 Table: {}", record.table_name)?;
                current_table = Some(record.table_name.as_str());
            }
            writeln!(out, "  - {}", record.column.describe())?;
        }

        Ok(())
    }

    async fn print_realtime<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n🔴 Realtime settings:")?;

        match self.client.probe_realtime().await {
            Ok(raw) => {
                writeln!(out, "Realtime table response: {}", raw.status)?;
                if raw.is_success() {
                    writeln!(out, "Realtime subscriptions: {}", raw.body)?;
                }
            }
            Err(e) => {
                // Usually hidden from the anon key
                tracing::debug!("Realtime lookup failed: {}", e);
                writeln!(out, "Realtime info not accessible (expected)")?;
            }
        }

        Ok(())
    }
}
