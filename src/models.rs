use serde::Deserialize;
use std::fmt;

/// Value `information_schema.columns.is_nullable` holds for nullable columns.
pub const NULLABLE_MARKER: &str = "YES";

/// One row of `information_schema.tables`, narrowed to `select=table_name`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableRecord {
    pub table_name: String,
}

/// One row of `information_schema.columns`, narrowed to
/// `select=column_name,data_type,is_nullable`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnRecord {
    pub column_name: String,
    pub data_type: String,
    pub is_nullable: String,
}

impl ColumnRecord {
    pub fn nullability(&self) -> Nullability {
        Nullability::from_marker(&self.is_nullable)
    }

    /// Renders the column as `name: type (NULL|NOT NULL)`.
    pub fn describe(&self) -> String {
        format!(
            "{}: {} ({})",
            self.column_name,
            self.data_type,
            self.nullability()
        )
    }
}

/// Column row that also carries its table, used by the schema-wide listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableColumnRecord {
    pub table_name: String,
    #[serde(flatten)]
    pub column: ColumnRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nullability {
    Nullable,
    NotNull,
}

impl Nullability {
    /// Anything other than the exact affirmative marker counts as NOT NULL.
    pub fn from_marker(raw: &str) -> Self {
        if raw == NULLABLE_MARKER {
            Nullability::Nullable
        } else {
            Nullability::NotNull
        }
    }
}

impl fmt::Display for Nullability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nullability::Nullable => f.write_str("NULL"),
            Nullability::NotNull => f.write_str("NOT NULL"),
        }
    }
}

/// Status and unparsed body of a response whose shape is not known in advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outcome of a single-row select against a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableProbe {
    /// Table answered with at least one row.
    Populated,
    /// Table exists but returned `[]`.
    Empty,
    /// PostgREST answered 404.
    Missing,
    /// Any other non-success status.
    Failed(u16),
}

impl TableProbe {
    /// Classifies a probe response from its status code and body.
    pub fn classify(status: u16, body: &str) -> Self {
        match status {
            200..=299 if body.trim() == "[]" => TableProbe::Empty,
            200..=299 => TableProbe::Populated,
            404 => TableProbe::Missing,
            other => TableProbe::Failed(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, data_type: &str, is_nullable: &str) -> ColumnRecord {
        ColumnRecord {
            column_name: name.to_string(),
            data_type: data_type.to_string(),
            is_nullable: is_nullable.to_string(),
        }
    }

    #[test]
    fn test_describe_not_null() {
        assert_eq!(column("id", "uuid", "NO").describe(), "id: uuid (NOT NULL)");
    }

    #[test]
    fn test_describe_nullable() {
        assert_eq!(
            column("bio", "text", "YES").describe(),
            "bio: text (NULL)"
        );
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        assert_eq!(Nullability::from_marker("yes"), Nullability::NotNull);
        assert_eq!(Nullability::from_marker(""), Nullability::NotNull);
        assert_eq!(Nullability::from_marker("YES"), Nullability::Nullable);
    }

    #[test]
    fn test_table_column_record_deserializes_flat() {
        let record: TableColumnRecord = serde_json::from_value(serde_json::json!({
            "table_name": "shops",
            "column_name": "id",
            "data_type": "uuid",
            "is_nullable": "NO"
        }))
        .unwrap();

        assert_eq!(record.table_name, "shops");
        assert_eq!(record.column.describe(), "id: uuid (NOT NULL)");
    }

    #[test]
    fn test_column_record_rejects_missing_field() {
        let result: Result<ColumnRecord, _> =
            serde_json::from_value(serde_json::json!({"column_name": "id"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_raw_response_success_range() {
        let raw = |status| RawResponse {
            status,
            body: String::new(),
        };
        assert!(raw(200).is_success());
        assert!(raw(206).is_success());
        assert!(!raw(404).is_success());
        assert!(!raw(500).is_success());
    }

    #[test]
    fn test_probe_classification() {
        assert_eq!(TableProbe::classify(200, "[]"), TableProbe::Empty);
        assert_eq!(TableProbe::classify(200, " [] \n"), TableProbe::Empty);
        assert_eq!(TableProbe::classify(200, "[{\"id\":1}]"), TableProbe::Populated);
        assert_eq!(TableProbe::classify(206, "[{\"id\":1}]"), TableProbe::Populated);
        assert_eq!(TableProbe::classify(404, ""), TableProbe::Missing);
        assert_eq!(TableProbe::classify(401, ""), TableProbe::Failed(401));
    }
}
