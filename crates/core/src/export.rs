//! CSV export of tickets.

use serde::Serialize;

use crate::error::CoreError;

/// Export header, in table column order.
pub const TICKET_EXPORT_COLUMNS: &[&str] = &[
    "id",
    "created_at",
    "project_name",
    "department",
    "requester_name",
    "requester_email",
    "description",
    "priority",
    "impact",
    "due_date",
    "attachments",
    "status",
    "manager_comment",
    "estimate_hours",
    "estimate_notes",
    "triaged_by",
    "triaged_at",
];

/// Suggested download name for the export.
pub const EXPORT_FILE_NAME: &str = "tickets.csv";

/// Render `rows` as UTF-8 CSV under the given header.
///
/// The header is written even when there are no rows. Each row must
/// serialize its fields in the same order as `columns`.
pub fn render_csv<T: Serialize>(columns: &[&str], rows: &[T]) -> Result<String, CoreError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(columns).map_err(csv_error)?;
    for row in rows {
        writer.serialize(row).map_err(csv_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CoreError::Internal(format!("CSV flush failed: {e}")))?;
    String::from_utf8(bytes).map_err(|e| CoreError::Internal(format!("CSV is not UTF-8: {e}")))
}

fn csv_error(err: csv::Error) -> CoreError {
    CoreError::Internal(format!("CSV write failed: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        id: i64,
        name: String,
        note: Option<String>,
    }

    #[test]
    fn test_header_written_without_rows() {
        let csv = render_csv::<Row>(&["id", "name", "note"], &[]).unwrap();
        assert_eq!(csv, "id,name,note\n");
    }

    #[test]
    fn test_fields_are_quoted_when_needed() {
        let rows = vec![
            Row {
                id: 2,
                name: "Vendor, portal".to_string(),
                note: None,
            },
            Row {
                id: 1,
                name: "Say \"hi\"".to_string(),
                note: Some("line\nbreak".to_string()),
            },
        ];
        let csv = render_csv(&["id", "name", "note"], &rows).unwrap();
        assert_eq!(
            csv,
            "id,name,note\n2,\"Vendor, portal\",\n1,\"Say \"\"hi\"\"\",\"line\nbreak\"\n"
        );
    }

    #[test]
    fn test_export_columns_start_with_id() {
        assert_eq!(TICKET_EXPORT_COLUMNS.first(), Some(&"id"));
        assert_eq!(TICKET_EXPORT_COLUMNS.len(), 17);
    }
}
