//! CSV export of stored tickets.

use intake_core::export::{render_csv, TICKET_EXPORT_COLUMNS};
use intake_db::models::ticket::CreateTicket;
use intake_db::repositories::TicketRepo;
use sqlx::SqlitePool;

fn new_ticket(project_name: &str) -> CreateTicket {
    CreateTicket {
        project_name: project_name.to_string(),
        department: "Finance".to_string(),
        requester_name: "Lee".to_string(),
        requester_email: "lee@example.com".to_string(),
        description: "Quarter close, phase 2".to_string(),
        priority: "Medium".to_string(),
        impact: "Other".to_string(),
        due_date: None,
        attachments: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_export_has_header_and_rows_newest_first(pool: SqlitePool) {
    let first = TicketRepo::create(&pool, &new_ticket("Ledger sync")).await.unwrap();
    let second = TicketRepo::create(&pool, &new_ticket("Expense bot")).await.unwrap();
    TicketRepo::set_triage(&pool, first.id, Some(6.0), Some("scoped"), "Rishi")
        .await
        .unwrap();

    let tickets = TicketRepo::list_for_export(&pool).await.unwrap();
    let csv = render_csv(TICKET_EXPORT_COLUMNS, &tickets).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], TICKET_EXPORT_COLUMNS.join(","));
    assert!(lines[1].starts_with(&format!("{},", second.id)));
    assert!(lines[1].contains("Expense bot"));
    assert!(lines[1].contains("\"Quarter close, phase 2\""));
    assert!(lines[2].starts_with(&format!("{},", first.id)));
    assert!(lines[2].contains(",Pending Manager Approval,"));
    assert!(lines[2].contains(",6.0,scoped,Rishi,"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_export_of_empty_store_is_header_only(pool: SqlitePool) {
    let tickets = TicketRepo::list_for_export(&pool).await.unwrap();
    let csv = render_csv(TICKET_EXPORT_COLUMNS, &tickets).unwrap();
    assert_eq!(csv.trim_end(), TICKET_EXPORT_COLUMNS.join(","));
}
