use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::documents::Document;

/// Where a ticket stands. Any status may move to any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TicketStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Solved,
    Rejected,
    #[serde(rename = "On Hold")]
    OnHold,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Pending => "Pending",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Solved => "Solved",
            TicketStatus::Rejected => "Rejected",
            TicketStatus::OnHold => "On Hold",
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketPriority::Low => "low",
            TicketPriority::Medium => "medium",
            TicketPriority::High => "high",
            TicketPriority::Urgent => "urgent",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    pub id: Uuid,
    /// `TKT-YYYYMMDD-XXXXXX`, unique
    pub ticket_number: String,
    pub subject: String,
    pub description: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub priority: TicketPriority,
    pub attachment: Option<String>,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SupportTicket {
    /// Ticket number for a ticket opened at `now`: date plus six random
    /// upper-case hex digits
    pub fn generate_number(now: DateTime<Utc>) -> String {
        let suffix = Uuid::new_v4().simple().to_string()[..6].to_uppercase();
        format!("TKT-{}-{}", now.format("%Y%m%d"), suffix)
    }
}

impl Document for SupportTicket {
    const COLLECTION: &'static str = "support_tickets";

    fn id(&self) -> Uuid {
        self.id
    }

    fn unique_fields(&self) -> Vec<(&'static str, String)> {
        vec![("ticketNumber", self.ticket_number.clone())]
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_ticket_number_format() {
        let now = Utc.with_ymd_and_hms(2025, 7, 9, 23, 59, 0).unwrap();
        let number = SupportTicket::generate_number(now);

        assert_eq!(number.len(), "TKT-20250709-XXXXXX".len());
        assert!(number.starts_with("TKT-20250709-"));
        assert!(number[13..]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_value(TicketStatus::InProgress).unwrap(),
            "In Progress"
        );
        assert_eq!(
            serde_json::from_value::<TicketStatus>("On Hold".into()).unwrap(),
            TicketStatus::OnHold
        );
        assert!(serde_json::from_value::<TicketStatus>("in progress".into()).is_err());
    }
}
