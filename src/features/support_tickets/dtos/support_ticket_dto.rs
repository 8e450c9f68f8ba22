use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::support_tickets::models::{TicketPriority, TicketStatus};
use crate::shared::validation::{validate_email_domain, validate_not_blank};

/// Request DTO for opening a support ticket
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupportTicketDto {
    #[validate(custom(function = validate_not_blank), length(max = 200))]
    pub subject: String,

    #[validate(custom(function = validate_not_blank), length(max = 5000))]
    pub description: String,

    #[validate(custom(function = validate_not_blank), length(max = 100))]
    pub customer_name: String,

    #[validate(
        email(message = "must be a valid email address"),
        custom(function = validate_email_domain)
    )]
    pub customer_email: String,

    #[validate(length(min = 6, max = 20))]
    pub customer_phone: Option<String>,

    #[serde(default)]
    pub priority: TicketPriority,

    #[validate(url(message = "must be a valid URL"))]
    pub attachment: Option<String>,
}

/// Request DTO for updating a ticket, only supplied fields change
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSupportTicketDto {
    #[validate(custom(function = validate_not_blank), length(max = 200))]
    pub subject: Option<String>,

    #[validate(custom(function = validate_not_blank), length(max = 5000))]
    pub description: Option<String>,

    #[validate(custom(function = validate_not_blank), length(max = 100))]
    pub customer_name: Option<String>,

    #[validate(
        email(message = "must be a valid email address"),
        custom(function = validate_email_domain)
    )]
    pub customer_email: Option<String>,

    #[validate(length(min = 6, max = 20))]
    pub customer_phone: Option<String>,

    pub priority: Option<TicketPriority>,

    #[validate(url(message = "must be a valid URL"))]
    pub attachment: Option<String>,

    pub status: Option<TicketStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateTicketStatusDto {
    pub status: TicketStatus,
}

/// Admin list filters
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct SupportTicketListQuery {
    /// One of `Pending`, `In Progress`, `Solved`, `Rejected`, `On Hold`
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_and_email() {
        let dto: CreateSupportTicketDto = serde_json::from_value(json!({
            "subject": "Order not delivered",
            "description": "Placed last week, still waiting",
            "customerName": "Rahim",
            "customerEmail": "rahim@example"
        }))
        .unwrap();

        assert_eq!(dto.priority, TicketPriority::Medium);
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("customer_email"));

        let dto = CreateSupportTicketDto {
            customer_email: "rahim@example.com".to_string(),
            ..dto
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_update_email_needs_dotted_domain() {
        let dto = UpdateSupportTicketDto {
            customer_email: Some("care@localhost".to_string()),
            ..Default::default()
        };
        assert!(dto
            .validate()
            .unwrap_err()
            .field_errors()
            .contains_key("customer_email"));
    }
}
