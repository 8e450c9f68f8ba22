use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::support_tickets::handlers;
use crate::features::support_tickets::services::SupportTicketService;

/// Create routes for the support tickets feature
pub fn routes(service: Arc<SupportTicketService>) -> Router {
    Router::new()
        .route(
            "/api/v1/support-ticket",
            get(handlers::list_support_tickets).post(handlers::create_support_ticket),
        )
        .route(
            "/api/v1/support-ticket/{id}",
            get(handlers::get_support_ticket)
                .patch(handlers::update_support_ticket)
                .delete(handlers::delete_support_ticket),
        )
        .route(
            "/api/v1/support-ticket/{id}/status",
            patch(handlers::update_support_ticket_status),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::multipart::MultipartForm;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::features::support_tickets::models::SupportTicket;
    use crate::modules::documents::memory::MemoryRepository;
    use crate::shared::test_helpers::{data, png_part, TestContext};

    fn server(ctx: &TestContext) -> TestServer {
        let service = Arc::new(SupportTicketService::new(
            Arc::new(MemoryRepository::<SupportTicket>::new()),
            Arc::clone(&ctx.images),
        ));
        TestServer::new(routes(service)).unwrap()
    }

    fn ticket_json(subject: &str, priority: &str) -> Value {
        json!({
            "subject": subject,
            "description": "Please help",
            "customerName": "Nusrat",
            "customerEmail": "nusrat@example.com",
            "priority": priority
        })
    }

    #[tokio::test]
    async fn test_multipart_ticket_with_attachment() {
        let ctx = TestContext::new();
        let server = server(&ctx);

        let created = server
            .post("/api/v1/support-ticket")
            .multipart(
                MultipartForm::new()
                    .add_text("subject", "Damaged parcel")
                    .add_text("description", "Box was crushed")
                    .add_text("customerName", "Nusrat")
                    .add_text("customerEmail", "nusrat@example.com")
                    .add_text("customerPhone", "")
                    .add_part("attachment", png_part("parcel.png")),
            )
            .await;
        created.assert_status(StatusCode::CREATED);

        let ticket = data(&created);
        assert_eq!(ticket["status"], "Pending");
        assert_eq!(ticket["priority"], "medium");
        assert_eq!(ticket["customerPhone"], Value::Null);
        assert!(ticket["ticketNumber"].as_str().unwrap().starts_with("TKT-"));

        server
            .delete(&format!("/api/v1/support-ticket/{}", ticket["id"].as_str().unwrap()))
            .await
            .assert_status_ok();
        assert!(ctx.storage.keys().await.is_empty());
    }

    #[tokio::test]
    async fn test_status_endpoint_and_filtered_pages() {
        let ctx = TestContext::new();
        let server = server(&ctx);

        let mut ids = Vec::new();
        for (subject, priority) in [("a", "low"), ("b", "high"), ("c", "urgent")] {
            let created = server
                .post("/api/v1/support-ticket")
                .json(&ticket_json(subject, priority))
                .await;
            ids.push(data(&created)["id"].as_str().unwrap().to_string());
        }

        for id in &ids[1..] {
            let updated = server
                .patch(&format!("/api/v1/support-ticket/{}/status", id))
                .json(&json!({"status": "In Progress"}))
                .await;
            updated.assert_status_ok();
            assert_eq!(data(&updated)["status"], "In Progress");
        }

        server
            .patch(&format!("/api/v1/support-ticket/{}/status", ids[0]))
            .json(&json!({"status": "done"}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        let page = server
            .get("/api/v1/support-ticket")
            .add_query_param("status", "In Progress")
            .add_query_param("page", 1)
            .add_query_param("pageSize", 1)
            .await;
        page.assert_status_ok();
        let body = page.json::<Value>();
        assert_eq!(body["meta"]["total"], 2);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["subject"], "c");

        let past_end = server
            .get("/api/v1/support-ticket")
            .add_query_param("page", i64::MAX)
            .add_query_param("pageSize", 100)
            .await;
        past_end.assert_status_ok();
        let body = past_end.json::<Value>();
        assert_eq!(body["meta"]["total"], 3);
        assert!(body["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let ctx = TestContext::new();
        let server = server(&ctx);

        let created = server
            .post("/api/v1/support-ticket")
            .json(&ticket_json("Wrong size", "low"))
            .await;
        let ticket = data(&created);

        let updated = server
            .patch(&format!("/api/v1/support-ticket/{}", ticket["id"].as_str().unwrap()))
            .json(&json!({"priority": "high", "status": "On Hold"}))
            .await;
        updated.assert_status_ok();
        let updated = data(&updated);
        assert_eq!(updated["priority"], "high");
        assert_eq!(updated["status"], "On Hold");
        assert_eq!(updated["subject"], "Wrong size");
        assert_eq!(updated["ticketNumber"], ticket["ticketNumber"]);
    }
}
