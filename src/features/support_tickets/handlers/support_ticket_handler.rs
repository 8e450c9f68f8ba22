use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, FormPayload};
use crate::features::support_tickets::dtos::{
    CreateSupportTicketDto, SupportTicketListQuery, UpdateSupportTicketDto,
    UpdateTicketStatusDto,
};
use crate::features::support_tickets::models::SupportTicket;
use crate::features::support_tickets::services::SupportTicketService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

const IMAGE_FIELD: &str = "attachment";
const IMAGE_FOLDER: &str = "support-tickets";

/// Open a support ticket
///
/// Accepts JSON or multipart/form-data; in multipart form `attachment` may
/// be an image file (a screenshot, a photo of the parcel).
#[utoipa::path(
    post,
    path = "/api/v1/support-ticket",
    request_body(content = CreateSupportTicketDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Ticket opened", body = ApiResponse<SupportTicket>),
        (status = 400, description = "Validation failed")
    ),
    tag = "support-tickets"
)]
pub async fn create_support_ticket(
    State(service): State<Arc<SupportTicketService>>,
    mut form: FormPayload,
) -> Result<(StatusCode, Json<ApiResponse<SupportTicket>>)> {
    let staged = service
        .images()
        .stage(&mut form, IMAGE_FIELD, IMAGE_FOLDER)
        .await?;

    let result = match form.into_validated::<CreateSupportTicketDto>() {
        Ok(dto) => service.create(dto).await,
        Err(e) => Err(e),
    };
    let ticket = staged.settle(result).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(
            "Support ticket created successfully",
            ticket,
        )),
    ))
}

/// List support tickets, newest first
#[utoipa::path(
    get,
    path = "/api/v1/support-ticket",
    params(SupportTicketListQuery, PaginationQuery),
    responses(
        (status = 200, description = "One page of tickets, total in meta", body = ApiResponse<Vec<SupportTicket>>)
    ),
    tag = "support-tickets"
)]
pub async fn list_support_tickets(
    State(service): State<Arc<SupportTicketService>>,
    Query(filter): Query<SupportTicketListQuery>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<SupportTicket>>>> {
    let (tickets, total) = service.list(&filter, &pagination).await?;
    Ok(Json(
        ApiResponse::ok("Support tickets retrieved successfully", tickets)
            .with_meta(Meta { total }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/support-ticket/{id}",
    params(("id" = Uuid, Path, description = "Ticket id")),
    responses(
        (status = 200, description = "Ticket found", body = ApiResponse<SupportTicket>),
        (status = 404, description = "Ticket not found")
    ),
    tag = "support-tickets"
)]
pub async fn get_support_ticket(
    State(service): State<Arc<SupportTicketService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SupportTicket>>> {
    let ticket = service.get(id).await?;
    Ok(Json(ApiResponse::ok(
        "Support ticket retrieved successfully",
        ticket,
    )))
}

#[utoipa::path(
    patch,
    path = "/api/v1/support-ticket/{id}",
    params(("id" = Uuid, Path, description = "Ticket id")),
    request_body(content = UpdateSupportTicketDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Ticket updated", body = ApiResponse<SupportTicket>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Ticket not found")
    ),
    tag = "support-tickets"
)]
pub async fn update_support_ticket(
    State(service): State<Arc<SupportTicketService>>,
    Path(id): Path<Uuid>,
    mut form: FormPayload,
) -> Result<Json<ApiResponse<SupportTicket>>> {
    let staged = service
        .images()
        .stage(&mut form, IMAGE_FIELD, IMAGE_FOLDER)
        .await?;

    let result = match form.into_validated::<UpdateSupportTicketDto>() {
        Ok(dto) => service.update(id, dto).await,
        Err(e) => Err(e),
    };
    let ticket = staged.settle(result).await?;

    Ok(Json(ApiResponse::ok(
        "Support ticket updated successfully",
        ticket,
    )))
}

#[utoipa::path(
    patch,
    path = "/api/v1/support-ticket/{id}/status",
    params(("id" = Uuid, Path, description = "Ticket id")),
    request_body = UpdateTicketStatusDto,
    responses(
        (status = 200, description = "Status changed", body = ApiResponse<SupportTicket>),
        (status = 400, description = "Unknown status"),
        (status = 404, description = "Ticket not found")
    ),
    tag = "support-tickets"
)]
pub async fn update_support_ticket_status(
    State(service): State<Arc<SupportTicketService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateTicketStatusDto>,
) -> Result<Json<ApiResponse<SupportTicket>>> {
    let ticket = service.update_status(id, dto.status).await?;
    Ok(Json(ApiResponse::ok(
        "Support ticket status updated successfully",
        ticket,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/v1/support-ticket/{id}",
    params(("id" = Uuid, Path, description = "Ticket id")),
    responses(
        (status = 200, description = "Ticket deleted"),
        (status = 404, description = "Ticket not found")
    ),
    tag = "support-tickets"
)]
pub async fn delete_support_ticket(
    State(service): State<Arc<SupportTicketService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::ok("Support ticket deleted successfully", ())))
}
