use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::support_tickets::dtos::{
    CreateSupportTicketDto, SupportTicketListQuery, UpdateSupportTicketDto,
};
use crate::features::support_tickets::models::{SupportTicket, TicketStatus};
use crate::modules::documents::{ListQuery, Repository, SortBy};
use crate::modules::storage::ImageStore;
use crate::shared::types::PaginationQuery;

/// Service for support ticket operations
pub struct SupportTicketService {
    repo: Arc<dyn Repository<SupportTicket>>,
    images: Arc<ImageStore>,
}

impl SupportTicketService {
    pub fn new(repo: Arc<dyn Repository<SupportTicket>>, images: Arc<ImageStore>) -> Self {
        Self { repo, images }
    }

    pub fn images(&self) -> &Arc<ImageStore> {
        &self.images
    }

    fn not_found(id: Uuid) -> AppError {
        AppError::NotFound(format!("Support ticket {} not found", id))
    }

    pub async fn create(&self, dto: CreateSupportTicketDto) -> Result<SupportTicket> {
        let now = Utc::now();
        let ticket = SupportTicket {
            id: Uuid::new_v4(),
            ticket_number: SupportTicket::generate_number(now),
            subject: dto.subject.trim().to_string(),
            description: dto.description.trim().to_string(),
            customer_name: dto.customer_name.trim().to_string(),
            customer_email: dto.customer_email.trim().to_lowercase(),
            customer_phone: dto.customer_phone,
            priority: dto.priority,
            attachment: dto.attachment,
            status: TicketStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        let ticket = self.repo.insert(ticket).await?;

        info!(
            "Support ticket opened: {} ({}) priority {}",
            ticket.ticket_number,
            ticket.id,
            ticket.priority.as_str()
        );
        Ok(ticket)
    }

    /// One page of tickets, newest first, with the total across all pages
    pub async fn list(
        &self,
        filter: &SupportTicketListQuery,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<SupportTicket>, i64)> {
        let mut query = ListQuery::new().sort(SortBy::Newest);
        if let Some(status) = filter.status {
            query = query.eq("status", status.as_str());
        }
        if let Some(priority) = filter.priority {
            query = query.eq("priority", priority.as_str());
        }

        let paged = query.clone().page(pagination.limit(), pagination.offset());
        let (tickets, total) = futures::try_join!(
            self.repo.find(&paged),
            self.repo.count(&query),
        )?;
        Ok((tickets, total))
    }

    pub async fn get(&self, id: Uuid) -> Result<SupportTicket> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    pub async fn update(&self, id: Uuid, dto: UpdateSupportTicketDto) -> Result<SupportTicket> {
        let mut ticket = self.get(id).await?;
        let previous_attachment = ticket.attachment.clone();

        if let Some(attachment) = dto.attachment {
            ticket.attachment = Some(attachment);
        }
        if let Some(subject) = dto.subject {
            ticket.subject = subject.trim().to_string();
        }
        if let Some(description) = dto.description {
            ticket.description = description.trim().to_string();
        }
        if let Some(customer_name) = dto.customer_name {
            ticket.customer_name = customer_name.trim().to_string();
        }
        if let Some(customer_email) = dto.customer_email {
            ticket.customer_email = customer_email.trim().to_lowercase();
        }
        if let Some(customer_phone) = dto.customer_phone {
            ticket.customer_phone = Some(customer_phone);
        }
        if let Some(priority) = dto.priority {
            ticket.priority = priority;
        }
        if let Some(status) = dto.status {
            ticket.status = status;
        }

        let ticket = self
            .repo
            .replace(ticket)
            .await?
            .ok_or_else(|| Self::not_found(id))?;
        self.images
            .replace(previous_attachment.as_deref(), ticket.attachment.as_deref())
            .await;

        info!("Support ticket updated: {}", ticket.ticket_number);
        Ok(ticket)
    }

    pub async fn update_status(&self, id: Uuid, status: TicketStatus) -> Result<SupportTicket> {
        let mut ticket = self.get(id).await?;
        let previous = ticket.status;
        ticket.status = status;

        let ticket = self
            .repo
            .replace(ticket)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        info!(
            "Support ticket {} status: {} -> {}",
            ticket.ticket_number, previous, ticket.status
        );
        Ok(ticket)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let ticket = self.get(id).await?;

        if let Some(attachment) = &ticket.attachment {
            self.images.delete_by_url(attachment).await?;
        }
        if !self.repo.delete(id).await? {
            return Err(Self::not_found(id));
        }

        info!("Support ticket deleted: {}", ticket.ticket_number);
        Ok(())
    }
}
