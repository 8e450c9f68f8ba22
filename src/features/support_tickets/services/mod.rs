mod support_ticket_service;

pub use support_ticket_service::SupportTicketService;
