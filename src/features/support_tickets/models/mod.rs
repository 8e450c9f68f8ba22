mod support_ticket;

pub use support_ticket::{SupportTicket, TicketPriority, TicketStatus};
