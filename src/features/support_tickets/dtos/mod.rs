mod support_ticket_dto;

pub use support_ticket_dto::*;
