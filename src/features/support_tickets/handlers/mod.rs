pub mod support_ticket_handler;

pub use support_ticket_handler::{
    __path_create_support_ticket, __path_delete_support_ticket, __path_get_support_ticket,
    __path_list_support_tickets, __path_update_support_ticket,
    __path_update_support_ticket_status, create_support_ticket, delete_support_ticket,
    get_support_ticket, list_support_tickets, update_support_ticket,
    update_support_ticket_status,
};
