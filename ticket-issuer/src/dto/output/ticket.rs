use crate::repository;
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

///
/// Ticket as presented on the lookup page
///
#[derive(Debug, Serialize)]
pub struct Ticket {
    pub ticket_id: Uuid,
    pub vatin: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: String,
}

impl From<repository::Ticket> for Ticket {
    fn from(ticket: repository::Ticket) -> Self {
        let created_at = ticket
            .created_at
            .format(&Rfc3339)
            .unwrap_or_else(|_| ticket.created_at.to_string());

        Self {
            ticket_id: ticket.ticket_id,
            vatin: ticket.vatin,
            first_name: ticket.first_name,
            last_name: ticket.last_name,
            created_at,
        }
    }
}
