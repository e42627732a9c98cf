use serde::Serialize;
use uuid::Uuid;

pub const TICKET_CREATED_MESSAGE: &str = "Ticket created successfully!";

#[derive(Debug, Serialize)]
pub struct TicketCreated {
    pub ticket_id: Uuid,
    #[serde(rename = "qrCode")]
    pub qr_code: String,
    pub message: String,
}
