use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Ticket {
    pub ticket_id: Uuid,
    pub vatin: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: OffsetDateTime,
}
