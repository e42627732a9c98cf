use super::Ticket;
use crate::repository;
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    ///
    /// Counts all issued tickets
    ///
    async fn count(&self) -> Result<i64, repository::Error>;

    ///
    /// Counts tickets issued for the VATIN
    ///
    async fn count_by_vatin(&self, vatin: &str) -> Result<i64, repository::Error>;

    ///
    /// Inserts new ticket unless VATIN already has `max_tickets_per_vatin` tickets.
    /// Concurrent inserts for the same VATIN are serialized,
    /// so the limit holds without relying on callers.
    ///
    /// ### Errors
    /// - [repository::Error::QuotaExceeded] when VATIN already reached the limit
    ///
    async fn insert(
        &self,
        vatin: &str,
        first_name: &str,
        last_name: &str,
        max_tickets_per_vatin: i64,
    ) -> Result<Ticket, repository::Error>;

    async fn find(&self, ticket_id: Uuid) -> Result<Option<Ticket>, repository::Error>;
}
