use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    ///
    /// Issue new ticket for the VATIN
    ///
    /// ### Returns
    /// [output::TicketCreated] with QR code of the ticket lookup URL
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - any field is missing or blank
    ///     - any field is too long
    /// - [Error::QuotaExceeded] when VATIN already has maximum number of tickets
    ///
    async fn create_ticket(
        &self,
        ticket: input::CreateTicket,
    ) -> Result<output::TicketCreated, Error>;

    ///
    /// Find ticket by its identifier
    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when identifier is malformed or ticket does not exist
    ///
    async fn find_ticket(&self, ticket_id: &str) -> Result<output::Ticket, Error>;

    async fn count_tickets(&self) -> Result<i64, Error>;
}
