use super::{TicketsService, TicketsServiceConfig};
use crate::{
    dto::{input, output},
    error::Error,
    repository::{self, TicketsRepository},
    service::qr_code_service::QrCodeService,
};
use axum::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub const MAX_TICKETS_PER_VATIN: i64 = 3;

const MAX_VATIN_LEN: usize = 11;
const MAX_NAME_LEN: usize = 50;

pub struct TicketsServiceImpl {
    config: TicketsServiceConfig,
    repository: Arc<dyn TicketsRepository>,
    qr_code_service: Arc<dyn QrCodeService>,
}

impl TicketsServiceImpl {
    pub fn new(
        config: TicketsServiceConfig,
        repository: Arc<dyn TicketsRepository>,
        qr_code_service: Arc<dyn QrCodeService>,
    ) -> Self {
        Self {
            config,
            repository,
            qr_code_service,
        }
    }

    fn validate_create_ticket(
        ticket: &input::CreateTicket,
    ) -> Result<(String, String, String), Error> {
        let vatin = Self::non_blank(&ticket.vatin);
        let first_name = Self::non_blank(&ticket.first_name);
        let last_name = Self::non_blank(&ticket.last_name);

        let (Some(vatin), Some(first_name), Some(last_name)) = (vatin, first_name, last_name)
        else {
            return Err(Error::Validation(
                "All fields are required: vatin, firstName, lastName".to_string(),
            ));
        };

        Self::validate_max_len("vatin", vatin, MAX_VATIN_LEN)?;
        Self::validate_max_len("firstName", first_name, MAX_NAME_LEN)?;
        Self::validate_max_len("lastName", last_name, MAX_NAME_LEN)?;

        Ok((
            vatin.to_string(),
            first_name.to_string(),
            last_name.to_string(),
        ))
    }

    fn non_blank(field: &Option<String>) -> Option<&str> {
        field.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    fn validate_max_len(name: &str, value: &str, max_len: usize) -> Result<(), Error> {
        if value.chars().count() > max_len {
            return Err(Error::Validation(format!(
                "{name} must be at most {max_len} characters long"
            )));
        }

        Ok(())
    }

    fn ticket_url(&self, ticket_id: Uuid) -> String {
        let base_url = self.config.app_base_url.trim_end_matches('/');
        format!("{base_url}/ticket/{ticket_id}")
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    async fn create_ticket(
        &self,
        ticket: input::CreateTicket,
    ) -> Result<output::TicketCreated, Error> {
        let (vatin, first_name, last_name) = Self::validate_create_ticket(&ticket)?;
        tracing::info!(%vatin, "creating ticket");

        let count = self
            .repository
            .count_by_vatin(&vatin)
            .await
            .map_err(Error::database("creating ticket"))?;
        if count >= MAX_TICKETS_PER_VATIN {
            return Err(Error::QuotaExceeded);
        }

        let ticket = match self
            .repository
            .insert(&vatin, &first_name, &last_name, MAX_TICKETS_PER_VATIN)
            .await
        {
            Ok(ticket) => ticket,
            Err(repository::Error::QuotaExceeded) => return Err(Error::QuotaExceeded),
            Err(err) => return Err(Error::database("creating ticket")(err)),
        };
        tracing::info!(ticket_id = %ticket.ticket_id, "created ticket");

        let qr_code = self
            .qr_code_service
            .encode(&self.ticket_url(ticket.ticket_id))?;

        Ok(output::TicketCreated {
            ticket_id: ticket.ticket_id,
            qr_code,
            message: output::TICKET_CREATED_MESSAGE.to_string(),
        })
    }

    async fn find_ticket(&self, ticket_id: &str) -> Result<output::Ticket, Error> {
        let ticket_id = Uuid::parse_str(ticket_id).map_err(|_| Error::TicketNotExist)?;
        tracing::info!(%ticket_id, "finding ticket");

        let ticket = self
            .repository
            .find(ticket_id)
            .await
            .map_err(Error::database("retrieving ticket details"))?
            .ok_or(Error::TicketNotExist)?;

        Ok(ticket.into())
    }

    async fn count_tickets(&self) -> Result<i64, Error> {
        let count = self
            .repository
            .count()
            .await
            .map_err(Error::database("retrieving ticket count"))?;

        Ok(count)
    }
}
