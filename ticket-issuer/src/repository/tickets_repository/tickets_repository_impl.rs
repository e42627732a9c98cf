use super::{Ticket, TicketsRepository};
use crate::repository::{self, Error};
use axum::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

const TICKETS: &str = "tickets";
const INDEX_NAME_VATIN: &str = "index_tickets_vatin";

pub struct TicketsRepositoryImpl {
    pool: PgPool,
}

impl TicketsRepositoryImpl {
    pub async fn new(pool: PgPool) -> Result<Self, sqlx::Error> {
        // concurrent IF NOT EXISTS statements can still collide on catalog entries
        let mut transaction = pool.begin().await?;
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
            .bind(TICKETS)
            .execute(&mut *transaction)
            .await?;

        tracing::debug!(table = TICKETS, "creating table");
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS tickets (
                ticket_id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                vatin VARCHAR(11) NOT NULL,
                first_name VARCHAR(50) NOT NULL,
                last_name VARCHAR(50) NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            ",
        )
        .execute(&mut *transaction)
        .await?;

        tracing::debug!(table = TICKETS, index = INDEX_NAME_VATIN, "creating index");
        sqlx::query("CREATE INDEX IF NOT EXISTS index_tickets_vatin ON tickets (vatin)")
            .execute(&mut *transaction)
            .await?;

        transaction.commit().await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn count(&self) -> Result<i64, repository::Error> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tickets")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn count_by_vatin(&self, vatin: &str) -> Result<i64, repository::Error> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tickets WHERE vatin = $1")
            .bind(vatin)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn insert(
        &self,
        vatin: &str,
        first_name: &str,
        last_name: &str,
        max_tickets_per_vatin: i64,
    ) -> Result<Ticket, repository::Error> {
        let mut transaction = self.pool.begin().await?;

        // lock is released on commit or rollback
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
            .bind(vatin)
            .execute(&mut *transaction)
            .await?;

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tickets WHERE vatin = $1")
            .bind(vatin)
            .fetch_one(&mut *transaction)
            .await?;

        if count >= max_tickets_per_vatin {
            transaction.rollback().await?;
            return Err(Error::QuotaExceeded);
        }

        let ticket = sqlx::query_as::<_, Ticket>(
            r"
            INSERT INTO tickets (vatin, first_name, last_name)
            VALUES ($1, $2, $3)
            RETURNING ticket_id, vatin, first_name, last_name, created_at
            ",
        )
        .bind(vatin)
        .bind(first_name)
        .bind(last_name)
        .fetch_one(&mut *transaction)
        .await?;

        transaction.commit().await?;

        Ok(ticket)
    }

    async fn find(&self, ticket_id: Uuid) -> Result<Option<Ticket>, repository::Error> {
        let ticket = sqlx::query_as::<_, Ticket>(
            r"
            SELECT ticket_id, vatin, first_name, last_name, created_at
            FROM tickets
            WHERE ticket_id = $1
            ",
        )
        .bind(ticket_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(ticket)
    }
}
