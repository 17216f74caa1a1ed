//! Clients Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::clients::{
    changes::ClientChanges,
    data::NewClient,
    pagination::ClientsQuery,
    records::{ArchivedClientRecord, ClientId, ClientRecord},
};

const GET_CLIENT_SQL: &str = include_str!("sql/get_client.sql");
const COUNT_CLIENTS_SQL: &str = include_str!("sql/count_clients.sql");
const LIST_CLIENTS_SQL: &str = include_str!("sql/list_clients.sql");
const LIST_ALL_CLIENTS_SQL: &str = include_str!("sql/list_all_clients.sql");
const CREATE_CLIENT_SQL: &str = include_str!("sql/create_client.sql");
const UPDATE_CLIENT_SQL: &str = include_str!("sql/update_client.sql");
const ARCHIVE_CLIENT_SQL: &str = include_str!("sql/archive_client.sql");
const DELETE_CLIENT_SQL: &str = include_str!("sql/delete_client.sql");
const DELETE_CLIENTS_SQL: &str = include_str!("sql/delete_clients.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgClientsRepository;

impl PgClientsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_client(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        client: ClientId,
    ) -> Result<ClientRecord, sqlx::Error> {
        query_as::<Postgres, ClientRecord>(GET_CLIENT_SQL)
            .bind(client.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn count_clients(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        city: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar::<Postgres, i64>(COUNT_CLIENTS_SQL)
            .bind(city)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_clients(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        clients: &ClientsQuery,
    ) -> Result<Vec<ClientRecord>, sqlx::Error> {
        query_as::<Postgres, ClientRecord>(LIST_CLIENTS_SQL)
            .bind(clients.city.as_deref())
            .bind(clients.page.limit())
            .bind(clients.page.offset())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_all_clients(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ClientRecord>, sqlx::Error> {
        query_as::<Postgres, ClientRecord>(LIST_ALL_CLIENTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_client(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        client: NewClient,
    ) -> Result<ClientRecord, sqlx::Error> {
        query_as::<Postgres, ClientRecord>(CREATE_CLIENT_SQL)
            .bind(client.name)
            .bind(client.weight_kg)
            .bind(client.address)
            .bind(client.street)
            .bind(client.number)
            .bind(client.neighborhood)
            .bind(client.complement)
            .bind(client.city)
            .bind(client.state)
            .bind(client.country)
            .bind(client.latitude)
            .bind(client.longitude)
            .fetch_one(&mut **tx)
            .await
    }

    /// Write only the columns present in `changes`; the rest keep their stored values.
    pub(crate) async fn update_client(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        client: ClientId,
        changes: ClientChanges,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_CLIENT_SQL)
            .bind(client.into_i64())
            .bind(changes.name)
            .bind(changes.weight_kg)
            .bind(changes.address)
            .bind(changes.street)
            .bind(changes.number)
            .bind(changes.neighborhood)
            .bind(changes.complement)
            .bind(changes.city)
            .bind(changes.state)
            .bind(changes.country)
            .bind(changes.latitude)
            .bind(changes.longitude)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn archive_client(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        archived: ArchivedClientRecord,
    ) -> Result<(), sqlx::Error> {
        query(ARCHIVE_CLIENT_SQL)
            .bind(archived.id.into_i64())
            .bind(archived.name)
            .bind(archived.weight_kg)
            .bind(archived.address)
            .bind(archived.street)
            .bind(archived.number)
            .bind(archived.neighborhood)
            .bind(archived.complement)
            .bind(archived.city)
            .bind(archived.state)
            .bind(archived.country)
            .bind(archived.latitude)
            .bind(archived.longitude)
            .bind(SqlxTimestamp::from(archived.created_at))
            .bind(SqlxTimestamp::from(archived.updated_at))
            .bind(SqlxTimestamp::from(archived.archived_at))
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn delete_client(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        client: ClientId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CLIENT_SQL)
            .bind(client.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_clients(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        clients: &[ClientId],
    ) -> Result<u64, sqlx::Error> {
        let ids: Vec<i64> = clients.iter().map(|id| id.into_i64()).collect();

        let rows_affected = query(DELETE_CLIENTS_SQL)
            .bind(ids)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ClientRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ClientId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            weight_kg: row.try_get("weight_kg")?,
            address: row.try_get("address")?,
            street: row.try_get("street")?,
            number: row.try_get("number")?,
            neighborhood: row.try_get("neighborhood")?,
            complement: row.try_get("complement")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            country: row.try_get("country")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
