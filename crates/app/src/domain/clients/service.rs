//! Clients service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{info, instrument};

use crate::{
    database::Db,
    domain::clients::{
        changes::ClientChanges,
        data::{ClientPatch, NewClient},
        errors::ClientsServiceError,
        pagination::{ClientsPage, ClientsQuery, PageInfo},
        records::{ArchivedClientRecord, ClientId, ClientRecord},
        repository::PgClientsRepository,
        validation::{validate_client_id, validate_new_client},
    },
};

#[derive(Debug, Clone)]
pub struct PgClientsService {
    db: Db,
    repository: PgClientsRepository,
}

impl PgClientsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgClientsRepository::new(),
        }
    }
}

#[async_trait]
impl ClientsService for PgClientsService {
    async fn get_client(&self, client: ClientId) -> Result<ClientRecord, ClientsServiceError> {
        validate_client_id(client)?;

        let mut tx = self.db.begin_transaction().await?;

        let client = self.repository.get_client(&mut tx, client).await?;

        tx.commit().await?;

        Ok(client)
    }

    async fn list_clients(&self, query: ClientsQuery) -> Result<ClientsPage, ClientsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let total = self
            .repository
            .count_clients(&mut tx, query.city.as_deref())
            .await?;

        let clients = self.repository.list_clients(&mut tx, &query).await?;

        tx.commit().await?;

        Ok(ClientsPage {
            clients,
            info: PageInfo::new(total, &query),
        })
    }

    async fn create_client(&self, client: NewClient) -> Result<ClientRecord, ClientsServiceError> {
        validate_new_client(&client)?;

        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_client(&mut tx, client).await?;

        tx.commit().await?;

        info!(client_id = %created.id, "client created");

        Ok(created)
    }

    #[instrument(skip_all, fields(client_id = %client))]
    async fn update_client(
        &self,
        client: ClientId,
        patch: ClientPatch,
    ) -> Result<ClientRecord, ClientsServiceError> {
        validate_client_id(client)?;

        let mut tx = self.db.begin_transaction().await?;

        // Confirms the client exists before looking at the payload.
        self.repository.get_client(&mut tx, client).await?;

        let changes = ClientChanges::from_patch(patch);

        if changes.is_empty() {
            return Err(ClientsServiceError::NoFieldsToUpdate);
        }

        let fields = changes.changed_fields();

        let rows_affected = self
            .repository
            .update_client(&mut tx, client, changes)
            .await?;

        if rows_affected == 0 {
            return Err(ClientsServiceError::NotFound);
        }

        let updated = self.repository.get_client(&mut tx, client).await?;

        tx.commit().await?;

        info!(fields = ?fields.as_slice(), "client updated");

        Ok(updated)
    }

    #[instrument(skip_all, fields(client_id = %client))]
    async fn delete_client(&self, client: ClientId) -> Result<(), ClientsServiceError> {
        validate_client_id(client)?;

        let mut tx = self.db.begin_transaction().await?;

        let existing = self.repository.get_client(&mut tx, client).await?;

        self.repository
            .archive_client(&mut tx, ArchivedClientRecord::from_client(existing, Timestamp::now()))
            .await?;

        let rows_affected = self.repository.delete_client(&mut tx, client).await?;

        if rows_affected == 0 {
            return Err(ClientsServiceError::NotFound);
        }

        tx.commit().await?;

        info!("client archived and deleted");

        Ok(())
    }

    #[instrument(skip_all)]
    async fn delete_all_clients(&self) -> Result<u64, ClientsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let clients = self.repository.list_all_clients(&mut tx).await?;

        if clients.is_empty() {
            info!("no clients to delete");

            return Ok(0);
        }

        let archived_at = Timestamp::now();
        let mut archived = Vec::with_capacity(clients.len());

        for client in clients {
            let id = client.id;

            self.repository
                .archive_client(&mut tx, ArchivedClientRecord::from_client(client, archived_at))
                .await?;

            archived.push(id);
        }

        let rows_affected = self.repository.delete_clients(&mut tx, &archived).await?;

        tx.commit().await?;

        info!(count = rows_affected, "clients archived and deleted");

        Ok(rows_affected)
    }
}

#[automock]
#[async_trait]
pub trait ClientsService: Send + Sync {
    /// Retrieve a single live client.
    async fn get_client(&self, client: ClientId) -> Result<ClientRecord, ClientsServiceError>;

    /// Retrieve one page of live clients, optionally filtered by city.
    async fn list_clients(&self, query: ClientsQuery) -> Result<ClientsPage, ClientsServiceError>;

    /// Validate and store a new client.
    async fn create_client(&self, client: NewClient) -> Result<ClientRecord, ClientsServiceError>;

    /// Apply the non-zero fields of `patch` to a client and return the stored result.
    async fn update_client(
        &self,
        client: ClientId,
        patch: ClientPatch,
    ) -> Result<ClientRecord, ClientsServiceError>;

    /// Copy a client into the archive, then remove it.
    async fn delete_client(&self, client: ClientId) -> Result<(), ClientsServiceError>;

    /// Archive and remove every live client, returning how many were removed.
    async fn delete_all_clients(&self) -> Result<u64, ClientsServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff_sqlx::Timestamp as SqlxTimestamp;
    use sqlx::{Row, query};
    use testresult::TestResult;

    use crate::{
        domain::clients::{pagination::PageRequest, validation::ValidationError},
        test::{TestContext, helpers::new_client},
    };

    use super::*;

    async fn archived_clients(ctx: &TestContext) -> Result<Vec<ArchivedClientRecord>, sqlx::Error> {
        let rows = query("SELECT * FROM archived_clients ORDER BY id")
            .fetch_all(ctx.db.pool())
            .await?;

        rows.iter()
            .map(|row| -> Result<ArchivedClientRecord, sqlx::Error> {
                Ok(ArchivedClientRecord {
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
                    archived_at: row.try_get::<SqlxTimestamp, _>("archived_at")?.to_jiff(),
                })
            })
            .collect()
    }

    /// Each archived row must be the matching live record plus an archive timestamp.
    fn assert_archived_copies(archived: &[ArchivedClientRecord], live: Vec<ClientRecord>) {
        assert_eq!(archived.len(), live.len(), "archive row count");

        for (archived, live) in archived.iter().zip(live) {
            assert_archived_copy(archived, live);
        }
    }

    fn assert_archived_copy(archived: &ArchivedClientRecord, live: ClientRecord) {
        assert!(
            archived.archived_at >= live.updated_at,
            "archived_at {} precedes updated_at {}",
            archived.archived_at,
            live.updated_at
        );
        assert_eq!(
            *archived,
            ArchivedClientRecord::from_client(live, archived.archived_at)
        );
    }

    #[tokio::test]
    async fn create_client_is_retrievable_with_all_fields() -> TestResult {
        let ctx = TestContext::new().await;
        let client = new_client();

        let created = ctx.clients.create_client(client.clone()).await?;
        let fetched = ctx.clients.get_client(created.id).await?;

        assert_eq!(fetched, created);
        assert_eq!(fetched.name, client.name);
        assert_eq!(fetched.weight_kg, client.weight_kg);
        assert_eq!(fetched.number, client.number);
        assert_eq!(fetched.complement, client.complement);
        assert_eq!(fetched.latitude, client.latitude);
        assert!(fetched.deleted_at.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn create_client_missing_field_persists_nothing() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx
            .clients
            .create_client(NewClient {
                city: String::new(),
                ..new_client()
            })
            .await;

        assert!(
            matches!(
                result,
                Err(ClientsServiceError::Validation(ValidationError::MissingField("city")))
            ),
            "expected missing city, got {result:?}"
        );

        let page = ctx.clients.list_clients(ClientsQuery::default()).await?;

        assert_eq!(page.info.total, 0);

        Ok(())
    }

    #[tokio::test]
    async fn get_client_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.clients.get_client(ClientId::from_i64(4242)).await;

        assert!(
            matches!(result, Err(ClientsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_client_rejects_non_positive_id() {
        let ctx = TestContext::new().await;

        let result = ctx.clients.get_client(ClientId::from_i64(0)).await;

        assert!(
            matches!(
                result,
                Err(ClientsServiceError::Validation(ValidationError::InvalidId(0)))
            ),
            "expected InvalidId, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_client_changes_only_patched_field() -> TestResult {
        let ctx = TestContext::new().await;
        let created = ctx.clients.create_client(new_client()).await?;

        let updated = ctx
            .clients
            .update_client(
                created.id,
                ClientPatch {
                    weight_kg: Some(20.0),
                    ..ClientPatch::default()
                },
            )
            .await?;

        assert_eq!(updated.weight_kg, 20.0);
        assert_eq!(
            ClientRecord {
                weight_kg: created.weight_kg,
                updated_at: created.updated_at,
                ..updated.clone()
            },
            created
        );
        assert!(updated.updated_at >= created.updated_at);

        Ok(())
    }

    #[tokio::test]
    async fn update_client_with_zero_values_returns_no_fields() -> TestResult {
        let ctx = TestContext::new().await;
        let created = ctx.clients.create_client(new_client()).await?;

        let result = ctx
            .clients
            .update_client(
                created.id,
                ClientPatch {
                    name: Some(String::new()),
                    number: Some(0),
                    latitude: Some(0.0),
                    ..ClientPatch::default()
                },
            )
            .await;

        assert!(
            matches!(result, Err(ClientsServiceError::NoFieldsToUpdate)),
            "expected NoFieldsToUpdate, got {result:?}"
        );
        assert_eq!(ctx.clients.get_client(created.id).await?, created);

        Ok(())
    }

    #[tokio::test]
    async fn update_client_can_clear_complement() -> TestResult {
        let ctx = TestContext::new().await;
        let created = ctx.clients.create_client(new_client()).await?;

        let updated = ctx
            .clients
            .update_client(
                created.id,
                ClientPatch {
                    complement: Some(None),
                    ..ClientPatch::default()
                },
            )
            .await?;

        assert_eq!(updated.complement, "");
        assert_eq!(updated.name, created.name);

        Ok(())
    }

    #[tokio::test]
    async fn update_client_negative_weight_is_invalid_data() -> TestResult {
        let ctx = TestContext::new().await;
        let created = ctx.clients.create_client(new_client()).await?;

        let result = ctx
            .clients
            .update_client(
                created.id,
                ClientPatch {
                    weight_kg: Some(-4.0),
                    ..ClientPatch::default()
                },
            )
            .await;

        assert!(
            matches!(result, Err(ClientsServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_client_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .clients
            .update_client(
                ClientId::from_i64(99),
                ClientPatch {
                    name: Some("B".to_string()),
                    ..ClientPatch::default()
                },
            )
            .await;

        assert!(
            matches!(result, Err(ClientsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_client_moves_it_to_the_archive() -> TestResult {
        let ctx = TestContext::new().await;
        let created = ctx.clients.create_client(new_client()).await?;

        let live = ctx
            .clients
            .update_client(
                created.id,
                ClientPatch {
                    weight_kg: Some(20.0),
                    ..ClientPatch::default()
                },
            )
            .await?;

        ctx.clients.delete_client(created.id).await?;

        let result = ctx.clients.get_client(created.id).await;

        assert!(
            matches!(result, Err(ClientsServiceError::NotFound)),
            "expected NotFound after deletion, got {result:?}"
        );
        assert_archived_copies(&archived_clients(&ctx).await?, vec![live]);

        Ok(())
    }

    #[tokio::test]
    async fn delete_client_unknown_id_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx.clients.delete_client(ClientId::from_i64(7)).await;

        assert!(
            matches!(result, Err(ClientsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
        assert!(archived_clients(&ctx).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn delete_all_clients_archives_every_client() -> TestResult {
        let ctx = TestContext::new().await;

        let mut live = Vec::new();

        for (weight_kg, complement) in [(1.0, ""), (2.0, "Casa"), (3.0, "Bloco B")] {
            live.push(
                ctx.clients
                    .create_client(NewClient {
                        weight_kg,
                        complement: complement.to_string(),
                        ..new_client()
                    })
                    .await?,
            );
        }

        let deleted = ctx.clients.delete_all_clients().await?;
        let page = ctx.clients.list_clients(ClientsQuery::default()).await?;

        assert_eq!(deleted, 3);
        assert_eq!(page.info.total, 0);
        assert_archived_copies(&archived_clients(&ctx).await?, live);

        Ok(())
    }

    #[tokio::test]
    async fn delete_all_clients_with_no_clients_is_a_no_op() -> TestResult {
        let ctx = TestContext::new().await;

        assert_eq!(ctx.clients.delete_all_clients().await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn list_clients_pages_and_filters_by_city() -> TestResult {
        let ctx = TestContext::new().await;

        for city in ["Recife", "Olinda", "Recife", "Recife"] {
            ctx.clients
                .create_client(NewClient {
                    city: city.to_string(),
                    ..new_client()
                })
                .await?;
        }

        let query = ClientsQuery::new(PageRequest::new(Some(2), Some(0)), Some("Recife".into()));
        let page = ctx.clients.list_clients(query).await?;

        assert_eq!(page.clients.len(), 2);
        assert!(page.clients.iter().all(|client| client.city == "Recife"));
        assert_eq!(page.info.total, 3);
        assert_eq!(page.info.total_pages, 2);
        assert_eq!(
            page.info.next.map(|next| next.page.offset()),
            Some(2),
            "expected a second page"
        );

        Ok(())
    }
}
