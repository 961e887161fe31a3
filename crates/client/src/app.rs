//! User-facing flows. Each mutation is followed by a full reload of the list;
//! nothing is cached between calls.

use mesas_core::mesa;
use mesas_core::types::DbId;

use crate::api::{Identity, Mesa, MesasApi, NewMesa};
use crate::error::ClientError;

/// Edit form for an existing record. Unset fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct EditForm {
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub status: Option<String>,
}

pub struct MesasApp {
    api: MesasApi,
}

impl MesasApp {
    pub fn new(api: MesasApi) -> Self {
        Self { api }
    }

    /// Fetch the full list.
    pub async fn load(&self) -> Result<Vec<Mesa>, ClientError> {
        self.api.list().await
    }

    /// Create a record from raw form input, then reload.
    ///
    /// Empty inputs are rejected before any request is sent.
    pub async fn add(&self, name: &str, capacity: &str) -> Result<Vec<Mesa>, ClientError> {
        let (name, capacity) = (name.trim(), capacity.trim());
        if name.is_empty() || capacity.is_empty() {
            return Err(ClientError::Invalid(
                "Name and capacity are required".to_string(),
            ));
        }
        let capacity: i32 = capacity.parse().map_err(|_| {
            ClientError::Invalid(format!("Capacity must be a whole number, got '{capacity}'"))
        })?;
        let fields = mesa::validate_create(Some(name), Some(capacity), None)?;

        let created = self
            .api
            .create(&NewMesa {
                name: fields.name,
                capacity: fields.capacity,
                status: None,
            })
            .await?;
        tracing::info!(mesa_id = created.id, "Mesa added");

        self.load().await
    }

    /// Submit an edit form as one full replacement, then reload.
    pub async fn edit(&self, id: DbId, form: EditForm) -> Result<Vec<Mesa>, ClientError> {
        let current = self.api.get(id).await?;

        let name = form.name.unwrap_or(current.name);
        let status = form.status.unwrap_or(current.status);
        let fields = mesa::validate_update(
            Some(name.as_str()),
            Some(form.capacity.unwrap_or(current.capacity)),
            Some(status.as_str()),
        )?;

        let updated = self.api.update(id, &fields).await?;
        tracing::info!(mesa_id = updated.id, status = %updated.status, "Mesa updated");

        self.load().await
    }

    /// Fetch the service identification payload.
    pub async fn identity(&self) -> Result<Identity, ClientError> {
        self.api.identity().await
    }

    /// Delete a record, then reload.
    pub async fn remove(&self, id: DbId) -> Result<Vec<Mesa>, ClientError> {
        self.api.delete(id).await?;
        tracing::info!(mesa_id = id, "Mesa removed");

        self.load().await
    }
}
