//! Cloud-provider repository: the plain single-item path.

use crate::domain::CloudProvider;
use crate::error::CoreResult;
use crate::mapper::{id_key, ItemMapper};
use crate::repository::now;
use groundwork_store::ItemStore;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Persistence operations for [`CloudProvider`]s.
pub struct CloudProviderRepository {
    store: Arc<dyn ItemStore>,
}

impl CloudProviderRepository {
    /// Creates a repository over the given driver.
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Saves one provider, assigning identity and timestamps on first save.
    pub fn save(&self, provider: &mut CloudProvider) -> CoreResult<()> {
        let ts = now();
        if provider.id.is_nil() {
            provider.id = Uuid::new_v4();
            provider.created_at = ts;
        }
        provider.updated_at = ts;

        let item = provider.to_item()?;
        self.store.put_item(CloudProvider::table(), item, None)?;
        debug!(id = %provider.id, name = %provider.name, "saved cloud provider");
        Ok(())
    }

    /// Loads a provider by id.
    pub fn find_by_id(&self, id: Uuid) -> CoreResult<Option<CloudProvider>> {
        match self.store.get_item(CloudProvider::table(), &id_key(id))? {
            Some(item) => CloudProvider::from_item(&item),
            None => Ok(None),
        }
    }

    /// Deletes a provider by id.
    pub fn delete(&self, id: Uuid) -> CoreResult<()> {
        self.store
            .delete_item(CloudProvider::table(), &id_key(id), None)?;
        debug!(%id, "deleted cloud provider");
        Ok(())
    }
}
