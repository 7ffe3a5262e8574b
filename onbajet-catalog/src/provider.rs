use async_trait::async_trait;

use crate::item::MenuItem;
use crate::CatalogError;

/// Source of the menu items the calculator runs over.
///
/// Implementations return items in catalog order; an empty catalog is valid.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn list_items(&self) -> Result<Vec<MenuItem>, CatalogError>;

    async fn get_item(&self, id: &str) -> Result<Option<MenuItem>, CatalogError> {
        Ok(self.list_items().await?.into_iter().find(|item| item.id == id))
    }
}
