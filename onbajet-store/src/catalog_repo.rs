use std::collections::HashSet;
use std::path::Path;

use async_trait::async_trait;
use onbajet_catalog::{mock_catalog, CatalogError, CatalogProvider, MenuItem};

use crate::app_config::CatalogConfig;
use crate::StoreError;

/// In-memory catalog. Items are validated once, when the repository is built.
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    items: Vec<MenuItem>,
}

impl CatalogRepository {
    pub fn from_items(items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        {
            let mut seen = HashSet::new();
            for item in &items {
                item.validate()?;
                if !seen.insert(item.id.as_str()) {
                    return Err(CatalogError::InvalidInput(format!("duplicate item id {}", item.id)));
                }
            }
        }
        Ok(Self { items })
    }

    pub fn mock() -> Self {
        Self { items: mock_catalog() }
    }

    /// Read a JSON array of menu items.
    pub async fn load_json(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let raw = tokio::fs::read_to_string(path).await.map_err(|source| StoreError::Io {
            path: path_str.clone(),
            source,
        })?;
        let items: Vec<MenuItem> = serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: path_str.clone(),
            source,
        })?;

        let repo = Self::from_items(items)?;
        tracing::info!("Loaded {} catalog items from {}", repo.len(), path_str);
        Ok(repo)
    }

    pub async fn from_config(config: &CatalogConfig) -> Result<Self, StoreError> {
        match &config.path {
            Some(path) => Self::load_json(path).await,
            None => {
                tracing::info!("No catalog path configured, serving the mock catalog");
                Ok(Self::mock())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl CatalogProvider for CatalogRepository {
    async fn list_items(&self) -> Result<Vec<MenuItem>, CatalogError> {
        Ok(self.items.clone())
    }

    async fn get_item(&self, id: &str) -> Result<Option<MenuItem>, CatalogError> {
        Ok(self.items.iter().find(|item| item.id == id).cloned())
    }
}
