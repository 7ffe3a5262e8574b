pub mod app_config;
pub mod catalog_repo;

pub use app_config::Config;
pub use catalog_repo::CatalogRepository;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Catalog(#[from] onbajet_catalog::CatalogError),
}
