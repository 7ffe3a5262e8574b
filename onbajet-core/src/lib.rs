pub mod identity;

pub use identity::{IdentityResolver, SessionHints, TrustedHintsResolver, Viewer};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Identity resolution failed: {0}")]
    IdentityError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
