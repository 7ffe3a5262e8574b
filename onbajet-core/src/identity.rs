use serde::{Deserialize, Serialize};
use async_trait::async_trait;
use onbajet_shared::Masked;

use crate::{CoreError, CoreResult};

/// Who is looking at the calculator. Decided upstream; nothing in the pricing
/// path reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Viewer {
    Authenticated {
        subject: Masked<String>,
        provider: String,
        email: Option<Masked<String>>,
    },
    Guest,
    Anonymous,
}

impl Viewer {
    /// Authenticated viewers and guests may use the calculator.
    pub fn can_browse(&self) -> bool {
        !matches!(self, Viewer::Anonymous)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Viewer::Authenticated { .. } => "authenticated",
            Viewer::Guest => "guest",
            Viewer::Anonymous => "anonymous",
        }
    }
}

/// Facts an identity layer has already verified and hands over per request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionHints {
    pub guest: bool,
    pub subject: Option<String>,
    pub provider: Option<String>,
    pub email: Option<String>,
}

#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Turn session hints into a viewer.
    async fn resolve(&self, hints: &SessionHints) -> CoreResult<Viewer>;
}

/// Takes the hints at face value. Suitable behind a proxy that has already
/// done the sign-in; a provider-backed resolver would verify the subject first.
pub struct TrustedHintsResolver {
    default_provider: String,
}

impl TrustedHintsResolver {
    pub fn new(default_provider: impl Into<String>) -> Self {
        Self {
            default_provider: default_provider.into(),
        }
    }
}

impl Default for TrustedHintsResolver {
    fn default() -> Self {
        Self::new("external")
    }
}

#[async_trait]
impl IdentityResolver for TrustedHintsResolver {
    async fn resolve(&self, hints: &SessionHints) -> CoreResult<Viewer> {
        let subject = hints
            .subject
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let viewer = match subject {
            Some(subject) => {
                let provider = hints
                    .provider
                    .clone()
                    .unwrap_or_else(|| self.default_provider.clone());
                if provider.trim().is_empty() {
                    return Err(CoreError::IdentityError(
                        "provider must not be blank".to_string(),
                    ));
                }
                Viewer::Authenticated {
                    subject: Masked::new(subject.to_string()),
                    provider,
                    email: hints.email.clone().map(Masked::new),
                }
            }
            None if hints.guest => Viewer::Guest,
            None => Viewer::Anonymous,
        };

        tracing::debug!("Resolved viewer as {}", viewer.label());
        Ok(viewer)
    }
}
