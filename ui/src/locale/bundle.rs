//! Translation bundle activation.

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("{0:?} is not a valid language identifier")]
    InvalidTag(String),
    #[error("no translation bundle for {0:?}")]
    Missing(String),
    #[error(transparent)]
    Embed(#[from] i18n_embed::I18nEmbedError),
}

/// Source of translation bundles. Every operation may suspend.
#[allow(async_fn_in_trait)]
pub trait BundleProvider {
    async fn is_active(&self, code: &str) -> bool;
    async fn switch_to(&self, code: &str) -> Result<(), BundleError>;
    async fn is_loaded(&self, code: &str) -> bool;
    async fn load(&self, code: &str) -> Result<(), BundleError>;
}

/// Make `code` the active bundle: switch if another one is active, then
/// load it if it has never been fetched. Already-active, already-loaded
/// bundles are left untouched.
pub async fn activate<P: BundleProvider>(provider: &P, code: &str) -> Result<(), BundleError> {
    activate_while(provider, code, || true).await.map(|_| ())
}

/// [`activate`], checking `is_current` before every provider step.
///
/// Returns `Ok(false)` as soon as the check fails, without touching the
/// provider again, so an activation overtaken by a newer navigation stops
/// before it can switch the shared bundle.
pub async fn activate_while<P, F>(
    provider: &P,
    code: &str,
    is_current: F,
) -> Result<bool, BundleError>
where
    P: BundleProvider,
    F: Fn() -> bool,
{
    if !is_current() {
        return Ok(false);
    }
    if !provider.is_active(code).await {
        if !is_current() {
            debug!(code, "activation overtaken before switch");
            return Ok(false);
        }
        debug!(code, "switching active bundle");
        provider.switch_to(code).await?;
    }
    if !provider.is_loaded(code).await {
        if !is_current() {
            debug!(code, "activation overtaken before load");
            return Ok(false);
        }
        debug!(code, "loading bundle");
        provider.load(code).await?;
    }
    Ok(true)
}
