//! Read-only profile source consumed by the matcher.

use async_trait::async_trait;
use crate::models::Profile;

/// Backing store for community profiles
///
/// Implementations own transport, timeouts and retries. The matcher only
/// reads through this trait and propagates its errors unchanged.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch a single profile, `None` when the user has no profile yet
    async fn fetch_profile(&self, id: &str) -> Result<Option<Profile>, Self::Error>;

    /// Fetch every profile except `exclude_id`, in store order
    async fn fetch_other_profiles(&self, exclude_id: &str) -> Result<Vec<Profile>, Self::Error>;
}
