use std::{path::Path, sync::Arc};

use crate::models::SearchHit;
use async_trait::async_trait;

#[async_trait]
pub trait ReverseEngine: Send + Sync {
    fn name(&self) -> &'static str;

    /// Looks up the image stored at `path`.
    ///
    /// Hits come back best match first. No match is an empty list, not an error.
    async fn search(&self, path: &Path) -> anyhow::Result<Vec<SearchHit>>;
}

pub mod saucenao;

pub use saucenao::SauceNao;

pub(crate) type SharedEngine = Arc<dyn ReverseEngine>;
