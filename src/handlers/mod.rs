pub(crate) mod command;
pub(crate) mod media;
pub(crate) mod search;

#[cfg(test)]
pub(crate) mod testing {
    use std::{path::Path, sync::Arc};

    use async_trait::async_trait;
    use teloxide::dptree::{self, di::DependencyMap};

    use crate::{
        config::Config,
        engines::{ReverseEngine, SharedEngine},
        models::SearchHit,
    };

    pub(crate) struct FailingEngine;

    #[async_trait]
    impl ReverseEngine for FailingEngine {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn search(&self, _: &Path) -> anyhow::Result<Vec<SearchHit>> {
            Err(anyhow::anyhow!("provider unavailable"))
        }
    }

    /// Answers every search with the same hits.
    pub(crate) struct FixedEngine(pub(crate) Vec<SearchHit>);

    #[async_trait]
    impl ReverseEngine for FixedEngine {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn search(&self, path: &Path) -> anyhow::Result<Vec<SearchHit>> {
            assert!(path.exists(), "searched file {} is missing", path.display());
            Ok(self.0.clone())
        }
    }

    pub(crate) fn hit(similarity: f32, thumbnail: &str, urls: &[&str]) -> SearchHit {
        SearchHit {
            similarity,
            thumbnail: thumbnail.to_string(),
            urls: urls.iter().map(|url| url.to_string()).collect(),
            ..Default::default()
        }
    }

    pub(crate) fn config() -> Config {
        let mut config = Config::default();
        config.telegram.token = "123:test".to_string();
        config.saucenao.api_key = "test".to_string();
        config.general.downloads_dir = std::env::temp_dir().join("saucebot-tests");
        config
    }

    pub(crate) fn dependencies(engine: impl ReverseEngine + 'static) -> DependencyMap {
        let config = Arc::new(config());
        let engine: SharedEngine = Arc::new(engine);
        dptree::deps![config, engine]
    }
}
