use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

pub type AssetData = Arc<Vec<u8>>;

/// Session-scoped cache over the remote asset provider.
///
/// Failed fetches are cached as unavailable for the life of the process,
/// matching the one-shot warm-up of the gallery: the renderer never retries.
pub struct AssetCache {
    client: reqwest::Client,
    base_url: String,
    entries: RwLock<HashMap<String, Option<AssetData>>>,
}

impl AssetCache {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get_or_fetch(&self, id: &str) -> Option<AssetData> {
        if let Some(cached) = self.entries.read().await.get(id) {
            return cached.clone();
        }

        let fetched = self.fetch(id).await.map(Arc::new);
        self.entries
            .write()
            .await
            .entry(id.to_string())
            .or_insert(fetched)
            .clone()
    }

    /// Any transport error or non-success status collapses to "unavailable".
    async fn fetch(&self, id: &str) -> Option<Vec<u8>> {
        let url = format!("{}/uc?export=download&id={}", self.base_url, id);
        match self.client.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => match resp.bytes().await {
                Ok(body) => Some(body.to_vec()),
                Err(e) => {
                    tracing::warn!("asset {}: body read failed: {}", id, e);
                    None
                }
            },
            Ok(resp) => {
                tracing::warn!("asset {}: provider returned {}", id, resp.status());
                None
            }
            Err(e) => {
                tracing::warn!("asset {}: fetch failed: {}", id, e);
                None
            }
        }
    }

    pub async fn warm(&self, ids: &[&str]) {
        for id in ids {
            self.get_or_fetch(id).await;
        }
        let (loaded, unavailable) = self.status().await;
        tracing::info!(
            "asset warm-up complete: {} loaded, {} unavailable",
            loaded,
            unavailable
        );
    }

    /// (loaded, unavailable) counts of everything fetched so far.
    pub async fn status(&self) -> (usize, usize) {
        let entries = self.entries.read().await;
        let loaded = entries.values().filter(|v| v.is_some()).count();
        (loaded, entries.len() - loaded)
    }
}
