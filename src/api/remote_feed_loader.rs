use std::sync::{Arc, Weak};

use url::Url;

use crate::api::feed_item_mapper::FeedItemMapper;
use crate::domain::{FeedLoader, LoadCompletion, LoadFeedResult};
use crate::errors::RemoteFeedLoaderError;
use crate::http::{HttpClient, HttpClientResult};

/// Loads a feed from a fixed URL through a shared [`HttpClient`].
///
/// Pending completions only hold a weak reference to the loader's liveness
/// token: once the loader is dropped, results that arrive afterwards are
/// discarded instead of delivered.
pub struct RemoteFeedLoader {
    url: Url,
    client: Arc<dyn HttpClient>,
    alive: Arc<()>,
}

impl RemoteFeedLoader {
    pub fn new(url: Url, client: Arc<dyn HttpClient>) -> Self {
        Self {
            url,
            client,
            alive: Arc::new(()),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    fn adapt(outcome: HttpClientResult) -> LoadFeedResult {
        match outcome {
            Ok((data, response)) => {
                let result = FeedItemMapper::map(&data, response.status);
                if result.is_err() {
                    tracing::debug!(
                        url = %response.url,
                        status = %response.status,
                        "Feed payload rejected"
                    );
                }
                result
            }
            Err(e) => {
                tracing::warn!(error = %e, "Feed request failed");
                Err(RemoteFeedLoaderError::Connectivity)
            }
        }
    }
}

impl FeedLoader for RemoteFeedLoader {
    fn load(&self, completion: LoadCompletion) {
        let alive: Weak<()> = Arc::downgrade(&self.alive);
        let url = self.url.clone();

        tracing::debug!(url = %url, "Loading feed");

        self.client.get(
            &self.url,
            Box::new(move |outcome| {
                // Held until delivery returns
                let Some(_alive) = alive.upgrade() else {
                    tracing::debug!(url = %url, "Loader dropped, discarding result");
                    return;
                };
                completion(Self::adapt(outcome));
            }),
        );
    }
}
