use crate::domain::FeedItem;
use crate::errors::RemoteFeedLoaderError;

pub type LoadFeedResult = Result<Vec<FeedItem>, RemoteFeedLoaderError>;

/// Callback receiving the outcome of a single load.
pub type LoadCompletion = Box<dyn FnOnce(LoadFeedResult) + Send + 'static>;

pub trait FeedLoader: Send + Sync {
    /// Start loading the feed. Returns immediately; `completion` is invoked
    /// at most once, on whatever thread the transport delivers on.
    fn load(&self, completion: LoadCompletion);
}
