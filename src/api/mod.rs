pub mod feed_item_mapper;
pub mod remote_feed_loader;

pub use feed_item_mapper::FeedItemMapper;
pub use remote_feed_loader::RemoteFeedLoader;
