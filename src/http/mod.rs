pub mod reqwest_client;
#[cfg(any(test, feature = "test-util"))]
pub mod spy;
pub mod traits;

pub use reqwest_client::ReqwestHttpClient;
#[cfg(any(test, feature = "test-util"))]
pub use spy::HttpClientSpy;
pub use traits::{outcome_from_parts, HttpClient, HttpClientResult, HttpCompletion, HttpResponse};
