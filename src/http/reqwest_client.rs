use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::errors::HttpClientError;
use crate::http::traits::{
    outcome_from_parts, HttpClient, HttpClientResult, HttpCompletion, HttpResponse,
};

/// [`HttpClient`] backed by a blocking reqwest session.
///
/// Every request runs on its own worker thread, so `get` never blocks the
/// caller and concurrent calls share nothing but the session.
#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    /// Reuse an existing session
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn perform(client: &Client, url: Url) -> HttpClientResult {
        let (data, response, error) = match client.get(url).send() {
            Err(e) => (None, None, Some(HttpClientError::from(e))),
            Ok(resp) => {
                let response = HttpResponse::new(resp.url().clone(), resp.status());
                match resp.bytes() {
                    Ok(bytes) => (Some(bytes.to_vec()), Some(response), None),
                    Err(e) => (None, Some(response), Some(HttpClientError::from(e))),
                }
            }
        };

        outcome_from_parts(data, response, error)
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &Url, completion: HttpCompletion) {
        let client = self.client.clone();
        let url = url.clone();

        thread::spawn(move || {
            tracing::trace!(url = %url, "GET");
            completion(Self::perform(&client, url));
        });
    }
}
