//! In-memory [`HttpClient`] that records requests and completes them on
//! demand, so loader behaviour can be driven deterministically.
//!
//! Only built for tests and with the `test-util` feature.

use std::sync::{Mutex, MutexGuard};

use reqwest::StatusCode;
use url::Url;

use crate::errors::HttpClientError;
use crate::http::traits::{HttpClient, HttpClientResult, HttpCompletion, HttpResponse};

struct Message {
    url: Url,
    completion: Option<HttpCompletion>,
}

#[derive(Default)]
pub struct HttpClientSpy {
    messages: Mutex<Vec<Message>>,
}

impl HttpClientSpy {
    pub fn new() -> Self {
        Self::default()
    }

    fn messages(&self) -> MutexGuard<'_, Vec<Message>> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// URLs of every `get` call, in call order
    pub fn requested_urls(&self) -> Vec<Url> {
        self.messages().iter().map(|m| m.url.clone()).collect()
    }

    /// Fail the request at `index` with a transport error.
    /// Returns false if there is no pending request at that index.
    pub fn complete_with_error(&self, error: HttpClientError, index: usize) -> bool {
        self.complete(index, |_| Err(error))
    }

    /// Answer the request at `index` with `code` and `data`.
    /// Returns false if there is no pending request at that index.
    pub fn complete_with_status(&self, code: u16, data: Vec<u8>, index: usize) -> bool {
        self.complete(index, |url| {
            let status = StatusCode::from_u16(code)
                .map_err(|e| HttpClientError::Stubbed(e.to_string()))?;
            Ok((data, HttpResponse::new(url, status)))
        })
    }

    fn complete(&self, index: usize, outcome: impl FnOnce(Url) -> HttpClientResult) -> bool {
        let pending = {
            let mut messages = self.messages();
            messages
                .get_mut(index)
                .and_then(|m| m.completion.take().map(|c| (m.url.clone(), c)))
        };

        // The lock is released before calling out, completions may call `get` again
        match pending {
            Some((url, completion)) => {
                completion(outcome(url));
                true
            }
            None => false,
        }
    }
}

impl HttpClient for HttpClientSpy {
    fn get(&self, url: &Url, completion: HttpCompletion) {
        self.messages().push(Message {
            url: url.clone(),
            completion: Some(completion),
        });
    }
}
