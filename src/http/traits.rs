use reqwest::StatusCode;
use url::Url;

use crate::errors::HttpClientError;

/// Status-bearing descriptor of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub url: Url,
    pub status: StatusCode,
}

impl HttpResponse {
    pub fn new(url: Url, status: StatusCode) -> Self {
        Self { url, status }
    }
}

pub type HttpClientResult = Result<(Vec<u8>, HttpResponse), HttpClientError>;

pub type HttpCompletion = Box<dyn FnOnce(HttpClientResult) + Send + 'static>;

#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Perform a GET against `url`. `completion` fires exactly once, with
    /// either the body and response or a transport error. Status codes are
    /// not interpreted here.
    fn get(&self, url: &Url, completion: HttpCompletion);
}

/// Collapse a (data, response, error) triple into a two-way outcome.
///
/// An error always wins. Data with a response is a success. Any other
/// combination is reported as [`HttpClientError::UnexpectedValues`] so the
/// completion is never left uninvoked.
pub fn outcome_from_parts(
    data: Option<Vec<u8>>,
    response: Option<HttpResponse>,
    error: Option<HttpClientError>,
) -> HttpClientResult {
    match (data, response, error) {
        (_, _, Some(error)) => Err(error),
        (Some(data), Some(response), None) => Ok((data, response)),
        _ => Err(HttpClientError::UnexpectedValues),
    }
}
