//! The Builder pattern: construct a complex object step by step.
//!
//! [`HttpRequestBuilder`] accumulates the pieces of an HTTP request through
//! chained calls and assembles an [`http::Request`] at the end. Validation
//! follows a first-error-wins rule: the first step that fails records its
//! error, every later configuration call becomes a no-op, and `build()`
//! surfaces that first error instead of a request.

use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::{Method, Request, Uri};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("method cannot be empty")]
    EmptyMethod,
    #[error("url cannot be empty")]
    EmptyUrl,
    #[error("invalid method: {0:?}")]
    InvalidMethod(String),
    #[error("invalid url: {0:?}")]
    InvalidUrl(String),
    #[error("invalid header {name:?}: {value:?}")]
    InvalidHeader { name: String, value: String },
}

/// Fluent builder for [`http::Request<String>`].
///
/// `method` and `url` keep the last value set; headers accumulate.
#[derive(Debug, Default)]
pub struct HttpRequestBuilder {
    method: String,
    url: String,
    headers: Vec<(String, String)>,
    body: String,
    err: Option<BuildError>,
}

impl HttpRequestBuilder {
    pub fn new() -> Self {
        HttpRequestBuilder::default()
    }

    /// Sets the request method, uppercased. An empty method records
    /// [`BuildError::EmptyMethod`].
    pub fn method(mut self, method: &str) -> Self {
        if self.err.is_some() {
            return self;
        }
        if method.trim().is_empty() {
            self.err = Some(BuildError::EmptyMethod);
            return self;
        }
        self.method = method.to_uppercase();
        self
    }

    /// Sets the target URL. An empty URL records [`BuildError::EmptyUrl`].
    pub fn url(mut self, url: &str) -> Self {
        if self.err.is_some() {
            return self;
        }
        if url.trim().is_empty() {
            self.err = Some(BuildError::EmptyUrl);
            return self;
        }
        self.url = url.to_owned();
        self
    }

    /// Appends a header. Repeated names accumulate rather than overwrite.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        if self.err.is_some() {
            return self;
        }
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        if self.err.is_some() {
            return self;
        }
        self.body = body.to_owned();
        self
    }

    /// Assembles the request, or returns the first error recorded by any
    /// step. A builder that never saw a method or URL fails here too.
    pub fn build(self) -> Result<Request<String>, BuildError> {
        if let Some(err) = self.err {
            return Err(err);
        }
        if self.method.is_empty() {
            return Err(BuildError::EmptyMethod);
        }
        if self.url.is_empty() {
            return Err(BuildError::EmptyUrl);
        }

        let method = Method::from_bytes(self.method.as_bytes())
            .map_err(|_| BuildError::InvalidMethod(self.method.clone()))?;
        let uri: Uri = self
            .url
            .parse()
            .map_err(|_| BuildError::InvalidUrl(self.url.clone()))?;

        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            let invalid = || BuildError::InvalidHeader {
                name: name.clone(),
                value: value.clone(),
            };
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            headers.append(name, value);
        }

        let mut request = Request::new(self.body);
        *request.method_mut() = method;
        *request.uri_mut() = uri;
        *request.headers_mut() = headers;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_complete_request() {
        let request = HttpRequestBuilder::new()
            .method("post")
            .url("http://test.com")
            .header("Content-Type", "application/json")
            .body(r#"{"test": "value"}"#)
            .build()
            .unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.uri(), &"http://test.com".parse::<Uri>().unwrap());
        assert_eq!(
            request.headers().get("content-type").unwrap(),
            "application/json"
        );
        assert_eq!(request.body(), r#"{"test": "value"}"#);
    }

    #[test]
    fn headers_accumulate_while_other_fields_take_the_last_value() {
        let request = HttpRequestBuilder::new()
            .method("GET")
            .method("PUT")
            .url("http://old.example")
            .url("http://new.example")
            .header("Accept", "text/plain")
            .header("Accept", "application/json")
            .body("first")
            .body("second")
            .build()
            .unwrap();

        assert_eq!(request.method(), Method::PUT);
        assert_eq!(request.uri().host(), Some("new.example"));
        let accepts: Vec<_> = request.headers().get_all("accept").iter().collect();
        assert_eq!(accepts, ["text/plain", "application/json"]);
        assert_eq!(request.body(), "second");
    }

    #[test]
    fn first_error_wins() {
        let result = HttpRequestBuilder::new()
            .method("   ")
            .url("")
            .build();

        assert_eq!(result.unwrap_err(), BuildError::EmptyMethod);
    }

    #[test]
    fn configuration_after_an_error_is_a_no_op() {
        let result = HttpRequestBuilder::new()
            .url("")
            .method("GET")
            .url("http://recovered.example")
            .build();

        // The later, valid calls do not clear the recorded error.
        assert_eq!(result.unwrap_err(), BuildError::EmptyUrl);
    }

    #[test]
    fn missing_fields_fail_at_build() {
        let no_method = HttpRequestBuilder::new().url("http://test.com").build();
        assert_eq!(no_method.unwrap_err(), BuildError::EmptyMethod);

        let no_url = HttpRequestBuilder::new().method("GET").build();
        assert_eq!(no_url.unwrap_err(), BuildError::EmptyUrl);
    }

    #[test]
    fn malformed_pieces_fail_at_build() {
        let bad_url = HttpRequestBuilder::new()
            .method("GET")
            .url("http://exa mple.com")
            .build();
        assert!(matches!(bad_url.unwrap_err(), BuildError::InvalidUrl(_)));

        let bad_header = HttpRequestBuilder::new()
            .method("GET")
            .url("http://test.com")
            .header("bad name", "value")
            .build();
        assert!(matches!(
            bad_header.unwrap_err(),
            BuildError::InvalidHeader { .. }
        ));
    }
}
