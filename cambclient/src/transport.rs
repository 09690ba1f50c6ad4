//! Transport trait over raw HTTP exchanges and the reqwest implementation.
//!
//! The transport never interprets status codes; `CambClient` maps non-2xx
//! responses to errors.

use serde_json::Value;

use crate::{CambError, ClientFuture};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        bytes: Vec<u8>,
    },
}

impl FormPart {
    pub fn text(name: impl Into<String>, value: impl ToString) -> Self {
        Self::Text {
            name: name.into(),
            value: value.to_string(),
        }
    }

    pub fn file(name: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::File {
            name: name.into(),
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Multipart(Vec<FormPart>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn post_json(url: impl Into<String>, body: Value) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            headers: Vec::new(),
            body: RequestBody::Json(body),
        }
    }

    pub fn post_multipart(url: impl Into<String>, parts: Vec<FormPart>) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            headers: Vec::new(),
            body: RequestBody::Multipart(parts),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type: None,
            body: body.into(),
        }
    }

    pub fn json(status: u16, value: &Value) -> Self {
        Self {
            status,
            content_type: Some("application/json".to_string()),
            body: value.to_string().into_bytes(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub trait CambTransport: Send + Sync + std::fmt::Debug {
    fn send<'a>(&'a self, request: HttpRequest) -> ClientFuture<'a, Result<HttpResponse, CambError>>;
}

#[cfg(feature = "http-transport")]
pub use http::CambHttpTransport;

#[cfg(feature = "http-transport")]
mod http {
    use reqwest::Client;
    use reqwest::header::CONTENT_TYPE;
    use reqwest::multipart::{Form, Part};

    use super::{CambTransport, FormPart, HttpMethod, HttpRequest, HttpResponse, RequestBody};
    use crate::{CambConfig, CambError, ClientFuture};

    #[derive(Debug, Clone)]
    pub struct CambHttpTransport {
        client: Client,
    }

    impl CambHttpTransport {
        pub fn new(client: Client) -> Self {
            Self { client }
        }

        /// Builds a reqwest client honouring the configured request timeout.
        pub fn from_config(config: &CambConfig) -> Result<Self, CambError> {
            let client = Client::builder()
                .timeout(config.timeout())
                .build()
                .map_err(|err| CambError::transport(err.to_string()))?;
            Ok(Self::new(client))
        }

        fn multipart_form(parts: Vec<FormPart>) -> Form {
            parts.into_iter().fold(Form::new(), |form, part| match part {
                FormPart::Text { name, value } => form.text(name, value),
                FormPart::File {
                    name,
                    file_name,
                    bytes,
                } => form.part(name, Part::bytes(bytes).file_name(file_name)),
            })
        }
    }

    impl CambTransport for CambHttpTransport {
        fn send<'a>(
            &'a self,
            request: HttpRequest,
        ) -> ClientFuture<'a, Result<HttpResponse, CambError>> {
            Box::pin(async move {
                let mut builder = match request.method {
                    HttpMethod::Get => self.client.get(&request.url),
                    HttpMethod::Post => self.client.post(&request.url),
                };

                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }

                builder = match request.body {
                    RequestBody::Empty => builder,
                    RequestBody::Json(body) => builder.json(&body),
                    RequestBody::Multipart(parts) => builder.multipart(Self::multipart_form(parts)),
                };

                let response = builder.send().await.map_err(|err| {
                    if err.is_timeout() {
                        CambError::transport(format!("request timed out: {err}"))
                    } else {
                        CambError::transport(err.to_string())
                    }
                })?;

                let status = response.status().as_u16();
                let content_type = response
                    .headers()
                    .get(CONTENT_TYPE)
                    .and_then(|value| value.to_str().ok())
                    .map(ToString::to_string);
                let body = response
                    .bytes()
                    .await
                    .map_err(|err| CambError::transport(err.to_string()))?;

                Ok(HttpResponse {
                    status,
                    content_type,
                    body: body.to_vec(),
                })
            })
        }
    }
}
