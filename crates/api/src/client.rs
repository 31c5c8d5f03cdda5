use reqwest::{multipart::Form, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use shared_types::{ApiEnvelope, AppError, ClientConfig};

/// Thin wrapper over `reqwest::Client` that knows the API base URL, attaches
/// the bearer token and unwraps the response envelope.
///
/// Cheap to clone; views build one per request from the current session.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    token: Option<String>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.api_base_url)
            .field("authenticated", &self.token.is_some())
            .finish()
    }
}

/// Successful reply with its optional payload and server message.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> Reply<T> {
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            token: None,
        }
    }

    /// Same client, authenticated with `token` (or anonymous for `None`).
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, self.config.endpoint(path))
            .header(reqwest::header::ACCEPT, "application/json");
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send, map transport and HTTP failures to [`AppError`], then decode
    /// and check the envelope.
    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<Reply<T>, AppError> {
        tracing::debug!(%method, path, "api request");

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(%method, path, error = %e, "api request failed to send");
            AppError::network("Could not reach the server. Check your connection and try again.")
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::warn!(%method, path, error = %e, "failed to read api response");
            AppError::network("The connection was interrupted. Please try again.")
        })?;

        if !status.is_success() {
            let err = AppError::from_response(status.as_u16(), &body);
            tracing::warn!(%method, path, status = status.as_u16(), kind = %err.kind, "api error response");
            return Err(err);
        }

        let envelope = ApiEnvelope::<T>::from_body(&body).map_err(|err| {
            tracing::warn!(%method, path, kind = %err.kind, message = %err.message, "api response rejected");
            err
        })?;
        Ok(Reply {
            message: envelope.message,
            data: envelope.data,
        })
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Reply<T>, AppError> {
        self.send(Method::GET, path, self.request(Method::GET, path))
            .await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<Reply<T>, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, path, self.request(Method::POST, path).json(body))
            .await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Reply<T>, AppError> {
        self.send(Method::POST, path, self.request(Method::POST, path))
            .await
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<Reply<T>, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PUT, path, self.request(Method::PUT, path).json(body))
            .await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Reply<T>, AppError> {
        self.send(Method::DELETE, path, self.request(Method::DELETE, path))
            .await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<Reply<T>, AppError> {
        self.send(
            Method::POST,
            path,
            self.request(Method::POST, path).multipart(form),
        )
        .await
    }
}

/// Payload of a list endpoint; an absent or null `data` is an empty list.
pub(crate) fn list<T>(reply: Reply<Vec<T>>) -> Vec<T> {
    reply.data.unwrap_or_default()
}

/// Payload of an endpoint that must return a record.
pub(crate) fn required<T>(reply: Reply<T>) -> Result<T, AppError> {
    reply
        .data
        .ok_or_else(|| AppError::invalid_response("The server response did not include any data."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn with_token_drops_empty_tokens() {
        let client = ApiClient::new(ClientConfig::default()).with_token(Some(String::new()));
        assert!(!client.is_authenticated());
        let client = client.with_token(Some("t".into()));
        assert!(client.is_authenticated());
    }

    #[test]
    fn debug_output_hides_token() {
        let client = ApiClient::new(ClientConfig::default()).with_token(Some("secret".into()));
        let debug = format!("{client:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("authenticated: true"));
    }

    #[test]
    fn reply_message_fallback() {
        let reply: Reply<()> = Reply {
            message: Some("  ".into()),
            data: None,
        };
        assert_eq!(reply.message_or("Saved"), "Saved");
    }

    #[test]
    fn list_of_missing_data_is_empty() {
        let reply: Reply<Vec<i32>> = Reply {
            message: None,
            data: None,
        };
        assert_eq!(list(reply), Vec::<i32>::new());
    }

    #[test]
    fn required_data_missing_is_invalid_response() {
        let reply: Reply<i32> = Reply {
            message: None,
            data: None,
        };
        let err = required(reply).unwrap_err();
        assert_eq!(err.kind, shared_types::AppErrorKind::InvalidResponse);
    }
}
