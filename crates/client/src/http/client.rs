//! The single configured request layer every backend call goes through.
//!
//! Adds the bearer token (except for public endpoints), maps non-2xx
//! responses to `ApiError`, and on 401 clears the session and hard-redirects
//! the browser to the login page.

use contracts::shared::list_filter::ListFilter;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::rc::Rc;

use super::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, RequestBody};
use crate::config::{AppConfig, LOGIN_PATH};
use crate::error::ApiError;
use crate::services::Navigator;
use crate::session::SessionStore;

#[derive(Clone)]
pub struct ApiClient {
    config: Rc<AppConfig>,
    transport: Rc<dyn HttpTransport>,
    session: SessionStore,
    navigator: Rc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        config: AppConfig,
        transport: Rc<dyn HttpTransport>,
        session: SessionStore,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            config: Rc::new(config),
            transport,
            session,
            navigator,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn transport(&self) -> Rc<dyn HttpTransport> {
        self.transport.clone()
    }

    /// Drop the session and leave the app through a full page load
    pub fn redirect_to_login(&self) {
        self.session.clear();
        self.navigator.hard_redirect(LOGIN_PATH);
    }

    /// Absolute URL with the filter encoded as a query string
    pub fn url(&self, path: &str, query: Option<&ListFilter>) -> Result<String, ApiError> {
        let mut url = self.config.api_url(path);
        if let Some(filter) = query.filter(|f| !f.is_empty()) {
            let qs = serde_qs::to_string(filter).map_err(|e| ApiError::Encode(e.to_string()))?;
            url.push('?');
            url.push_str(&qs);
        }
        Ok(url)
    }

    /// Send a request and return the raw 2xx response
    pub async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<&ListFilter>,
        body: Option<RequestBody>,
    ) -> Result<HttpResponse, ApiError> {
        let mut request = HttpRequest::new(method, self.url(path, query)?);
        if let Some(RequestBody::Json(_)) = &body {
            request = request.header("Content-Type", "application/json");
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let public = !AppConfig::requires_auth(path);
        if !public {
            match self.session.token() {
                Some(token) => {
                    request = request.header("Authorization", format!("Bearer {}", token));
                }
                None => log::debug!("{} {} sent without a token", method.as_str(), path),
            }
        }

        log::debug!("{} {}", method.as_str(), request.url);
        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("{} {} failed: {}", method.as_str(), path, e);
            ApiError::from(e)
        })?;

        if response.is_success() {
            return Ok(response);
        }

        // Any 401, public endpoint or not, ends the session
        if response.status == 401 {
            log::warn!("{} {} returned 401, redirecting to login", method.as_str(), path);
            self.redirect_to_login();
            return Err(ApiError::Unauthorized);
        }

        let message = response.error_message();
        log::warn!(
            "{} {} returned {}: {}",
            method.as_str(),
            path,
            response.status,
            message.as_deref().unwrap_or("<no message>")
        );
        Err(ApiError::Status {
            status: response.status,
            message,
        })
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&ListFilter>,
    ) -> Result<T, ApiError> {
        let response = self.execute(HttpMethod::Get, path, query, None).await?;
        decode(&response)
    }

    /// POST a JSON body and decode the JSON answer
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .execute(HttpMethod::Post, path, None, Some(encode(body)?))
            .await?;
        decode(&response)
    }

    /// Send a JSON body and ignore whatever the server answers with
    pub async fn send_json<B: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.execute(method, path, None, Some(encode(body)?))
            .await
            .map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(HttpMethod::Delete, path, None, None)
            .await
            .map(|_| ())
    }

    /// GET a binary body (exports)
    pub async fn get_bytes(
        &self,
        path: &str,
        query: Option<&ListFilter>,
    ) -> Result<HttpResponse, ApiError> {
        self.execute(HttpMethod::Get, path, query, None).await
    }
}

fn encode<B: Serialize>(body: &B) -> Result<RequestBody, ApiError> {
    serde_json::to_string(body)
        .map(RequestBody::Json)
        .map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    response.json().map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use crate::testing::{api_client, RecordingNavigator, ScriptedTransport};
    use contracts::shared::list_filter::keys;

    fn signed_in() -> SessionStore {
        let session = SessionStore::in_memory();
        session.set(Session {
            token: "tok-1".into(),
            user: None,
        });
        session
    }

    #[tokio::test]
    async fn test_bearer_token_attached_except_public_paths() {
        let transport = Rc::new(ScriptedTransport::new());
        transport.on_json(HttpMethod::Get, "drivers", 200, "[]");
        transport.on_json(HttpMethod::Get, "health", 200, r#"{"status":"ok"}"#);
        let navigator = Rc::new(RecordingNavigator::default());
        let api = api_client(transport.clone(), signed_in(), navigator);

        let _: Vec<serde_json::Value> = api.get_json("drivers", None).await.unwrap();
        let _: serde_json::Value = api.get_json("health", None).await.unwrap();

        let requests = transport.requests();
        assert_eq!(
            requests[0].header_value("Authorization"),
            Some("Bearer tok-1")
        );
        assert_eq!(requests[1].header_value("Authorization"), None);
    }

    #[tokio::test]
    async fn test_filter_becomes_query_string() {
        let transport = Rc::new(ScriptedTransport::new());
        transport.on_json(HttpMethod::Get, "payments", 200, "[]");
        let api = api_client(
            transport.clone(),
            signed_in(),
            Rc::new(RecordingNavigator::default()),
        );

        let filter = ListFilter::new()
            .with(keys::RECIPIENT_TYPE, "driver")
            .with(keys::MONTH, "2024-05");
        let _: Vec<serde_json::Value> = api.get_json("payments", Some(&filter)).await.unwrap();

        assert_eq!(
            transport.requests()[0].url,
            "http://api.test/api/v1/payments?month=2024-05&recipientType=driver"
        );
    }

    #[tokio::test]
    async fn test_401_clears_session_and_redirects() {
        let transport = Rc::new(ScriptedTransport::new());
        transport.on_json(HttpMethod::Get, "vehicles", 401, r#"{"message":"jwt expired"}"#);
        let navigator = Rc::new(RecordingNavigator::default());
        let session = signed_in();
        let api = api_client(transport, session.clone(), navigator.clone());

        let result: Result<Vec<serde_json::Value>, _> = api.get_json("vehicles", None).await;

        assert_eq!(result.unwrap_err(), ApiError::Unauthorized);
        assert_eq!(navigator.redirects(), vec!["/login".to_string()]);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_401_on_login_also_redirects() {
        let transport = Rc::new(ScriptedTransport::new());
        transport.on_json(
            HttpMethod::Post,
            "auth/login",
            401,
            r#"{"message":"Invalid credentials"}"#,
        );
        let navigator = Rc::new(RecordingNavigator::default());
        let api = api_client(transport, SessionStore::in_memory(), navigator.clone());

        let result: Result<serde_json::Value, _> = api
            .post_json("auth/login", &serde_json::json!({"username": "a", "password": "b"}))
            .await;

        assert!(matches!(result, Err(ApiError::Unauthorized)));
        assert_eq!(navigator.redirects(), vec!["/login".to_string()]);
    }

    #[tokio::test]
    async fn test_401_on_activate_clears_session_and_redirects() {
        let transport = Rc::new(ScriptedTransport::new());
        transport.on_json(
            HttpMethod::Post,
            "auth/activate",
            401,
            r#"{"message":"token expired"}"#,
        );
        let navigator = Rc::new(RecordingNavigator::default());
        let session = signed_in();
        let api = api_client(transport.clone(), session.clone(), navigator.clone());

        let result = api
            .send_json(
                HttpMethod::Post,
                "auth/activate",
                &serde_json::json!({"token": "t-1", "password": "secret123"}),
            )
            .await;

        assert!(matches!(result, Err(ApiError::Unauthorized)));
        assert!(!session.is_authenticated());
        assert_eq!(navigator.redirects(), vec!["/login".to_string()]);
        assert_eq!(transport.requests()[0].header_value("Authorization"), None);
    }

    #[tokio::test]
    async fn test_network_failure_maps_to_network_error() {
        let transport = Rc::new(ScriptedTransport::new());
        transport.fail_next("connection refused");
        let api = api_client(
            transport,
            signed_in(),
            Rc::new(RecordingNavigator::default()),
        );

        let result: Result<Vec<serde_json::Value>, _> = api.get_json("fuel", None).await;
        assert_eq!(
            result.unwrap_err(),
            ApiError::Network("connection refused".into())
        );
    }
}
