//! Reqwest-backed profile API adapter.
//!
//! This adapter owns transport details only: endpoint paths, form and JSON
//! encodings, bearer headers, and the mapping of statuses and bodies onto
//! [`GatewayError`] kinds. Each call sends exactly one request.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde_json::Value;
use tracing::debug;

use super::dto::{
    ChangePasswordRequestDto, LoginResponseDto, MenuItemDto, error_detail,
    error_detail_from_bytes,
};
use crate::domain::ports::ProfileApi;
use crate::domain::{
    AccessToken, GatewayError, LoginCredentials, MenuItem, PasswordChange, RequestOutcome,
    Subject, SubjectId,
};

/// Production API root.
pub const DEFAULT_API_BASE_URL: &str = "https://abc4soft.com/api/v1";
/// Notice text when a login rejection carries no detail.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
/// Notice text when a password change rejection carries no detail.
pub const PASSWORD_CHANGE_FAILED_MESSAGE: &str = "Password change failed";

const DEFAULT_USER_AGENT: &str = "portal-session-client/0.1";

/// Profile API adapter performing HTTP requests under one base URL.
pub struct HttpProfileApi {
    client: Client,
    base_url: Url,
}

impl HttpProfileApi {
    /// Build an adapter relying on the transport's default timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, reqwest::Error> {
        Self::with_timeout(base_url, None)
    }

    /// Build an adapter with an optional whole-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_timeout(base_url: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(DEFAULT_USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// API root this adapter targets.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> RequestOutcome<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                GatewayError::api(format!("API base URL cannot carry a path: {}", self.base_url))
            })?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// Send `request`; anything short of a full response is a network failure.
    async fn exchange(
        &self,
        url: &Url,
        request: RequestBuilder,
    ) -> RequestOutcome<(StatusCode, Vec<u8>)> {
        let response = request
            .send()
            .await
            .map_err(|err| network_failure(url, &err))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| network_failure(url, &err))?;
        debug!(url = %url, status = status.as_u16(), bytes = body.len(), "response received");
        Ok((status, body.to_vec()))
    }
}

#[async_trait]
impl ProfileApi for HttpProfileApi {
    async fn lookup(&self, id: &SubjectId) -> RequestOutcome<Subject> {
        let url = self.endpoint(&["get_info", id.as_ref()])?;
        let request = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json");
        let (status, body) = self.exchange(&url, request).await?;
        parse_subject(id, status, &body)
    }

    async fn login(&self, credentials: &LoginCredentials) -> RequestOutcome<AccessToken> {
        let url = self.endpoint(&["login"])?;
        let request = self.client.post(url.clone()).form(&[
            ("username", credentials.username()),
            ("password", credentials.password()),
        ]);
        let (status, body) = self.exchange(&url, request).await?;
        parse_login(status, &body)
    }

    async fn fetch_menu(&self, token: &AccessToken) -> RequestOutcome<Vec<MenuItem>> {
        let url = self.endpoint(&["menu"])?;
        let request = self
            .client
            .get(url.clone())
            .bearer_auth(token.expose())
            .header(reqwest::header::ACCEPT, "application/json");
        let (status, body) = self.exchange(&url, request).await?;
        parse_menu(status, &body)
    }

    async fn change_password(
        &self,
        token: &AccessToken,
        change: &PasswordChange,
    ) -> RequestOutcome<()> {
        let url = self.endpoint(&["change-password"])?;
        let request = self
            .client
            .post(url.clone())
            .bearer_auth(token.expose())
            .json(&ChangePasswordRequestDto {
                old_password: change.old_password(),
                new_password: change.new_password(),
            });
        let (status, body) = self.exchange(&url, request).await?;
        if status.is_success() {
            Ok(())
        } else {
            Err(GatewayError::validation(
                error_detail_from_bytes(&body)
                    .unwrap_or_else(|| PASSWORD_CHANGE_FAILED_MESSAGE.to_owned()),
            ))
        }
    }
}

fn network_failure(url: &Url, error: &reqwest::Error) -> GatewayError {
    debug!(url = %url, error = %error, timeout = error.is_timeout(), "transport failure");
    GatewayError::network(format!(
        "Failed to load data from the API: {url}. Please check your network connection."
    ))
}

fn parse_subject(id: &SubjectId, status: StatusCode, body: &[u8]) -> RequestOutcome<Subject> {
    let payload: Value = serde_json::from_slice(body).map_err(|err| {
        GatewayError::api(format!(
            "lookup returned an unreadable payload (status {}): {err}",
            status.as_u16()
        ))
    })?;
    if let Some(detail) = error_detail(&payload) {
        return Err(GatewayError::api(detail));
    }
    if !status.is_success() {
        return Err(GatewayError::api(format!(
            "lookup failed with status {}",
            status.as_u16()
        )));
    }
    match payload {
        Value::Object(fields) => Ok(Subject::new(id.clone(), fields)),
        _ => Err(GatewayError::api("lookup payload is not an object")),
    }
}

fn parse_login(status: StatusCode, body: &[u8]) -> RequestOutcome<AccessToken> {
    if !status.is_success() {
        return Err(GatewayError::auth(
            error_detail_from_bytes(body).unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_owned()),
        ));
    }
    let decoded: LoginResponseDto = serde_json::from_slice(body).map_err(|err| {
        GatewayError::api(format!("login returned an unreadable payload: {err}"))
    })?;
    decoded
        .access_token
        .ok_or_else(|| GatewayError::api("login response carried no access token"))
        .and_then(|raw| {
            AccessToken::new(raw)
                .map_err(|err| GatewayError::api(format!("login response rejected: {err}")))
        })
}

fn parse_menu(status: StatusCode, body: &[u8]) -> RequestOutcome<Vec<MenuItem>> {
    if !status.is_success() {
        return Err(GatewayError::api(error_detail_from_bytes(body).unwrap_or_else(
            || format!("menu request failed with status {}", status.as_u16()),
        )));
    }
    let items: Vec<MenuItemDto> = serde_json::from_slice(body).map_err(|err| {
        GatewayError::api(format!("menu returned an unreadable payload: {err}"))
    })?;
    Ok(items.into_iter().map(MenuItem::from).collect())
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network mapping helpers.

    use super::*;
    use crate::domain::ErrorKind;
    use rstest::rstest;
    use serde_json::json;

    fn subject_id() -> SubjectId {
        SubjectId::new("R7V5CT").expect("valid id")
    }

    fn bytes(value: &Value) -> Vec<u8> {
        serde_json::to_vec(value).expect("serialise fixture")
    }

    fn api(base: &str) -> HttpProfileApi {
        HttpProfileApi::new(Url::parse(base).expect("base url")).expect("client builds")
    }

    #[rstest]
    #[case("https://abc4soft.com/api/v1", "https://abc4soft.com/api/v1/get_info/R7V5CT")]
    #[case("https://abc4soft.com/api/v1/", "https://abc4soft.com/api/v1/get_info/R7V5CT")]
    #[case("http://localhost:9000", "http://localhost:9000/get_info/R7V5CT")]
    fn endpoints_append_segments(#[case] base: &str, #[case] expected: &str) {
        let url = api(base)
            .endpoint(&["get_info", "R7V5CT"])
            .expect("endpoint builds");
        assert_eq!(url.as_str(), expected);
    }

    #[test]
    fn ids_are_percent_encoded_as_one_segment() {
        let url = api(DEFAULT_API_BASE_URL)
            .endpoint(&["get_info", "a/b c"])
            .expect("endpoint builds");
        assert_eq!(url.as_str(), "https://abc4soft.com/api/v1/get_info/a%2Fb%20c");
    }

    #[test]
    fn subject_payload_becomes_info() {
        let body = bytes(&json!({ "id": "R7V5CT", "name": "Example" }));
        let subject = parse_subject(&subject_id(), StatusCode::OK, &body).expect("subject");
        assert_eq!(subject.field("name"), Some(&json!("Example")));
    }

    #[rstest]
    #[case(StatusCode::OK, json!({ "error": "No matching document" }), "No matching document")]
    #[case(StatusCode::NOT_FOUND, json!({ "detail": "Not found" }), "Not found")]
    #[case(StatusCode::INTERNAL_SERVER_ERROR, json!({}), "lookup failed with status 500")]
    #[case(StatusCode::OK, json!(["not", "an", "object"]), "lookup payload is not an object")]
    fn lookup_errors_are_api_errors(
        #[case] status: StatusCode,
        #[case] body: Value,
        #[case] expected: &str,
    ) {
        let err = parse_subject(&subject_id(), status, &bytes(&body)).expect_err("lookup fails");
        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.message(), expected);
    }

    #[rstest]
    #[case(StatusCode::UNAUTHORIZED, b"{\"detail\":\"Invalid credentials\"}".as_slice(), "Invalid credentials")]
    #[case(StatusCode::UNAUTHORIZED, b"".as_slice(), LOGIN_FAILED_MESSAGE)]
    #[case(StatusCode::BAD_GATEWAY, b"<html>upstream</html>".as_slice(), LOGIN_FAILED_MESSAGE)]
    fn login_rejections_are_auth_errors(
        #[case] status: StatusCode,
        #[case] body: &[u8],
        #[case] expected: &str,
    ) {
        let err = parse_login(status, body).expect_err("login fails");
        assert_eq!(err.kind(), ErrorKind::Auth);
        assert_eq!(err.message(), expected);
    }

    #[test]
    fn login_success_yields_token() {
        let body = bytes(&json!({ "access_token": "abc.def", "token_type": "bearer" }));
        let token = parse_login(StatusCode::OK, &body).expect("token");
        assert_eq!(token.expose(), "abc.def");
    }

    #[test]
    fn login_success_without_token_is_an_api_error() {
        let body = bytes(&json!({ "token_type": "bearer" }));
        let err = parse_login(StatusCode::OK, &body).expect_err("missing token");
        assert_eq!(err.kind(), ErrorKind::Api);
    }

    #[test]
    fn menu_status_errors_are_api_errors() {
        let body = bytes(&json!({ "detail": "Not authenticated" }));
        let err = parse_menu(StatusCode::UNAUTHORIZED, &body).expect_err("menu fails");
        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.message(), "Not authenticated");
    }

    #[test]
    fn menu_preserves_server_order() {
        let body = bytes(&json!([
            { "label": "Log out", "action_type": "LOGOUT" },
            { "label": "Change password", "action_type": "NAVIGATE", "destination": "/change-password" }
        ]));
        let menu = parse_menu(StatusCode::OK, &body).expect("menu");
        let labels: Vec<&str> = menu.iter().map(MenuItem::label).collect();
        assert_eq!(labels, ["Log out", "Change password"]);
    }
}
