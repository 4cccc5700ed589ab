//! Wire-level tests for the reqwest profile API adapter.

use std::net::TcpListener;
use std::time::Duration;

use portal::domain::ports::ProfileApi;
use portal::domain::{
    AccessToken, ErrorKind, LoginCredentials, MenuAction, PasswordChange, SubjectId,
};
use portal::outbound::http::{HttpProfileApi, LOGIN_FAILED_MESSAGE, PASSWORD_CHANGE_FAILED_MESSAGE};
use rstest::rstest;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn api_for(server: &MockServer) -> HttpProfileApi {
    let base = Url::parse(&format!("{}/api/v1", server.uri())).expect("server url");
    HttpProfileApi::with_timeout(base, Some(Duration::from_secs(5))).expect("client builds")
}

fn subject_id(raw: &str) -> SubjectId {
    SubjectId::new(raw).expect("valid id")
}

fn token() -> AccessToken {
    AccessToken::new("abc").expect("valid token")
}

#[tokio::test]
async fn lookup_returns_subject_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/get_info/R7V5CT"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": "R7V5CT", "name": "Example" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let subject = api_for(&server)
        .await
        .lookup(&subject_id("R7V5CT"))
        .await
        .expect("lookup succeeds");

    assert_eq!(subject.id().as_ref(), "R7V5CT");
    assert_eq!(subject.field("name"), Some(&json!("Example")));
}

#[tokio::test]
async fn lookup_error_field_is_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/get_info/ZZZ"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "No matching document" })))
        .mount(&server)
        .await;

    let err = api_for(&server)
        .await
        .lookup(&subject_id("ZZZ"))
        .await
        .expect_err("lookup fails");

    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.message(), "No matching document");
}

#[tokio::test]
async fn login_posts_form_and_returns_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/login"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("username=R7V5CT"))
        .and(body_string_contains("password=secret"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": "abc", "token_type": "bearer" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    let credentials = LoginCredentials::try_from_parts("R7V5CT", "secret").expect("valid creds");

    let token = api_for(&server)
        .await
        .login(&credentials)
        .await
        .expect("login succeeds");

    assert_eq!(token.expose(), "abc");
}

#[rstest]
#[case(ResponseTemplate::new(401).set_body_json(json!({ "detail": "Invalid credentials" })), "Invalid credentials")]
#[case(
    ResponseTemplate::new(422).set_body_json(json!({ "detail": [
        { "loc": ["body", "username"], "msg": "field required" },
        { "loc": ["body", "password"], "msg": "field required" }
    ] })),
    "field required; field required"
)]
#[case(ResponseTemplate::new(500), LOGIN_FAILED_MESSAGE)]
#[tokio::test]
async fn login_rejections_are_auth_errors(
    #[case] response: ResponseTemplate,
    #[case] expected: &str,
) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/login"))
        .respond_with(response)
        .mount(&server)
        .await;
    let credentials = LoginCredentials::try_from_parts("bad", "wrong").expect("valid creds");

    let err = api_for(&server)
        .await
        .login(&credentials)
        .await
        .expect_err("login rejected");

    assert_eq!(err.kind(), ErrorKind::Auth);
    assert_eq!(err.message(), expected);
}

#[tokio::test]
async fn menu_sends_bearer_token_and_keeps_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/menu"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "label": "Change password", "action_type": "NAVIGATE", "destination": "/change-password" },
            { "label": "Reports", "action_type": "OPEN_REPORT" },
            { "label": "Log out", "action_type": "LOGOUT" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let menu = api_for(&server)
        .await
        .fetch_menu(&token())
        .await
        .expect("menu loads");

    let labels: Vec<&str> = menu.iter().map(|item| item.label()).collect();
    assert_eq!(labels, ["Change password", "Reports", "Log out"]);
    assert!(matches!(
        menu[1].action(),
        MenuAction::Unrecognized { action_type } if action_type == "OPEN_REPORT"
    ));
    assert_eq!(menu[2].action(), &MenuAction::Logout);
}

#[tokio::test]
async fn change_password_posts_json_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/change-password"))
        .and(header("authorization", "Bearer abc"))
        .and(body_json(json!({ "old_password": "secret", "new_password": "better" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    api_for(&server)
        .await
        .change_password(&token(), &PasswordChange::new("secret", "better"))
        .await
        .expect("password changed");
}

#[rstest]
#[case(ResponseTemplate::new(400).set_body_json(json!({ "detail": "Old password is incorrect" })), "Old password is incorrect")]
#[case(ResponseTemplate::new(400).set_body_string("bad request"), PASSWORD_CHANGE_FAILED_MESSAGE)]
#[tokio::test]
async fn change_password_rejections_are_validation_errors(
    #[case] response: ResponseTemplate,
    #[case] expected: &str,
) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/change-password"))
        .respond_with(response)
        .mount(&server)
        .await;

    let err = api_for(&server)
        .await
        .change_password(&token(), &PasswordChange::new("wrong", "better"))
        .await
        .expect_err("change rejected");

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.message(), expected);
}

#[tokio::test]
async fn unreachable_api_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    let base = Url::parse(&format!("http://127.0.0.1:{port}/api/v1")).expect("base url");
    let api = HttpProfileApi::with_timeout(base, Some(Duration::from_secs(5))).expect("client builds");

    let err = api
        .lookup(&subject_id("R7V5CT"))
        .await
        .expect_err("lookup fails");

    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(
        err.message()
            .ends_with("Please check your network connection."),
        "unexpected message: {}",
        err.message()
    );
}
