use crate::helpers::TestApp;
use claims::{assert_err, assert_ok};
use leetcode_archive::{
    error::Kind,
    judge::PatternExtractor,
    types::{Id, SubmissionRef},
};
use wiremock::{
    matchers::{method, path},
    Mock, ResponseTemplate,
};

fn ids(list: &[SubmissionRef]) -> Vec<Id> {
    list.iter().map(|s| s.id.clone()).collect()
}

#[tokio::test]
async fn pages_until_has_next_is_false() {
    // Arrange
    let app = TestApp::spawn().await;
    app.mount_submission_page("two-sum", 0, &["203", "202"], true)
        .await;
    app.mount_submission_page("two-sum", 2, &["201"], false)
        .await;

    // Act
    let list = assert_ok!(app.session().submissions("two-sum").await);

    // Assert
    assert_eq!(
        ids(&list),
        vec![
            Id("203".to_string()),
            Id("202".to_string()),
            Id("201".to_string())
        ]
    );
}

#[tokio::test]
async fn empty_page_stops_paging() {
    // Arrange
    let app = TestApp::spawn().await;
    app.mount_submission_page("two-sum", 0, &["11"], true).await;
    app.mount_submission_page("two-sum", 1, &[], true).await;

    // Act
    let list = assert_ok!(app.session().submissions("two-sum").await);

    // Assert
    assert_eq!(ids(&list), vec![Id("11".to_string())]);
}

#[tokio::test]
async fn code_comes_from_the_newest_submission() {
    // Arrange
    let app = TestApp::spawn().await;
    app.mount_submission_page("two-sum", 0, &["302", "301"], false)
        .await;
    app.mount_detail("302", r"const a = 1;\u000Areturn a;").await;

    // Act
    let code = assert_ok!(
        app.session()
            .submission_code("two-sum", &PatternExtractor::new())
            .await
    );

    // Assert
    assert_eq!(code, "const a = 1;\nreturn a;");
}

#[tokio::test]
async fn no_submission_is_an_error() {
    // Arrange
    let app = TestApp::spawn().await;
    app.mount_submission_page("two-sum", 0, &[], false).await;

    // Act
    let err = assert_err!(
        app.session()
            .submission_code("two-sum", &PatternExtractor::new())
            .await
    );

    // Assert
    assert!(matches!(err.kind(), Kind::NoSubmission(s) if s == "two-sum"));
}

#[tokio::test]
async fn detail_page_without_code_is_an_error() {
    // Arrange
    let app = TestApp::spawn().await;
    app.mount_submission_page("two-sum", 0, &["9"], false).await;
    Mock::given(method("GET"))
        .and(path("/submissions/detail/9/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>Not found</html>"))
        .mount(&app.server)
        .await;

    // Act
    let err = assert_err!(
        app.session()
            .submission_code("two-sum", &PatternExtractor::new())
            .await
    );

    // Assert
    assert!(matches!(err.kind(), Kind::Regex));
}

#[tokio::test]
async fn graphql_errors_are_surfaced() {
    // Arrange
    let app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": null,
            "errors": [{ "message": "User is not authenticated" }]
        })))
        .mount(&app.server)
        .await;

    // Act
    let err = assert_err!(app.session().submissions("two-sum").await);

    // Assert
    match err.kind() {
        Kind::GraphQL(messages) => {
            assert_eq!(messages, &vec!["User is not authenticated".to_string()])
        }
        _ => panic!("unexpected error {}", err),
    }
}

#[tokio::test]
async fn graphql_errors_survive_a_bad_request_status() {
    // Arrange
    let app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "errors": [{ "message": "Unknown argument \"questionSlug\"" }]
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    // Act
    let err = assert_err!(app.session().submissions("two-sum").await);

    // Assert
    match err.kind() {
        Kind::GraphQL(messages) => {
            assert_eq!(messages, &vec!["Unknown argument \"questionSlug\"".to_string()])
        }
        _ => panic!("unexpected error {}", err),
    }
}

#[tokio::test]
async fn graphql_server_error_without_body_is_a_status() {
    // Arrange
    let app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&app.server)
        .await;

    // Act
    let err = assert_err!(app.session().submissions("two-sum").await);

    // Assert
    assert!(matches!(err.kind(), Kind::Status(s) if s.as_u16() == 502));
}
