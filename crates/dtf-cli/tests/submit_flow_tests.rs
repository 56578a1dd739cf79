//! End-to-end submission: task form + file storage + HTTP client against wiremock

use dtf_cli::Client;
use dtf_core::{
    CREATE_FAILED_MESSAGE, FileStore, FormValues, NETWORK_ERROR_MESSAGE, SUCCESS_MESSAGE,
    StatusKind, SubmissionStatus, TaskForm,
};

use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const ENDPOINT: &str = "/api/v1/tasks/client/newhardtask";

fn fill(form: &mut TaskForm<FileStore>) {
    let values = form.values_mut();
    values.title = String::from("Карточки товара");
    values.description = String::from("10 карточек для маркетплейса");
    values.add_tag("вб");
    values.budget_from = Some(5000.0);
    values.budget_to = Some(8000.0);
    values.deadline_days = Some(5);
}

fn form_in(dir: &TempDir) -> TaskForm<FileStore> {
    TaskForm::initialize(FileStore::new(dir.path().join("storage.json"))).unwrap()
}

#[tokio::test]
async fn test_success_resets_fields_and_keeps_token() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .and(query_param("token", "tok"))
        .and(query_param("tags", "вб"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 17})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut form = form_in(&dir);
    form.set_token("tok").unwrap();
    fill(&mut form);

    let status = form
        .submit(&Client::new(&mock_server.uri()))
        .await
        .unwrap()
        .clone();

    assert_eq!(status, SubmissionStatus::success(SUCCESS_MESSAGE));
    assert_eq!(form.values(), &FormValues::default());
    assert!(!form.is_loading());

    let reopened = form_in(&dir);
    assert_eq!(reopened.token(), "tok");
}

#[tokio::test]
async fn test_server_message_surfaces_on_rejection() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"message": "Bad token"})))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut form = form_in(&dir);
    fill(&mut form);

    form.submit(&Client::new(&mock_server.uri())).await.unwrap();

    assert_eq!(form.status(), Some(&SubmissionStatus::error("Bad token")));
    assert_eq!(form.values().title, "Карточки товара");
}

#[tokio::test]
async fn test_unparsable_error_body_uses_fallback() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut form = form_in(&dir);
    fill(&mut form);

    form.submit(&Client::new(&mock_server.uri())).await.unwrap();

    assert_eq!(
        form.status(),
        Some(&SubmissionStatus::error(CREATE_FAILED_MESSAGE))
    );
}

#[tokio::test]
async fn test_network_failure_reports_network_error() {
    let dir = TempDir::new().unwrap();
    let mut form = form_in(&dir);
    fill(&mut form);

    form.submit(&Client::new("http://127.0.0.1:1")).await.unwrap();

    let status = form.status().unwrap();
    assert_eq!(status.kind, StatusKind::Error);
    assert_eq!(status.message, NETWORK_ERROR_MESSAGE);
    assert!(!form.is_loading());

    form.dismiss_status();
    assert!(form.status().is_none());
}
