//! Integration tests using mock HTTP server
//!
//! Tests the full flow: command → REST call → store reconciliation → render

use product_dashboard::api::RestProductApi;
use product_dashboard::cli::run_console;
use product_dashboard::dashboard::{
    Command, Dashboard, DashboardOptions, Notice, Notifier, PageView, Renderer, MSG_ADDED,
    MSG_DELETED, MSG_EDIT_REQUIRED, MSG_LOAD_FAILED, MSG_UPDATED,
};
use product_dashboard::http::{HttpClient, HttpClientConfig};
use product_dashboard::DashboardConfig;
use serde_json::{json, Value};
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helpers
// ============================================================================

#[derive(Default)]
struct Screen {
    views: Mutex<Vec<PageView>>,
    notices: Mutex<Vec<Notice>>,
}

impl Screen {
    fn last_ids(&self) -> Vec<u64> {
        self.views
            .lock()
            .unwrap()
            .last()
            .map(PageView::ids)
            .unwrap_or_default()
    }

    fn notices(&self) -> Vec<String> {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }
}

impl Renderer for Screen {
    fn render(&self, view: &PageView) {
        self.views.lock().unwrap().push(view.clone());
    }
}

impl Notifier for Screen {
    fn notify(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}

fn posts(n: u64) -> Value {
    Value::Array(
        (1..=n)
            .map(|id| {
                json!({
                    "userId": 1,
                    "id": id,
                    "title": format!("post {id}"),
                    "body": "text"
                })
            })
            .collect(),
    )
}

fn dashboard_for(server: &MockServer, debounce_ms: u64) -> (Dashboard, Arc<Screen>) {
    let client =
        HttpClient::with_config(HttpClientConfig::builder().base_url(server.uri()).build())
            .unwrap();
    let screen = Arc::new(Screen::default());
    let dashboard = Dashboard::new(
        Arc::new(RestProductApi::new(client, "posts")),
        screen.clone(),
        screen.clone(),
        DashboardOptions {
            page_size: NonZeroUsize::new(5).unwrap(),
            search_debounce: Duration::from_millis(debounce_ms),
            user_id: 1,
        },
    );
    (dashboard, screen)
}

async fn mount_list(server: &MockServer, n: u64) {
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(posts(n)))
        .mount(server)
        .await;
}

// ============================================================================
// End-to-end flows
// ============================================================================

#[tokio::test]
async fn test_load_and_page_through() {
    let server = MockServer::start().await;
    mount_list(&server, 12).await;
    let (dashboard, screen) = dashboard_for(&server, 50);

    dashboard.dispatch(Command::Load).await.unwrap();
    assert_eq!(screen.last_ids(), vec![1, 2, 3, 4, 5]);

    assert!(dashboard.next_page().await);
    assert_eq!(screen.last_ids(), vec![6, 7, 8, 9, 10]);
    assert!(dashboard.next_page().await);
    assert_eq!(screen.last_ids(), vec![11, 12]);
    assert!(!dashboard.next_page().await);
    assert_eq!(dashboard.view().await.label, "Page 3");
}

#[tokio::test]
async fn test_load_failure_surfaces_notice() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    let (dashboard, screen) = dashboard_for(&server, 50);

    assert!(dashboard.load().await.is_err());
    assert_eq!(screen.notices(), vec![MSG_LOAD_FAILED.to_string()]);
    assert!(dashboard.view().await.records.is_empty());
}

#[tokio::test]
async fn test_create_edit_delete_roundtrip() {
    let server = MockServer::start().await;
    mount_list(&server, 3).await;
    Mock::given(method("POST"))
        .and(path("/posts"))
        .and(body_json(json!({"title": "lamp", "body": "bright", "userId": 1})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "title": "lamp", "body": "bright", "userId": 1, "id": 101
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/posts/2"))
        .and(body_json(json!({"id": 2, "title": "t2", "body": "b2", "userId": 1})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 2})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/posts/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let (dashboard, screen) = dashboard_for(&server, 50);
    dashboard.load().await.unwrap();

    dashboard
        .create(Some("lamp".into()), Some("bright".into()))
        .await
        .unwrap();
    assert_eq!(screen.last_ids(), vec![101, 1, 2, 3]);

    dashboard
        .edit(2, Some("t2".into()), Some("b2".into()))
        .await
        .unwrap();
    let titles: Vec<String> = dashboard
        .view()
        .await
        .records
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, vec!["lamp", "post 1", "t2", "post 3"]);

    dashboard.delete(3).await.unwrap();
    assert_eq!(screen.last_ids(), vec![101, 1, 2]);

    let notices = screen.notices();
    assert_eq!(notices[0], MSG_ADDED);
    assert_eq!(notices[2], MSG_DELETED);
}

#[tokio::test]
async fn test_debounced_search_hits_server_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(query_param("q", "post 4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 4, "title": "post 4", "body": "text"}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let (dashboard, screen) = dashboard_for(&server, 100);

    for query in ["p", "post", "post 4"] {
        dashboard.dispatch(Command::Search(query.into())).await.unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    dashboard.settle().await;

    assert_eq!(screen.last_ids(), vec![4]);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_console_session() {
    let server = MockServer::start().await;
    mount_list(&server, 6).await;
    Mock::given(method("DELETE"))
        .and(path("/posts/6"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let (dashboard, screen) = dashboard_for(&server, 50);

    let input = b"load\nnext\ndelete 6\nbogus\nadd only-a-title\nquit\nload\n";
    run_console(&dashboard, &input[..]).await.unwrap();

    // Page 2 kept after deleting its only record; nothing after quit ran
    let view = dashboard.view().await;
    assert_eq!(view.page, 2);
    assert!(view.records.is_empty());
    assert_eq!(
        screen.notices(),
        vec![
            MSG_DELETED.to_string(),
            "Title and description are required.".to_string()
        ]
    );
    let gets = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.method.as_str() == "GET")
        .count();
    assert_eq!(gets, 1);
}

#[tokio::test]
async fn test_console_edit_prompts_for_title_and_body() {
    let server = MockServer::start().await;
    mount_list(&server, 3).await;
    Mock::given(method("PUT"))
        .and(path("/posts/2"))
        .and(body_json(json!({"id": 2, "title": "New", "body": "Body", "userId": 1})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 2})))
        .expect(1)
        .mount(&server)
        .await;
    let (dashboard, screen) = dashboard_for(&server, 50);

    run_console(&dashboard, &b"load\nedit 2\nNew\nBody\n"[..])
        .await
        .unwrap();

    assert_eq!(screen.notices(), vec![MSG_UPDATED.to_string()]);
    let edited = dashboard.view().await.records[1].clone();
    assert_eq!(edited.id, 2);
    assert_eq!(edited.title, "New");
    assert_eq!(edited.body, "Body");
}

#[tokio::test]
async fn test_console_edit_at_end_of_input_is_rejected() {
    let server = MockServer::start().await;
    let (dashboard, screen) = dashboard_for(&server, 50);

    run_console(&dashboard, &b"edit 2\n"[..]).await.unwrap();

    assert_eq!(screen.notices(), vec![MSG_EDIT_REQUIRED.to_string()]);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[test]
fn test_config_drives_dashboard_options() {
    let config = DashboardConfig::from_yaml_str("page_size: 7\nsearch_debounce_ms: 20").unwrap();
    let options = config.dashboard_options().unwrap();
    assert_eq!(options.page_size.get(), 7);
    assert_eq!(options.search_debounce, Duration::from_millis(20));
}
