//! 控制器 + HTTP 客户端 + 模拟后端的端到端场景

use std::sync::{Arc, Mutex};

use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use pytania::application::{BackendPort, QuestionController, YearRangeController};
use pytania::domain::InteractionState;
use pytania::infrastructure::{HttpBackendClient, HttpBackendClientConfig};

/// 记录收到的请求体，并按固定状态码和 body 响应
#[derive(Clone)]
struct MockBackend {
    received: Arc<Mutex<Vec<(String, Value)>>>,
}

impl MockBackend {
    fn new() -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn received(&self) -> Vec<(String, Value)> {
        self.received.lock().unwrap().clone()
    }

    fn route(&self, path: &'static str, status: StatusCode, reply: Value) -> Router {
        let received = self.received.clone();
        Router::new().route(
            path,
            post(move |Json(body): Json<Value>| {
                let received = received.clone();
                let reply = reply.clone();
                async move {
                    received.lock().unwrap().push((path.to_string(), body));
                    (status, Json(reply))
                }
            }),
        )
    }
}

async fn serve(router: Router) -> Arc<dyn BackendPort> {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let config = HttpBackendClientConfig::new(format!("http://{}", addr)).with_timeout(5);
    Arc::new(HttpBackendClient::new(config).unwrap())
}

#[tokio::test]
async fn question_round_trip() {
    let mock = MockBackend::new();
    let backend = serve(mock.route(
        "/ask",
        StatusCode::OK,
        json!({ "answer": "To jest odpowiedź na Twoje pytanie." }),
    ))
    .await;
    let controller = QuestionController::new(backend);

    let result = controller.submit("Jakie jest dzisiaj święto?").await.unwrap();

    assert_eq!(result.answer, "To jest odpowiedź na Twoje pytanie.");
    assert!(matches!(controller.state(), InteractionState::Succeeded(_)));
    assert_eq!(
        mock.received(),
        vec![(
            "/ask".to_string(),
            json!({ "question": "Jakie jest dzisiaj święto?" })
        )]
    );
}

#[tokio::test]
async fn empty_question_never_reaches_backend() {
    let mock = MockBackend::new();
    let backend = serve(mock.route("/ask", StatusCode::OK, json!({ "answer": "x" }))).await;
    let controller = QuestionController::new(backend);

    let err = controller.submit("").await.unwrap_err();

    assert_eq!(err.detail, "Proszę wpisać pytanie.");
    assert!(mock.received().is_empty());
}

#[tokio::test]
async fn year_range_round_trip_drops_garbage() {
    let mock = MockBackend::new();
    let backend = serve(mock.route(
        "/set_years",
        StatusCode::OK,
        json!({ "message": "Zakres lat został ustawiony.", "years": [2024] }),
    ))
    .await;
    let controller = YearRangeController::new(backend);

    let result = controller.submit("abc, 2024").await.unwrap();

    assert_eq!(result.message, "Zakres lat został ustawiony.");
    assert_eq!(
        mock.received(),
        vec![("/set_years".to_string(), json!({ "years": [2024] }))]
    );
}

#[tokio::test]
async fn backend_detail_is_shown_by_both_controllers() {
    let mock = MockBackend::new();
    let router = mock
        .route(
            "/ask",
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "detail": "Błąd serwera" }),
        )
        .merge(mock.route(
            "/set_years",
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "detail": "Błąd serwera" }),
        ));
    let backend = serve(router).await;

    let questions = QuestionController::new(backend.clone());
    let years = YearRangeController::new(backend);

    let ask_err = questions.submit("Jakie jest dzisiaj święto?").await.unwrap_err();
    let years_err = years.submit("1918, 2024").await.unwrap_err();

    assert_eq!(ask_err.detail, "Błąd serwera");
    assert_eq!(years_err.detail, "Błąd serwera");
    assert_eq!(mock.received().len(), 2);
}
