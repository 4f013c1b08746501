// Scripted stand-in for the Groq chat-completions endpoint.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    routing::post,
};
use portfolio_chat::{config::Config, routes::create_router, state::AppState};
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const TEST_KEY: &str = "test-key";
const COMPLETIONS_PATH: &str = "/openai/v1/chat/completions";

#[derive(Clone, Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    pub fn content(text: &str) -> Self {
        Self::raw(
            json!({
                "id": "chatcmpl-test",
                "object": "chat.completion",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": text},
                    "finish_reason": "stop"
                }]
            })
            .to_string(),
        )
    }

    pub fn raw(body: impl Into<String>) -> Self {
        Self { status: StatusCode::OK, body: body.into() }
    }

    pub fn status(code: u16, body: &str) -> Self {
        Self {
            status: StatusCode::from_u16(code).unwrap(),
            body: body.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Recorded {
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

impl Recorded {
    // The classifier sends one system message, the answer call sends two.
    pub fn is_classifier(&self) -> bool {
        self.body["messages"].as_array().map(Vec::len) == Some(1)
    }
}

#[derive(Clone)]
struct MockState {
    classifier: Reply,
    answer: Reply,
    calls: Arc<Mutex<Vec<Recorded>>>,
}

pub struct MockGroq {
    pub url: String,
    calls: Arc<Mutex<Vec<Recorded>>>,
}

impl MockGroq {
    pub async fn start(classifier: Reply, answer: Reply) -> Self {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let state = MockState { classifier, answer, calls: calls.clone() };

        let app = Router::new()
            .route(COMPLETIONS_PATH, post(completions))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{addr}{COMPLETIONS_PATH}"),
            calls,
        }
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.calls.lock().unwrap().clone()
    }

    pub fn classifier_calls(&self) -> usize {
        self.calls().iter().filter(|c| c.is_classifier()).count()
    }

    pub fn answer_calls(&self) -> usize {
        self.calls().iter().filter(|c| !c.is_classifier()).count()
    }

    pub fn config(&self) -> Config {
        Config {
            api_key: Some(TEST_KEY.to_string()),
            api_url: self.url.clone(),
            ..Default::default()
        }
    }

    pub fn app(&self) -> Router {
        app_with(self.config())
    }
}

async fn completions(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let header_text = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let recorded = Recorded {
        authorization: header_text(header::AUTHORIZATION),
        content_type: header_text(header::CONTENT_TYPE),
        body,
    };

    let reply = if recorded.is_classifier() {
        state.classifier.clone()
    } else {
        state.answer.clone()
    };
    state.calls.lock().unwrap().push(recorded);

    (reply.status, [(header::CONTENT_TYPE, "application/json")], reply.body)
}

pub fn app_with(config: Config) -> Router {
    create_router().with_state(Arc::new(AppState::new(config)))
}

/// A URL nothing is listening on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}{COMPLETIONS_PATH}")
}
