//! Shared helpers for integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

use catalog_sdk::ProductClient;
use reqwest::StatusCode;
use product_catalog::config::ServerConfig;
use product_catalog::ui::{FormState, ProductListController, RenderedList, Ui};
use product_catalog::{CatalogServer, ProductStore, Shutdown};

/// A catalog server running on an ephemeral local port.
#[allow(dead_code)]
pub struct TestServer {
    pub base_url: String,
    pub store: ProductStore,
    pub shutdown: Shutdown,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the real product API backed by `store`.
#[allow(dead_code)]
pub async fn start_catalog_server(store: ProductStore) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = CatalogServer::new(ServerConfig::default(), store.clone());
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    TestServer {
        base_url: format!("http://{}", addr),
        store,
        shutdown,
    }
}

/// A request as seen by the programmable backend.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

#[allow(dead_code)]
pub type RequestLog = Arc<Mutex<Vec<RecordedRequest>>>;

/// Start a mock backend whose responses come from `f`. Every request is
/// recorded in the returned log.
#[allow(dead_code)]
pub async fn start_programmable_backend<F>(f: F) -> (SocketAddr, RequestLog)
where
    F: Fn(&RecordedRequest) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let log: RequestLog = Arc::new(Mutex::new(Vec::new()));
    let f = Arc::new(f);

    let requests = log.clone();
    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            let f = f.clone();
            let requests = requests.clone();
            tokio::spawn(async move {
                let (read, mut write) = socket.into_split();
                let mut reader = BufReader::new(read);

                let mut request_line = String::new();
                if reader.read_line(&mut request_line).await.unwrap_or(0) == 0 {
                    return;
                }
                let mut parts = request_line.split_whitespace();
                let method = parts.next().unwrap_or_default().to_string();
                let path = parts.next().unwrap_or_default().to_string();

                let mut content_length = 0;
                loop {
                    let mut header = String::new();
                    if reader.read_line(&mut header).await.unwrap_or(0) == 0 {
                        break;
                    }
                    let header = header.trim_end();
                    if header.is_empty() {
                        break;
                    }
                    if let Some((name, value)) = header.split_once(':') {
                        if name.eq_ignore_ascii_case("content-length") {
                            content_length = value.trim().parse().unwrap_or(0);
                        }
                    }
                }

                let mut body = vec![0u8; content_length];
                let _ = reader.read_exact(&mut body).await;

                let request = RecordedRequest {
                    method,
                    path,
                    body: String::from_utf8_lossy(&body).into_owned(),
                };
                let (status, body) = f(&request);
                requests.lock().unwrap().push(request);

                let body = if status == 204 { String::new() } else { body };
                let response = format!(
                    "HTTP/1.1 {}\r\n\
                     Content-Type: application/json\r\n\
                     Content-Length: {}\r\n\
                     Connection: close\r\n\r\n{}",
                    status_line(status),
                    body.len(),
                    body
                );
                let _ = write.write_all(response.as_bytes()).await;
                let _ = write.shutdown().await;
            });
        }
    });

    (addr, log)
}

/// `"<code> <reason>"` for any status, e.g. `"409 Conflict"`.
pub fn status_line(status: u16) -> String {
    let reason = StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("Unknown");
    format!("{} {}", status, reason)
}

/// Everything a [`RecordingUi`] was asked to do, in order.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum UiEvent {
    Render(RenderedList),
    Alert(String),
    Confirm(String),
    ShowForm(FormState),
    FocusForm,
}

#[allow(dead_code)]
/// A [`Ui`] that records calls and answers confirmations with a fixed reply.
#[derive(Debug, Default)]
pub struct RecordingUi {
    pub events: Vec<UiEvent>,
    pub confirm_reply: bool,
}

#[allow(dead_code)]
impl RecordingUi {
    pub fn confirming(reply: bool) -> Self {
        Self {
            events: Vec::new(),
            confirm_reply: reply,
        }
    }

    pub fn alerts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                UiEvent::Alert(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last_render(&self) -> Option<&RenderedList> {
        self.events.iter().rev().find_map(|e| match e {
            UiEvent::Render(list) => Some(list),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Ui for RecordingUi {
    fn render(&mut self, list: &RenderedList) {
        self.events.push(UiEvent::Render(list.clone()));
    }

    fn alert(&mut self, message: &str) {
        self.events.push(UiEvent::Alert(message.to_string()));
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.events.push(UiEvent::Confirm(message.to_string()));
        self.confirm_reply
    }

    fn show_form(&mut self, form: &FormState) {
        self.events.push(UiEvent::ShowForm(form.clone()));
    }

    fn focus_form(&mut self) {
        self.events.push(UiEvent::FocusForm);
    }
}

/// Controller talking to `base_url` through a [`RecordingUi`].
#[allow(dead_code)]
pub fn controller(base_url: &str, confirm_reply: bool) -> ProductListController<RecordingUi> {
    ProductListController::new(
        ProductClient::new(base_url),
        RecordingUi::confirming(confirm_reply),
    )
}
