//! Test-only helpers: a tiny local HTTP responder, a proxy-free fetcher
//! and a recording fake fetcher.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use crate::core::downloader::{Fetcher, HttpFetcher};
use crate::core::error::{LauncherError, LauncherResult};

type Routes = HashMap<String, (u16, Vec<u8>)>;

/// Serves fixed responses per path; anything else is a 404 with no body.
pub struct TestServer {
    addr: SocketAddr,
    hits: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    pub async fn start(routes: Vec<(&str, u16, Vec<u8>)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let routes: Arc<Routes> = Arc::new(
            routes
                .into_iter()
                .map(|(path, status, body)| (path.to_string(), (status, body)))
                .collect(),
        );
        let hits = Arc::new(Mutex::new(Vec::new()));

        let server_hits = hits.clone();
        tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                let routes = routes.clone();
                let hits = server_hits.clone();
                tokio::spawn(async move {
                    respond(socket, &routes, &hits).await;
                });
            }
        });

        Self { addr, hits }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Request paths in arrival order.
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }
}

async fn respond(mut socket: TcpStream, routes: &Routes, hits: &Mutex<Vec<String>>) {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let head = String::from_utf8_lossy(&request);
    let path = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    hits.lock().unwrap().push(path.clone());

    let (status, body) = routes.get(&path).cloned().unwrap_or((404, Vec::new()));
    let reason = if status == 200 { "OK" } else { "Error" };
    let header = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );

    let _ = socket.write_all(header.as_bytes()).await;
    let _ = socket.write_all(&body).await;
    let _ = socket.shutdown().await;
}

/// A URL nothing is listening on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/gone.jar")
}

/// Fetcher that ignores proxy environment variables so requests reach the
/// local test server.
pub fn local_fetcher() -> HttpFetcher {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpFetcher::with_client(client)
}

/// In-memory fetcher that records every URL it is asked for and writes the
/// URL itself as the file body. URLs listed as failing return HTTP 503.
#[derive(Default)]
pub struct RecordingFetcher {
    calls: Mutex<Vec<String>>,
    failing: Vec<String>,
}

impl RecordingFetcher {
    pub fn failing(urls: &[&str]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failing: urls.iter().map(|u| u.to_string()).collect(),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Fetcher for RecordingFetcher {
    async fn fetch(&self, dest: &Path, url: &str) -> LauncherResult<u64> {
        self.calls.lock().unwrap().push(url.to_string());
        if self.failing.iter().any(|u| u == url) {
            return Err(LauncherError::DownloadFailed {
                url: url.to_string(),
                status: 503,
            });
        }
        tokio::fs::write(dest, url.as_bytes())
            .await
            .map_err(|source| LauncherError::LocalWrite {
                path: dest.to_path_buf(),
                source,
            })?;
        Ok(url.len() as u64)
    }
}
