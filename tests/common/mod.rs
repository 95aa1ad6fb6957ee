//! Shared utilities for integration testing.

use std::io::Write;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::net::TcpListener;

use alert_receiver::{HttpServer, ObservationSink, ReceiverConfig, Shutdown};

/// In-memory writer standing in for stdout, so tests can inspect what the
/// receiver recorded.
#[derive(Clone, Default)]
pub struct CaptureBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl CaptureBuffer {
    #[allow(dead_code)]
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    #[allow(dead_code)]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }
}

/// Spawn a receiver on an ephemeral port.
///
/// Returns the bound address, the capture buffer behind the observation
/// sink, and the shutdown handle that stops the spawned server.
pub async fn spawn_receiver(mut config: ReceiverConfig) -> (SocketAddr, CaptureBuffer, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let capture = CaptureBuffer::default();
    let sink = ObservationSink::from_writer(capture.clone());
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    let server = HttpServer::new(config, sink);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, capture, shutdown)
}

/// Non-pooled client so each test exchange uses a fresh connection.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
