//! Shared test utilities for bilharzia-server integration tests

use std::io::Write;
use std::net::SocketAddr;
use std::sync::Arc;

use bilharzia_server::{AppState, DashboardServer, ServerConfig};
use tempfile::NamedTempFile;
use tokio::net::TcpListener;

/// Haematuria and freshwater contact push towards high risk
pub const MODEL_JSON: &str = r#"{
    "kind": "one_hot_logistic",
    "intercept": -2.0,
    "weights": {
        "Haematuria": { "Yes": 3.0 },
        "Direct contact with freshwater body": { "Yes": 1.0 }
    }
}"#;

pub const DATASET_CSV: &str = "Sex,Age,Haematuria\n\
Male,10 -14 Years,Haematuria\n\
Female,15- 19 Years,Yes\n\
Female,10 - 14 Years,No\n";

/// Writes `contents` to a temporary file that lives as long as the handle
pub fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Loads state the way the CLI does, from files on disk
pub fn load_test_state() -> AppState {
    let model = temp_file(MODEL_JSON);
    let dataset = temp_file(DATASET_CSV);
    AppState::load(model.path(), dataset.path()).unwrap()
}

/// Creates a test server over the fixture model, returns state and address
#[allow(dead_code)]
pub async fn create_test_server() -> (Arc<AppState>, SocketAddr) {
    let state = Arc::new(load_test_state());
    let server = DashboardServer::with_state(ServerConfig::default(), Arc::clone(&state));
    let addr = spawn_server(server).await;
    (state, addr)
}

/// Spawns server in background task, returns bound address
async fn spawn_server(server: DashboardServer) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = server.run_with_listener(listener).await;
    });

    // Brief delay to ensure server is accepting connections
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    addr
}
