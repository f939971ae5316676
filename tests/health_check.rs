use lexiguess::config::Config;
use tokio::net::TcpListener;

#[tokio::test]
async fn health_check_works() {
    let base_address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base_address}/health"))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
}

#[tokio::test]
async fn metrics_are_exposed() {
    let base_address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base_address}/metrics"))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
}

async fn spawn_app() -> String {
    // Binding to port 0 triggers an OS scan for an available port, this way we can run tests in parallel where each runs its own application
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port.");
    let address = listener.local_addr().unwrap();
    let config = Config::get().expect("Failed to read configuration.");

    let _ = tokio::spawn(lexiguess::startup::run_web_server(config, listener));

    format!("http://127.0.0.1:{}", address.port())
}
