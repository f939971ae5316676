use tokio::net::TcpListener;

use lexiguess::config::Config;
use lexiguess::metrics;
use lexiguess::startup;

#[tokio::main]
async fn main() {
    std_logger::Config::logfmt().init();
    metrics::register_metrics();

    let config = Config::get().expect("ERROR: Unable to get the Config.");
    let address = format!(
        "{}:{}",
        config.application.host, config.application.port
    );
    let listener = TcpListener::bind(&address)
        .await
        .expect("Failed to bind the application port.");

    startup::run_web_server(config, listener)
        .await
        .expect("Failed to run the web server.");
}
