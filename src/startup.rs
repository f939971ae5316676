use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::game::actor::GameActor;
use crate::routes;

pub async fn run_web_server(config: Config, listener: TcpListener) -> Result<(), std::io::Error> {
    let game = Arc::new(GameActor::spawn(config.game.clone()));

    let router = routes::create_router(&config).with_state(game);

    log::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await
}
