use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio::sync::oneshot::Sender as OneshotSender;

use crate::config::GameSettings;
use crate::error::Error;
use crate::game::actor_client::GameClient;
use crate::game::{Game, GuessOutcome};
use crate::metrics::{GUESSES_SUBMITTED, HINTS_SERVED, ROUNDS_LOST, ROUNDS_WON};

pub enum GameCommand {
    Guess {
        category: String,
        guess: String,
        response_tx: OneshotSender<Result<GuessOutcome, Error>>,
    },
    Hint {
        response_tx: OneshotSender<Option<String>>,
    },
    Reset {
        response_tx: OneshotSender<()>,
    },
    RevealTarget {
        response_tx: OneshotSender<Option<String>>,
    },
    Subcategories {
        category: String,
        response_tx: OneshotSender<Result<Vec<String>, Error>>,
    },
}

/// Owns the one process-wide [`Game`] and serializes every operation on it.
/// Guess, hint and reset never interleave: the embedding lookups inside a
/// guess finish before any other command is picked up.
pub struct GameActor {
    game: Game,
    game_rx: Receiver<GameCommand>,
}

impl GameActor {
    pub fn spawn(settings: GameSettings) -> GameClient {
        let game = Game::new(settings);
        let (game_tx, game_rx): (Sender<GameCommand>, Receiver<GameCommand>) = mpsc::channel(128);

        tokio::spawn(GameActor { game, game_rx }.start());

        GameClient { game_tx }
    }

    async fn start(mut self) {
        while let Some(command) = self.game_rx.recv().await {
            match command {
                GameCommand::Guess {
                    category,
                    guess,
                    response_tx,
                } => {
                    GUESSES_SUBMITTED.inc();
                    let result = self.game.guess(&category, &guess);
                    match &result {
                        Ok(GuessOutcome::Won { .. }) => ROUNDS_WON.inc(),
                        Ok(GuessOutcome::Lost { .. }) => ROUNDS_LOST.inc(),
                        _ => {}
                    }
                    send_response(response_tx, result, "Guess");
                }
                GameCommand::Hint { response_tx } => {
                    let hint = self.game.hint();
                    if hint.is_some() {
                        HINTS_SERVED.inc();
                    }
                    send_response(response_tx, hint, "Hint");
                }
                GameCommand::Reset { response_tx } => {
                    self.game.reset();
                    send_response(response_tx, (), "Reset");
                }
                GameCommand::RevealTarget { response_tx } => {
                    let target = self.game.target().map(str::to_string);
                    send_response(response_tx, target, "RevealTarget");
                }
                GameCommand::Subcategories {
                    category,
                    response_tx,
                } => {
                    let result = self.game.subcategories(&category);
                    send_response(response_tx, result, "Subcategories");
                }
            }
        }
        log::info!("Game channel has been dropped. Stopping the game actor.");
    }
}

fn send_response<T>(response_tx: OneshotSender<T>, response: T, command: &str) {
    if response_tx.send(response).is_err() {
        log::error!("Sent a response for GameCommand::{command} but the caller is gone.");
    }
}
