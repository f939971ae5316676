use tokio::sync::mpsc::Sender;
use tokio::sync::oneshot::{self, Receiver as OneshotReceiver, Sender as OneshotSender};

use crate::error::Error;
use crate::game::actor::GameCommand;
use crate::game::GuessOutcome;

/// Cloneable handle to the game actor, the only way the rest of the process
/// reaches the round state.
#[derive(Clone, Debug)]
pub struct GameClient {
    pub(super) game_tx: Sender<GameCommand>,
}

impl GameClient {
    pub async fn guess(&self, category: &str, guess: &str) -> Result<GuessOutcome, Error> {
        let (tx, rx): (
            OneshotSender<Result<GuessOutcome, Error>>,
            OneshotReceiver<Result<GuessOutcome, Error>>,
        ) = oneshot::channel();

        self.game_tx
            .send(GameCommand::Guess {
                category: category.to_string(),
                guess: guess.to_string(),
                response_tx: tx,
            })
            .await
            .map_err(|error| {
                Error::log_and_create_internal(&format!(
                    "Tried to send GameCommand::Guess but the game actor is not listening. Error: '{error}'."
                ))
            })?;

        rx.await.map_err(|_| {
            Error::log_and_create_internal(
                "Sent a GameCommand::Guess to the game actor, but its channel died.",
            )
        })?
    }

    pub async fn hint(&self) -> Result<Option<String>, Error> {
        let (tx, rx) = oneshot::channel();

        self.game_tx
            .send(GameCommand::Hint { response_tx: tx })
            .await
            .map_err(|error| {
                Error::log_and_create_internal(&format!(
                    "Tried to send GameCommand::Hint but the game actor is not listening. Error: '{error}'."
                ))
            })?;

        rx.await.map_err(|_| {
            Error::log_and_create_internal(
                "Sent a GameCommand::Hint to the game actor, but its channel died.",
            )
        })
    }

    pub async fn reset(&self) -> Result<(), Error> {
        let (tx, rx) = oneshot::channel();

        self.game_tx
            .send(GameCommand::Reset { response_tx: tx })
            .await
            .map_err(|error| {
                Error::log_and_create_internal(&format!(
                    "Tried to send GameCommand::Reset but the game actor is not listening. Error: '{error}'."
                ))
            })?;

        rx.await.map_err(|_| {
            Error::log_and_create_internal(
                "Sent a GameCommand::Reset to the game actor, but its channel died.",
            )
        })
    }

    pub async fn reveal_target(&self) -> Result<Option<String>, Error> {
        let (tx, rx) = oneshot::channel();

        self.game_tx
            .send(GameCommand::RevealTarget { response_tx: tx })
            .await
            .map_err(|error| {
                Error::log_and_create_internal(&format!(
                    "Tried to send GameCommand::RevealTarget but the game actor is not listening. Error: '{error}'."
                ))
            })?;

        rx.await.map_err(|_| {
            Error::log_and_create_internal(
                "Sent a GameCommand::RevealTarget to the game actor, but its channel died.",
            )
        })
    }

    pub async fn subcategories(&self, category: &str) -> Result<Vec<String>, Error> {
        let (tx, rx) = oneshot::channel();

        self.game_tx
            .send(GameCommand::Subcategories {
                category: category.to_string(),
                response_tx: tx,
            })
            .await
            .map_err(|error| {
                Error::log_and_create_internal(&format!(
                    "Tried to send GameCommand::Subcategories but the game actor is not listening. Error: '{error}'."
                ))
            })?;

        rx.await.map_err(|_| {
            Error::log_and_create_internal(
                "Sent a GameCommand::Subcategories to the game actor, but its channel died.",
            )
        })?
    }
}
