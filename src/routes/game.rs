use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::game::actor_client::GameClient;
use crate::game::GuessOutcome;

const NO_MORE_HINTS: &str = "No more hints available!";
const NO_WORD_CHOSEN: &str = "No word has been chosen yet.";

#[derive(Deserialize)]
pub struct SubcategoriesParams {
    category: String,
}

#[derive(Serialize)]
struct SubcategoriesResponse {
    subcategories: Vec<String>,
}

#[derive(Deserialize)]
pub struct GuessRequest {
    category: String,
    guess: String,
}

#[derive(Serialize)]
struct GuessResponse {
    message: String,
    success: bool,
    similarity: f32,
}

#[derive(Serialize)]
struct HintResponse {
    hint: String,
}

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

#[derive(Serialize)]
struct ShowResponse {
    word: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub async fn subcategories(
    State(game): State<Arc<GameClient>>,
    Query(params): Query<SubcategoriesParams>,
) -> Response {
    match game.subcategories(&params.category).await {
        Ok(subcategories) => {
            (StatusCode::OK, Json(SubcategoriesResponse { subcategories })).into_response()
        }
        Err(error) => error_response(&error),
    }
}

pub async fn guess(
    State(game): State<Arc<GameClient>>,
    Json(request): Json<GuessRequest>,
) -> Response {
    match game.guess(&request.category, &request.guess).await {
        Ok(outcome) => {
            let success = outcome.is_won();
            let similarity = outcome.similarity();
            let message = match outcome {
                GuessOutcome::Won { word, .. } => {
                    format!("Congratulations! You've guessed the word '{word}'!")
                }
                GuessOutcome::Lost { word, .. } => format!("Game over! The word was '{word}'."),
                GuessOutcome::Continue {
                    remaining_attempts, ..
                } => format!("Incorrect guess! You have {remaining_attempts} attempts remaining."),
            };
            (
                StatusCode::OK,
                Json(GuessResponse {
                    message,
                    success,
                    similarity,
                }),
            )
                .into_response()
        }
        Err(error) => error_response(&error),
    }
}

pub async fn hint(State(game): State<Arc<GameClient>>) -> Response {
    match game.hint().await {
        Ok(hint) => {
            let hint = hint.unwrap_or_else(|| NO_MORE_HINTS.to_string());
            (StatusCode::OK, Json(HintResponse { hint })).into_response()
        }
        Err(error) => error_response(&error),
    }
}

pub async fn reset(State(game): State<Arc<GameClient>>) -> Response {
    match game.reset().await {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Game has been reset!".to_string(),
            }),
        )
            .into_response(),
        Err(error) => error_response(&error),
    }
}

pub async fn show(State(game): State<Arc<GameClient>>) -> Response {
    match game.reveal_target().await {
        Ok(target) => {
            let word = match target {
                Some(word) => format!("The word was: {word}"),
                None => NO_WORD_CHOSEN.to_string(),
            };
            (StatusCode::OK, Json(ShowResponse { word })).into_response()
        }
        Err(error) => error_response(&error),
    }
}

fn error_response(error: &Error) -> Response {
    let status_code = match error {
        Error::UnknownCategory(_) => StatusCode::BAD_REQUEST,
        Error::RoundAlreadyOver => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status_code,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}
