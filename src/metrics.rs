use lazy_static::lazy_static;
use prometheus::{IntCounter, Registry};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();
    pub static ref GUESSES_SUBMITTED: IntCounter =
        IntCounter::new("lexiguess_guesses_submitted", "Guesses submitted across all rounds")
            .expect("metric cannot be created");
    pub static ref ROUNDS_WON: IntCounter =
        IntCounter::new("lexiguess_rounds_won", "Rounds ended by a correct guess")
            .expect("metric cannot be created");
    pub static ref ROUNDS_LOST: IntCounter =
        IntCounter::new("lexiguess_rounds_lost", "Rounds ended by running out of attempts")
            .expect("metric cannot be created");
    pub static ref HINTS_SERVED: IntCounter =
        IntCounter::new("lexiguess_hints_served", "Hints revealed to the player")
            .expect("metric cannot be created");
}

pub fn register_metrics() {
    REGISTRY
        .register(Box::new(GUESSES_SUBMITTED.clone()))
        .expect("collector cannot be registered");

    REGISTRY
        .register(Box::new(ROUNDS_WON.clone()))
        .expect("collector cannot be registered");

    REGISTRY
        .register(Box::new(ROUNDS_LOST.clone()))
        .expect("collector cannot be registered");

    REGISTRY
        .register(Box::new(HINTS_SERVED.clone()))
        .expect("collector cannot be registered");
}
