use rust_fsm::{state_machine, StateMachine};

use crate::category::normalize;
use crate::error::Error;

/*
 * Fresh: no target chosen yet, nothing counted.
 * Active: target fixed on the first guess, attempts accumulate.
 * Won / Lost: terminal, only a reset (a new Round value) leaves them.
 */
state_machine! {
    derive(Debug, Clone, PartialEq)
    pub RoundFsm(Fresh)

    Fresh => {
        ChooseTarget => Active
    },
    Active => {
        GuessMatched => Won,
        AttemptsExhausted => Lost
    }
}

impl std::fmt::Display for RoundFsmState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One play-through: from target selection until the guesser wins or runs
/// out of attempts. A reset replaces the whole value.
pub struct Round {
    fsm: StateMachine<RoundFsm>,
    target: Option<String>,
    hints: Vec<String>,
    max_attempts: u8,
    attempts: u8,
    hints_used: usize,
}

impl Round {
    pub fn new(max_attempts: u8) -> Self {
        Self {
            fsm: StateMachine::default(),
            target: None,
            hints: Vec::default(),
            max_attempts,
            attempts: 0,
            hints_used: 0,
        }
    }

    pub fn state(&self) -> &RoundFsmState {
        self.fsm.state()
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state(), RoundFsmState::Won | RoundFsmState::Lost)
    }

    /// The normalized target word, None while the round is fresh.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn attempts(&self) -> u8 {
        self.attempts
    }

    pub fn remaining_attempts(&self) -> u8 {
        self.max_attempts - self.attempts
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    pub fn begin(&mut self, word: &str, hints: Vec<String>) -> Result<(), Error> {
        self.process_event(&RoundFsmInput::ChooseTarget)?;
        self.target = Some(normalize(word));
        self.hints = hints;
        Ok(())
    }

    pub fn register_win(&mut self) -> Result<(), Error> {
        self.process_event(&RoundFsmInput::GuessMatched)
    }

    /// Counts a wrong guess and returns the attempts left. Moves the round
    /// to Lost when the last attempt is spent.
    pub fn register_miss(&mut self) -> Result<u8, Error> {
        if self.state() != &RoundFsmState::Active {
            return Err(Error::log_and_create_internal(&format!(
                "Cannot register a miss on a round in state '{}'.",
                self.state()
            )));
        }
        self.attempts += 1;
        if self.attempts >= self.max_attempts {
            self.process_event(&RoundFsmInput::AttemptsExhausted)?;
        }
        Ok(self.remaining_attempts())
    }

    /// The next unused hint, or None once they are exhausted. Exhaustion is
    /// a normal condition, not an error.
    pub fn next_hint(&mut self) -> Option<&str> {
        if self.hints_used < self.hints.len() {
            self.hints_used += 1;
            Some(self.hints[self.hints_used - 1].as_str())
        } else {
            None
        }
    }

    fn process_event(&mut self, event: &RoundFsmInput) -> Result<(), Error> {
        match self.fsm.consume(event) {
            Ok(_) => Ok(()),
            Err(error) => Err(Error::log_and_create_internal(&format!(
                "The round fsm in state {:?} can't transition with an event {:?}. Error: '{error}'.",
                self.fsm.state(),
                event
            ))),
        }
    }
}
