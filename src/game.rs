pub mod actor;
pub mod actor_client;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::category::{normalize, CategoryRegistry};
use crate::config::GameSettings;
use crate::embedding::{Embeddings, HashedEmbeddings};
use crate::error::Error;
use crate::lexicon::{BuiltinLexicon, Lexicon};
use crate::round::Round;
use crate::scorer::SimilarityScorer;
use crate::selector::WordSelector;

#[derive(Clone, Debug, PartialEq)]
pub enum GuessOutcome {
    Won {
        word: String,
        similarity: f32,
    },
    Lost {
        word: String,
        similarity: f32,
    },
    Continue {
        remaining_attempts: u8,
        similarity: f32,
    },
}

impl GuessOutcome {
    pub fn is_won(&self) -> bool {
        matches!(self, GuessOutcome::Won { .. })
    }

    pub fn similarity(&self) -> f32 {
        match self {
            GuessOutcome::Won { similarity, .. }
            | GuessOutcome::Lost { similarity, .. }
            | GuessOutcome::Continue { similarity, .. } => *similarity,
        }
    }
}

/// The single active round and everything needed to play it. All mutation
/// goes through this type; the actor in [`actor`] serializes access to it.
pub struct Game {
    round: Round,
    selector: WordSelector,
    scorer: SimilarityScorer,
    settings: GameSettings,
    rng: StdRng,
}

impl Game {
    pub fn new(settings: GameSettings) -> Self {
        let embeddings = HashedEmbeddings::new(settings.embedding_dimensions);
        Self::with_parts(
            settings,
            Box::new(BuiltinLexicon::new()),
            Box::new(embeddings),
            StdRng::from_entropy(),
        )
    }

    /// Wiring point for tests: stub providers and a seeded random source.
    pub fn with_parts(
        settings: GameSettings,
        lexicon: Box<dyn Lexicon>,
        embeddings: Box<dyn Embeddings>,
        rng: StdRng,
    ) -> Self {
        Self {
            round: Round::new(settings.max_attempts),
            selector: WordSelector::new(CategoryRegistry::new(), lexicon, settings.max_hints),
            scorer: SimilarityScorer::new(embeddings),
            settings,
            rng,
        }
    }

    pub fn subcategories(&self, category: &str) -> Result<Vec<String>, Error> {
        self.selector
            .registry()
            .words_in(category)
            .map(<[String]>::to_vec)
    }

    /// Applies one guess. The target is fixed lazily on the first guess of a
    /// round; later guesses of the same round ignore the category argument.
    /// A guess that cannot be scored leaves the round untouched.
    pub fn guess(&mut self, category: &str, raw_guess: &str) -> Result<GuessOutcome, Error> {
        if self.round.is_over() {
            return Err(Error::RoundAlreadyOver);
        }

        let guess = normalize(raw_guess);

        if self.round.target().is_none() {
            let target = self.selector.select_target(category, &mut self.rng)?;
            log::debug!(
                "Target chosen. Category: '{}', Hints: '{}'.",
                normalize(category),
                target.hints.len()
            );
            self.round.begin(&target.word, target.hints)?;
        }

        let target = self
            .round
            .target()
            .expect("Missing target on an active round, there is a bug in the code.")
            .to_string();
        let similarity = self.scorer.score(&target, &guess)?;

        if guess == target {
            self.round.register_win()?;
            return Ok(GuessOutcome::Won {
                word: target,
                similarity,
            });
        }

        let remaining_attempts = self.round.register_miss()?;
        if self.round.is_over() {
            Ok(GuessOutcome::Lost {
                word: target,
                similarity,
            })
        } else {
            Ok(GuessOutcome::Continue {
                remaining_attempts,
                similarity,
            })
        }
    }

    pub fn hint(&mut self) -> Option<String> {
        self.round.next_hint().map(str::to_string)
    }

    pub fn reset(&mut self) {
        self.round = Round::new(self.settings.max_attempts);
        log::debug!("Round reset.");
    }

    /// Diagnostic accessor behind the /show route, None while fresh.
    pub fn target(&self) -> Option<&str> {
        self.round.target()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{Game, GuessOutcome};
    use crate::category::{normalize, CategoryRegistry};
    use crate::config::GameSettings;
    use crate::embedding::HashedEmbeddings;
    use crate::error::Error;
    use crate::lexicon::{BuiltinLexicon, Lexicon};
    use crate::selector::WordSelector;

    const SEED: u64 = 1234;
    const TOLERANCE: f32 = 1e-5;

    fn settings() -> GameSettings {
        GameSettings {
            max_attempts: 3,
            max_hints: 2,
            embedding_dimensions: 128,
        }
    }

    fn game() -> Game {
        let config = settings();
        let embeddings = HashedEmbeddings::new(config.embedding_dimensions);
        Game::with_parts(
            config,
            Box::new(BuiltinLexicon::new()),
            Box::new(embeddings),
            StdRng::seed_from_u64(SEED),
        )
    }

    /// Replays the selector with the same seed the game under test uses, so
    /// the test knows which word the first guess will fix as the target.
    fn expected_target(category: &str) -> String {
        let selector = WordSelector::new(CategoryRegistry::new(), Box::new(BuiltinLexicon::new()), 2);
        let mut rng = StdRng::seed_from_u64(SEED);
        normalize(&selector.select_target(category, &mut rng).unwrap().word)
    }

    #[test]
    fn guessing_the_target_wins_with_similarity_one() {
        let mut game = game();
        let target = expected_target("animal");

        let outcome = game.guess("animal", &format!("  {} ", target.to_uppercase()));

        match outcome.unwrap() {
            GuessOutcome::Won { word, similarity } => {
                assert_eq!(word, target);
                assert!((similarity - 1.0).abs() < TOLERANCE);
            }
            other => panic!("expected a win, got {other:?}"),
        }
    }

    #[test]
    fn three_wrong_guesses_lose_the_round() {
        let mut game = game();

        let first = game.guess("fruit", "not the word").unwrap();
        let second = game.guess("fruit", "not the word").unwrap();
        let third = game.guess("fruit", "not the word").unwrap();

        assert!(matches!(
            first,
            GuessOutcome::Continue {
                remaining_attempts: 2,
                ..
            }
        ));
        assert!(matches!(
            second,
            GuessOutcome::Continue {
                remaining_attempts: 1,
                ..
            }
        ));
        match third {
            GuessOutcome::Lost { word, .. } => assert_eq!(word, expected_target("fruit")),
            other => panic!("expected a loss, got {other:?}"),
        }
    }

    #[test]
    fn a_guess_on_a_finished_round_is_rejected() {
        let mut game = game();
        for _ in 0..3 {
            game.guess("bird", "not the word").unwrap();
        }

        let result = game.guess("bird", "not the word");

        assert_eq!(result, Err(Error::RoundAlreadyOver));
    }

    #[test]
    fn the_category_is_ignored_once_the_target_is_fixed() {
        let mut game = game();
        let target = expected_target("animal");

        game.guess("animal", "not the word").unwrap();
        // Even an unknown category is fine now, the target was already chosen.
        let outcome = game.guess("dinosaur", &target).unwrap();

        assert!(outcome.is_won());
    }

    #[test]
    fn an_unknown_category_leaves_the_round_fresh() {
        let mut game = game();

        let result = game.guess("dinosaur", "dog");

        assert_eq!(
            result,
            Err(Error::UnknownCategory("dinosaur".to_string()))
        );
        assert_eq!(game.target(), None);
        assert!(game.guess("animal", "not the word").is_ok());
    }

    #[test]
    fn an_unscorable_guess_does_not_spend_an_attempt() {
        let mut game = game();

        let result = game.guess("animal", "???");

        assert!(matches!(result, Err(Error::EmbeddingUnavailable(_))));
        // The target stays fixed and the next guess is still the first attempt.
        assert!(game.target().is_some());
        let outcome = game.guess("animal", "not the word").unwrap();
        assert!(matches!(
            outcome,
            GuessOutcome::Continue {
                remaining_attempts: 2,
                ..
            }
        ));
    }

    #[test]
    fn similarity_is_reported_on_wrong_guesses_too() {
        let mut game = game();

        let outcome = game.guess("sports", "not the word").unwrap();

        let similarity = outcome.similarity();
        assert!((-1.0..=1.0).contains(&similarity));
    }

    #[test]
    fn hints_come_from_the_lexicon_in_order() {
        struct TwoHints;
        impl Lexicon for TwoHints {
            fn definitions_of(&self, _word: &str) -> Result<Vec<String>, Error> {
                Ok(vec!["hint one".to_string(), "hint two".to_string()])
            }
        }

        let config = settings();
        let embeddings = HashedEmbeddings::new(config.embedding_dimensions);
        let mut game = Game::with_parts(
            config,
            Box::new(TwoHints),
            Box::new(embeddings),
            StdRng::seed_from_u64(SEED),
        );

        // No target yet, so no hints either.
        assert_eq!(game.hint(), None);

        game.guess("jobs", "not the word").unwrap();

        assert_eq!(game.hint(), Some("hint one".to_string()));
        assert_eq!(game.hint(), Some("hint two".to_string()));
        assert_eq!(game.hint(), None);
    }

    #[test]
    fn winning_keeps_unused_hints_available() {
        let mut game = game();
        let target = expected_target("vehicle");

        game.guess("vehicle", &target).unwrap();

        assert!(game.hint().is_some());
    }

    #[test]
    fn reset_restores_a_fresh_round() {
        let mut game = game();
        for _ in 0..3 {
            game.guess("insects", "not the word").unwrap();
        }

        game.reset();

        assert_eq!(game.target(), None);
        let outcome = game.guess("weather", "not the word").unwrap();
        assert!(matches!(
            outcome,
            GuessOutcome::Continue {
                remaining_attempts: 2,
                ..
            }
        ));
    }

    #[test]
    fn subcategories_lists_the_candidate_words() {
        let game = game();

        let words = game.subcategories("ANIMAL").unwrap();

        assert_eq!(words.len(), 10);
        assert!(words.contains(&"Dog".to_string()));
        assert_eq!(
            game.subcategories("dinosaur"),
            Err(Error::UnknownCategory("dinosaur".to_string()))
        );
    }
}
