use rand::seq::SliceRandom;
use rand::Rng;

use crate::category::CategoryRegistry;
use crate::error::Error;
use crate::lexicon::Lexicon;

pub struct SelectedTarget {
    pub word: String,
    pub hints: Vec<String>,
}

/// Draws a target word uniformly from a category and packages it with its
/// hints. The random source is passed in by the caller so tests can pin the
/// drawn word with a seeded generator.
pub struct WordSelector {
    registry: CategoryRegistry,
    lexicon: Box<dyn Lexicon>,
    max_hints: usize,
}

impl WordSelector {
    pub fn new(registry: CategoryRegistry, lexicon: Box<dyn Lexicon>, max_hints: usize) -> Self {
        Self {
            registry,
            lexicon,
            max_hints,
        }
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn select_target(
        &self,
        category: &str,
        rng: &mut impl Rng,
    ) -> Result<SelectedTarget, Error> {
        let words = self.registry.words_in(category)?;
        let word = words.choose(rng).ok_or_else(|| {
            Error::log_and_create_internal(&format!(
                "The category '{category}' has an empty word list, this is a bug."
            ))
        })?;

        let hints = match self.lexicon.definitions_of(word) {
            Ok(mut definitions) => {
                definitions.truncate(self.max_hints);
                definitions
            }
            Err(error) => {
                log::warn!(
                    "Definition lookup failed, starting the round without hints. Word: '{word}', Error: '{error}'."
                );
                Vec::new()
            }
        };

        Ok(SelectedTarget {
            word: word.to_string(),
            hints,
        })
    }
}
