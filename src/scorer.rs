use std::collections::HashMap;

use crate::category::normalize;
use crate::embedding::Embeddings;
use crate::error::Error;

/// Scores how close two words are by the cosine similarity of their
/// embedding vectors, in [-1.0, 1.0]. Vectors are cached by normalized word,
/// the embedding lookup is the most expensive step of a guess.
pub struct SimilarityScorer {
    embeddings: Box<dyn Embeddings>,
    cache: HashMap<String, Vec<f32>>,
}

impl SimilarityScorer {
    pub fn new(embeddings: Box<dyn Embeddings>) -> Self {
        Self {
            embeddings,
            cache: HashMap::new(),
        }
    }

    pub fn score(&mut self, word_a: &str, word_b: &str) -> Result<f32, Error> {
        let vector_a = self.vector_of(word_a)?;
        let vector_b = self.vector_of(word_b)?;

        let norm_a = norm(&vector_a);
        if norm_a == 0.0 {
            return Err(Error::EmbeddingUnavailable(normalize(word_a)));
        }
        let norm_b = norm(&vector_b);
        if norm_b == 0.0 {
            return Err(Error::EmbeddingUnavailable(normalize(word_b)));
        }

        let cosine = dot(&vector_a, &vector_b) / (norm_a * norm_b);
        Ok(cosine.clamp(-1.0, 1.0))
    }

    fn vector_of(&mut self, word: &str) -> Result<Vec<f32>, Error> {
        let key = normalize(word);
        if let Some(vector) = self.cache.get(&key) {
            return Ok(vector.clone());
        }
        let vector = self.embeddings.vector_of(&key)?;
        self.cache.insert(key, vector.clone());
        Ok(vector)
    }
}

fn dot(vector_a: &[f32], vector_b: &[f32]) -> f32 {
    vector_a
        .iter()
        .zip(vector_b.iter())
        .map(|(a, b)| a * b)
        .sum()
}

fn norm(vector: &[f32]) -> f32 {
    dot(vector, vector).sqrt()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::SimilarityScorer;
    use crate::embedding::{Embeddings, HashedEmbeddings};
    use crate::error::Error;

    const TOLERANCE: f32 = 1e-5;

    /// Maps a few fixed words to fixed vectors and counts lookups.
    struct FixedEmbeddings {
        lookups: Arc<AtomicUsize>,
    }

    impl FixedEmbeddings {
        fn new() -> Self {
            Self {
                lookups: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl Embeddings for FixedEmbeddings {
        fn vector_of(&self, word: &str) -> Result<Vec<f32>, Error> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            match word {
                "east" => Ok(vec![1.0, 0.0]),
                "north" => Ok(vec![0.0, 1.0]),
                "west" => Ok(vec![-1.0, 0.0]),
                "northeast" => Ok(vec![1.0, 1.0]),
                "nowhere" => Ok(vec![0.0, 0.0]),
                other => Err(Error::EmbeddingUnavailable(other.to_string())),
            }
        }
    }

    #[test]
    fn a_word_scores_one_against_itself() {
        let mut scorer = SimilarityScorer::new(Box::new(FixedEmbeddings::new()));

        let similarity = scorer.score("east", "east").unwrap();

        assert!((similarity - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn a_word_scores_one_against_itself_with_real_embeddings() {
        let mut scorer = SimilarityScorer::new(Box::new(HashedEmbeddings::new(256)));

        let similarity = scorer.score("pomegranate", "Pomegranate ").unwrap();

        assert!((similarity - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn score_is_symmetric() {
        let mut scorer = SimilarityScorer::new(Box::new(FixedEmbeddings::new()));

        assert_eq!(
            scorer.score("east", "northeast").unwrap(),
            scorer.score("northeast", "east").unwrap()
        );
    }

    #[test]
    fn orthogonal_vectors_score_zero_and_opposite_vectors_score_minus_one() {
        let mut scorer = SimilarityScorer::new(Box::new(FixedEmbeddings::new()));

        assert!(scorer.score("east", "north").unwrap().abs() < TOLERANCE);
        assert!((scorer.score("east", "west").unwrap() + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn unresolvable_words_surface_the_provider_error() {
        let mut scorer = SimilarityScorer::new(Box::new(FixedEmbeddings::new()));

        assert_eq!(
            scorer.score("east", "atlantis"),
            Err(Error::EmbeddingUnavailable("atlantis".to_string()))
        );
    }

    #[test]
    fn a_zero_vector_cannot_be_scored() {
        let mut scorer = SimilarityScorer::new(Box::new(FixedEmbeddings::new()));

        assert_eq!(
            scorer.score("nowhere", "east"),
            Err(Error::EmbeddingUnavailable("nowhere".to_string()))
        );
    }

    #[test]
    fn vectors_are_cached_by_normalized_word() {
        let embeddings = FixedEmbeddings::new();
        let lookups = Arc::clone(&embeddings.lookups);
        let mut scorer = SimilarityScorer::new(Box::new(embeddings));

        let first = scorer.score("east", "  EAST ").unwrap();
        let second = scorer.score("east", "east").unwrap();

        assert_eq!(first, second);
        // Every call resolves to the same normalized word, one lookup total.
        assert_eq!(lookups.load(Ordering::SeqCst), 1);
    }
}
