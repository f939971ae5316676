use crate::category::normalize;
use crate::error::Error;

/// Resolves a word to a fixed-length dense vector. Implementations must be
/// deterministic: the same word always maps to the same vector, so that a
/// word is always at similarity 1.0 with itself.
pub trait Embeddings: Send + Sync {
    fn vector_of(&self, word: &str) -> Result<Vec<f32>, Error>;
}

/// Signed character-trigram feature hashing. Each token of the word is
/// wrapped in boundary markers and every trigram is hashed into one of the
/// vector's dimensions with a +1/-1 contribution, so words sharing letter
/// patterns end up with correlated vectors.
pub struct HashedEmbeddings {
    dimensions: usize,
}

const TOKEN_START: char = '^';
const TOKEN_END: char = '$';

impl HashedEmbeddings {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }
}

impl Embeddings for HashedEmbeddings {
    fn vector_of(&self, word: &str) -> Result<Vec<f32>, Error> {
        let mut vector = vec![0.0; self.dimensions];
        let mut features = 0usize;

        for token in normalize(word).split_whitespace() {
            // Letters and digits only, the markers cannot collide with them.
            let characters: Vec<char> = std::iter::once(TOKEN_START)
                .chain(token.chars().filter(|character| character.is_alphanumeric()))
                .chain(std::iter::once(TOKEN_END))
                .collect();

            for trigram in characters.windows(3) {
                let hash = fnv1a(trigram);
                let index = (hash % self.dimensions as u64) as usize;
                let sign = if hash & (1 << 63) == 0 { 1.0 } else { -1.0 };
                vector[index] += sign;
                features += 1;
            }
        }

        if features == 0 {
            return Err(Error::EmbeddingUnavailable(word.trim().to_string()));
        }
        Ok(vector)
    }
}

fn fnv1a(characters: &[char]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    let mut hash = OFFSET_BASIS;
    let mut buffer = [0u8; 4];
    for character in characters {
        for byte in character.encode_utf8(&mut buffer).bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(PRIME);
        }
    }
    hash
}
