use std::collections::HashMap;

use crate::category::normalize;
use crate::error::Error;

/// A source of short textual definitions for a word, ordered from most to
/// least common sense. An empty result is not an error: it just means the
/// round will have no hints available.
pub trait Lexicon: Send + Sync {
    fn definitions_of(&self, word: &str) -> Result<Vec<String>, Error>;
}

const GLOSSARY: &[(&str, &[&str])] = &[
    // animal
    (
        "dog",
        &[
            "a domesticated carnivorous mammal kept as a pet or for work",
            "to follow someone closely and persistently",
        ],
    ),
    (
        "cat",
        &[
            "a small domesticated feline kept as a pet",
            "any member of the family of felines, such as lions and tigers",
        ],
    ),
    (
        "elephant",
        &["a very large herbivorous mammal with a trunk and ivory tusks"],
    ),
    (
        "lion",
        &[
            "a large tawny wild cat of Africa, the male of which has a mane",
            "a person of great importance or courage",
        ],
    ),
    (
        "tiger",
        &[
            "a large Asian wild cat with a striped orange and black coat",
            "a fierce or audacious person",
        ],
    ),
    (
        "cow",
        &[
            "a mature female of domestic cattle, kept for its milk",
            "to intimidate someone into submission",
        ],
    ),
    (
        "monkey",
        &[
            "a primate with a long tail, typically living in trees",
            "to tamper or meddle with something",
        ],
    ),
    (
        "rabbit",
        &["a burrowing mammal with long ears and a short tail"],
    ),
    (
        "horse",
        &[
            "a large hoofed mammal used for riding and carrying loads",
            "a frame or structure on which something is mounted",
        ],
    ),
    (
        "goat",
        &[
            "a hardy domesticated ruminant with backward-curving horns",
            "a person blamed for a failure or defeat",
        ],
    ),
    // bird
    (
        "sparrow",
        &["a small brownish-grey songbird common near houses"],
    ),
    (
        "pigeon",
        &[
            "a stout grey bird with a cooing voice, common in cities",
            "a person who is easily deceived",
        ],
    ),
    (
        "parrot",
        &[
            "a tropical bird with bright plumage able to mimic speech",
            "to repeat words mechanically without understanding",
        ],
    ),
    (
        "crow",
        &[
            "a large black bird with a harsh call",
            "to utter the loud cry of a rooster",
        ],
    ),
    (
        "peacock",
        &["a male peafowl with a fan-like iridescent tail used in display"],
    ),
    (
        "duck",
        &[
            "a waterbird with a broad flat bill and webbed feet",
            "to lower the head or body quickly to avoid something",
        ],
    ),
    (
        "owl",
        &["a nocturnal bird of prey with large forward-facing eyes"],
    ),
    (
        "eagle",
        &[
            "a large bird of prey with keen sight and powerful flight",
            "a golf score of two strokes under par on a hole",
        ],
    ),
    (
        "penguin",
        &["a flightless seabird of the southern hemisphere that swims with flipper-like wings"],
    ),
    (
        "woodpecker",
        &["a bird with a strong bill that drills into tree bark for insects"],
    ),
    // vehicle
    (
        "car",
        &[
            "a road vehicle with an engine and four wheels for passengers",
            "a railway carriage or the passenger compartment of a lift",
        ],
    ),
    (
        "bus",
        &[
            "a large motor vehicle carrying passengers along a fixed route",
            "a shared pathway that transfers data inside a computer",
        ],
    ),
    (
        "bicycle",
        &["a two-wheeled vehicle propelled by pedals and steered with handlebars"],
    ),
    (
        "train",
        &[
            "a connected line of railway carriages pulled by a locomotive",
            "to teach a skill through sustained practice",
        ],
    ),
    (
        "aeroplane",
        &["a powered flying vehicle with fixed wings"],
    ),
    (
        "boat",
        &["a small vessel for travelling over water"],
    ),
    (
        "motorcycle",
        &["a two-wheeled motor vehicle ridden astride"],
    ),
    (
        "truck",
        &[
            "a large motor vehicle for transporting goods",
            "to have dealings with someone",
        ],
    ),
    (
        "ship",
        &[
            "a large seagoing vessel",
            "to transport goods to a destination",
        ],
    ),
    // fruit
    (
        "apple",
        &["a round fruit with crisp flesh and red, green or yellow skin"],
    ),
    (
        "banana",
        &["a long curved tropical fruit with a yellow skin"],
    ),
    (
        "mango",
        &["a tropical stone fruit with sweet orange flesh"],
    ),
    (
        "orange",
        &[
            "a round citrus fruit with a tough reddish-yellow rind",
            "a colour between red and yellow",
        ],
    ),
    (
        "grapes",
        &["small sweet berries growing in clusters on a vine, eaten fresh or used for wine"],
    ),
    (
        "pineapple",
        &["a large tropical fruit with spiky skin and sweet yellow flesh"],
    ),
    (
        "watermelon",
        &["a very large fruit with a hard green rind and sweet watery red flesh"],
    ),
    (
        "strawberry",
        &["a sweet soft red fruit with seeds on its surface"],
    ),
    (
        "pomegranate",
        &["a round fruit with a tough skin and many seeds in juicy red pulp"],
    ),
    (
        "kiwi",
        &[
            "an oval fruit with a hairy brown skin and green flesh",
            "a flightless New Zealand bird with a long bill",
        ],
    ),
    // vegetable
    (
        "potato",
        &["a starchy tuber cooked and eaten as a staple vegetable"],
    ),
    (
        "tomato",
        &["a glossy red fruit eaten as a vegetable, raw or cooked"],
    ),
    (
        "carrot",
        &[
            "a tapering orange root vegetable",
            "something offered as a means of persuasion",
        ],
    ),
    (
        "onion",
        &["a bulb vegetable with a pungent taste and layered flesh"],
    ),
    (
        "spinach",
        &["a leafy green vegetable eaten cooked or raw"],
    ),
    (
        "cucumber",
        &["a long green-skinned fruit with watery flesh, eaten in salads"],
    ),
    (
        "peas",
        &["small round green seeds eaten as a vegetable"],
    ),
    (
        "broccoli",
        &["a vegetable with a thick stalk and dense green flower heads"],
    ),
    (
        "brinjal",
        &["a purple egg-shaped vegetable, also called aubergine or eggplant"],
    ),
    (
        "ladies finger",
        &["a slender green seed pod eaten as a vegetable, also called okra"],
    ),
    // clothes
    (
        "shirt",
        &["a garment for the upper body with sleeves and usually a collar"],
    ),
    (
        "pants",
        &["a garment covering the body from the waist to the ankles, with a part for each leg"],
    ),
    (
        "dress",
        &[
            "a one-piece garment for the upper body and skirt",
            "to put on clothes",
        ],
    ),
    (
        "hat",
        &["a shaped covering for the head, often with a brim"],
    ),
    (
        "shoes",
        &["coverings for the feet with a sturdy sole"],
    ),
    (
        "socks",
        &["soft coverings for the feet worn inside shoes"],
    ),
    (
        "jacket",
        &[
            "a short coat worn on the upper body",
            "an outer covering or casing",
        ],
    ),
    (
        "scarf",
        &["a length of fabric worn around the neck or head for warmth"],
    ),
    (
        "gloves",
        &["coverings for the hands with separate parts for each finger"],
    ),
    (
        "belt",
        &[
            "a strip of leather or fabric worn around the waist",
            "a continuous band in machinery that transmits motion",
        ],
    ),
    // weather
    (
        "rainy",
        &["marked by a lot of rain"],
    ),
    (
        "snow",
        &["frozen water vapour falling as soft white flakes"],
    ),
    (
        "sunny",
        &[
            "bright with sunlight",
            "cheerful in temperament",
        ],
    ),
    (
        "windy",
        &["marked by strong currents of moving air"],
    ),
    (
        "cloudy",
        &[
            "covered with clouds",
            "not clear or transparent",
        ],
    ),
    (
        "storm",
        &[
            "a violent disturbance of the atmosphere with strong wind and rain",
            "to attack a place suddenly and with force",
        ],
    ),
    (
        "hail",
        &[
            "pellets of frozen rain falling in showers",
            "to call out to someone in greeting",
        ],
    ),
    (
        "fog",
        &["a thick cloud of tiny water droplets near the ground that obscures visibility"],
    ),
    (
        "rainbow",
        &["an arch of colours in the sky caused by sunlight refracting through rain"],
    ),
    (
        "lightning",
        &["a sudden natural electrical discharge seen as a flash in the sky"],
    ),
    // jobs
    (
        "doctor",
        &[
            "a person qualified to treat illness and injury",
            "to tamper with or falsify something",
        ],
    ),
    (
        "teacher",
        &["a person who instructs others, especially in a school"],
    ),
    (
        "farmer",
        &["a person who grows crops or raises animals on land"],
    ),
    (
        "pilot",
        &[
            "a person who operates the flying controls of an aircraft",
            "done as a small-scale test before wider use",
        ],
    ),
    (
        "chef",
        &["a professional cook, typically the chief cook of a kitchen"],
    ),
    (
        "police",
        &["the civil force responsible for maintaining public order and preventing crime"],
    ),
    (
        "artist",
        &["a person who creates paintings, drawings or other works of art"],
    ),
    (
        "scientist",
        &["a person studying or expert in the natural or physical sciences"],
    ),
    (
        "driver",
        &[
            "a person who drives a vehicle",
            "a factor that causes something to happen or develop",
        ],
    ),
    (
        "firefighter",
        &["a person whose job is to extinguish fires and rescue people"],
    ),
    // sports
    (
        "football",
        &["a team game played by kicking a ball, with the aim of scoring goals"],
    ),
    (
        "cricket",
        &[
            "a bat-and-ball game played between two teams of eleven players",
            "a leaping insect that produces a chirping sound",
        ],
    ),
    (
        "tennis",
        &["a game in which players use rackets to strike a ball over a net"],
    ),
    (
        "basketball",
        &["a team game in which points are scored by throwing a ball through a hoop"],
    ),
    (
        "hockey",
        &["a team game played with curved sticks and a small hard ball or puck"],
    ),
    (
        "badminton",
        &["a game in which players use light rackets to hit a shuttlecock over a net"],
    ),
    (
        "swimming",
        &["the sport of propelling oneself through water with the limbs"],
    ),
    (
        "volleyball",
        &["a team game in which a ball is hit by hand over a high net"],
    ),
    (
        "baseball",
        &["a ball game played with a bat between two teams of nine players"],
    ),
    (
        "cycling",
        &["the sport or activity of riding a bicycle"],
    ),
    // insects
    (
        "ant",
        &["a small social insect living in organized colonies"],
    ),
    (
        "bee",
        &[
            "a stinging winged insect that collects nectar and makes honey",
            "a gathering for communal work or competition, as in a spelling bee",
        ],
    ),
    (
        "butterfly",
        &[
            "an insect with large, often colourful wings that flies by day",
            "a swimming stroke in which both arms are raised together",
        ],
    ),
    (
        "spider",
        &["an eight-legged arachnid that spins webs to catch prey"],
    ),
    (
        "mosquito",
        &["a slender flying insect, the female of which bites and sucks blood"],
    ),
    (
        "cockroach",
        &["a beetle-like scavenging insect with long antennae"],
    ),
    (
        "grasshopper",
        &["a plant-eating insect with long hind legs used for leaping"],
    ),
    (
        "beetle",
        &["an insect with hardened forewings that form a protective case"],
    ),
    (
        "ladybug",
        &["a small round beetle, typically red with black spots"],
    ),
    (
        "fly",
        &[
            "a two-winged insect, often a carrier of disease",
            "to move through the air with wings",
        ],
    ),
];

/// Glossary bundled with the binary. It covers every candidate word in the
/// registry, so a round normally starts with one or two hints; unknown words
/// simply have no definitions.
pub struct BuiltinLexicon {
    glossary: HashMap<String, Vec<String>>,
}

impl BuiltinLexicon {
    pub fn new() -> Self {
        let glossary = GLOSSARY
            .iter()
            .map(|(word, definitions)| {
                (
                    word.to_string(),
                    definitions
                        .iter()
                        .map(|definition| definition.to_string())
                        .collect(),
                )
            })
            .collect();
        Self { glossary }
    }
}

impl Default for BuiltinLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon for BuiltinLexicon {
    fn definitions_of(&self, word: &str) -> Result<Vec<String>, Error> {
        Ok(self
            .glossary
            .get(&normalize(word))
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::{BuiltinLexicon, Lexicon};
    use crate::category::CategoryRegistry;

    #[test]
    fn every_candidate_word_has_at_least_one_definition() {
        let registry = CategoryRegistry::new();
        let lexicon = BuiltinLexicon::new();

        for category in registry.categories() {
            for word in registry.words_in(category).unwrap() {
                let definitions = lexicon.definitions_of(word).unwrap();
                assert!(
                    !definitions.is_empty(),
                    "missing definition for '{word}' in category '{category}'"
                );
            }
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let lexicon = BuiltinLexicon::new();

        let definitions = lexicon.definitions_of(" DOG ").unwrap();

        assert_eq!(definitions.len(), 2);
    }

    #[test]
    fn unknown_words_have_no_definitions() {
        let lexicon = BuiltinLexicon::new();

        assert!(lexicon.definitions_of("zyzzyva").unwrap().is_empty());
    }
}
