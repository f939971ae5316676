use std::collections::HashMap;

use crate::error::Error;

/// Trims and lowercases user-provided text so that category and word lookups
/// are case-insensitive. Every comparison in the game goes through this.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "animal",
        &[
            "Dog", "Cat", "Elephant", "Lion", "Tiger", "Cow", "Monkey", "Rabbit", "Horse", "Goat",
        ],
    ),
    (
        "bird",
        &[
            "Sparrow",
            "Pigeon",
            "Parrot",
            "Crow",
            "Peacock",
            "Duck",
            "Owl",
            "Eagle",
            "Penguin",
            "Woodpecker",
        ],
    ),
    (
        "vehicle",
        &[
            "Car",
            "Bus",
            "Bicycle",
            "Train",
            "Aeroplane",
            "Boat",
            "Motorcycle",
            "Truck",
            "Boat",
            "Ship",
        ],
    ),
    (
        "fruit",
        &[
            "Apple",
            "Banana",
            "Mango",
            "Orange",
            "Grapes",
            "Pineapple",
            "Watermelon",
            "Strawberry",
            "Pomegranate",
            "Kiwi",
        ],
    ),
    (
        "vegetable",
        &[
            "Potato",
            "Tomato",
            "Carrot",
            "Onion",
            "Spinach",
            "Cucumber",
            "Peas",
            "Broccoli",
            "Brinjal",
            "Ladies Finger",
        ],
    ),
    (
        "clothes",
        &[
            "Shirt", "Pants", "Dress", "Hat", "Shoes", "Socks", "Jacket", "Scarf", "Gloves",
            "Belt",
        ],
    ),
    (
        "weather",
        &[
            "Rainy",
            "Snow",
            "Sunny",
            "Windy",
            "Cloudy",
            "Storm",
            "Hail",
            "Fog",
            "Rainbow",
            "Lightning",
        ],
    ),
    (
        "jobs",
        &[
            "Doctor",
            "Teacher",
            "Farmer",
            "Pilot",
            "Chef",
            "Police",
            "Artist",
            "Scientist",
            "Driver",
            "Firefighter",
        ],
    ),
    (
        "sports",
        &[
            "Football",
            "Cricket",
            "Tennis",
            "Basketball",
            "Hockey",
            "Badminton",
            "Swimming",
            "Volleyball",
            "Baseball",
            "Cycling",
        ],
    ),
    (
        "insects",
        &[
            "Ant",
            "Bee",
            "Butterfly",
            "Spider",
            "Mosquito",
            "Cockroach",
            "Grasshopper",
            "Beetle",
            "Ladybug",
            "Fly",
        ],
    ),
];

/// Static mapping from category id to its candidate words. Built once at
/// startup and read-only afterwards.
pub struct CategoryRegistry {
    categories: HashMap<String, Vec<String>>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        let categories = CATEGORIES
            .iter()
            .map(|(id, words)| {
                (
                    id.to_string(),
                    words.iter().map(|word| word.to_string()).collect(),
                )
            })
            .collect();
        Self { categories }
    }

    pub fn categories(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.categories.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn words_in(&self, category: &str) -> Result<&[String], Error> {
        let id = normalize(category);
        self.categories
            .get(&id)
            .map(Vec::as_slice)
            .ok_or(Error::UnknownCategory(id))
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
