//! Animal — the one stateful record in the system.
//!
//! An animal carries a name, a species, and an age in whole years. The age
//! is the only mutable field and only ever moves forward, one birthday at a
//! time.

use serde::{Deserialize, Serialize};

/// A named animal of a given species and age.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub name: String,
    pub species: String,
    /// Age in whole years. Never decreases.
    pub age: u32,
}

impl Animal {
    /// Create an animal from its three fields.
    #[must_use]
    pub fn new(name: impl Into<String>, species: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            species: species.into(),
            age,
        }
    }

    /// One-line description of the animal.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("{} is a {}-year-old {}.", self.name, self.age, self.species)
    }

    /// Advance the age by one year and return the birthday notification
    /// for the caller to surface.
    pub fn celebrate_birthday(&mut self) -> String {
        self.age += 1;
        format!(
            "Happy birthday to {}! They are now {} years old.",
            self.name, self.age
        )
    }
}

impl std::fmt::Display for Animal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
