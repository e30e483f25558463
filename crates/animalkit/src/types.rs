//! Core types for AnimalKit

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// An animal the facade knows how to route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Animal {
    Dog,
    Cat,
}

impl Animal {
    /// Every supported animal, in the order they are advertised
    pub const ALL: [Animal; 2] = [Animal::Dog, Animal::Cat];

    /// Canonical lower-case name
    pub fn name(&self) -> &'static str {
        match self {
            Animal::Dog => "dog",
            Animal::Cat => "cat",
        }
    }
}

impl FromStr for Animal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dog" => Ok(Animal::Dog),
            "cat" => Ok(Animal::Cat),
            _ => Err(format!("Unsupported animal: {}", s)),
        }
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the caller asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Picture,
    Fact,
}

impl Resource {
    /// Capitalised plural, used at the start of error messages
    pub fn title(&self) -> &'static str {
        match self {
            Resource::Picture => "Pictures",
            Resource::Fact => "Facts",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Picture => f.write_str("picture"),
            Resource::Fact => f.write_str("fact"),
        }
    }
}

/// Remote fetch target, named in every fetch/parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    DogPicture,
    CatPicture,
    CatFact,
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::DogPicture => f.write_str("dog picture"),
            Subject::CatPicture => f.write_str("cat picture"),
            Subject::CatFact => f.write_str("cat fact"),
        }
    }
}
