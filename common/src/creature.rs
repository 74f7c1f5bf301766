//! # Creature Descriptor
//!
//! Text description of something to construct, as typed on the command line:
//! * `NAME` or `animal:NAME` for a plain [`Animal`].
//! * `dog:NAME:BREED` for a [`Dog`].
//! * `dog:NAME` for a [`Dog`] with an empty breed.

use std::str::FromStr;

use crate::animal::{Animal, Dog, Speak};
use crate::error::KennelError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Creature {
    Animal { name: String },
    Dog { name: String, breed: String },
}

impl Creature {
    /// Constructs the described creature behind the [`Speak`] capability.
    pub fn summon(self) -> Box<dyn Speak + Send + Sync> {
        match self {
            Creature::Animal { name } => Box::new(Animal::new(name)),
            Creature::Dog { name, breed } => Box::new(Dog::new(name, breed)),
        }
    }
}

impl FromStr for Creature {
    type Err = KennelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((species, rest)) = s.split_once(':') else {
            return Ok(Creature::Animal { name: s.to_string() });
        };

        match species.to_ascii_lowercase().as_str() {
            "" => Err(KennelError::EmptySpecies(s.to_string())),
            "animal" => Ok(Creature::Animal { name: rest.to_string() }),
            "dog" => {
                let (name, breed) = rest.split_once(':').unwrap_or((rest, ""));
                Ok(Creature::Dog {
                    name: name.to_string(),
                    breed: breed.to_string(),
                })
            }
            _ => Err(KennelError::UnknownSpecies(species.to_string())),
        }
    }
}
