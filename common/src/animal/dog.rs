use tracing::trace;

use super::{Animal, Speak};

/// An [`Animal`] with a breed.
///
/// The base record is owned, not copied field by field, so everything an
/// `Animal` carries is carried by the `Dog` as well.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Dog {
    base: Animal,
    breed: String,
}

impl Dog {
    /// Builds the base [`Animal`] first, then attaches the breed.
    pub fn new(name: impl Into<String>, breed: impl Into<String>) -> Self {
        let base = Animal::new(name);
        Self::extend(base, breed)
    }

    /// Second construction phase: specializes an already initialized
    /// `Animal` into a `Dog`.
    pub fn extend(base: Animal, breed: impl Into<String>) -> Self {
        let breed = breed.into();
        trace!(name = %base.name(), breed = %breed, "dog initialized");
        Self { base, breed }
    }

    pub fn name(&self) -> &str {
        self.base.name()
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    pub fn as_animal(&self) -> &Animal {
        &self.base
    }

    /// Drops the breed and gives back the base record.
    pub fn into_animal(self) -> Animal {
        self.base
    }
}

impl AsRef<Animal> for Dog {
    fn as_ref(&self) -> &Animal {
        &self.base
    }
}

impl Speak for Dog {
    fn kind(&self) -> &'static str {
        "dog"
    }

    fn phrase(&self) -> String {
        format!("{}, the {}, barks.", self.name(), self.breed)
    }
}
