use tracing::trace;

use super::Speak;

/// The least specialized creature: a name and a generic noise.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Animal {
    name: String,
}

impl Animal {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        trace!(name = %name, "animal initialized");
        Self { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Speak for Animal {
    fn kind(&self) -> &'static str {
        "animal"
    }

    fn phrase(&self) -> String {
        format!("{} makes a noise.", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_phrase() {
        let animal = Animal::new("Generic");
        assert_eq!(animal.name(), "Generic");
        assert_eq!(animal.phrase(), "Generic makes a noise.");
        assert_eq!(animal.kind(), "animal");
    }

    #[test]
    fn test_default_is_empty_name() {
        let animal = Animal::default();
        assert_eq!(animal.name(), "");
        assert_eq!(animal.phrase(), " makes a noise.");
    }
}
