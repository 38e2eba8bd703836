use rand::seq::SliceRandom;
use rand::Rng;

pub const MAX_SUGGESTIONS: usize = 10;

/// Breed names known to the search endpoint, fetched once per session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreedCatalog {
    names: Vec<String>,
}

impl BreedCatalog {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Case-insensitive substring matches, in catalog order.
    pub fn suggest(&self, query: &str) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.names
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .take(MAX_SUGGESTIONS)
            .map(String::as_str)
            .collect()
    }

    pub fn featured<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.names.choose(rng).map(String::as_str)
    }
}
