use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::entities::dog::DogId;
use crate::domain::errors::ListingError;

/// Dogs marked as match candidates for the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesSet {
    ids: Vec<DogId>,
}

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the id when absent, removes it when present. Returns whether the
    /// id is a favorite afterwards.
    pub fn toggle(&mut self, id: &DogId) -> bool {
        if let Some(pos) = self.ids.iter().position(|existing| existing == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.clone());
            true
        }
    }

    pub fn has(&self, id: &DogId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DogId> {
        self.ids.iter()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Uniformly picks the single favorite sent to the match endpoint.
    pub fn pick_one_for_match<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&DogId, ListingError> {
        self.ids.choose(rng).ok_or(ListingError::EmptyFavorites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn toggle_is_add_then_remove() {
        let mut favorites = FavoritesSet::new();
        let id = DogId::from("d1");

        assert!(favorites.toggle(&id));
        assert!(favorites.has(&id));
        assert_eq!(favorites.len(), 1);

        assert!(!favorites.toggle(&id));
        assert!(!favorites.has(&id));
        assert!(favorites.is_empty());
    }

    #[test]
    fn pick_on_empty_set_fails() {
        let favorites = FavoritesSet::new();
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(
            favorites.pick_one_for_match(&mut rng),
            Err(ListingError::EmptyFavorites)
        );
    }

    #[test]
    fn pick_always_returns_a_member() {
        let mut favorites = FavoritesSet::new();
        for id in ["a", "b", "c"] {
            favorites.toggle(&DogId::from(id));
        }
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let picked = favorites
                .pick_one_for_match(&mut rng)
                .expect("non-empty set should pick");
            assert!(favorites.has(picked));
        }
    }

    #[test]
    fn pick_is_roughly_uniform_over_two_favorites() {
        let mut favorites = FavoritesSet::new();
        favorites.toggle(&DogId::from("d1"));
        favorites.toggle(&DogId::from("d2"));
        let mut rng = StdRng::seed_from_u64(2024);

        let mut d1_hits = 0;
        for _ in 0..1000 {
            if favorites.pick_one_for_match(&mut rng).expect("should pick").as_ref() == "d1" {
                d1_hits += 1;
            }
        }

        assert!(
            (400..=600).contains(&d1_hits),
            "expected roughly half of picks to be d1, got {d1_hits}"
        );
    }
}
