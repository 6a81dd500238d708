use shared::{Venue, VenueId};
use tracing::debug;

/// Returns a copy of `collection` with the favorite flag of `id` flipped.
///
/// Order and every other record are untouched. An unknown id yields an
/// unchanged copy, so a stale reference from the UI is harmless.
pub fn toggle_favorite(collection: &[Venue], id: &VenueId) -> Vec<Venue> {
    let mut found = false;
    let toggled = collection
        .iter()
        .map(|venue| {
            let mut venue = venue.clone();
            if venue.id == *id {
                venue.is_favorite = !venue.is_favorite;
                found = true;
            }
            venue
        })
        .collect();

    if !found {
        debug!("Ignoring favorite toggle for unknown venue {}", id);
    }
    toggled
}

pub fn favorites(collection: &[Venue]) -> impl Iterator<Item = &Venue> {
    collection.iter().filter(|venue| venue.is_favorite)
}

pub fn favorite_count(collection: &[Venue]) -> usize {
    favorites(collection).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::VenueFixture;

    fn collection() -> Vec<Venue> {
        vec![
            VenueFixture::new("a").build(),
            VenueFixture::new("b").favorite().build(),
            VenueFixture::new("c").build(),
        ]
    }

    #[test]
    fn test_toggle_known_id_flips_only_that_record() {
        let before = collection();
        let after = toggle_favorite(&before, &VenueId::new("a"));

        assert_eq!(after.len(), before.len());
        assert!(after[0].is_favorite);
        assert_eq!(after[1], before[1]);
        assert_eq!(after[2], before[2]);
        let order: Vec<_> = after.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let before = collection();
        let id = VenueId::new("b");
        let after = toggle_favorite(&toggle_favorite(&before, &id), &id);
        assert_eq!(after, before);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let before = collection();
        let after = toggle_favorite(&before, &VenueId::new("missing"));
        assert_eq!(after, before);
    }

    #[test]
    fn test_favorite_count() {
        let venues = collection();
        assert_eq!(favorite_count(&venues), 1);
        let venues = toggle_favorite(&venues, &VenueId::new("c"));
        assert_eq!(favorite_count(&venues), 2);
        assert_eq!(favorites(&[]).count(), 0);
    }
}
