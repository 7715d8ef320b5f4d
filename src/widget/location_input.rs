use crate::calc::{estimate_travel, Coordinates, TravelEstimate};
use crate::data::{CurrentPosition, Location};

const MAX_SUGGESTIONS: usize = 5;

/// Location field with a "current position" entry and frequent places.
#[derive(Debug, Clone)]
pub struct LocationInput {
    current: Option<CurrentPosition>,
    places: Vec<Location>,
}

impl LocationInput {
    pub fn new(current: Option<CurrentPosition>, places: Vec<Location>) -> Self {
        LocationInput { current, places }
    }

    pub fn current(&self) -> Option<&CurrentPosition> {
        self.current.as_ref()
    }

    pub fn use_current(&self) -> Option<Location> {
        self.current.as_ref().map(CurrentPosition::to_location)
    }

    /// Whether `location` is the current-position entry.
    pub fn is_current(&self, location: &Location) -> bool {
        self.current
            .as_ref()
            .is_some_and(|c| location.name == c.display_name())
    }

    /// Frequent places whose name or address contains `query`, ignoring case.
    /// An empty query lists the first places.
    pub fn suggestions(&self, query: &str) -> Vec<&Location> {
        let needle = query.trim().to_lowercase();
        self.places
            .iter()
            .filter(|p| {
                needle.is_empty()
                    || p.name.to_lowercase().contains(&needle)
                    || p
                        .address
                        .as_ref()
                        .is_some_and(|a| a.to_lowercase().contains(&needle))
            })
            .take(MAX_SUGGESTIONS)
            .collect()
    }

    /// The cleared value: a location with an empty name.
    pub fn clear(&self) -> Location {
        Location::default()
    }

    pub fn distance_from_current(&self, location: &Location) -> Option<TravelEstimate> {
        let here = self.current.as_ref()?;
        let there = location.coordinates()?;
        Some(estimate_travel(Coordinates::new(here.lat, here.lng), there))
    }
}
