use crate::calc::Coordinates;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Location {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

impl Location {
    pub fn new(name: &str, address: &str, lat: f64, lng: f64) -> Self {
        Location {
            name: name.to_string(),
            address: Some(address.to_string()),
            lat: Some(lat),
            lng: Some(lng),
        }
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        Some(Coordinates::new(self.lat?, self.lng?))
    }

    /// A cleared selection is represented by an empty name.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// The device position offered as a one-tap location.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CurrentPosition {
    pub city: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
}

impl CurrentPosition {
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }

    pub fn to_location(&self) -> Location {
        Location {
            name: self.display_name(),
            address: None,
            lat: Some(self.lat),
            lng: Some(self.lng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_need_both_axes() {
        let mut loc = Location::new("Roland-Garros", "2 Av. Gordon Bennett, Paris", 48.846, 2.253);
        assert!(loc.coordinates().is_some());
        loc.lng = None;
        assert!(loc.coordinates().is_none());
    }

    #[test]
    fn test_current_position_name() {
        let pos = CurrentPosition {
            city: "Nice".to_string(),
            country: "France".to_string(),
            lat: 43.7,
            lng: 7.26,
        };
        assert_eq!(pos.display_name(), "Nice, France");
        assert_eq!(pos.to_location().name, "Nice, France");
        assert!(pos.to_location().address.is_none());
    }

    #[test]
    fn test_optional_fields_skipped_in_json() {
        let loc = Location {
            name: "Club".to_string(),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&loc).unwrap(), r#"{"name":"Club"}"#);
    }
}
