use crate::error::FormatError;
use serde::Serialize;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Speeds used for the travel-time estimate: city driving below the threshold,
/// road driving above it.
const CITY_SPEED_KMH: f64 = 40.0;
const ROAD_SPEED_KMH: f64 = 80.0;
const ROAD_THRESHOLD_KM: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Coordinates { lat, lng }
    }

    /// Parses `"lat,lng"` (whitespace tolerated), rejecting out-of-range values.
    pub fn parse(raw: &str) -> Result<Self, FormatError> {
        let malformed = || FormatError::MalformedCoordinates(raw.to_string());
        let (lat, lng) = raw.split_once(',').ok_or_else(malformed)?;
        let lat: f64 = lat.trim().parse().map_err(|_| malformed())?;
        let lng: f64 = lng.trim().parse().map_err(|_| malformed())?;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(malformed());
        }
        Ok(Coordinates { lat, lng })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelEstimate {
    pub distance_km: f64,
    pub duration_minutes: u32,
    pub distance_label: String,
    pub duration_label: String,
}

/// Great-circle distance in kilometres.
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

pub fn estimate_travel(from: Coordinates, to: Coordinates) -> TravelEstimate {
    let distance_km = haversine_km(from, to);
    let speed = if distance_km > ROAD_THRESHOLD_KM {
        ROAD_SPEED_KMH
    } else {
        CITY_SPEED_KMH
    };
    let duration_minutes = (distance_km / speed * 60.0).round() as u32;
    TravelEstimate {
        distance_km,
        duration_minutes,
        distance_label: format_distance(distance_km),
        duration_label: format_duration(duration_minutes),
    }
}

pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{} m", (km * 1000.0).round() as u32)
    } else {
        format!("{km:.1} km")
    }
}

pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes} min");
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins > 0 {
        format!("{hours}h {mins}min")
    } else {
        format!("{hours}h")
    }
}
