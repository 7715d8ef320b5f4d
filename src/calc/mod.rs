pub mod calendar;
pub mod distance;

pub use calendar::{days_in_month, month_cells, shift_month};
pub use distance::{estimate_travel, Coordinates, TravelEstimate};
