pub mod calendar_picker;
pub mod contact_picker;
pub mod currency_input;
pub mod date_picker;
pub mod location_input;
pub mod notes_input;
pub mod option_picker;
pub mod recurrence_editor;
pub mod stepper;
pub mod text_input;
pub mod time_picker;
pub mod wheel;

pub use calendar_picker::CalendarPicker;
pub use contact_picker::ContactPicker;
pub use currency_input::CurrencyInput;
pub use date_picker::{DateColumn, DatePicker};
pub use location_input::LocationInput;
pub use notes_input::NotesInput;
pub use option_picker::OptionPicker;
pub use recurrence_editor::RecurrenceEditor;
pub use stepper::Stepper;
pub use text_input::SmartTextInput;
pub use time_picker::{TimeColumn, TimePicker};
pub use wheel::WheelRow;
