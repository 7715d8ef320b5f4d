pub mod contact;
pub mod date_value;
pub mod draft;
pub mod locale;
pub mod location;
pub mod persistence;
pub mod recurrence;
pub mod settings;
pub mod time_value;

pub use contact::Contact;
pub use date_value::DateValue;
pub use draft::FormDraft;
pub use locale::Locale;
pub use location::{CurrentPosition, Location};
pub use persistence::Persistable;
pub use recurrence::{RecurrenceEnd, RecurrenceKind, RecurrenceRule};
pub use settings::{NoteTemplate, OptionEntry, PickerSettings, StepperSettings, TextTemplate};
pub use time_value::{MinuteRounding, TimeValue};
