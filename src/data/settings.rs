use crate::data::location::{CurrentPosition, Location};
use crate::data::persistence::{FileFormat, Persistable};
use crate::data::{Contact, Locale, MinuteRounding};
use serde::{Deserialize, Serialize};
use tracing::warn;

const DEFAULT_MINUTE_STEP: u32 = 5;

/// A labelled value offered on the option wheel.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OptionEntry {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl OptionEntry {
    pub fn new(label: &str, value: &str, icon: Option<&str>) -> Self {
        OptionEntry {
            label: label.to_string(),
            value: value.to_string(),
            icon: icon.map(str::to_string),
        }
    }
}

/// One-tap title offered while the title is empty.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TextTemplate {
    pub emoji: String,
    pub label: String,
}

impl TextTemplate {
    pub fn new(emoji: &str, label: &str) -> Self {
        TextTemplate {
            emoji: emoji.to_string(),
            label: label.to_string(),
        }
    }
}

/// Note skeleton offered while the notes are empty.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NoteTemplate {
    pub emoji: String,
    pub title: String,
    pub content: String,
}

impl NoteTemplate {
    pub fn new(emoji: &str, title: &str, content: &str) -> Self {
        NoteTemplate {
            emoji: emoji.to_string(),
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    pub fn defaults() -> Vec<NoteTemplate> {
        vec![
            NoteTemplate::new("💪", "Points à travailler", "• \n• \n• "),
            NoteTemplate::new("🎯", "Objectifs de la session", "1. \n2. \n3. "),
            NoteTemplate::new(
                "📊",
                "Statistiques du match",
                "Aces: \nDouble fautes: \nPoints gagnants: ",
            ),
        ]
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct StepperSettings {
    pub min: i32,
    pub max: i32,
    pub step: i32,
    pub quick_values: Vec<i32>,
    pub unit: Option<String>,
}

impl Default for StepperSettings {
    fn default() -> Self {
        StepperSettings {
            min: 0,
            max: 100,
            step: 1,
            quick_values: vec![1, 3, 5, 10],
            unit: None,
        }
    }
}

/// Widget configuration, stored as config.yaml. Unknown keys are ignored and
/// missing keys take their defaults.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PickerSettings {
    pub min_year: i32,
    pub max_year: i32,
    pub minute_step: u32,
    pub minute_rounding: MinuteRounding,
    pub end_after_choices: Vec<u32>,
    pub currency: String,
    pub frequent_amounts: Vec<f64>,
    pub stepper: StepperSettings,
    pub options: Vec<OptionEntry>,
    pub staff: Vec<Contact>,
    pub frequent_partners: Vec<Contact>,
    pub current_position: Option<CurrentPosition>,
    pub frequent_places: Vec<Location>,
    /// Known session titles matched while typing.
    pub title_suggestions: Vec<String>,
    pub title_templates: Vec<TextTemplate>,
    pub title_max_length: Option<usize>,
    /// Empty uses the stock note templates.
    pub note_templates: Vec<NoteTemplate>,
    pub locale: Locale,
}

impl Default for PickerSettings {
    fn default() -> Self {
        PickerSettings {
            min_year: 2024,
            max_year: 2030,
            minute_step: DEFAULT_MINUTE_STEP,
            minute_rounding: MinuteRounding::Nearest,
            end_after_choices: vec![5, 10, 20],
            currency: "€".to_string(),
            frequent_amounts: Vec::new(),
            stepper: StepperSettings::default(),
            options: Vec::new(),
            staff: Vec::new(),
            frequent_partners: Vec::new(),
            current_position: None,
            frequent_places: Vec::new(),
            title_suggestions: Vec::new(),
            title_templates: Vec::new(),
            title_max_length: None,
            note_templates: Vec::new(),
            locale: Locale::default(),
        }
    }
}

impl Persistable for PickerSettings {
    fn filename() -> &'static str {
        "config.yaml"
    }
    fn format() -> FileFormat {
        FileFormat::Yaml
    }
}

impl PickerSettings {
    pub fn load_validated() -> anyhow::Result<Self> {
        Ok(Self::load()?.validated())
    }

    /// Repairs values the widgets cannot work with, logging each repair.
    pub fn validated(mut self) -> Self {
        if self.minute_step == 0 || 60 % self.minute_step != 0 {
            warn!(
                step = self.minute_step,
                "minute_step must divide 60, using {DEFAULT_MINUTE_STEP}"
            );
            self.minute_step = DEFAULT_MINUTE_STEP;
        }
        if self.min_year > self.max_year {
            warn!(
                min = self.min_year,
                max = self.max_year,
                "min_year above max_year, swapping"
            );
            std::mem::swap(&mut self.min_year, &mut self.max_year);
        }
        if self.stepper.step <= 0 {
            warn!(step = self.stepper.step, "stepper step must be positive, using 1");
            self.stepper.step = 1;
        }
        if self.stepper.min > self.stepper.max {
            warn!("stepper min above max, swapping");
            std::mem::swap(&mut self.stepper.min, &mut self.stepper.max);
        }
        self.end_after_choices.retain(|n| *n > 0);
        if self.title_max_length == Some(0) {
            warn!("title_max_length of 0 ignored");
            self.title_max_length = None;
        }
        self
    }
}
