use crate::data::{
    Contact, CurrentPosition, FormDraft, Location, NoteTemplate, OptionEntry, Persistable,
    PickerSettings, StepperSettings, TextTemplate,
};
use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::info;

pub fn run() -> Result<()> {
    let dir = crate::data::persistence::get_data_dir()?;
    fs::create_dir_all(&dir)?;
    run_in_dir(&dir)?;
    println!("Data files initialized in {}.", dir.display());
    Ok(())
}

/// Writes config.yaml with the sample club setup and an empty draft.json into `dir`.
pub(crate) fn run_in_dir(dir: &Path) -> Result<()> {
    sample_settings().save_to(dir)?;
    FormDraft::default().save_to(dir)?;
    info!(dir = %dir.display(), "data directory initialized");
    Ok(())
}

/// Stock settings plus a small tennis club: surfaces, coaching staff, partners,
/// the club's usual courts and a home position.
pub(crate) fn sample_settings() -> PickerSettings {
    PickerSettings {
        minute_step: 15,
        frequent_amounts: vec![15.0, 25.0, 40.0, 60.0],
        stepper: StepperSettings {
            min: 0,
            max: 20,
            step: 1,
            quick_values: vec![1, 3, 5, 10],
            unit: Some("matchs".to_string()),
        },
        options: vec![
            OptionEntry::new("Terre battue", "clay", Some("🟠")),
            OptionEntry::new("Dur", "hard", Some("🔵")),
            OptionEntry::new("Gazon", "grass", Some("🟢")),
            OptionEntry::new("Moquette", "carpet", None),
            OptionEntry::new("Indoor", "indoor", Some("🏠")),
        ],
        staff: vec![
            Contact::new("staff-1", "Marie Dupont", Some("Entraîneuse")),
            Contact::new("staff-2", "Karim Benali", Some("Préparateur physique")),
            Contact::new("staff-3", "Sophie Laurent", Some("Kiné")),
        ],
        frequent_partners: vec![
            Contact::new("partner-1", "Lucas Martin", None),
            Contact::new("partner-2", "Emma Petit", None),
        ],
        current_position: Some(CurrentPosition {
            city: "Paris".to_string(),
            country: "France".to_string(),
            lat: 48.8566,
            lng: 2.3522,
        }),
        frequent_places: vec![
            Location::new(
                "Stade Roland-Garros",
                "2 Av. Gordon Bennett, 75016 Paris",
                48.8470,
                2.2497,
            ),
            Location::new(
                "Tennis Club de Paris",
                "91 Rue Louis Armand, 75015 Paris",
                48.8325,
                2.2771,
            ),
            Location::new(
                "Monte-Carlo Country Club",
                "155 Av. Princesse Grace, Roquebrune-Cap-Martin",
                43.7515,
                7.4400,
            ),
            Location::new("TC Lyon", "Lyon", 45.7640, 4.8357),
        ],
        title_suggestions: [
            "Entraînement service",
            "Entraînement fond de court",
            "Match amical",
            "Match de tournoi",
            "Séance physique",
            "Travail au filet",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        title_templates: vec![
            TextTemplate::new("🎾", "Entraînement"),
            TextTemplate::new("🏆", "Match de tournoi"),
            TextTemplate::new("💪", "Séance physique"),
        ],
        title_max_length: Some(60),
        note_templates: NoteTemplate::defaults(),
        ..PickerSettings::default()
    }
}
