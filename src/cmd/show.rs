use crate::data::{FormDraft, Persistable, PickerSettings};
use crate::format::date::{describe_iso, describe_session};
use crate::format::format_amount;
use crate::widget::contact_picker::counter_text;
use crate::widget::notes_input::summary;
use crate::widget::recurrence_editor::describe;
use crate::widget::{ContactPicker, LocationInput, OptionPicker, Stepper};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::io::{self, Write};

pub fn run() -> Result<()> {
    let settings = PickerSettings::load_validated()?;
    let draft = FormDraft::load()?;
    let mut out = io::stdout().lock();
    write_draft(&mut out, &draft, &settings, Local::now().date_naive())
}

fn or_dash(value: String) -> String {
    if value.is_empty() { "--".to_string() } else { value }
}

/// Prints every field of the saved draft in display form, one per line.
pub(crate) fn write_draft<W: Write>(
    out: &mut W,
    draft: &FormDraft,
    settings: &PickerSettings,
    today: NaiveDate,
) -> Result<()> {
    let locale = &settings.locale;
    let surfaces = OptionPicker::new(settings.options.clone());
    let contacts = ContactPicker::new(
        settings
            .staff
            .iter()
            .chain(&settings.frequent_partners)
            .cloned()
            .collect(),
    );
    let places = LocationInput::new(
        settings.current_position.clone(),
        settings.frequent_places.clone(),
    );
    let stepper = Stepper::new(&settings.stepper);

    writeln!(out, "Tournoi      : {}", or_dash(describe_iso(&draft.tournament_date, locale)))?;
    writeln!(out, "Naissance    : {}", or_dash(draft.birth_date.clone()))?;
    writeln!(out, "Heure        : {}", or_dash(draft.start_time.clone()))?;
    let session = draft
        .session_date
        .map(|d| describe_session(d, draft.recurrence.end_date(), today, locale))
        .unwrap_or_default();
    writeln!(out, "Séance       : {}", or_dash(session))?;
    writeln!(out, "Répétition   : {}", describe(&draft.recurrence, locale))?;
    let surface = surfaces.label_for(&draft.surface).unwrap_or("").to_string();
    writeln!(out, "Surface      : {}", or_dash(surface))?;

    let names: Vec<&str> = contacts
        .selected_contacts(&draft.participants)
        .into_iter()
        .map(|c| c.name.as_str())
        .collect();
    let participants = if names.is_empty() {
        String::new()
    } else {
        format!(
            "{} ({})",
            names.join(", "),
            counter_text(names.len(), locale)
        )
    };
    writeln!(out, "Participants : {}", or_dash(participants))?;

    let location = match draft.location.as_ref().filter(|l| !l.is_empty()) {
        None => String::new(),
        Some(loc) => match places.distance_from_current(loc) {
            Some(est) if !places.is_current(loc) => format!(
                "{} ({}, {})",
                loc.name, est.distance_label, est.duration_label
            ),
            _ => loc.name.clone(),
        },
    };
    writeln!(out, "Lieu         : {}", or_dash(location))?;
    writeln!(out, "Montant      : {}", format_amount(draft.amount, &settings.currency))?;
    writeln!(out, "Matchs       : {}", stepper.display(draft.match_count))?;
    writeln!(out, "Titre        : {}", or_dash(draft.title.clone()))?;
    writeln!(out, "Notes        : {}", or_dash(summary(&draft.notes, locale)))?;
    Ok(())
}
