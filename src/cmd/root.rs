use crate::data::{FormDraft, Persistable, PickerSettings};
use crate::ui::form_view::{run_app, App};
use crate::ui::{restore_terminal, setup_terminal};
use anyhow::Result;
use chrono::Local;
use tracing::{error, info};

pub fn run() -> Result<()> {
    let settings = PickerSettings::load_validated()?;
    let mut draft = FormDraft::load()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        original_hook(info);
    }));

    let mut terminal = setup_terminal()?;

    let now = Local::now();
    let mut app = App::new(&mut draft, settings, now.date_naive(), now.time());
    let result = run_app(&mut terminal, &mut app);
    drop(app);

    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        error!(error = %e, "form loop failed, saving draft anyway");
    }
    draft.save()?;
    info!("draft saved");

    result
}
