use crate::data::OptionEntry;
use crate::widget::wheel::{ScrollEvent, WheelItem, WheelSelector};

/// Single wheel over configured options; emits the option's `value`.
#[derive(Debug, Clone)]
pub struct OptionPicker {
    options: Vec<OptionEntry>,
    wheel: WheelSelector<String>,
}

fn wheel_label(option: &OptionEntry) -> String {
    match &option.icon {
        Some(icon) => format!("{icon} {}", option.label),
        None => option.label.clone(),
    }
}

impl OptionPicker {
    pub fn new(options: Vec<OptionEntry>) -> Self {
        let items = options
            .iter()
            .map(|o| WheelItem::new(wheel_label(o), o.value.clone()))
            .collect();
        OptionPicker {
            options,
            wheel: WheelSelector::new(items),
        }
    }

    pub fn sync(&mut self, value: &str) {
        self.wheel.sync(&value.to_string());
    }

    pub fn handle(&mut self, event: ScrollEvent) -> Option<String> {
        self.wheel.handle(event).value
    }

    pub fn nudge(&mut self, rows: i32) -> Option<String> {
        self.wheel.nudge(rows)
    }

    /// Display label for a stored value, if it is one of the options.
    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }

    pub fn wheel(&self) -> &WheelSelector<String> {
        &self.wheel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surfaces() -> OptionPicker {
        OptionPicker::new(vec![
            OptionEntry::new("Terre battue", "clay", Some("🟠")),
            OptionEntry::new("Dur", "hard", None),
            OptionEntry::new("Gazon", "grass", Some("🟢")),
        ])
    }

    #[test]
    fn test_labels_carry_icons() {
        let p = surfaces();
        let labels: Vec<&str> = p.wheel().items().iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["🟠 Terre battue", "Dur", "🟢 Gazon"]);
    }

    #[test]
    fn test_nudge_emits_value() {
        let mut p = surfaces();
        p.sync("clay");
        assert_eq!(p.nudge(2).as_deref(), Some("grass"));
        assert_eq!(p.label_for("grass"), Some("Gazon"));
    }

    #[test]
    fn test_unknown_value_selects_nothing() {
        let mut p = surfaces();
        p.sync("carpet");
        assert_eq!(p.wheel().selected_index(), None);
        assert_eq!(p.label_for("carpet"), None);
    }

    #[test]
    fn test_no_options_is_inert() {
        let mut p = OptionPicker::new(Vec::new());
        p.sync("clay");
        assert_eq!(p.nudge(1), None);
        assert_eq!(p.handle(ScrollEvent::MomentumEnd { offset: 0.0 }), None);
    }
}
