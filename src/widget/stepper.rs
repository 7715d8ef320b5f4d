use crate::data::StepperSettings;

/// Bounded integer counter with `-`/`+` buttons and quick values.
#[derive(Debug, Clone)]
pub struct Stepper {
    min: i32,
    max: i32,
    step: i32,
    quick_values: Vec<i32>,
    unit: Option<String>,
}

impl Stepper {
    pub fn new(settings: &StepperSettings) -> Self {
        Stepper {
            min: settings.min.min(settings.max),
            max: settings.max.max(settings.min),
            step: settings.step.max(1),
            quick_values: settings.quick_values.clone(),
            unit: settings.unit.clone(),
        }
    }

    pub fn can_decrement(&self, value: i32) -> bool {
        value > self.min
    }

    pub fn can_increment(&self, value: i32) -> bool {
        value < self.max
    }

    pub fn increment(&self, value: i32) -> Option<i32> {
        self.can_increment(value)
            .then(|| value.saturating_add(self.step).min(self.max))
    }

    pub fn decrement(&self, value: i32) -> Option<i32> {
        self.can_decrement(value)
            .then(|| value.saturating_sub(self.step).max(self.min))
    }

    /// Quick values that fall inside the bounds.
    pub fn quick_values(&self) -> Vec<i32> {
        self.quick_values
            .iter()
            .copied()
            .filter(|v| (self.min..=self.max).contains(v))
            .collect()
    }

    pub fn select_quick(&self, index: usize) -> Option<i32> {
        self.quick_values().get(index).copied()
    }

    pub fn display(&self, value: i32) -> String {
        match &self.unit {
            Some(unit) => format!("{value} {unit}"),
            None => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stepper(min: i32, max: i32, step: i32) -> Stepper {
        Stepper::new(&StepperSettings {
            min,
            max,
            step,
            quick_values: vec![1, 3, 5, 10, 50],
            unit: None,
        })
    }

    #[test]
    fn test_increment_within_bounds() {
        let s = stepper(0, 10, 3);
        assert_eq!(s.increment(0), Some(3));
        assert_eq!(s.increment(9), Some(10));
        assert_eq!(s.increment(10), None);
    }

    #[test]
    fn test_decrement_within_bounds() {
        let s = stepper(0, 10, 3);
        assert_eq!(s.decrement(5), Some(2));
        assert_eq!(s.decrement(2), Some(0));
        assert_eq!(s.decrement(0), None);
    }

    #[test]
    fn test_quick_values_filtered_by_bounds() {
        let s = stepper(0, 10, 1);
        assert_eq!(s.quick_values(), vec![1, 3, 5, 10]);
        assert_eq!(s.select_quick(2), Some(5));
        assert_eq!(s.select_quick(4), None);
    }

    #[test]
    fn test_display_with_unit() {
        let s = Stepper::new(&StepperSettings {
            unit: Some("matchs".to_string()),
            ..Default::default()
        });
        assert_eq!(s.display(4), "4 matchs");
        assert_eq!(stepper(0, 10, 1).display(4), "4");
    }
}
