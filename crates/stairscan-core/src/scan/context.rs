use tracing::debug;

use crate::chart::{Difficulty, Row};

/// Where in the step file the scanner currently is.
///
/// Difficulty and description are picked up from every line, including
/// headers before the note data. The measure counter and the active flag
/// only change once a chart has started.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionContext {
    difficulty: Option<Difficulty>,
    description: Option<String>,
    measure: u32,
    active: bool,
}

impl SectionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record description and difficulty headers found on a line.
    pub fn observe(&mut self, row: &Row<'_>) {
        if let Some(description) = row.description() {
            self.description = Some(description.to_string());
        }
        if let Some(difficulty) = row.difficulty() {
            self.difficulty = Some(difficulty);
        }
    }

    /// Latch the active flag. Stays set until [`SectionContext::reset`].
    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn next_measure(&mut self) {
        self.measure += 1;
    }

    /// Forget everything about the chart that just ended.
    pub fn reset(&mut self) {
        debug!(
            "Chart section ended (difficulty: {:?}, measures: {})",
            self.difficulty, self.measure
        );
        *self = Self::default();
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Description to report alongside a match; only Edit charts have one.
    pub fn edit_description(&self) -> Option<&str> {
        match self.difficulty {
            Some(Difficulty::Edit) => self.description(),
            _ => None,
        }
    }

    pub fn measure(&self) -> u32 {
        self.measure
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observe_headers() {
        let mut context = SectionContext::new();
        context.observe(&Row::new("#DESCRIPTION:My Chart;"));
        context.observe(&Row::new("     Edit:"));

        assert_eq!(context.difficulty(), Some(Difficulty::Edit));
        assert_eq!(context.description(), Some("My Chart"));
        assert_eq!(context.edit_description(), Some("My Chart"));
        assert!(!context.is_active());
    }

    #[test]
    fn test_edit_description_only_for_edit() {
        let mut context = SectionContext::new();
        context.observe(&Row::new("#DESCRIPTION:Someone;"));
        context.observe(&Row::new("     Hard:"));

        assert_eq!(context.description(), Some("Someone"));
        assert_eq!(context.edit_description(), None);
    }

    #[test]
    fn test_later_header_overrides() {
        let mut context = SectionContext::new();
        context.observe(&Row::new("     Easy:"));
        context.observe(&Row::new("     Challenge:"));
        assert_eq!(context.difficulty(), Some(Difficulty::Challenge));

        context.observe(&Row::new("1000"));
        assert_eq!(context.difficulty(), Some(Difficulty::Challenge));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut context = SectionContext::new();
        context.observe(&Row::new("#DESCRIPTION:x;"));
        context.observe(&Row::new("     Medium:"));
        context.activate();
        context.next_measure();
        context.next_measure();
        assert_eq!(context.measure(), 2);

        context.reset();
        assert_eq!(context, SectionContext::default());
        assert_eq!(context.difficulty(), None);
        assert_eq!(context.description(), None);
        assert_eq!(context.measure(), 0);
        assert!(!context.is_active());
    }
}
