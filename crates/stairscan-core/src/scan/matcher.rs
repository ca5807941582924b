use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::chart::StepCode::{Down as D, Left as L, Right as R, Up as U};
use crate::chart::{Difficulty, StepCode};

use super::context::SectionContext;

/// The four double staircases: starting foot (left/right) crossed with the
/// direction of the first crossover.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr,
)]
pub enum Staircase {
    #[serde(rename = "LDURLDUR")]
    #[strum(serialize = "LDURLDUR")]
    Ldur,
    #[serde(rename = "LUDRLUDR")]
    #[strum(serialize = "LUDRLUDR")]
    Ludr,
    #[serde(rename = "RUDLRUDL")]
    #[strum(serialize = "RUDLRUDL")]
    Rudl,
    #[serde(rename = "RDULRDUL")]
    #[strum(serialize = "RDULRDUL")]
    Rdul,
}

impl Staircase {
    /// Number of steps in a double staircase.
    pub const LENGTH: usize = 8;

    pub const ALL: [Staircase; 4] = [Self::Ldur, Self::Ludr, Self::Rudl, Self::Rdul];

    pub fn steps(&self) -> &'static [StepCode; Self::LENGTH] {
        match self {
            Self::Ldur => &[L, D, U, R, L, D, U, R],
            Self::Ludr => &[L, U, D, R, L, U, D, R],
            Self::Rudl => &[R, U, D, L, R, U, D, L],
            Self::Rdul => &[R, D, U, L, R, D, U, L],
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Whether `steps` could still grow into some staircase.
    /// The empty sequence is a prefix of every staircase.
    pub fn is_any_prefix(steps: &[StepCode]) -> bool {
        Self::ALL
            .iter()
            .any(|staircase| staircase.steps().starts_with(steps))
    }

    /// The staircase `steps` spells out exactly, if any.
    pub fn exact(steps: &[StepCode]) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|staircase| staircase.steps().as_slice() == steps)
            .copied()
    }
}

impl std::fmt::Display for Staircase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A completed double staircase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub pattern: Staircase,
    pub difficulty: Option<Difficulty>,
    /// Only set for Edit charts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Measure the final step fell in, counted from 0.
    pub measure: u32,
    /// 1-based line of the final step.
    pub line: usize,
}

impl MatchEvent {
    pub fn new(pattern: Staircase, context: &SectionContext, line: usize) -> Self {
        Self {
            pattern,
            difficulty: context.difficulty(),
            description: context.edit_description().map(str::to_string),
            measure: context.measure(),
            line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Row;

    fn codes(s: &str) -> Vec<StepCode> {
        s.chars().filter_map(StepCode::from_char).collect()
    }

    #[test]
    fn test_steps_spell_names() {
        for staircase in Staircase::ALL {
            let spelled: String = staircase.steps().iter().map(StepCode::as_char).collect();
            assert_eq!(spelled, staircase.as_str());
            assert_eq!(staircase.to_string(), staircase.as_str());
        }
    }

    #[test]
    fn test_is_any_prefix() {
        assert!(Staircase::is_any_prefix(&[]));
        assert!(Staircase::is_any_prefix(&codes("L")));
        assert!(Staircase::is_any_prefix(&codes("R")));
        assert!(Staircase::is_any_prefix(&codes("LUD")));
        assert!(Staircase::is_any_prefix(&codes("RDULRDU")));
        assert!(Staircase::is_any_prefix(&codes("LDURLDUR")));
        assert!(!Staircase::is_any_prefix(&codes("D")));
        assert!(!Staircase::is_any_prefix(&codes("LL")));
        assert!(!Staircase::is_any_prefix(&codes("LDURLU")));
        assert!(!Staircase::is_any_prefix(&codes("LDURLDURL")));
    }

    #[test]
    fn test_exact() {
        assert_eq!(Staircase::exact(&codes("RUDLRUDL")), Some(Staircase::Rudl));
        assert_eq!(Staircase::exact(&codes("RUDLRUD")), None);
        assert_eq!(Staircase::exact(&codes("LDURLDUL")), None);
    }

    #[test]
    fn test_event_from_context() {
        let mut context = SectionContext::new();
        context.observe(&Row::new("#DESCRIPTION:My Chart;"));
        context.observe(&Row::new("     Edit:"));
        context.next_measure();

        let event = MatchEvent::new(Staircase::Ludr, &context, 42);
        assert_eq!(event.pattern, Staircase::Ludr);
        assert_eq!(event.difficulty, Some(Difficulty::Edit));
        assert_eq!(event.description.as_deref(), Some("My Chart"));
        assert_eq!(event.measure, 1);
        assert_eq!(event.line, 42);
    }

    #[test]
    fn test_event_serializes_pattern_string() {
        let context = SectionContext::new();
        let event = MatchEvent::new(Staircase::Rdul, &context, 3);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["pattern"], "RDULRDUL");
        assert!(json.get("description").is_none());
    }
}
