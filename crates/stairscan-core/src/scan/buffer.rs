use tracing::trace;

use crate::chart::StepCode;
use crate::config::ResyncPolicy;

use super::matcher::Staircase;

/// Steps seen since the last break, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternBuffer {
    steps: Vec<StepCode>,
}

impl PatternBuffer {
    pub fn new() -> Self {
        Self {
            steps: Vec::with_capacity(Staircase::LENGTH),
        }
    }

    pub fn push(&mut self, code: StepCode) {
        self.steps.push(code);
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn as_slice(&self) -> &[StepCode] {
        &self.steps
    }

    pub fn is_staircase_prefix(&self) -> bool {
        Staircase::is_any_prefix(&self.steps)
    }

    /// Take a completed staircase out of the buffer, leaving it empty.
    pub fn take_match(&mut self) -> Option<Staircase> {
        if self.steps.len() != Staircase::LENGTH {
            return None;
        }
        let staircase = Staircase::exact(&self.steps)?;
        self.steps.clear();
        Some(staircase)
    }

    /// Drop steps from the front after the buffer stopped being a staircase
    /// prefix. Does nothing while it still is one.
    pub fn resync(&mut self, policy: ResyncPolicy) {
        if self.is_staircase_prefix() {
            return;
        }

        let before = self.steps.len();
        match policy {
            ResyncPolicy::Compatible => self.resync_compatible(),
            ResyncPolicy::LongestSuffix => self.resync_longest_suffix(),
        }
        trace!(
            "Resynced pattern buffer ({}): {} -> {} steps",
            policy,
            before,
            self.steps.len()
        );
    }

    // The index is not restarted after a cut, so it skips ahead in the
    // shortened buffer.
    fn resync_compatible(&mut self) {
        let mut j = 1;
        while j < self.steps.len() {
            if self.steps[j].is_side() {
                self.steps.drain(..j);
            }
            j += 1;
        }
    }

    fn resync_longest_suffix(&mut self) {
        let start = (1..self.steps.len())
            .find(|&start| Staircase::is_any_prefix(&self.steps[start..]));
        match start {
            Some(start) => {
                self.steps.drain(..start);
            }
            None => self.steps.clear(),
        }
    }
}

impl std::fmt::Display for PatternBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for code in &self.steps {
            write!(f, "{}", code)?;
        }
        Ok(())
    }
}
