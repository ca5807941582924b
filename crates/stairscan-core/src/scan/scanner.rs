use tracing::debug;

use crate::chart::{Row, RowKind, StepCode};
use crate::config::ResyncPolicy;

use super::buffer::PatternBuffer;
use super::context::SectionContext;
use super::matcher::MatchEvent;

/// What a single line did to the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// No chart has started yet; only headers were recorded.
    Inactive,
    /// `//` line closed the current chart.
    SectionEnd,
    /// `,` line advanced the measure counter.
    MeasureEnd,
    /// The step extended a staircase prefix.
    Extended,
    /// Hold tail right after a step: the run carries on untouched.
    JumpContinued,
    /// The row broke the run and emptied the buffer.
    Broken,
    /// The step left the staircase path and the buffer was trimmed.
    Resynced,
    /// The step completed a staircase.
    Matched(MatchEvent),
}

/// Line-by-line double staircase detector.
///
/// ## Pattern buffer transitions
///
/// For every row of an active chart:
/// - Single step: appended to the buffer
/// - Hold/roll tail following a single-step line, with a run in progress:
///   skipped, the buffer is left as is
/// - Anything else: the buffer is emptied
///
/// After an append the buffer is trimmed if it no longer leads to a
/// staircase; otherwise a full eight steps is reported and the buffer
/// starts over.
#[derive(Debug, Clone)]
pub struct StairScanner {
    context: SectionContext,
    buffer: PatternBuffer,
    /// Step on the previous line, whatever kind of line it was.
    previous_step: Option<StepCode>,
    resync: ResyncPolicy,
    lines: usize,
}

impl StairScanner {
    pub fn new(resync: ResyncPolicy) -> Self {
        Self {
            context: SectionContext::new(),
            buffer: PatternBuffer::new(),
            previous_step: None,
            resync,
            lines: 0,
        }
    }

    /// Feed one line (without its terminator), returning a completed
    /// staircase if this line finished one.
    pub fn feed(&mut self, line: &str) -> Option<MatchEvent> {
        match self.process(line) {
            RowOutcome::Matched(event) => Some(event),
            _ => None,
        }
    }

    /// Feed one line and report exactly what it did.
    pub fn process(&mut self, line: &str) -> RowOutcome {
        self.lines += 1;
        let row = Row::new(line);
        let outcome = self.process_row(&row);
        self.previous_step = row.step();
        outcome
    }

    fn process_row(&mut self, row: &Row<'_>) -> RowOutcome {
        self.context.observe(row);
        if row.starts_chart() {
            self.context.activate();
        }
        if !self.context.is_active() {
            return RowOutcome::Inactive;
        }

        match row.kind() {
            RowKind::SectionBoundary => {
                self.context.reset();
                self.buffer.clear();
                RowOutcome::SectionEnd
            }
            RowKind::MeasureSeparator => {
                self.context.next_measure();
                RowOutcome::MeasureEnd
            }
            RowKind::Step(code) => {
                self.buffer.push(code);
                self.settle()
            }
            RowKind::Jump if self.previous_step.is_some() && !self.buffer.is_empty() => {
                RowOutcome::JumpContinued
            }
            RowKind::Jump | RowKind::Other => {
                self.buffer.clear();
                RowOutcome::Broken
            }
        }
    }

    fn settle(&mut self) -> RowOutcome {
        if !self.buffer.is_staircase_prefix() {
            self.buffer.resync(self.resync);
            return RowOutcome::Resynced;
        }

        match self.buffer.take_match() {
            Some(pattern) => {
                let event = MatchEvent::new(pattern, &self.context, self.lines);
                debug!(
                    "{} found ending in measure {} (line {})",
                    event.pattern, event.measure, event.line
                );
                RowOutcome::Matched(event)
            }
            None => RowOutcome::Extended,
        }
    }

    pub fn context(&self) -> &SectionContext {
        &self.context
    }

    pub fn buffer(&self) -> &PatternBuffer {
        &self.buffer
    }

    pub fn resync_policy(&self) -> ResyncPolicy {
        self.resync
    }

    /// Number of lines fed so far.
    pub fn lines_read(&self) -> usize {
        self.lines
    }
}

impl Default for StairScanner {
    fn default() -> Self {
        Self::new(ResyncPolicy::default())
    }
}
