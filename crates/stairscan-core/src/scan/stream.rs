use serde::Serialize;

use crate::config::ResyncPolicy;

use super::matcher::MatchEvent;
use super::scanner::StairScanner;

/// Totals reported once a chart has been read to the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScanSummary {
    pub lines: usize,
    pub matches: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    Match(MatchEvent),
    /// Always the last event of a scan.
    Complete(ScanSummary),
}

/// Lazy scan over a whole chart text.
///
/// Yields every staircase in the order it completes, then one
/// [`ScanEvent::Complete`], then nothing.
#[derive(Debug)]
pub struct ChartScan {
    text: String,
    cursor: usize,
    scanner: StairScanner,
    matches: usize,
    finished: bool,
}

impl ChartScan {
    pub fn new(text: impl Into<String>, resync: ResyncPolicy) -> Self {
        Self {
            text: text.into(),
            cursor: 0,
            scanner: StairScanner::new(resync),
            matches: 0,
            finished: false,
        }
    }

    /// Drain only the matches, dropping the completion marker.
    pub fn matches(self) -> impl Iterator<Item = MatchEvent> {
        self.filter_map(|event| match event {
            ScanEvent::Match(event) => Some(event),
            ScanEvent::Complete(_) => None,
        })
    }

    pub fn scanner(&self) -> &StairScanner {
        &self.scanner
    }

    fn summary(&self) -> ScanSummary {
        ScanSummary {
            lines: self.scanner.lines_read(),
            matches: self.matches,
        }
    }
}

impl Iterator for ChartScan {
    type Item = ScanEvent;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.text.len() {
            let rest = &self.text[self.cursor..];
            let (line, consumed) = match rest.find('\n') {
                Some(end) => (&rest[..end], end + 1),
                None => (rest, rest.len()),
            };
            self.cursor += consumed;

            let line = line.strip_suffix('\r').unwrap_or(line);
            if let Some(event) = self.scanner.feed(line) {
                self.matches += 1;
                return Some(ScanEvent::Match(event));
            }
        }

        if self.finished {
            return None;
        }
        self.finished = true;
        Some(ScanEvent::Complete(self.summary()))
    }
}

impl std::iter::FusedIterator for ChartScan {}
