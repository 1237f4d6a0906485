//! Console and JSON reporters for conformance runs

use colored::Colorize;
use giniround_analysis::oracle::{Acceptance, RoundResult, Verdict};
use giniround_analysis::{Reporter, Summary};
use serde::Serialize;
use std::io::{self, Write};

/// Human-readable, line-oriented report.
pub struct ConsoleReporter<W: Write> {
    out: W,
    color: bool,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color, error: None }
    }

    /// Surface the first write error, if any, and hand back the writer.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.out),
        }
    }

    fn emit(&mut self, line: String) {
        if self.error.is_none() {
            if let Err(err) = writeln!(self.out, "{line}") {
                self.error = Some(err);
            }
        }
    }

    fn verdict(&self, verdict: Verdict) -> String {
        match (verdict, self.color) {
            (Verdict::Pass, true) => verdict.to_string().green().to_string(),
            (Verdict::Fail, true) => verdict.to_string().red().to_string(),
            (_, false) => verdict.to_string(),
        }
    }

    fn note(&self) -> String {
        if self.color {
            "note:".yellow().to_string()
        } else {
            "note:".to_string()
        }
    }
}

pub fn case_line(index: usize, result: &RoundResult) -> String {
    format!(
        "case {:>2}: input {:>7.2}  actual {:>4}  expected {:>4} (half away from zero)",
        index + 1,
        result.input,
        result.actual,
        result.expected_half_away
    )
}

fn note_text(result: &RoundResult) -> Option<String> {
    if !result.is_half_case {
        return None;
    }
    Some(match result.acceptance {
        Acceptance::AwayFromZero => ".5 case, matched round-half-away-from-zero".to_string(),
        Acceptance::HalfToEven => format!(".5 case, {} is even: accepted as round-half-to-even", result.actual),
        Acceptance::Rejected => format!(".5 case, {} is odd and not away from zero", result.actual),
    })
}

pub fn summary_line(summary: &Summary) -> String {
    if summary.all_passed() {
        format!(
            "all {} cases passed (either tie convention accepted on .5 inputs)",
            summary.total
        )
    } else {
        format!("{} of {} cases failed", summary.failures, summary.total)
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn on_start(&mut self, rounder: &str, total: usize) {
        self.emit(format!("--- rounding conformance: {rounder}, {total} cases ---"));
    }

    fn on_case(&mut self, index: usize, result: &RoundResult) {
        let line = format!("{}  {}", case_line(index, result), self.verdict(result.verdict));
        self.emit(line);
        if let Some(text) = note_text(result) {
            let note = format!("         {} {text}", self.note());
            self.emit(note);
        }
    }

    fn on_summary(&mut self, summary: &Summary) {
        let line = summary_line(summary);
        let line = match (self.color, summary.all_passed()) {
            (true, true) => line.green().to_string(),
            (true, false) => line.red().to_string(),
            (false, _) => line,
        };
        self.emit(line);
    }
}

#[derive(Serialize)]
struct CaseRecord<'a> {
    case: usize,
    #[serde(flatten)]
    result: &'a RoundResult,
}

#[derive(Serialize)]
struct SummaryRecord<'a> {
    summary: &'a Summary,
}

/// One JSON object per line.
pub struct JsonReporter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.out),
        }
    }

    fn emit<T: Serialize>(&mut self, value: &T) {
        if self.error.is_some() {
            return;
        }
        let written = serde_json::to_writer(&mut self.out, value)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(self.out));
        if let Err(err) = written {
            self.error = Some(err);
        }
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn on_case(&mut self, index: usize, result: &RoundResult) {
        self.emit(&CaseRecord { case: index + 1, result });
    }

    fn on_summary(&mut self, summary: &Summary) {
        self.emit(&SummaryRecord { summary });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use giniround_analysis::oracle::assess;
    use giniround_analysis::Harness;
    use giniround_core::{TiesToEven, Truncate};

    fn render(result: &RoundResult) -> String {
        let mut reporter = ConsoleReporter::new(Vec::new(), false);
        reporter.on_case(6, result);
        String::from_utf8(reporter.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_case_line_non_half() {
        insta::assert_snapshot!(
            render(&assess(42.7, 43)).trim_end(),
            @"case  7: input   42.70  actual   43  expected   43 (half away from zero)  PASS"
        );
    }

    #[test]
    fn test_case_line_half_to_even_note() {
        let text = render(&assess(-42.5, -42));
        let mut lines = text.lines();
        assert!(lines.next().unwrap().ends_with("PASS"));
        assert_eq!(
            lines.next().unwrap().trim(),
            "note: .5 case, -42 is even: accepted as round-half-to-even"
        );
    }

    #[test]
    fn test_summary_lines() {
        insta::assert_snapshot!(
            summary_line(&Summary { total: 21, failures: 0 }),
            @"all 21 cases passed (either tie convention accepted on .5 inputs)"
        );
        insta::assert_snapshot!(summary_line(&Summary { total: 21, failures: 8 }), @"8 of 21 cases failed");
    }

    #[test]
    fn test_console_report_for_truncate() {
        let mut reporter = ConsoleReporter::new(Vec::new(), false);
        let summary = Harness::with_inputs([42.7f32, 41.5]).run(&Truncate, &mut reporter);
        let text = String::from_utf8(reporter.finish().unwrap()).unwrap();
        assert_eq!(summary.failures, 2);
        assert!(text.starts_with("--- rounding conformance: truncate, 2 cases ---"));
        assert!(text.contains("41 is odd and not away from zero"));
        assert!(text.trim_end().ends_with("2 of 2 cases failed"));
    }

    #[test]
    fn test_json_report() {
        let mut reporter = JsonReporter::new(Vec::new());
        Harness::with_inputs([42.5f32]).run(&TiesToEven, &mut reporter);
        let text = String::from_utf8(reporter.finish().unwrap()).unwrap();
        let lines: Vec<serde_json::Value> = text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["case"], 1);
        assert_eq!(lines[0]["actual"], 42);
        assert_eq!(lines[0]["expected_half_away"], 43);
        assert_eq!(lines[0]["acceptance"], "half_to_even");
        assert_eq!(lines[0]["verdict"], "pass");
        assert_eq!(lines[1]["summary"]["failures"], 0);
    }
}
