//! Output formatting for run results

use crate::runner::ExampleOutcome;
use aoc_solver::SolveResult;
use chrono::TimeDelta;

/// Output formatter for solve and example results
pub struct OutputFormatter {
    start_time: std::time::Instant,
}

impl OutputFormatter {
    pub fn new() -> Self {
        Self {
            start_time: std::time::Instant::now(),
        }
    }

    /// Print the answer of a real-input run
    pub fn print_result(&self, result: &SolveResult) {
        println!("{}", format_result(result));
    }

    /// Print one example outcome
    pub fn print_example(&self, outcome: &ExampleOutcome) {
        println!("{}", format_example(outcome));
    }

    /// Print a summary after all examples
    pub fn print_summary(&self, outcomes: &[ExampleOutcome]) {
        let total_solve_time: TimeDelta = outcomes.iter().map(|o| o.duration).sum();

        println!();
        println!("{}", format_summary(outcomes));
        println!(
            "Total solve time: {}, elapsed: {}",
            format_duration(total_solve_time),
            format_std_duration(self.start_time.elapsed())
        );
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn format_result(result: &SolveResult) -> String {
    format!(
        "Day {:02} Part {}: {} (solve: {})",
        result.day,
        result.part,
        result.answer,
        format_duration(result.duration())
    )
}

fn format_example(outcome: &ExampleOutcome) -> String {
    let prefix = format!("Example {:02} (part {})", outcome.index, outcome.part);
    let timing = format_duration(outcome.duration);

    if outcome.passed() {
        format!("{}: ✓ {} ({})", prefix, outcome.answer, timing)
    } else {
        format!(
            "{}: ✗ expected {}, got {} ({})",
            prefix, outcome.expected, outcome.answer, timing
        )
    }
}

fn format_summary(outcomes: &[ExampleOutcome]) -> String {
    let passed = outcomes.iter().filter(|o| o.passed()).count();
    format!(
        "Examples: {} passed, {} failed",
        passed,
        outcomes.len() - passed
    )
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    format_duration(TimeDelta::from_std(d).unwrap_or(TimeDelta::MAX))
}
