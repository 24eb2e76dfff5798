//! CLI binary for garden_advice.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};
use garden_advice::{
    AdviceError, Clock, Hemisphere, MONTH_PROMPT, MonthInput, Report, Resolver, SystemClock, UnknownMonthPolicy,
    season_calendar,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Seasonal gardening tips for a month and hemisphere.
#[derive(Parser)]
#[command(name = "garden-advice", version, about)]
struct Cli {
    /// Reject unrecognized month names instead of falling back to Summer
    #[arg(long, global = true)]
    strict: bool,

    /// Subcommand to run (defaults to `ask`)
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Prompt for a month on standard input
    Ask {
        /// Northern or Southern
        #[arg(long, default_value = "Northern")]
        hemisphere: String,
    },

    /// Advice for the current month from the system clock
    Now {
        /// Northern or Southern
        #[arg(long, default_value = "Northern")]
        hemisphere: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Advice for a given month name or number
    Month {
        /// Month name (`march`) or number (`3`)
        #[arg(allow_negative_numbers = true)]
        month: String,
        /// Northern or Southern
        #[arg(long, default_value = "Northern")]
        hemisphere: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the season of every month
    Calendar {
        /// Northern or Southern
        #[arg(long, default_value = "Northern")]
        hemisphere: String,
    },
}

fn main() {
    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("garden_advice=warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    // Every failure is reported on stdout and the process still exits 0.
    if let Err(err) = run(cli, &SystemClock, &mut input, &mut out) {
        let _ = writeln!(out, "{}", error_line(&err));
    }
}

fn error_line(err: &anyhow::Error) -> String {
    format!("Error: {err:#}")
}

fn run(cli: Cli, clock: &impl Clock, input: &mut impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
    let policy = if cli.strict {
        UnknownMonthPolicy::Reject
    } else {
        UnknownMonthPolicy::default()
    };
    let resolver = Resolver::default().with_policy(policy);
    debug!(?policy, "resolver ready");

    match cli.command.unwrap_or(Command::Ask {
        hemisphere: Hemisphere::default().to_string(),
    }) {
        Command::Ask { hemisphere } => run_ask(&resolver, &hemisphere, input, out),
        Command::Now { hemisphere, json } => run_now(&resolver, clock, &hemisphere, json, out),
        Command::Month {
            month,
            hemisphere,
            json,
        } => {
            let hemisphere = parse_hemisphere(&hemisphere)?;
            let month: MonthInput = month.parse()?;
            print_report(&resolver.resolve(&month, hemisphere)?, json, out)
        },
        Command::Calendar { hemisphere } => {
            let hemisphere = parse_hemisphere(&hemisphere)?;
            writeln!(out, "Seasons in the {hemisphere} hemisphere:")?;
            for (month, season) in season_calendar(hemisphere) {
                writeln!(out, "  {:<10} {season}", month.to_string())?;
            }
            Ok(())
        },
    }
}

fn parse_hemisphere(raw: &str) -> Result<Hemisphere, AdviceError> {
    raw.parse()
}

fn run_ask(
    resolver: &Resolver<'_>,
    hemisphere: &str,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let hemisphere = parse_hemisphere(hemisphere)?;

    write!(out, "{MONTH_PROMPT}").context("failed to write prompt")?;
    out.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read month from stdin")?;

    let month: MonthInput = line.parse()?;
    let report = resolver.resolve(&month, hemisphere)?;
    writeln!(out, "{}", report.brief()).context("failed to write report")?;
    Ok(())
}

fn run_now(
    resolver: &Resolver<'_>,
    clock: &impl Clock,
    hemisphere: &str,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let hemisphere = parse_hemisphere(hemisphere)?;
    let month = clock.current_month()?;
    print_report(&resolver.resolve_month(month, hemisphere), json, out)
}

fn print_report(report: &Report, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    if json {
        let encoded = serde_json::to_string_pretty(report).context("failed to encode report")?;
        writeln!(out, "{encoded}")?;
    } else {
        writeln!(out, "{report}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use garden_advice::{FixedClock, Month, get_season_advice, Season};

    /// Parses `args`, runs against `stdin` and a fixed March clock, and
    /// returns what would reach stdout, error line included.
    fn run_cli(args: &[&str], stdin: &str) -> String {
        let cli = Cli::try_parse_from(std::iter::once("garden-advice").chain(args.iter().copied())).unwrap();
        let mut input = stdin.as_bytes();
        let mut out = Vec::new();
        if let Err(err) = run(cli, &FixedClock(Month::March), &mut input, &mut out) {
            writeln!(out, "{}", error_line(&err)).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_interactive_prompt_and_brief() {
        let output = run_cli(&[], "march\n");
        assert_eq!(
            output,
            format!(
                "Which month is it? \nSeason detected: Spring\nTip: {}\n",
                get_season_advice(Season::Spring)
            )
        );
    }

    #[test]
    fn test_interactive_numeric_and_unknown() {
        let output = run_cli(&["ask", "--hemisphere", "southern"], "1\n");
        assert!(output.contains("Season detected: Summer"), "{output}");

        let output = run_cli(&[], "smarch\n");
        assert!(output.contains("Season detected: Summer"), "{output}");
    }

    #[test]
    fn test_interactive_strict_reports_trimmed_name() {
        let output = run_cli(&["--strict"], "smarch\n");
        assert_eq!(
            output,
            "Which month is it? Error: Invalid month: \"smarch\" is not a month name\n"
        );
    }

    #[test]
    fn test_now_with_fixed_clock() {
        let output = run_cli(&["now", "--hemisphere", "Southern"], "");
        assert_eq!(
            output,
            format!(
                "Autumn tip: {}\nMarch is Autumn in the Southern hemisphere.\n",
                get_season_advice(Season::Autumn)
            )
        );
    }

    #[test]
    fn test_now_json() {
        let output = run_cli(&["now", "--json"], "");
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["month"], 3);
        assert_eq!(value["season"], "spring");
        assert_eq!(value["hemisphere"], "northern");
    }

    #[test]
    fn test_errors_become_error_lines() {
        struct TestCase {
            args:     &'static [&'static str],
            expected: &'static str,
        }

        let cases = [
            TestCase {
                args:     &["now", "--hemisphere", "east"],
                expected: "Error: Invalid hemisphere: \"east\" (expected Northern or Southern)\n",
            },
            TestCase {
                args:     &["month", "13"],
                expected: "Error: Invalid month: 13 (must be 1-12)\n",
            },
            TestCase {
                args:     &["month", "-1"],
                expected: "Error: Invalid month: -1 (must be 1-12)\n",
            },
            TestCase {
                args:     &["--strict", "month", "brumaire"],
                expected: "Error: Invalid month: \"brumaire\" is not a month name\n",
            },
            TestCase {
                args:     &["calendar", "--hemisphere", "up"],
                expected: "Error: Invalid hemisphere: \"up\" (expected Northern or Southern)\n",
            },
        ];

        for case in &cases {
            assert_eq!(run_cli(case.args, ""), case.expected, "args {:?}", case.args);
        }
    }

    #[test]
    fn test_month_command() {
        let output = run_cli(&["month", "  July "], "");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("July:"));
        assert_eq!(lines[2], "July is Summer in the Northern hemisphere.");
    }

    #[test]
    fn test_calendar_command() {
        let output = run_cli(&["calendar", "--hemisphere", "s"], "");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "Seasons in the Southern hemisphere:");
        assert_eq!(lines[1], "  January    Summer");
        assert_eq!(lines[7], "  July       Winter");
    }
}
