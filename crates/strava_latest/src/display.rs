//! Console rendering of lookup results.

use std::io::{self, Write};

use chrono::TimeZone;
use colored::Colorize;
use strava_client::{Activity, ActivityType, StravaError, utils::format_short_date};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━";

/// Print the activity summary block. Dates are shown in `tz`; an unparsable
/// `start_date` is printed verbatim.
pub fn render_activity<Tz, W>(activity: &Activity, tz: &Tz, out: &mut W) -> io::Result<()>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
    W: Write,
{
    let date = format_short_date(&activity.start_date, tz)
        .unwrap_or_else(|| activity.start_date.clone());
    writeln!(out, "\n{}", "🏃‍♂️ Activity Details:".green())?;
    writeln!(out, "{}", RULE.cyan())?;
    writeln!(out, "{} {}", "Type:".yellow(), activity.kind)?;
    writeln!(out, "{} {}", "Name:".yellow(), activity.name)?;
    writeln!(out, "{} {}", "Date:".yellow(), date)?;
    writeln!(out, "{}\n", RULE.cyan())
}

pub fn render_not_found<W: Write>(activity_type: ActivityType, out: &mut W) -> io::Result<()> {
    let msg = format!("No {activity_type} found in your recent activities.");
    writeln!(out, "{}", msg.red())
}

/// One stderr line per non-fatal lookup failure, prefixed by its kind.
pub fn render_failure<W: Write>(err: &StravaError, out: &mut W) -> io::Result<()> {
    match err {
        StravaError::Response { status, body } => {
            writeln!(out, "{} status {} {}", "Response Error:".red(), status, body)
        }
        StravaError::Request(msg) => writeln!(out, "{} {}", "Request Error:".red(), msg),
        other => writeln!(out, "{} {}", "Error:".red(), other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn plain(buf: Vec<u8>) -> String {
        String::from_utf8(buf).expect("utf8")
    }

    fn sample() -> Activity {
        Activity {
            kind: "Ride".into(),
            name: "Sunday Loop".into(),
            start_date: "2025-06-08T14:05:00Z".into(),
        }
    }

    #[test]
    fn activity_block_lists_fields() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        render_activity(&sample(), &Utc, &mut buf).unwrap();
        let text = plain(buf);
        assert!(text.starts_with("\n🏃‍♂️ Activity Details:\n"));
        assert!(text.ends_with(&format!("{RULE}\n\n")));
        assert!(text.contains("Type: Ride"));
        assert!(text.contains("Name: Sunday Loop"));
        assert!(text.contains("Date: 6/8/2025"));
        assert_eq!(text.matches(RULE).count(), 2);
    }

    #[test]
    fn activity_block_falls_back_to_raw_date() {
        colored::control::set_override(false);
        let mut a = sample();
        a.start_date = "yesterday".into();
        let mut buf = Vec::new();
        render_activity(&a, &Utc, &mut buf).unwrap();
        assert!(plain(buf).contains("Date: yesterday"));
    }

    #[test]
    fn not_found_names_type() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        render_not_found(ActivityType::WeightTraining, &mut buf).unwrap();
        assert_eq!(
            plain(buf),
            "No WeightTraining found in your recent activities.\n"
        );
    }

    #[test]
    fn failures_are_distinguishable() {
        colored::control::set_override(false);
        let cases = [
            (
                StravaError::Response {
                    status: 500,
                    body: "oops".into(),
                },
                "Response Error: status 500 oops",
            ),
            (
                StravaError::Request("connection refused".into()),
                "Request Error: connection refused",
            ),
            (
                StravaError::Config("bad".into()),
                "Error: configuration error: bad",
            ),
        ];
        for (err, expected) in cases {
            let mut buf = Vec::new();
            render_failure(&err, &mut buf).unwrap();
            assert_eq!(plain(buf).trim_end(), expected);
        }
    }
}
