//! Orchestration for `listflip run`: select challenges, evaluate, render.

use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use tracing::debug;

use crate::core::challenge::{Challenge, Outcome, Transform, find_challenge};
use crate::io::config::OutputFormat;

/// Evaluated challenge, ready for printing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChallengeReport {
    pub name: String,
    pub transform: Transform,
    pub outcomes: Vec<Outcome>,
}

/// Pick the challenges named in `names`, in the order given.
///
/// An empty `names` selects every challenge.
pub fn select_challenges(challenges: Vec<Challenge>, names: &[String]) -> Result<Vec<Challenge>> {
    if names.is_empty() {
        return Ok(challenges);
    }
    names
        .iter()
        .map(|name| {
            find_challenge(&challenges, name).cloned().ok_or_else(|| {
                let available: Vec<&str> = challenges.iter().map(|c| c.name.as_str()).collect();
                anyhow!(
                    "unknown challenge '{name}' (available: {})",
                    available.join(", ")
                )
            })
        })
        .collect()
}

/// Evaluate every challenge in order.
pub fn evaluate_all(challenges: &[Challenge]) -> Result<Vec<ChallengeReport>> {
    challenges
        .iter()
        .map(|challenge| {
            debug!(
                challenge = %challenge.name,
                transform = %challenge.transform,
                invocations = challenge.invocations.len(),
                "evaluating"
            );
            let outcomes = challenge
                .evaluate()
                .with_context(|| format!("evaluate {}", challenge.name))?;
            Ok(ChallengeReport {
                name: challenge.name.clone(),
                transform: challenge.transform,
                outcomes,
            })
        })
        .collect()
}

/// Render reports in the requested format, newline-terminated.
pub fn render(reports: &[ChallengeReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(reports)),
        OutputFormat::Json => render_json(reports),
    }
}

/// One line per invocation; a `# name` header per block when several
/// challenges are printed.
pub fn render_text(reports: &[ChallengeReport]) -> String {
    let headers = reports.len() > 1;
    let mut out = String::new();
    for report in reports {
        if headers {
            out.push_str("# ");
            out.push_str(&report.name);
            out.push('\n');
        }
        for outcome in &report.outcomes {
            out.push_str(&outcome.answer);
            out.push('\n');
        }
    }
    out
}

/// One JSON object per line.
pub fn render_json(reports: &[ChallengeReport]) -> Result<String> {
    let mut out = String::new();
    for report in reports {
        out.push_str(&serde_json::to_string(report).context("serialize report json")?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::challenge::builtin_challenges;

    fn reports(names: &[&str]) -> Vec<ChallengeReport> {
        let names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        let selected =
            select_challenges(builtin_challenges().expect("builtins"), &names).expect("select");
        evaluate_all(&selected).expect("evaluate")
    }

    #[test]
    fn single_challenge_prints_four_lines() {
        let text = render_text(&reports(&["boolean_list_test"]));
        assert_eq!(text, "[False, False]\n[True]\n[False]\n[]\n");

        let text = render_text(&reports(&["string_array_test"]));
        assert_eq!(text, "['THIS', 'IS']\n['A']\n['TEST']\n[]\n");
    }

    #[test]
    fn several_challenges_get_headers() {
        let text = render_text(&reports(&[]));
        assert!(text.starts_with("# boolean_list_test\n[False, False]\n"));
        assert!(text.contains("# string_array_test\n['THIS', 'IS']\n"));
    }

    #[test]
    fn selection_keeps_requested_order() {
        let reports = reports(&["string_array_test", "boolean_list_test"]);
        let names: Vec<&str> = reports.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["string_array_test", "boolean_list_test"]);
    }

    #[test]
    fn unknown_name_lists_available() {
        let err = select_challenges(
            builtin_challenges().expect("builtins"),
            &["nope".to_string()],
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unknown challenge 'nope'"));
        assert!(message.contains("boolean_list_test, string_array_test"));
    }

    #[test]
    fn json_has_one_object_per_challenge() {
        let json = render_json(&reports(&["boolean_list_test"])).expect("json");
        let value: serde_json::Value = serde_json::from_str(json.trim()).expect("parse");
        assert_eq!(value["name"], "boolean_list_test");
        assert_eq!(value["transform"], "bools");
        assert_eq!(value["outcomes"][0]["invocation"], "flip([True, True])");
        assert_eq!(value["outcomes"][0]["answer"], "[False, False]");
        assert_eq!(value["outcomes"][0]["result"], serde_json::json!([false, false]));
    }
}
