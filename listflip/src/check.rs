//! Orchestration for `listflip check`: grade one answer.

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info};

use crate::core::answer::{Verdict, check_answer};
use crate::core::challenge::{Challenge, find_challenge};

/// Structured grading outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub challenge: String,
    pub index: usize,
    pub invocation: String,
    pub verdict: Verdict,
}

/// Grade `response` against invocation `index` of challenge `name`.
pub fn check_response(
    challenges: &[Challenge],
    name: &str,
    index: usize,
    response: &str,
) -> Result<CheckOutcome> {
    let challenge =
        find_challenge(challenges, name).ok_or_else(|| anyhow!("unknown challenge '{name}'"))?;
    let outcomes = challenge
        .evaluate()
        .with_context(|| format!("evaluate {name}"))?;
    let outcome = outcomes.get(index).ok_or_else(|| {
        anyhow!(
            "invocation index {index} out of range ({name} has {} invocations)",
            outcomes.len()
        )
    })?;
    debug!(
        challenge = name,
        index,
        response,
        correct_answer = %outcome.answer,
        "comparing response"
    );
    let verdict = check_answer(challenge.transform, response, &outcome.answer);
    info!(challenge = name, index, correct = verdict.correct, "checked answer");
    Ok(CheckOutcome {
        challenge: name.to_string(),
        index,
        invocation: outcome.invocation.clone(),
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::answer::BRACKET_HINT;
    use crate::core::challenge::builtin_challenges;

    #[test]
    fn correct_answer_is_accepted() {
        let challenges = builtin_challenges().expect("builtins");
        let response = r#"["THIS", "IS"]"#;
        let outcome =
            check_response(&challenges, "string_array_test", 0, response).expect("check");
        assert_eq!(outcome.invocation, r#"flip(["this", "is"])"#);
        assert!(outcome.verdict.correct);
    }

    #[test]
    fn wrong_answer_carries_hint() {
        let challenges = builtin_challenges().expect("builtins");
        let outcome = check_response(&challenges, "boolean_list_test", 1, "True").expect("check");
        assert!(!outcome.verdict.correct);
        assert_eq!(outcome.verdict.hint, BRACKET_HINT);
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let challenges = builtin_challenges().expect("builtins");
        let err = check_response(&challenges, "boolean_list_test", 4, "[]").unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn unknown_challenge_is_an_error() {
        let challenges = builtin_challenges().expect("builtins");
        assert!(check_response(&challenges, "missing", 0, "[]").is_err());
    }
}
