//! Grading of a learner's typed answer for one invocation.

use serde::Serialize;

use super::challenge::Transform;
use super::literal::parse_list;

pub const BRACKET_HINT: &str = "Answer should be bracketed";
pub const BOOL_CASE_HINT: &str = "Python boolean values are either True or False";

/// Result of comparing a response with the correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub correct: bool,
    /// Empty when there is nothing useful to say.
    pub hint: String,
}

impl Verdict {
    fn correct() -> Self {
        Self {
            correct: true,
            hint: String::new(),
        }
    }

    fn incorrect(hint: &str) -> Self {
        Self {
            correct: false,
            hint: hint.to_string(),
        }
    }
}

/// Compare `response` with `correct_answer` as Python lists.
///
/// Quote style and whitespace are ignored; element types and order are not.
pub fn check_answer(transform: Transform, response: &str, correct_answer: &str) -> Verdict {
    let response = response.trim();
    if response.is_empty() {
        return Verdict::incorrect("");
    }
    if !is_bracketed(response) {
        return Verdict::incorrect(BRACKET_HINT);
    }
    let matches = match (parse_list(response), parse_list(correct_answer)) {
        (Ok(given), Ok(expected)) => given == expected,
        _ => false,
    };
    if matches {
        return Verdict::correct();
    }
    if transform == Transform::FlipBools && uses_lowercase_bools(response) {
        return Verdict::incorrect(BOOL_CASE_HINT);
    }
    Verdict::incorrect("")
}

fn is_bracketed(text: &str) -> bool {
    text.starts_with('[') && text.ends_with(']')
}

fn uses_lowercase_bools(text: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|word| word == "true" || word == "false")
}
