//! Challenges: a named transform plus the literal invocations it is run on.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::literal::{LiteralError, parse_list};
use super::render::repr_list;
use super::transform::{flip_bools, upper_strings};
use super::value::{Value, ValueError, into_bools, into_strings};

/// Built-in fixtures: name, transform and the literal arguments of each call.
pub const BUILTIN: [(&str, Transform, &[&str]); 2] = [
    (
        "boolean_list_test",
        Transform::FlipBools,
        &["[True, True]", "[False]", "[True]", "[]"],
    ),
    (
        "string_array_test",
        Transform::UpperStrings,
        &[r#"["this", "is"]"#, r#"["a"]"#, r#"["test"]"#, "[]"],
    ),
];

/// Per-element transform a challenge's `flip` applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transform {
    /// Negate every boolean.
    #[serde(rename = "bools")]
    FlipBools,
    /// Upper-case every string.
    #[serde(rename = "strings")]
    UpperStrings,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown transform {0:?} (expected `bools` or `strings`)")]
pub struct UnknownTransform(pub String);

impl Transform {
    pub fn name(self) -> &'static str {
        match self {
            Transform::FlipBools => "bools",
            Transform::UpperStrings => "strings",
        }
    }

    /// Example answer shown in an empty answer box.
    pub fn placeholder(self) -> &'static str {
        match self {
            Transform::FlipBools => "[True, False]",
            Transform::UpperStrings => "['', '']",
        }
    }

    /// Type-check `args`, run the in-place transform and hand the list back.
    pub fn apply(self, args: Vec<Value>) -> Result<Vec<Value>, ValueError> {
        match self {
            Transform::FlipBools => {
                let mut items = into_bools(args)?;
                flip_bools(&mut items);
                Ok(items.into_iter().map(Value::Bool).collect())
            }
            Transform::UpperStrings => {
                let mut items = into_strings(args)?;
                upper_strings(&mut items);
                Ok(items.into_iter().map(Value::Str).collect())
            }
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transform {
    type Err = UnknownTransform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bools" => Ok(Transform::FlipBools),
            "strings" => Ok(Transform::UpperStrings),
            other => Err(UnknownTransform(other.to_string())),
        }
    }
}

/// One printed call, e.g. `flip([True, True])`.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// Call text as written in the fixture.
    pub call: String,
    /// Parsed list argument.
    pub args: Vec<Value>,
}

impl Invocation {
    /// Build an invocation of `flip` from the literal text of its argument.
    pub fn from_literal(literal: &str) -> Result<Self, LiteralError> {
        let args = parse_list(literal)?;
        Ok(Self {
            call: format!("flip({})", literal.trim()),
            args,
        })
    }
}

/// Evaluated invocation with its rendered correct answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub invocation: String,
    pub result: Vec<Value>,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Challenge {
    pub name: String,
    pub transform: Transform,
    pub invocations: Vec<Invocation>,
}

impl Challenge {
    /// Build a challenge from the literal argument text of each call.
    pub fn from_literals<S: AsRef<str>>(
        name: &str,
        transform: Transform,
        literals: &[S],
    ) -> Result<Self, LiteralError> {
        let invocations = literals
            .iter()
            .map(|literal| Invocation::from_literal(literal.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: name.to_string(),
            transform,
            invocations,
        })
    }

    /// Run every invocation on a fresh copy of its arguments.
    pub fn evaluate(&self) -> Result<Vec<Outcome>> {
        self.invocations
            .iter()
            .enumerate()
            .map(|(index, invocation)| {
                let result = self
                    .transform
                    .apply(invocation.args.clone())
                    .with_context(|| {
                        format!("{} invocation {index}: {}", self.name, invocation.call)
                    })?;
                Ok(Outcome {
                    invocation: invocation.call.clone(),
                    answer: repr_list(&result),
                    result,
                })
            })
            .collect()
    }
}

/// The two fixture challenges.
pub fn builtin_challenges() -> Result<Vec<Challenge>, LiteralError> {
    BUILTIN
        .iter()
        .map(|(name, transform, literals)| Challenge::from_literals(name, *transform, *literals))
        .collect()
}

/// Look up a challenge by name.
pub fn find_challenge<'a>(challenges: &'a [Challenge], name: &str) -> Option<&'a Challenge> {
    challenges.iter().find(|challenge| challenge.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(challenge: &Challenge) -> Vec<String> {
        challenge
            .evaluate()
            .expect("evaluate")
            .into_iter()
            .map(|outcome| outcome.answer)
            .collect()
    }

    #[test]
    fn boolean_fixture_answers() {
        let challenges = builtin_challenges().expect("builtins");
        let challenge = find_challenge(&challenges, "boolean_list_test").expect("present");
        assert_eq!(
            answers(challenge),
            vec!["[False, False]", "[True]", "[False]", "[]"]
        );
    }

    #[test]
    fn string_fixture_answers() {
        let challenges = builtin_challenges().expect("builtins");
        let challenge = find_challenge(&challenges, "string_array_test").expect("present");
        assert_eq!(
            answers(challenge),
            vec!["['THIS', 'IS']", "['A']", "['TEST']", "[]"]
        );
        assert_eq!(challenge.invocations[0].call, r#"flip(["this", "is"])"#);
    }

    #[test]
    fn foreign_element_is_reported_with_invocation() {
        let challenge = Challenge::from_literals("mixed", Transform::FlipBools, &["[True, 'x']"])
            .expect("parse");
        let err = challenge.evaluate().unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("mixed invocation 0"), "{message}");
        assert!(message.contains("expected bool, found str"), "{message}");
    }

    #[test]
    fn evaluate_does_not_mutate_challenge() {
        let challenge =
            Challenge::from_literals("once", Transform::FlipBools, &["[True]"]).expect("parse");
        let first = answers(&challenge);
        let second = answers(&challenge);
        assert_eq!(first, second);
        assert_eq!(challenge.invocations[0].args, vec![Value::Bool(true)]);
    }

    #[test]
    fn transform_parses_from_name() {
        assert_eq!("bools".parse::<Transform>(), Ok(Transform::FlipBools));
        assert_eq!("strings".parse::<Transform>(), Ok(Transform::UpperStrings));
        assert!("ints".parse::<Transform>().is_err());
        assert_eq!(Transform::UpperStrings.to_string(), "strings");
    }

    #[test]
    fn placeholders_match_transform() {
        assert_eq!(Transform::FlipBools.placeholder(), "[True, False]");
        assert_eq!(Transform::UpperStrings.placeholder(), "['', '']");
    }
}
