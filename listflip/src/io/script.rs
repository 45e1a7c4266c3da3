//! Load challenges from Python fixture scripts.
//!
//! A fixture defines `flip` and a `main()` whose `print(...)` lines are the
//! invocations. Only lines between `def main(` and the `__main__` guard are
//! considered, and trailing `#` comments are dropped before matching.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow, bail};
use regex::Regex;
use tracing::debug;

use crate::core::challenge::{Challenge, Invocation, Transform};
use crate::core::literal::parse_list;

#[allow(clippy::expect_used)]
static MAIN_DEF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"def\s+main\(").expect("valid regex pattern"));

#[allow(clippy::expect_used)]
static MAIN_GUARD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__main__").expect("valid regex pattern"));

/// `print(<call>)` with nothing but whitespace around it.
#[allow(clippy::expect_used)]
static PRINT_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*print\((?P<call>.*)\)\s*$").expect("valid regex pattern"));

/// `name(<args>)`.
#[allow(clippy::expect_used)]
static CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<func>[A-Za-z_][A-Za-z0-9_]*)\((?P<args>.*)\)$").expect("valid regex pattern")
});

/// Read a fixture script; the challenge is named after the file stem.
pub fn load_script(path: &Path, transform: Transform) -> Result<Challenge> {
    let source = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| anyhow!("script path has no file name: {}", path.display()))?;
    parse_script(name, transform, &source).with_context(|| format!("parse {}", path.display()))
}

/// Extract the invocations printed by `main()` in `source`.
pub fn parse_script(name: &str, transform: Transform, source: &str) -> Result<Challenge> {
    let mut inside_main = false;
    let mut found_main = false;
    let mut invocations = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let line_no = index + 1;
        if MAIN_DEF.is_match(line) {
            inside_main = true;
            found_main = true;
            continue;
        }
        if !inside_main {
            continue;
        }
        if MAIN_GUARD.is_match(line) {
            break;
        }
        let Some(print) = PRINT_CALL.captures(strip_comment(line)) else {
            continue;
        };
        let call = print["call"].trim();
        let parts = CALL
            .captures(call)
            .with_context(|| format!("line {line_no}: expected a call inside print: {call}"))?;
        let args = parse_list(&parts["args"])
            .with_context(|| format!("line {line_no}: invalid argument in {call}"))?;
        debug!(line = line_no, func = &parts["func"], "found invocation");
        invocations.push(Invocation {
            call: call.to_string(),
            args,
        });
    }

    if !found_main {
        bail!("no `def main(` block found");
    }
    debug!(challenge = name, count = invocations.len(), "parsed script");
    Ok(Challenge {
        name: name.to_string(),
        transform,
        invocations,
    })
}

/// Cut `line` at the first `#` that is not inside a string literal.
fn strip_comment(line: &str) -> &str {
    let mut quote = None;
    let mut escaped = false;
    for (offset, c) in line.char_indices() {
        match quote {
            Some(_) if escaped => escaped = false,
            Some(_) if c == '\\' => escaped = true,
            Some(open) if c == open => quote = None,
            Some(_) => {}
            None if c == '\'' || c == '"' => quote = Some(c),
            None if c == '#' => return &line[..offset],
            None => {}
        }
    }
    line
}
