//! Rule definitions for the featured-filter rewrite.
//!
//! Every rule works on raw text. The route file is never parsed, so the
//! patterns match exactly what they say and nothing more.

use std::sync::LazyLock;

use regex::Regex;

/// Any line mentioning the text-coerced featured check, with its terminator.
static CAST_CHECK_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[^\n]*CAST\(is_featured AS TEXT\)[^\n]*\n?")
        .unwrap_or_else(|err| panic!("invalid CAST_CHECK_LINE regex: {err}"))
});

/// Any line holding a null-tolerant `COALESCE(is_featured, 0) = 1` comparison.
/// Spacing around the comma and `=` is free but stays on one line.
static COALESCE_CHECK_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[^\n]*COALESCE\(is_featured[ \t]*,[ \t]*0\)[ \t]*=[ \t]*1[^\n]*\n?")
        .unwrap_or_else(|err| panic!("invalid COALESCE_CHECK_LINE regex: {err}"))
});

/// From a `// Fallback:` marker to the nearest line holding only `}`.
/// Non-greedy: a nested block ends the match at its own closing brace.
static FALLBACK_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)// Fallback:.*?\n[ \t]*\}[ \t]*(?:\r?\n|\z)")
        .unwrap_or_else(|err| panic!("invalid FALLBACK_BLOCK regex: {err}"))
});

/// What a rule does to the text.
#[derive(Debug, Clone, Copy)]
enum Action {
    /// Replace every literal occurrence of `from` with `to`.
    Literal {
        from: &'static str,
        to: &'static str,
    },
    /// Delete every match of the pattern.
    DeleteAll(&'static Regex),
    /// Replace only the first match of the pattern.
    ReplaceFirst {
        pattern: &'static Regex,
        with: &'static str,
    },
}

/// One named step of the rewrite.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    name: &'static str,
    action: Action,
}

impl Rule {
    /// Stable identifier used in logs and reports.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply this rule to `text`, returning the new text and the match count.
    #[must_use]
    pub fn apply(&self, text: &str) -> (String, usize) {
        match self.action {
            Action::Literal { from, to } => {
                let count = text.matches(from).count();
                if count == 0 {
                    (text.to_string(), 0)
                } else {
                    (text.replace(from, to), count)
                }
            }
            Action::DeleteAll(pattern) => {
                let count = pattern.find_iter(text).count();
                if count == 0 {
                    (text.to_string(), 0)
                } else {
                    (pattern.replace_all(text, "").into_owned(), count)
                }
            }
            Action::ReplaceFirst { pattern, with } => {
                if pattern.is_match(text) {
                    (pattern.replacen(text, 1, with).into_owned(), 1)
                } else {
                    (text.to_string(), 0)
                }
            }
        }
    }
}

/// The featured-filter rules in the order they must run.
///
/// The literal `OR` strip goes first so later rules see the narrowed
/// condition; the fallback block goes last.
#[must_use]
pub fn featured_rules() -> [Rule; 4] {
    [
        Rule {
            name: "strip-or-widening",
            action: Action::Literal {
                from: "is_featured = 1 OR",
                to: "is_featured = 1",
            },
        },
        Rule {
            name: "drop-cast-check",
            action: Action::DeleteAll(&CAST_CHECK_LINE),
        },
        Rule {
            name: "drop-coalesce-check",
            action: Action::DeleteAll(&COALESCE_CHECK_LINE),
        },
        Rule {
            name: "drop-fallback-block",
            action: Action::ReplaceFirst {
                pattern: &FALLBACK_BLOCK,
                with: "\n",
            },
        },
    ]
}
