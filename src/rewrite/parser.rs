//! Reply parsing: layered extraction of structured fields from free text.
//!
//! The model is asked for a strict output grammar but does not always obey
//! it. Each field is therefore extracted through an ordered cascade of
//! marker patterns; the first pattern producing a non-empty match wins, and
//! an exhausted cascade substitutes that field's sentinel instead of failing
//! the request. The markers are matched case-sensitively, anywhere in the
//! reply.

use std::sync::LazyLock;

use regex::Regex;

use super::model::ParsedFields;

/// Sentinel substituted when no rewrite pattern matches the reply.
pub const REWRITE_PARSE_SENTINEL: &str = "[파싱 오류 - 리라이팅 부분을 찾을 수 없음]";

/// Sentinel substituted when no explanation pattern matches the reply.
pub const EXPLANATION_PARSE_SENTINEL: &str = "응답 파싱 중 오류가 발생했습니다.";

/// One rule in a field's extraction cascade.
struct MarkerRule {
    label: &'static str,
    regex: LazyLock<Option<Regex>>,
}

impl MarkerRule {
    const fn new(label: &'static str, build: fn() -> Option<Regex>) -> Self {
        Self {
            label,
            regex: LazyLock::new(build),
        }
    }

    /// Applies the rule to the reply, returning a trimmed, non-empty match.
    fn try_extract(&self, reply: &str) -> Option<String> {
        let regex = self.regex.as_ref()?;
        let captures = regex.captures(reply)?;
        let matched = captures.get(1)?.as_str().trim();
        if matched.is_empty() {
            return None;
        }
        Some(matched.to_owned())
    }
}

fn compile(pattern: &str) -> Option<Regex> {
    Regex::new(pattern).ok()
}

/// Rewritten sentence: text after the `리라이팅:` marker, up to the next
/// section header or line end.
static REWRITE_RULES: [MarkerRule; 1] = [MarkerRule::new("rewrite-marker", || {
    compile(r"(?ms)리라이팅:\s*(.+?)(?:\n설명|$)")
})];

/// Explanation strategies in priority order. The header-only form is the
/// requested grammar; the colon form is the legacy grammar; the remaining
/// rules absorb markers the model substitutes on its own.
static EXPLANATION_RULES: [MarkerRule; 5] = [
    MarkerRule::new("explanation-header", || {
        compile(r"(?s)설명\s*\n(.+?)(?:\n\n|$)")
    }),
    MarkerRule::new("explanation-colon", || {
        compile(r"(?s)설명:\s*(.+?)(?:\n|$)")
    }),
    MarkerRule::new("explanation-bare", || {
        compile(r"(?s)설명\s+(.+?)(?:\n|$)")
    }),
    MarkerRule::new("reason-header", || compile(r"(?s)이유\s*\n(.+?)(?:\n|$)")),
    MarkerRule::new("changes-header", || {
        compile(r"(?s)변경\s*사항\s*\n(.+?)(?:\n|$)")
    }),
];

fn first_match(rules: &[MarkerRule], reply: &str) -> Option<String> {
    rules.iter().find_map(|rule| {
        let extracted = rule.try_extract(reply)?;
        tracing::trace!("extracted field via {} rule", rule.label);
        Some(extracted)
    })
}

/// Extracts the rewritten sentence and the explanation from a raw model
/// reply.
///
/// The two cascades run independently: one field falling back to its
/// sentinel never blocks extraction of the other.
#[must_use]
pub fn extract_fields(reply: &str) -> ParsedFields {
    let rewritten_text = first_match(&REWRITE_RULES, reply)
        .unwrap_or_else(|| REWRITE_PARSE_SENTINEL.to_owned());
    let explanation = first_match(&EXPLANATION_RULES, reply)
        .unwrap_or_else(|| EXPLANATION_PARSE_SENTINEL.to_owned());

    ParsedFields {
        rewritten_text,
        explanation,
    }
}
