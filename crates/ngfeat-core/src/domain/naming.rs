//! Identifier casing: camelCase, PascalCase, kebab-case, SCREAMING_SNAKE_CASE.
//!
//! The converters are pure and total. Case boundaries are detected on ASCII
//! classes only (`[a-z0-9]` immediately followed by `[A-Z]`); the final fold
//! uses full Unicode casing.
//!
//! | Input          | camel        | Pascal       | kebab          | screaming      |
//! |----------------|--------------|--------------|----------------|----------------|
//! | `orderList`    | `orderList`  | `OrderList`  | `order-list`   | `ORDER_LIST`   |
//! | `order-list`   | `orderList`  | `OrderList`  | `order-list`   | `ORDERLIST`    |
//! | `my orders`    | `my orders`  | `My orders`  | `my orders`    | `MY_ORDERS`    |

use std::fmt;

use serde::{Deserialize, Serialize};

/// Collapse every `-x` (hyphen + ASCII lowercase letter) into `X`.
///
/// Input without hyphens is returned unchanged.
pub fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }

    out
}

/// [`to_camel_case`] with the first character upper-cased.
pub fn to_pascal_case(s: &str) -> String {
    let camel = to_camel_case(s);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(camel.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Hyphenate lower→upper boundaries, then lowercase everything.
pub fn to_kebab_case(s: &str) -> String {
    insert_at_case_boundaries(s, '-').to_lowercase()
}

/// Whitespace runs become `_`, lower→upper boundaries get `_`, anything that
/// is not `[A-Za-z0-9_]` is dropped, and the result is upper-cased.
pub fn to_screaming_snake_case(s: &str) -> String {
    let mut spaced = String::with_capacity(s.len());
    let mut in_whitespace = false;
    for c in s.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                spaced.push('_');
            }
            in_whitespace = true;
        } else {
            spaced.push(c);
            in_whitespace = false;
        }
    }

    insert_at_case_boundaries(&spaced, '_')
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect::<String>()
        .to_uppercase()
}

fn insert_at_case_boundaries(s: &str, separator: char) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        out.push(c);
        if let Some(next) = chars.peek() {
            if (c.is_ascii_lowercase() || c.is_ascii_digit()) && next.is_ascii_uppercase() {
                out.push(separator);
            }
        }
    }

    out
}

// ── FeatureName ───────────────────────────────────────────────────────────────

/// A feature or child name exactly as the user typed it.
///
/// No validation happens here: empty strings and characters that are illegal
/// in paths pass straight through, and any resulting filesystem failure is
/// reported when the tree is written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureName(String);

impl FeatureName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Derive every casing once.
    pub fn forms(&self) -> NameForms {
        NameForms::new(self)
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FeatureName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FeatureName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for FeatureName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── NameForms ─────────────────────────────────────────────────────────────────

/// Every casing of one [`FeatureName`], computed together.
///
/// Fields are private; a form can never drift from the others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameForms {
    raw: String,
    camel: String,
    pascal: String,
    kebab: String,
    screaming: String,
}

impl NameForms {
    pub fn new(name: &FeatureName) -> Self {
        let raw = name.as_str();
        Self {
            raw: raw.to_owned(),
            camel: to_camel_case(raw),
            pascal: to_pascal_case(raw),
            kebab: to_kebab_case(raw),
            screaming: to_screaming_snake_case(raw),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn camel(&self) -> &str {
        &self.camel
    }

    pub fn pascal(&self) -> &str {
        &self.pascal
    }

    pub fn kebab(&self) -> &str {
        &self.kebab
    }

    pub fn screaming(&self) -> &str {
        &self.screaming
    }

    /// `WidgetsService`, `WidgetsComponent`, ...
    pub fn class_name(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.pascal)
    }

    /// Component selector, `app-<kebab>`.
    pub fn selector(&self) -> String {
        format!("app-{}", self.kebab)
    }

    /// Name of the exported routes array, `<SCREAMING>_ROUTES`.
    pub fn routes_const(&self) -> String {
        format!("{}_ROUTES", self.screaming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "widgets",
        "orderList",
        "OrderList",
        "order-list",
        "my orders",
        "userV2Detail",
        "HTTPServer",
        "a-1",
        "trailing-",
        "x--y",
        "émigré-list",
    ];

    // ── to_camel_case ────────────────────────────────────────────────────────

    #[test]
    fn camel_collapses_hyphen_letter() {
        assert_eq!(to_camel_case("order-list"), "orderList");
        assert_eq!(to_camel_case("a-b-c"), "aBC");
    }

    #[test]
    fn camel_leaves_hyphen_free_input_unchanged() {
        for s in ["widgets", "orderList", "OrderList", "HTTPServer", "my orders"] {
            assert_eq!(to_camel_case(s), s, "changed: {s}");
        }
    }

    #[test]
    fn camel_keeps_hyphen_not_followed_by_lowercase() {
        assert_eq!(to_camel_case("a-1"), "a-1");
        assert_eq!(to_camel_case("trailing-"), "trailing-");
        assert_eq!(to_camel_case("a-B"), "a-B");
        assert_eq!(to_camel_case("x--y"), "x-Y");
    }

    // ── to_pascal_case ───────────────────────────────────────────────────────

    #[test]
    fn pascal_uppercases_first_char_of_camel() {
        assert_eq!(to_pascal_case("widgets"), "Widgets");
        assert_eq!(to_pascal_case("order-list"), "OrderList");
        assert_eq!(to_pascal_case("orderList"), "OrderList");
    }

    #[test]
    fn pascal_tail_matches_camel_tail() {
        for s in SAMPLES {
            let pascal = to_pascal_case(s);
            let camel = to_camel_case(s);
            let tail = |v: &str| v.chars().skip(1).collect::<String>();
            assert_eq!(tail(&pascal), tail(&camel), "input: {s}");
        }
    }

    #[test]
    fn pascal_first_char_is_uppercase_for_letters() {
        for s in ["widgets", "orderList", "order-list", "émigré"] {
            let first = to_pascal_case(s).chars().next().unwrap();
            assert!(first.is_uppercase(), "input: {s}");
        }
    }

    // ── to_kebab_case ────────────────────────────────────────────────────────

    #[test]
    fn kebab_splits_camel_and_pascal() {
        assert_eq!(to_kebab_case("orderList"), "order-list");
        assert_eq!(to_kebab_case("OrderList"), "order-list");
        assert_eq!(to_kebab_case("userV2Detail"), "user-v2-detail");
    }

    #[test]
    fn kebab_does_not_split_acronyms() {
        assert_eq!(to_kebab_case("HTTPServer"), "httpserver");
    }

    #[test]
    fn kebab_is_idempotent() {
        for s in SAMPLES {
            let once = to_kebab_case(s);
            assert_eq!(to_kebab_case(&once), once, "input: {s}");
        }
    }

    // ── to_screaming_snake_case ──────────────────────────────────────────────

    #[test]
    fn screaming_handles_camel_and_spaces() {
        assert_eq!(to_screaming_snake_case("orderList"), "ORDER_LIST");
        assert_eq!(to_screaming_snake_case("my   orders"), "MY_ORDERS");
        assert_eq!(to_screaming_snake_case("widgets"), "WIDGETS");
    }

    #[test]
    fn screaming_strips_punctuation() {
        assert_eq!(to_screaming_snake_case("order-list"), "ORDERLIST");
        assert_eq!(to_screaming_snake_case("a.b/c"), "ABC");
    }

    #[test]
    fn screaming_output_alphabet() {
        for s in SAMPLES {
            let out = to_screaming_snake_case(s);
            assert!(
                out.chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'),
                "input: {s} -> {out}"
            );
        }
    }

    #[test]
    fn converters_are_idempotent() {
        for s in SAMPLES {
            let camel = to_camel_case(s);
            assert_eq!(to_camel_case(&camel), camel, "camel: {s}");
            let pascal = to_pascal_case(s);
            assert_eq!(to_pascal_case(&pascal), pascal, "pascal: {s}");
            let screaming = to_screaming_snake_case(s);
            assert_eq!(to_screaming_snake_case(&screaming), screaming, "screaming: {s}");
        }
    }

    #[test]
    fn empty_maps_to_empty() {
        assert_eq!(to_camel_case(""), "");
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(to_kebab_case(""), "");
        assert_eq!(to_screaming_snake_case(""), "");
    }

    // ── NameForms ────────────────────────────────────────────────────────────

    #[test]
    fn name_forms_are_derived_from_one_source() {
        let forms = FeatureName::from("orderList").forms();
        assert_eq!(forms.raw(), "orderList");
        assert_eq!(forms.camel(), "orderList");
        assert_eq!(forms.pascal(), "OrderList");
        assert_eq!(forms.kebab(), "order-list");
        assert_eq!(forms.screaming(), "ORDER_LIST");
    }

    #[test]
    fn derived_identifiers() {
        let forms = FeatureName::from("widgets").forms();
        assert_eq!(forms.class_name("Service"), "WidgetsService");
        assert_eq!(forms.selector(), "app-widgets");
        assert_eq!(forms.routes_const(), "WIDGETS_ROUTES");
    }
}
