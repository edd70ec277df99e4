// Selector - One step of a locator's selection criteria
//
// A Locator is a chain of Selector steps. Each step renders to a Playwright
// selector fragment; the chain is joined with " >> " so the driver resolves
// each step inside the elements matched by the previous one.
//
// Rendering follows the selectors Playwright's own get_by_* helpers emit:
// - TestId:  [data-test="title"]
// - Role:    internal:role=button[name="Login"i]
// - Css:     .inventory_item_name
// - Text:    internal:text="Sauce Labs Backpack"i
// - Parent:  xpath=..
// - Nth:     nth=0

use std::fmt;

/// Attribute the store uses for stable test identifiers.
///
/// The store uses `data-test` rather than Playwright's default `data-testid`.
pub const TEST_ID_ATTRIBUTE: &str = "data-test";

/// Accessible roles used by the page object model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaRole {
    Button,
    Textbox,
    Link,
    Combobox,
    Heading,
}

impl AriaRole {
    /// ARIA role name as understood by the role selector engine
    pub fn as_str(&self) -> &'static str {
        match self {
            AriaRole::Button => "button",
            AriaRole::Textbox => "textbox",
            AriaRole::Link => "link",
            AriaRole::Combobox => "combobox",
            AriaRole::Heading => "heading",
        }
    }
}

impl fmt::Display for AriaRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selection strategy of a selector step, ordered from most to least preferred.
///
/// `Strategy::TestId < Strategy::Role < Strategy::Css < Strategy::Text`, so a smaller
/// value is the more robust choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strategy {
    /// Stable test-identifier attribute
    TestId,
    /// Accessible role plus accessible name
    Role,
    /// CSS class or selector
    Css,
    /// Raw visible text; breaks on copy changes and may match many nodes
    Text,
}

/// One step of a locator chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Element carrying `data-test="<id>"`
    TestId(String),
    /// Element with the given accessible role and (case-insensitive, substring) name
    Role { role: AriaRole, name: String },
    /// Raw CSS selector
    Css(String),
    /// Element whose visible text contains the given text (case-insensitive)
    Text(String),
    /// Parent of the current match
    Parent,
    /// nth match of the current chain (0-indexed, -1 for last)
    Nth(i32),
}

impl Selector {
    pub fn test_id(id: impl Into<String>) -> Self {
        Selector::TestId(id.into())
    }

    pub fn role(role: AriaRole, name: impl Into<String>) -> Self {
        Selector::Role {
            role,
            name: name.into(),
        }
    }

    pub fn css(selector: impl Into<String>) -> Self {
        Selector::Css(selector.into())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Selector::Text(text.into())
    }

    /// Selection strategy of this step; structural steps (`Parent`, `Nth`) have none.
    pub fn strategy(&self) -> Option<Strategy> {
        match self {
            Selector::TestId(_) => Some(Strategy::TestId),
            Selector::Role { .. } => Some(Strategy::Role),
            Selector::Css(_) => Some(Strategy::Css),
            Selector::Text(_) => Some(Strategy::Text),
            Selector::Parent | Selector::Nth(_) => None,
        }
    }

    /// Renders this step as a Playwright selector fragment.
    pub fn render(&self) -> String {
        match self {
            Selector::TestId(id) => format!("[{}={}]", TEST_ID_ATTRIBUTE, quote(id)),
            Selector::Role { role, name } => {
                format!("internal:role={}[name={}i]", role, quote(name))
            }
            Selector::Css(css) => css.clone(),
            Selector::Text(text) => format!("internal:text={}i", quote(text)),
            Selector::Parent => "xpath=..".to_string(),
            Selector::Nth(index) => format!("nth={}", index),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Renders a chain of steps as one Playwright selector string.
pub fn render_chain(chain: &[Selector]) -> String {
    chain
        .iter()
        .map(Selector::render)
        .collect::<Vec<_>>()
        .join(" >> ")
}

// Quotes a value the way Playwright escapes attribute and text selector bodies
// (JSON string literal).
fn quote(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_each_strategy() {
        assert_eq!(Selector::test_id("title").render(), r#"[data-test="title"]"#);
        assert_eq!(
            Selector::role(AriaRole::Button, "Login").render(),
            r#"internal:role=button[name="Login"i]"#
        );
        assert_eq!(
            Selector::css(".inventory_item_name").render(),
            ".inventory_item_name"
        );
        assert_eq!(
            Selector::text("Sauce Labs Backpack").render(),
            r#"internal:text="Sauce Labs Backpack"i"#
        );
        assert_eq!(Selector::Parent.render(), "xpath=..");
        assert_eq!(Selector::Nth(-1).render(), "nth=-1");
    }

    #[test]
    fn test_render_escapes_quotes() {
        assert_eq!(
            Selector::text(r#"say "hi""#).render(),
            r#"internal:text="say \"hi\""i"#
        );
        assert_eq!(
            Selector::text("Test.allTheThings() T-Shirt (Red)").render(),
            r#"internal:text="Test.allTheThings() T-Shirt (Red)"i"#
        );
    }

    #[test]
    fn test_strategy_precedence() {
        assert!(Strategy::TestId < Strategy::Role);
        assert!(Strategy::Role < Strategy::Css);
        assert!(Strategy::Css < Strategy::Text);

        assert_eq!(Selector::test_id("x").strategy(), Some(Strategy::TestId));
        assert_eq!(Selector::Parent.strategy(), None);
        assert_eq!(Selector::Nth(0).strategy(), None);
    }

    #[test]
    fn test_render_chain() {
        let chain = vec![
            Selector::text("Sauce Labs Onesie"),
            Selector::Parent,
            Selector::role(AriaRole::Button, "Remove"),
        ];
        assert_eq!(
            render_chain(&chain),
            r#"internal:text="Sauce Labs Onesie"i >> xpath=.. >> internal:role=button[name="Remove"i]"#
        );
        assert_eq!(render_chain(&[]), "");
    }
}
