// Locator - Lazy element selector bound to a page
//
// Locators represent a way to find element(s) on the page at any given moment.
//
// Key characteristics:
// - Lazy: Don't execute until an action is performed
// - Pure: A locator is (page, selector chain); no element handle is cached
// - Chainable: Sub-locators via first(), last(), nth(), parent(), locator(), get_by_*()
//
// Architecture:
// - Stores the selector chain, its rendered string, and the Page it belongs to
// - Delegates all operations to the page's PageDriver with the rendered selector

use crate::error::Result;
use crate::page::Page;
use crate::selector::{AriaRole, Selector, render_chain};

/// Locator represents a way to find element(s) on the page at any given moment.
///
/// Two locators are equal when they are bound to the same page and carry the same
/// selector chain, so a page object factory called twice yields equal locators.
#[derive(Clone)]
pub struct Locator {
    page: Page,
    chain: Vec<Selector>,
    selector: String,
}

impl Locator {
    /// Creates a locator with a single selector step.
    pub(crate) fn new(page: Page, selector: Selector) -> Self {
        Self::from_chain(page, vec![selector])
    }

    fn from_chain(page: Page, chain: Vec<Selector>) -> Self {
        let selector = render_chain(&chain);
        Self {
            page,
            chain,
            selector,
        }
    }

    fn then(&self, step: Selector) -> Locator {
        let mut chain = self.chain.clone();
        chain.push(step);
        Locator::from_chain(self.page.clone(), chain)
    }

    /// Returns the rendered selector string for this locator
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Returns the selection steps of this locator
    pub fn chain(&self) -> &[Selector] {
        &self.chain
    }

    /// Returns the page this locator is bound to
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Creates a locator for the first matching element.
    pub fn first(&self) -> Locator {
        self.then(Selector::Nth(0))
    }

    /// Creates a locator for the last matching element.
    pub fn last(&self) -> Locator {
        self.then(Selector::Nth(-1))
    }

    /// Creates a locator for the nth matching element (0-indexed).
    pub fn nth(&self, index: i32) -> Locator {
        self.then(Selector::Nth(index))
    }

    /// Creates a locator for the parent of the matched element.
    pub fn parent(&self) -> Locator {
        self.then(Selector::Parent)
    }

    /// Creates a sub-locator within this locator's subtree by CSS selector.
    pub fn locator(&self, css: &str) -> Locator {
        self.then(Selector::css(css))
    }

    /// Creates a sub-locator by `data-test` attribute within this locator's subtree.
    pub fn get_by_test_id(&self, id: &str) -> Locator {
        self.then(Selector::test_id(id))
    }

    /// Creates a sub-locator by accessible role and name within this locator's subtree.
    pub fn get_by_role(&self, role: AriaRole, name: &str) -> Locator {
        self.then(Selector::role(role, name))
    }

    /// Creates a sub-locator by visible text within this locator's subtree.
    pub fn get_by_text(&self, text: &str) -> Locator {
        self.then(Selector::text(text))
    }

    /// Returns the number of elements matching this locator.
    pub async fn count(&self) -> Result<usize> {
        self.page.driver().count(&self.selector).await
    }

    /// Returns whether the element is visible.
    pub async fn is_visible(&self) -> Result<bool> {
        self.page.driver().is_visible(&self.selector).await
    }

    /// Returns the rendered text of the element.
    pub async fn inner_text(&self) -> Result<String> {
        self.page.driver().inner_text(&self.selector).await
    }

    /// Returns the text content of all matching elements, in document order.
    pub async fn all_text_contents(&self) -> Result<Vec<String>> {
        self.page.driver().all_text_contents(&self.selector).await
    }

    /// Returns the value of the input, textarea, or select element.
    pub async fn input_value(&self) -> Result<String> {
        self.page.driver().input_value(&self.selector).await
    }

    /// Clicks the element.
    pub async fn click(&self) -> Result<()> {
        tracing::debug!("click {}", self.selector);
        self.page.driver().click(&self.selector).await
    }

    /// Fills the input with `value`, replacing any existing content.
    pub async fn fill(&self, value: &str) -> Result<()> {
        tracing::debug!("fill {}", self.selector);
        self.page.driver().fill(&self.selector, value).await
    }

    /// Selects the option with the given value in a select element.
    pub async fn select_option(&self, value: &str) -> Result<()> {
        tracing::debug!("select_option {} = {}", self.selector, value);
        self.page.driver().select_option(&self.selector, value).await
    }
}

impl PartialEq for Locator {
    fn eq(&self, other: &Self) -> bool {
        self.page.same_page(&other.page) && self.chain == other.chain
    }
}

impl Eq for Locator {}

impl std::fmt::Debug for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Locator")
            .field("selector", &self.selector)
            .finish()
    }
}
