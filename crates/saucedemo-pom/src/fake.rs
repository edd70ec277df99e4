// FakeDriver - Scripted in-memory PageDriver for unit tests
//
// Elements are keyed by their rendered selector string. Clicking or selecting
// an option can trigger scripted effects (navigate, change text, add or remove
// elements) so flows and assertions can be exercised without a browser.

use crate::error::{Error, Result};
use crate::page::PageDriver;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// State change applied when a scripted trigger fires.
#[derive(Debug, Clone)]
pub(crate) enum Effect {
    Navigate(String),
    SetText(String, String),
    SetTexts(String, Vec<String>),
    Remove(String),
}

#[derive(Debug, Clone)]
struct FakeElement {
    texts: Vec<String>,
    visible: bool,
    value: String,
}

#[derive(Debug)]
struct FakeState {
    url: String,
    elements: HashMap<String, FakeElement>,
    triggers: HashMap<String, Vec<Effect>>,
    actions: Vec<String>,
}

impl Default for FakeState {
    fn default() -> Self {
        Self {
            url: "about:blank".to_string(),
            elements: HashMap::new(),
            triggers: HashMap::new(),
            actions: Vec::new(),
        }
    }
}

impl FakeState {
    fn apply(&mut self, key: &str) {
        let Some(effects) = self.triggers.get(key).cloned() else {
            return;
        };
        for effect in effects {
            match effect {
                Effect::Navigate(url) => self.url = url,
                Effect::SetText(selector, text) => self.set_texts(selector, vec![text]),
                Effect::SetTexts(selector, texts) => self.set_texts(selector, texts),
                Effect::Remove(selector) => {
                    self.elements.remove(&selector);
                }
            }
        }
    }

    fn set_texts(&mut self, selector: String, texts: Vec<String>) {
        let element = self.elements.entry(selector).or_insert(FakeElement {
            texts: Vec::new(),
            visible: true,
            value: String::new(),
        });
        element.texts = texts;
    }

    fn element(&self, selector: &str) -> Result<&FakeElement> {
        self.elements
            .get(selector)
            .filter(|e| !e.texts.is_empty())
            .ok_or_else(|| Error::ElementNotFound(selector.to_string()))
    }
}

/// Scripted page driver. Clones share state, so a test can keep a handle for
/// inspection after moving one into a [`crate::Page`].
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeDriver {
    state: Arc<Mutex<FakeState>>,
}

impl FakeDriver {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_url(self, url: &str) -> Self {
        self.state.lock().url = url.to_string();
        self
    }

    pub(crate) fn with_element(self, selector: &str, text: &str) -> Self {
        self.set_text(selector, text);
        self
    }

    pub(crate) fn with_elements(self, selector: &str, texts: &[&str]) -> Self {
        self.state
            .lock()
            .set_texts(selector.to_string(), texts.iter().map(|t| t.to_string()).collect());
        self
    }

    pub(crate) fn with_hidden(self, selector: &str, text: &str) -> Self {
        self.set_text(selector, text);
        if let Some(element) = self.state.lock().elements.get_mut(selector) {
            element.visible = false;
        }
        self
    }

    pub(crate) fn on_click(self, selector: &str, effects: Vec<Effect>) -> Self {
        self.state
            .lock()
            .triggers
            .insert(selector.to_string(), effects);
        self
    }

    pub(crate) fn on_select(self, selector: &str, value: &str, effects: Vec<Effect>) -> Self {
        self.state
            .lock()
            .triggers
            .insert(format!("{}={}", selector, value), effects);
        self
    }

    pub(crate) fn set_text(&self, selector: &str, text: &str) {
        self.state
            .lock()
            .set_texts(selector.to_string(), vec![text.to_string()]);
    }

    /// Interactions performed so far, e.g. `"click #btn"`, `"fill #name = bob"`.
    pub(crate) fn actions(&self) -> Vec<String> {
        self.state.lock().actions.clone()
    }
}

#[async_trait]
impl PageDriver for FakeDriver {
    async fn goto(&self, url: &str) -> Result<()> {
        let mut state = self.state.lock();
        state.actions.push(format!("goto {}", url));
        state.url = url.to_string();
        Ok(())
    }

    async fn url(&self) -> Result<String> {
        Ok(self.state.lock().url.clone())
    }

    async fn count(&self, selector: &str) -> Result<usize> {
        Ok(self
            .state
            .lock()
            .elements
            .get(selector)
            .map_or(0, |e| e.texts.len()))
    }

    async fn is_visible(&self, selector: &str) -> Result<bool> {
        let state = self.state.lock();
        Ok(state.element(selector).is_ok_and(|e| e.visible))
    }

    async fn inner_text(&self, selector: &str) -> Result<String> {
        let state = self.state.lock();
        Ok(state.element(selector)?.texts[0].clone())
    }

    async fn all_text_contents(&self, selector: &str) -> Result<Vec<String>> {
        Ok(self
            .state
            .lock()
            .elements
            .get(selector)
            .map(|e| e.texts.clone())
            .unwrap_or_default())
    }

    async fn input_value(&self, selector: &str) -> Result<String> {
        let state = self.state.lock();
        Ok(state.element(selector)?.value.clone())
    }

    async fn click(&self, selector: &str) -> Result<()> {
        let mut state = self.state.lock();
        state.element(selector)?;
        state.actions.push(format!("click {}", selector));
        state.apply(selector);
        Ok(())
    }

    async fn fill(&self, selector: &str, value: &str) -> Result<()> {
        let mut state = self.state.lock();
        state.element(selector)?;
        state.actions.push(format!("fill {} = {}", selector, value));
        if let Some(element) = state.elements.get_mut(selector) {
            element.value = value.to_string();
        }
        Ok(())
    }

    async fn select_option(&self, selector: &str, value: &str) -> Result<()> {
        let mut state = self.state.lock();
        state.element(selector)?;
        state
            .actions
            .push(format!("select {} = {}", selector, value));
        if let Some(element) = state.elements.get_mut(selector) {
            element.value = value.to_string();
        }
        state.apply(&format!("{}={}", selector, value));
        Ok(())
    }
}
