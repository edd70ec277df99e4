// Login region

use crate::locator::Locator;
use crate::page::Page;
use crate::selector::AriaRole;

#[derive(Debug, Clone, Copy)]
pub struct LoginRegion<'a> {
    page: &'a Page,
}

impl<'a> LoginRegion<'a> {
    pub(crate) fn new(page: &'a Page) -> Self {
        Self { page }
    }

    pub fn username_input(&self) -> Locator {
        self.page.get_by_role(AriaRole::Textbox, "Username")
    }

    pub fn password_input(&self) -> Locator {
        self.page.get_by_role(AriaRole::Textbox, "Password")
    }

    pub fn login_button(&self) -> Locator {
        self.page.get_by_role(AriaRole::Button, "Login")
    }

    /// Error banner containing `text`
    pub fn error_message(&self, text: &str) -> Locator {
        self.page.get_by_text(text)
    }
}
