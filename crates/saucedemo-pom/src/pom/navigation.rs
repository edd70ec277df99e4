// Navigation region - Sidebar menu

use crate::catalog::MenuItem;
use crate::locator::Locator;
use crate::page::Page;
use crate::selector::AriaRole;

#[derive(Debug, Clone, Copy)]
pub struct NavigationRegion<'a> {
    page: &'a Page,
}

impl<'a> NavigationRegion<'a> {
    pub(crate) fn new(page: &'a Page) -> Self {
        Self { page }
    }

    pub fn open_menu_button(&self) -> Locator {
        self.page.get_by_role(AriaRole::Button, "Open Menu")
    }

    pub fn close_menu_button(&self) -> Locator {
        self.page.get_by_role(AriaRole::Button, "Close Menu")
    }

    /// Menu link by its `data-test` attribute
    pub fn menu_item(&self, test_id: &str) -> Locator {
        self.page.get_by_test_id(test_id)
    }

    /// Menu link for a known entry
    pub fn entry(&self, item: MenuItem) -> Locator {
        self.menu_item(item.test_id())
    }

    pub fn all_items(&self) -> Locator {
        self.entry(MenuItem::AllItems)
    }

    pub fn about(&self) -> Locator {
        self.entry(MenuItem::About)
    }

    pub fn logout(&self) -> Locator {
        self.entry(MenuItem::Logout)
    }

    pub fn reset_app_state(&self) -> Locator {
        self.entry(MenuItem::ResetAppState)
    }
}
