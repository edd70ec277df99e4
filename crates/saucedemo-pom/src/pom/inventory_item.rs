// Inventory item region - Product details page

use crate::locator::Locator;
use crate::page::Page;
use crate::selector::AriaRole;

#[derive(Debug, Clone, Copy)]
pub struct InventoryItemRegion<'a> {
    page: &'a Page,
}

impl<'a> InventoryItemRegion<'a> {
    pub(crate) fn new(page: &'a Page) -> Self {
        Self { page }
    }

    pub fn add_to_cart_button(&self) -> Locator {
        self.page.get_by_role(AriaRole::Button, "Add to cart")
    }

    pub fn remove_from_cart_button(&self) -> Locator {
        self.page.get_by_role(AriaRole::Button, "Remove")
    }

    /// Product name; select_product checks it after opening a product
    pub fn name(&self) -> Locator {
        self.page.get_by_test_id("inventory-item-name")
    }

    pub fn description(&self) -> Locator {
        self.page.locator(".inventory_details_desc")
    }

    pub fn price(&self) -> Locator {
        self.page.locator(".inventory_details_price")
    }

    pub fn back_to_products_button(&self) -> Locator {
        self.page.get_by_test_id("back-to-products")
    }
}
