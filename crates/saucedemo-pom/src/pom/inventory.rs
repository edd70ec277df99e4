// Inventory region - Product listing page

use super::shared::SharedRegion;
use crate::locator::Locator;
use crate::page::Page;
use crate::selector::AriaRole;

#[derive(Debug, Clone, Copy)]
pub struct InventoryRegion<'a> {
    page: &'a Page,
}

impl<'a> InventoryRegion<'a> {
    pub(crate) fn new(page: &'a Page) -> Self {
        Self { page }
    }

    fn shared(&self) -> SharedRegion<'a> {
        SharedRegion::new(self.page)
    }

    pub fn title(&self) -> Locator {
        self.shared().title()
    }

    pub fn shopping_cart_link(&self) -> Locator {
        self.shared().shopping_cart_link()
    }

    /// Sort select; option values are `az`, `za`, `lohi`, `hilo`
    pub fn product_sort_dropdown(&self) -> Locator {
        self.page.get_by_test_id("product-sort-container")
    }

    /// Every product name on the listing, in display order
    pub fn product_name_list(&self) -> Locator {
        self.page.locator(".inventory_item_name")
    }

    /// Every product price on the listing, in display order
    pub fn product_price_list(&self) -> Locator {
        self.page.locator(".inventory_item_price")
    }

    /// "Add to cart" button of the product with identifier `product_id`
    /// (see [`crate::catalog::product_id`])
    pub fn add_to_cart_button(&self, product_id: &str) -> Locator {
        self.page
            .get_by_test_id(&format!("add-to-cart-{}", product_id))
    }

    /// "Remove" button of the product with identifier `product_id`
    pub fn remove_from_cart_button(&self, product_id: &str) -> Locator {
        self.page.get_by_test_id(&format!("remove-{}", product_id))
    }

    /// Product name link; clicking it opens the details page
    pub fn product_by_name(&self, name: &str) -> Locator {
        self.page.get_by_text(name)
    }

    /// Listing card of the product displayed as `name`
    pub fn product_card(&self, name: &str) -> ProductCard {
        // name element -> link -> label -> description block holding the price bar
        let root = self.product_by_name(name).parent().parent().parent();
        ProductCard { root }
    }
}

/// One product's card on the listing page, for interactions scoped to that product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    root: Locator,
}

impl ProductCard {
    pub fn root(&self) -> &Locator {
        &self.root
    }

    pub fn add_to_cart_button(&self) -> Locator {
        self.root.get_by_role(AriaRole::Button, "Add to cart")
    }

    pub fn remove_button(&self) -> Locator {
        self.root.get_by_role(AriaRole::Button, "Remove")
    }

    pub fn price(&self) -> Locator {
        self.root.locator(".inventory_item_price")
    }
}
