//! # Menu Catalog
//!
//! The fixed menu, loaded once at startup and never edited.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::PRIORITY_ITEMS;

/// (name, price in pence) in menu order.
const MENU: [(&str, i64); 17] = [
    ("House Cured Bourbon Gravadlax", 999),
    ("Bloc de Pate", 1499),
    ("Village Market Tasting Plate", 799),
    ("White's Out Seafood Cocktail", 1499),
    ("Twist Baked Essex Camembert Soufflé", 999),
    ("28 Day Aged rib of Beef", 4599),
    ("Steak Diane", 4999),
    ("Fresh Caught Lobster", 4999),
    ("Rack of Welsh Lamb", 2499),
    ("Pan Fried Cod Loin", 2499),
    ("Charred Cauliflower Steak", 2999),
    ("Poached Alice Pears", 899),
    ("Apricot & Brandy Macaroon", 799),
    ("Floating Island", 799),
    ("Dark Chocolate & Strawberry Cheesecake", 899),
    ("Macadamia Blondie & Chocolate Brownie", 899),
    ("Coffee and biscuits", 599),
];

/// A dish on the menu.
///
/// Orders keep their own copy of the item taken at order time, so an
/// order line never changes after it is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuItem {
    pub name: String,
    pub price: Money,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        MenuItem {
            name: name.into(),
            price,
        }
    }

    /// Whether the kitchen fires this dish ahead of the rest.
    pub fn is_priority(&self) -> bool {
        PRIORITY_ITEMS.contains(&self.name.as_str())
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.price)
    }
}

/// Name → item lookup over the fixed menu.
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
    by_name: HashMap<String, usize>,
}

impl MenuCatalog {
    /// Builds the catalog from the house menu.
    pub fn load() -> Self {
        let items: Vec<MenuItem> = MENU
            .iter()
            .map(|(name, pence)| MenuItem::new(*name, Money::from_cents(*pence)))
            .collect();
        let by_name = items
            .iter()
            .enumerate()
            .map(|(index, item)| (item.name.clone(), index))
            .collect();

        MenuCatalog { items, by_name }
    }

    /// Exact, case-sensitive name lookup.
    pub fn lookup(&self, name: &str) -> Option<&MenuItem> {
        self.by_name.get(name).map(|&index| &self.items[index])
    }

    /// Items in menu order.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::load()
    }
}
