//! # Order
//!
//! The purchased units for one table and one session.
//!
//! ## Shape
//! ```text
//! append(Steak Diane, 2), append(Coffee and biscuits, 1)
//!
//!   items: [Steak Diane, Steak Diane, Coffee and biscuits]
//!            4999          4999         599        total = 10597
//! ```
//! One entry per unit, in insertion order. Entries are never removed.

use std::fmt;

use crate::error::CoreResult;
use crate::menu::MenuItem;
use crate::money::Money;
use crate::validation::validate_quantity;

#[derive(Debug, Clone, Default)]
pub struct Order {
    items: Vec<MenuItem>,
}

impl Order {
    pub fn new() -> Self {
        Order { items: Vec::new() }
    }

    /// Appends `count` copies of `item`.
    ///
    /// ## Returns
    /// - `Ok(())` on success
    /// - `Err(InvalidQuantity)` if `count` is below 1 or above the maximum;
    ///   the order is left unchanged
    pub fn append(&mut self, item: &MenuItem, count: i64) -> CoreResult<()> {
        validate_quantity(count)?;

        // validate_quantity bounds count to 1..=999
        self.items
            .extend(std::iter::repeat(item).take(count as usize).cloned());
        Ok(())
    }

    /// Sum of the prices of every entry, `None` if it does not fit in
    /// [`Money`].
    pub fn total(&self) -> Option<Money> {
        self.items
            .iter()
            .try_fold(Money::zero(), |total, item| total.checked_add(item.price))
    }

    /// Priority dishes first, then everything else.
    ///
    /// A stable two-way partition: relative order inside each group is the
    /// order the units were appended in.
    pub fn prioritized(&self) -> Vec<&MenuItem> {
        let (mut priority, rest): (Vec<&MenuItem>, Vec<&MenuItem>) =
            self.items.iter().partition(|item| item.is_priority());
        priority.extend(rest);
        priority
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}
