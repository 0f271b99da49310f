//! Event-wide inventory rollup.

use truckfest_catalog::Item;
use truckfest_core::OrderedMap;
use truckfest_inventory::FoodTruck;

/// Aggregate stock of one item across an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemTotal<'a> {
    /// Sum of the item's stock over every truck.
    pub quantity: u64,
    /// Trucks holding at least one unit, in the order they joined the event.
    pub food_trucks: Vec<&'a FoodTruck>,
}

/// Per-item totals, keyed in first-seen order.
///
/// Items are visited truck by truck in the order trucks joined, and within a
/// truck in the order they were first stocked. Borrows the event's trucks, so
/// it reflects a single snapshot and must be rebuilt after any stock change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TotalInventory<'a> {
    totals: OrderedMap<Item, ItemTotal<'a>>,
}

impl<'a> TotalInventory<'a> {
    pub(crate) fn from_trucks(trucks: &'a [FoodTruck]) -> Self {
        let mut totals: OrderedMap<Item, ItemTotal<'a>> = OrderedMap::new();
        for truck in trucks {
            for (item, &quantity) in truck.inventory().iter() {
                let total = totals.entry_or_insert_with(item.clone(), ItemTotal::default);
                total.quantity = total.quantity.saturating_add(quantity);
                if quantity > 0 {
                    total.food_trucks.push(truck);
                }
            }
        }
        Self { totals }
    }

    pub fn get(&self, item: &Item) -> Option<&ItemTotal<'a>> {
        self.totals.get(item)
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.totals.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Item, &ItemTotal<'a>)> + '_ {
        self.totals.iter()
    }
}
