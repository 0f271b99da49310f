use serde::{Deserialize, Serialize};
use tracing::debug;

use truckfest_catalog::Item;
use truckfest_core::{AggregateId, Entity, OrderedMap};

/// Food truck identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodTruckId(pub AggregateId);

impl FoodTruckId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for FoodTruckId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Entity: FoodTruck.
///
/// Stock only changes through [`FoodTruck::stock`] and [`FoodTruck::sell`].
/// An item stays in the inventory once stocked, even after selling out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodTruck {
    id: FoodTruckId,
    name: String,
    inventory: OrderedMap<Item, u64>,
}

impl FoodTruck {
    /// Create a truck with an empty inventory and a fresh identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(FoodTruckId::new(AggregateId::new()), name)
    }

    pub fn with_id(id: FoodTruckId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            inventory: OrderedMap::new(),
        }
    }

    pub fn id_typed(&self) -> FoodTruckId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Quantities on hand, in the order items were first stocked.
    pub fn inventory(&self) -> &OrderedMap<Item, u64> {
        &self.inventory
    }

    /// Every item this truck has ever stocked.
    pub fn items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.inventory.keys()
    }

    /// Whether the item is in this truck's inventory, at any quantity.
    pub fn sells(&self, item: &Item) -> bool {
        self.inventory.contains_key(item)
    }

    /// Quantity on hand; zero for items never stocked.
    pub fn check_stock(&self, item: &Item) -> u64 {
        self.inventory.get(item).copied().unwrap_or(0)
    }

    /// Add `quantity` units of `item`. Saturates at `u64::MAX`.
    pub fn stock(&mut self, item: Item, quantity: u64) {
        let on_hand = self.inventory.entry_or_insert_with(item.clone(), || 0);
        *on_hand = on_hand.saturating_add(quantity);
        debug!(
            truck = %self.name,
            item = item.name(),
            quantity,
            on_hand = *on_hand,
            "stocked item"
        );
    }

    /// Sell `quantity` units if they are all on hand.
    ///
    /// No partial sales: returns `false` and leaves stock untouched otherwise.
    pub fn sell(&mut self, item: &Item, quantity: u64) -> bool {
        let Some(on_hand) = self.inventory.get_mut(item) else {
            debug!(truck = %self.name, item = item.name(), quantity, "item not stocked");
            return false;
        };
        if *on_hand < quantity {
            debug!(
                truck = %self.name,
                item = item.name(),
                quantity,
                on_hand = *on_hand,
                "insufficient stock"
            );
            return false;
        }
        *on_hand -= quantity;
        debug!(
            truck = %self.name,
            item = item.name(),
            quantity,
            on_hand = *on_hand,
            "sold item"
        );
        true
    }

    /// Value of everything on hand at list price, in cents.
    pub fn potential_revenue(&self) -> u64 {
        self.inventory
            .iter()
            .map(|(item, qty)| item.price().total_for(*qty))
            .fold(0u64, u64::saturating_add)
    }
}

impl Entity for FoodTruck {
    type Id = FoodTruckId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn peach_pie() -> Item {
        Item::parse("Peach Pie (Slice)", "$3.75").unwrap()
    }

    fn apple_pie() -> Item {
        Item::parse("Apple Pie (Slice)", "$2.50").unwrap()
    }

    #[test]
    fn starts_with_an_empty_inventory() {
        let truck = FoodTruck::new("Rocky Mountain Pies");
        assert_eq!(truck.name(), "Rocky Mountain Pies");
        assert!(truck.inventory().is_empty());
        assert_eq!(truck.check_stock(&peach_pie()), 0);
        assert!(!truck.sells(&peach_pie()));
    }

    #[test]
    fn stock_accumulates() {
        let mut truck = FoodTruck::new("Rocky Mountain Pies");
        truck.stock(peach_pie(), 30);
        assert_eq!(truck.check_stock(&peach_pie()), 30);

        truck.stock(peach_pie(), 25);
        assert_eq!(truck.check_stock(&peach_pie()), 55);

        truck.stock(apple_pie(), 12);
        let items: Vec<_> = truck.items().cloned().collect();
        assert_eq!(items, vec![peach_pie(), apple_pie()]);
    }

    #[test]
    fn stock_saturates_instead_of_overflowing() {
        let mut truck = FoodTruck::new("Rocky Mountain Pies");
        truck.stock(peach_pie(), u64::MAX);
        truck.stock(peach_pie(), 1);
        assert_eq!(truck.check_stock(&peach_pie()), u64::MAX);
    }

    #[test]
    fn sell_decrements_when_stock_covers_request() {
        let mut truck = FoodTruck::new("Rocky Mountain Pies");
        truck.stock(peach_pie(), 35);

        assert!(truck.sell(&peach_pie(), 5));
        assert_eq!(truck.check_stock(&peach_pie()), 30);

        assert!(truck.sell(&peach_pie(), 30));
        assert_eq!(truck.check_stock(&peach_pie()), 0);
        assert!(truck.sells(&peach_pie()));
    }

    #[test]
    fn sell_is_all_or_nothing() {
        let mut truck = FoodTruck::new("Rocky Mountain Pies");
        truck.stock(peach_pie(), 10);

        assert!(!truck.sell(&peach_pie(), 11));
        assert_eq!(truck.check_stock(&peach_pie()), 10);
    }

    #[test]
    fn selling_an_unstocked_item_fails() {
        let mut truck = FoodTruck::new("Rocky Mountain Pies");
        assert!(!truck.sell(&apple_pie(), 1));
        assert!(!truck.sells(&apple_pie()));
    }

    #[test]
    fn potential_revenue_values_stock_at_list_price() {
        let mut truck = FoodTruck::new("Rocky Mountain Pies");
        truck.stock(peach_pie(), 35);
        truck.stock(apple_pie(), 7);
        // 35 * 3.75 + 7 * 2.50
        assert_eq!(truck.potential_revenue(), 14_875);
    }

    #[test]
    fn identity_is_not_the_name() {
        let a = FoodTruck::new("Ba-Nom-a-Nom");
        let b = FoodTruck::new("Ba-Nom-a-Nom");
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);

        let id = FoodTruckId::new(AggregateId::new());
        assert_eq!(FoodTruck::with_id(id, "Ba-Nom-a-Nom").id_typed(), id);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: stock never goes below zero and a failed sell changes nothing.
        #[test]
        fn sell_never_overdraws(
            stocked in 0u64..1_000,
            requests in prop::collection::vec(0u64..200, 0..20)
        ) {
            let mut truck = FoodTruck::new("Palisade Peach Shack");
            truck.stock(peach_pie(), stocked);

            let mut expected = stocked;
            for request in requests {
                let sold = truck.sell(&peach_pie(), request);
                prop_assert_eq!(sold, request <= expected);
                if sold {
                    expected -= request;
                }
                prop_assert_eq!(truck.check_stock(&peach_pie()), expected);
            }
        }
    }
}
