use chrono::Local;
use tracing::{debug, info};

use truckfest_catalog::Item;
use truckfest_core::{DomainError, DomainResult, Entity};
use truckfest_inventory::{FoodTruck, FoodTruckId};

use crate::date::format_event_date;
use crate::policy::OverstockPolicy;
use crate::rollup::TotalInventory;

/// A market event and the food trucks attending it.
///
/// The event owns its trucks. Every view below is computed from their current
/// stock on each call; only [`Event::sell`] and restocking through
/// [`Event::food_truck_mut`] change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    name: String,
    food_trucks: Vec<FoodTruck>,
    overstock_policy: OverstockPolicy,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            food_trucks: Vec::new(),
            overstock_policy: OverstockPolicy::default(),
        }
    }

    pub fn with_overstock_policy(mut self, policy: OverstockPolicy) -> Self {
        self.overstock_policy = policy;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn overstock_policy(&self) -> &OverstockPolicy {
        &self.overstock_policy
    }

    /// Trucks in the order they were added.
    pub fn food_trucks(&self) -> &[FoodTruck] {
        &self.food_trucks
    }

    /// Append a truck. Adding the same truck twice is not detected.
    pub fn add_food_truck(&mut self, truck: FoodTruck) -> FoodTruckId {
        let id = truck.id_typed();
        debug!(event = %self.name, truck = truck.name(), truck_id = %id, "food truck added");
        self.food_trucks.push(truck);
        id
    }

    pub fn food_truck(&self, id: &FoodTruckId) -> DomainResult<&FoodTruck> {
        self.food_trucks
            .iter()
            .find(|truck| truck.id() == id)
            .ok_or_else(DomainError::not_found)
    }

    pub fn food_truck_mut(&mut self, id: &FoodTruckId) -> DomainResult<&mut FoodTruck> {
        self.food_trucks
            .iter_mut()
            .find(|truck| truck.id() == id)
            .ok_or_else(DomainError::not_found)
    }

    pub fn food_truck_names(&self) -> Vec<&str> {
        self.food_trucks.iter().map(FoodTruck::name).collect()
    }

    /// Trucks whose inventory lists `item`, including those sold out of it.
    pub fn food_trucks_that_sell(&self, item: &Item) -> Vec<&FoodTruck> {
        self.food_trucks
            .iter()
            .filter(|truck| truck.sells(item))
            .collect()
    }

    /// Names of the distinct items across all trucks, ascending.
    pub fn sorted_item_list(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .total_inventory()
            .items()
            .map(|item| item.name().to_owned())
            .collect();
        names.sort();
        names
    }

    pub fn total_inventory(&self) -> TotalInventory<'_> {
        TotalInventory::from_trucks(&self.food_trucks)
    }

    /// Items the overstock policy flags, in [`Event::total_inventory`] order.
    pub fn overstock_items(&self) -> Vec<Item> {
        self.total_inventory()
            .iter()
            .filter(|(_, total)| self.overstock_policy.flags(total))
            .map(|(item, _)| item.clone())
            .collect()
    }

    /// Sell `quantity` units of `item`, drawing from trucks in the order they
    /// were added.
    ///
    /// Each truck gives up to what it has on hand before moving on to the next.
    /// If the whole event holds fewer than `quantity` units nothing is sold and
    /// `false` is returned.
    pub fn sell(&mut self, item: &Item, quantity: u64) -> bool {
        let available = self
            .food_trucks
            .iter()
            .map(|truck| truck.check_stock(item))
            .fold(0u64, u64::saturating_add);

        if available < quantity {
            debug!(
                event = %self.name,
                item = item.name(),
                quantity,
                available,
                "sale rejected: insufficient stock across trucks"
            );
            return false;
        }

        let mut remaining = quantity;
        for truck in self.food_trucks.iter_mut() {
            if remaining == 0 {
                break;
            }
            let take = remaining.min(truck.check_stock(item));
            if take == 0 {
                continue;
            }
            let sold = truck.sell(item, take);
            debug_assert!(sold, "take never exceeds stock on hand");
            remaining -= take;
        }

        info!(event = %self.name, item = item.name(), quantity, "sale completed");
        true
    }

    /// Today's date in local time, formatted `DD/MM/YYYY`.
    pub fn date(&self) -> String {
        format_event_date(Local::now().date_naive())
    }

    /// Value of all stock on hand at list price, in cents.
    pub fn total_potential_revenue(&self) -> u64 {
        self.food_trucks
            .iter()
            .map(FoodTruck::potential_revenue)
            .fold(0u64, u64::saturating_add)
    }
}
