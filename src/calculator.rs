/* ===============================================================================
Hamburger builder.
Price and calories of a hamburger. 18 October 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use parse_display::Display;
use smart_default::SmartDefault;

use crate::catalog::{Catalog, CatalogEntry, Category};
use crate::hamburger::Hamburger;

// What to sum up
#[derive(Debug, Clone, Copy, PartialEq, Eq, SmartDefault, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Measure {
   #[default]
   Price,
   Calories,
}

impl Measure {
   pub fn of(self, entry: &CatalogEntry) -> u32 {
      match self {
         Measure::Price => entry.price,
         Measure::Calories => entry.calories,
      }
   }
}

// One term of the total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{category} {key}: {amount}")]
pub struct Component<'a> {
   pub category: Category,
   pub key: &'a str,
   pub amount: u32,
}

// Size, filling, then toppings in the order they were added
pub fn breakdown<'a>(item: &'a Hamburger<'_>, measure: Measure) -> Vec<Component<'a>> {
   let catalog = item.catalog();
   let component = |category: Category, key: &'a str| Component {
      category,
      key,
      amount: amount(catalog, category, key, measure),
   };

   let mut res = Vec::with_capacity(2 + item.toppings().len());
   res.push(component(Category::Size, item.size()));
   res.push(component(Category::Filling, item.filling()));
   res.extend(item.toppings().iter().map(|t| component(Category::Topping, t.as_str())));
   res
}

// Summed in u64, so any number of u32 terms the catalog allows fits
pub fn total(item: &Hamburger<'_>, measure: Measure) -> u64 {
   breakdown(item, measure)
   .iter()
   .map(|c| u64::from(c.amount))
   .sum()
}

pub fn total_price(item: &Hamburger<'_>) -> u64 {
   total(item, Measure::Price)
}

pub fn total_calories(item: &Hamburger<'_>) -> u64 {
   total(item, Measure::Calories)
}

// Hamburger keys were validated against this very catalog, the lookup cannot miss
fn amount(catalog: &Catalog, category: Category, key: &str, measure: Measure) -> u32 {
   catalog.lookup(category, key)
   .map(|entry| measure.of(entry))
   .unwrap_or_default()
}

#[cfg(test)]
mod tests {
   use super::*;
   use proptest::prelude::*;

   fn hamburger<'c>(catalog: &'c Catalog, size: &str, filling: &str, toppings: &[&str]) -> Hamburger<'c> {
      let mut h = Hamburger::new(catalog, Some(size), Some(filling)).unwrap();
      for t in toppings {
         h.add_topping(Some(*t)).unwrap();
      }
      h
   }

   #[test]
   fn small_cheese_without_toppings() {
      let h = hamburger(Catalog::reference(), "small", "cheese", &[]);
      assert_eq!(total_price(&h), 60);
      assert_eq!(total_calories(&h), 40);
   }

   #[test]
   fn toppings_add_up() {
      let mut h = hamburger(Catalog::reference(), "small", "cheese", &["mayo"]);
      assert_eq!(total_price(&h), 80);
      assert_eq!(total_calories(&h), 45);

      h.add_topping(Some("spice")).unwrap();
      assert_eq!(total_price(&h), 95);
      assert_eq!(total_calories(&h), 45);

      h.remove_topping("spice").unwrap();
      assert_eq!(total_price(&h), 80);
      assert_eq!(total_calories(&h), 45);
   }

   #[test]
   fn large_potato_everything() {
      let h = hamburger(Catalog::reference(), "large", "potato", &["spice", "mayo"]);
      assert_eq!(total_price(&h), 100 + 15 + 15 + 20);
      assert_eq!(total_calories(&h), 40 + 10 + 0 + 5);
   }

   #[test]
   fn breakdown_follows_hamburger() {
      let h = hamburger(Catalog::reference(), "small", "cheese", &["mayo", "spice"]);
      let lines: Vec<String> = breakdown(&h, Measure::Price)
      .iter()
      .map(ToString::to_string)
      .collect();
      assert_eq!(lines, vec![
         "size small: 50",
         "filling cheese: 10",
         "topping mayo: 20",
         "topping spice: 15",
      ]);
   }

   #[test]
   fn default_measure_is_price() {
      assert_eq!(Measure::default(), Measure::Price);
      assert_eq!(Measure::Calories.to_string(), "calories");
   }

   #[test]
   fn custom_catalog() {
      let catalog = Catalog::default()
      .with(Category::Size, "kid", CatalogEntry::new(30, 10))
      .with(Category::Filling, "fish", CatalogEntry::new(40, 15))
      .with(Category::Topping, "onion", CatalogEntry::new(5, 2));
      let h = hamburger(&catalog, "kid", "fish", &["onion"]);
      assert_eq!(total_price(&h), 75);
      assert_eq!(total_calories(&h), 27);
   }

   #[test]
   fn largest_values_do_not_overflow() {
      let catalog = Catalog::from_json(r#"{
         "sizes": {"big": {"price": 4294967295, "calories": 4294967295}},
         "fillings": {"beef": {"price": 1, "calories": 4294967295}},
         "toppings": {"gold": {"price": 4294967295, "calories": 0}}
      }"#).unwrap();
      let h = hamburger(&catalog, "big", "beef", &["gold"]);
      assert_eq!(total_price(&h), 2 * u64::from(u32::MAX) + 1);
      assert_eq!(total_calories(&h), 2 * u64::from(u32::MAX));
      assert_eq!(h.price(), total_price(&h));
   }

   proptest! {
      #[test]
      fn topping_order_does_not_matter(spice_first in any::<bool>(), large in any::<bool>(), filling in 0usize..3) {
         let catalog = Catalog::reference();
         let size = if large { "large" } else { "small" };
         let filling = ["cheese", "salad", "potato"][filling];
         let order: &[&str] = if spice_first { &["spice", "mayo"] } else { &["mayo", "spice"] };

         let a = hamburger(catalog, size, filling, order);
         let b = hamburger(catalog, size, filling, &["mayo", "spice"]);
         prop_assert_eq!(total_price(&a), total_price(&b));
         prop_assert_eq!(total_calories(&a), total_calories(&b));
      }
   }
}
