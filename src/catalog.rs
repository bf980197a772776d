/* ===============================================================================
Hamburger builder.
Catalog of sizes, fillings and toppings. 18 October 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use std::{collections::HashMap, fs, path::Path};
use once_cell::sync::Lazy;
use parse_display::Display;
use serde::Deserialize;
use strum::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

use crate::error::{DomainError, LoadError};

// Reference instance, built on first use and never changed
static REFERENCE: Lazy<Catalog> = Lazy::new(|| {
   Catalog::default()
   .with(Category::Size, "small", CatalogEntry::new(50, 20))
   .with(Category::Size, "large", CatalogEntry::new(100, 40))
   .with(Category::Filling, "cheese", CatalogEntry::new(10, 20))
   .with(Category::Filling, "salad", CatalogEntry::new(20, 5))
   .with(Category::Filling, "potato", CatalogEntry::new(15, 10))
   .with(Category::Topping, "mayo", CatalogEntry::new(20, 5))
   .with(Category::Topping, "spice", CatalogEntry::new(15, 0))
});

// Section of the catalog, also names the hamburger field in errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr, EnumString, EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
   Size,
   Filling,
   Topping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display)]
#[display("price {price}, calories {calories}")]
pub struct CatalogEntry {
   pub price: u32,
   pub calories: u32,
}

impl CatalogEntry {
   pub const fn new(price: u32, calories: u32) -> Self {
      Self { price, calories }
   }
}

/// Read-only lookup table of everything a hamburger can be made of.
///
/// Populate it with [`Catalog::with`] or load it from JSON, then share it
/// by reference between any number of hamburgers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
   #[serde(default)]
   sizes: HashMap<String, CatalogEntry>,
   #[serde(default)]
   fillings: HashMap<String, CatalogEntry>,
   #[serde(default)]
   toppings: HashMap<String, CatalogEntry>,
}

impl Catalog {
   pub fn reference() -> &'static Catalog {
      &REFERENCE
   }

   // Expected shape: {"sizes": {"small": {"price": 50, "calories": 20}}, "fillings": {..}, "toppings": {..}}
   pub fn from_json(text: &str) -> Result<Self, LoadError> {
      let catalog = serde_json::from_str(text)?;
      Ok(catalog)
   }

   pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
      let text = fs::read_to_string(path)?;
      Self::from_json(&text)
   }

   // Add or replace an entry
   pub fn with(mut self, category: Category, key: impl Into<String>, entry: CatalogEntry) -> Self {
      self.table_mut(category).insert(key.into(), entry);
      self
   }

   pub fn lookup(&self, category: Category, key: &str) -> Result<&CatalogEntry, DomainError> {
      self.table(category)
      .get(key)
      .ok_or_else(|| DomainError::unknown(category, key))
   }

   pub fn contains(&self, category: Category, key: &str) -> bool {
      self.table(category).contains_key(key)
   }

   // Identifiers of the section in alphabetical order
   pub fn keys(&self, category: Category) -> Vec<&str> {
      let mut res: Vec<&str> = self.table(category)
      .keys()
      .map(String::as_str)
      .collect();
      res.sort_unstable();
      res
   }

   pub fn len(&self, category: Category) -> usize {
      self.table(category).len()
   }

   pub fn is_empty(&self) -> bool {
      self.sizes.is_empty() && self.fillings.is_empty() && self.toppings.is_empty()
   }

   fn table(&self, category: Category) -> &HashMap<String, CatalogEntry> {
      match category {
         Category::Size => &self.sizes,
         Category::Filling => &self.fillings,
         Category::Topping => &self.toppings,
      }
   }

   fn table_mut(&mut self, category: Category) -> &mut HashMap<String, CatalogEntry> {
      match category {
         Category::Size => &mut self.sizes,
         Category::Filling => &mut self.fillings,
         Category::Topping => &mut self.toppings,
      }
   }
}
