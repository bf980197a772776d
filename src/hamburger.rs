/* ===============================================================================
Hamburger builder.
Hamburger made of size, filling and toppings. 18 October 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use std::fmt;

use crate::calculator::{self, Measure};
use crate::catalog::{Catalog, Category};
use crate::error::DomainError;
use crate::validator;

/// A hamburger whose size, filling and toppings are all taken from `catalog`.
///
/// An instance exists only if construction passed validation, and every
/// later change is validated too, so calculations never miss an entry.
#[derive(Debug, Clone)]
pub struct Hamburger<'c> {
   catalog: &'c Catalog,
   size: String,
   filling: String,
   toppings: Vec<String>, // in order of adding, without repeats
}

impl<'c> Hamburger<'c> {
   // Checks size first, then filling, and reports only the first problem
   pub fn new(catalog: &'c Catalog, size: Option<&str>, filling: Option<&str>) -> Result<Self, DomainError> {
      let size = validator::valid(catalog, Category::Size, size)?;
      let filling = validator::valid(catalog, Category::Filling, filling)?;

      Ok(Self {
         catalog,
         size: size.to_owned(),
         filling: filling.to_owned(),
         toppings: Vec::new(),
      })
   }

   pub fn add_topping(&mut self, topping: Option<&str>) -> Result<(), DomainError> {
      // Duplicate check goes before presence check
      validator::not_duplicate(&self.toppings, topping)?;
      let topping = validator::valid(self.catalog, Category::Topping, topping)?;

      self.toppings.push(topping.to_owned());
      Ok(())
   }

   pub fn remove_topping(&mut self, topping: &str) -> Result<(), DomainError> {
      let index = validator::position(&self.toppings, topping)?;
      self.toppings.remove(index);
      Ok(())
   }

   pub fn catalog(&self) -> &'c Catalog {
      self.catalog
   }

   pub fn size(&self) -> &str {
      &self.size
   }

   pub fn filling(&self) -> &str {
      &self.filling
   }

   pub fn toppings(&self) -> &[String] {
      &self.toppings
   }

   pub fn has_topping(&self, topping: &str) -> bool {
      self.toppings.iter().any(|t| t == topping)
   }

   pub fn is_size(&self, size: &str) -> bool {
      self.size == size
   }

   pub fn price(&self) -> u64 {
      calculator::total(self, Measure::Price)
   }

   pub fn calories(&self) -> u64 {
      calculator::total(self, Measure::Calories)
   }
}

// "small cheese with mayo, spice"
impl fmt::Display for Hamburger<'_> {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "{} {}", self.size, self.filling)?;
      if !self.toppings.is_empty() {
         write!(f, " with {}", self.toppings.join(", "))?;
      }
      Ok(())
   }
}
