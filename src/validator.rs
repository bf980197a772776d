/* ===============================================================================
Hamburger builder.
Checks applied before any change of a hamburger. 18 October 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use crate::catalog::{Catalog, Category};
use crate::error::DomainError;

// Value is given and not empty
pub fn present(category: Category, value: Option<&str>) -> Result<&str, DomainError> {
   match value {
      Some(s) if !s.is_empty() => Ok(s),
      _ => Err(DomainError::missing(category)),
   }
}

// Value is one of the catalog identifiers for its section
pub fn known(catalog: &Catalog, category: Category, value: &str) -> Result<(), DomainError> {
   if catalog.contains(category, value) {
      Ok(())
   } else {
      Err(DomainError::invalid(category, value))
   }
}

// Both checks above, presence first
pub fn valid<'a>(catalog: &Catalog, category: Category, value: Option<&'a str>) -> Result<&'a str, DomainError> {
   let value = present(category, value)?;
   known(catalog, category, value)?;
   Ok(value)
}

pub fn not_duplicate(toppings: &[String], topping: Option<&str>) -> Result<(), DomainError> {
   match topping {
      Some(t) if toppings.iter().any(|v| v == t) => Err(DomainError::duplicate(t)),
      _ => Ok(()),
   }
}

// Position of the topping to remove
pub fn position(toppings: &[String], topping: &str) -> Result<usize, DomainError> {
   toppings.iter()
   .position(|v| v == topping)
   .ok_or_else(|| DomainError::not_found(topping))
}
