/* ===============================================================================
Hamburger builder.
Settings from environment variables. 18 October 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use std::{borrow::Cow, env, path::PathBuf};
use smart_default::SmartDefault;

use crate::catalog::{Catalog, Category};
use crate::error::LoadError;

pub const CATALOG_VAR: &str = "HAMBURGER_CATALOG";
pub const PRICE_UNIT_VAR: &str = "PRICE_UNIT";

// Enviroment variables
#[derive(Debug, Clone, SmartDefault)]
pub struct Vars {
   // JSON file with sizes, fillings and toppings, reference catalog if not set
   catalog_path: Option<PathBuf>,

   // Price suffix
   #[default = ""]
   price_unit: String,
}

impl Vars {
   pub fn from_env() -> Self {
      Self::from_lookup(|name| env::var(name).ok())
   }

   // Settings from any source of named values
   pub fn from_lookup<F>(lookup: F) -> Self
   where F: Fn(&str) -> Option<String>
   {
      let catalog_path = match lookup(CATALOG_VAR) {
         Some(s) if !s.is_empty() => {
            log::info!("catalog file is {}", s);
            Some(PathBuf::from(s))
         }
         _ => {
            log::info!("Environment variable {} is not set, empty or not unicode, reference catalog", CATALOG_VAR);
            None
         }
      };

      let price_unit = lookup(PRICE_UNIT_VAR).unwrap_or_default();

      Vars {
         catalog_path,
         price_unit,
      }
   }

   pub fn catalog_path(&self) -> Option<&PathBuf> {
      self.catalog_path.as_ref()
   }

   // Catalog from the file if given, otherwise the built-in one
   pub fn load_catalog(&self) -> Result<Cow<'static, Catalog>, LoadError> {
      match &self.catalog_path {
         Some(path) => {
            let catalog = Catalog::from_file(path)?;
            log::info!("Catalog loaded from {}: {} sizes, {} fillings, {} toppings",
               path.display(),
               catalog.len(Category::Size),
               catalog.len(Category::Filling),
               catalog.len(Category::Topping)
            );
            Ok(Cow::Owned(catalog))
         }
         None => Ok(Cow::Borrowed(Catalog::reference())),
      }
   }

   // Price with units
   pub fn price_with_unit(&self, price: u64) -> String {
      format!("{}{}", price, self.price_unit)
   }
}
