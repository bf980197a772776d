/* ===============================================================================
Hamburger builder.
Main module, demonstration. 18 October 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use std::{env, error::Error};

use hamburger::{breakdown, Catalog, DomainError, Hamburger, Measure, Vars};

// ============================================================================
// [Run!]
// ============================================================================
fn main() {
   let mut builder = pretty_env_logger::formatted_builder();
   match env::var("RUST_LOG") {
      Ok(filters) => {
         builder.parse_filters(&filters);
      }
      Err(_) => {
         builder.filter_level(log::LevelFilter::Info);
      }
   }
   builder.init();

   log::info!("Starting...");

   if let Err(e) = run() {
      log::error!("main::run: {}", e);
      std::process::exit(1);
   }
}

// Failures the demonstration expects are reported and skipped
fn report<T>(context: &str, res: Result<T, DomainError>) -> Option<T> {
   match res {
      Ok(v) => Some(v),
      Err(e) => {
         log::warn!("{}: {} ({})", context, e, e.kind());
         None
      }
   }
}

fn run() -> Result<(), Box<dyn Error>> {
   // Settings from environments
   let vars = Vars::from_env();
   let catalog = vars.load_catalog()?;
   let catalog: &Catalog = &catalog;

   // Small hamburger with cheese
   let mut hamburger = Hamburger::new(catalog, Some("small"), Some("cheese"))?;
   log::info!("{} => size - {}, filling - {}", hamburger, hamburger.size(), hamburger.filling());

   // With mayo
   hamburger.add_topping(Some("mayo"))?;
   log::info!("{} => toppings - {}", hamburger, hamburger.toppings().join(", "));
   log::info!("Calories: {}", hamburger.calories());
   log::info!("Price: {}", vars.price_with_unit(hamburger.price()));

   // Changed my mind, add spice too
   hamburger.add_topping(Some("spice"))?;
   let terms = breakdown(&hamburger, Measure::Price)
   .iter()
   .map(|c| format!("{}", c))
   .collect::<Vec<_>>()
   .join(" + ");
   log::info!("Price with spice: {} = {}", vars.price_with_unit(hamburger.price()), terms);

   log::info!("Is hamburger large: {}", hamburger.is_size("large"));

   // Remove the spice
   hamburger.remove_topping("spice")?;
   log::info!("you removed spice, {} toppings left", hamburger.toppings().len());

   // Removing it twice is an error
   report("remove spice again", hamburger.remove_topping("spice"));

   // Required parameters not given
   report("no parameters", Hamburger::new(catalog, None, None));

   // Topping instead of size
   report("spice as size", Hamburger::new(catalog, Some("spice"), Some("spice")));

   // The same topping twice
   report("mayo again", hamburger.add_topping(Some("mayo")));

   log::info!("{}: price {}, calories {}", hamburger, vars.price_with_unit(hamburger.price()), hamburger.calories());
   Ok(())
}
