/* ===============================================================================
Hamburger builder.
Library root. 18 October 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

//! A hamburger of a size, a filling and unique toppings, priced from a catalog.
//!
//! ```
//! use hamburger::{Catalog, Hamburger};
//!
//! let mut h = Hamburger::new(Catalog::reference(), Some("small"), Some("cheese"))?;
//! h.add_topping(Some("mayo"))?;
//! assert_eq!((h.price(), h.calories()), (80, 45));
//! # Ok::<(), hamburger::DomainError>(())
//! ```

pub mod calculator;
pub mod catalog;
pub mod environment;
pub mod error;
pub mod hamburger;
pub mod validator;

pub use crate::calculator::{breakdown, total_calories, total_price, Component, Measure};
pub use crate::catalog::{Catalog, CatalogEntry, Category};
pub use crate::environment::Vars;
pub use crate::error::{DomainError, ErrorKind, LoadError};
pub use crate::hamburger::Hamburger;
