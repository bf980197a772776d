/* ===============================================================================
Hamburger builder.
Domain and catalog loading errors. 18 October 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use derive_more::{Display, Error, From};
use strum::AsRefStr;

use crate::catalog::Category;

// Why an operation on a hamburger was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, strum::Display)]
pub enum ErrorKind {
   MissingField, // value not given or empty
   InvalidValue, // value is not in the catalog
   Duplicate, // topping is already added
   NotFound, // topping to remove is not added
   UnknownIdentifier, // direct catalog lookup failed
}

/// Typed failure of a construction, mutation or catalog lookup.
///
/// The message is meant for people, `kind` and `category` for code.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{message}")]
pub struct DomainError {
   kind: ErrorKind,
   category: Category,
   message: String,
}

impl DomainError {
   pub fn missing(category: Category) -> Self {
      Self {
         kind: ErrorKind::MissingField,
         category,
         message: format!("no {} given", category),
      }
   }

   pub fn invalid(category: Category, value: &str) -> Self {
      Self {
         kind: ErrorKind::InvalidValue,
         category,
         message: format!("invalid {} {}", category, value),
      }
   }

   pub fn duplicate(topping: &str) -> Self {
      Self {
         kind: ErrorKind::Duplicate,
         category: Category::Topping,
         message: format!("duplicate topping {}", topping),
      }
   }

   pub fn not_found(topping: &str) -> Self {
      Self {
         kind: ErrorKind::NotFound,
         category: Category::Topping,
         message: format!("you don't have such topping ({}) in your hamburger", topping),
      }
   }

   pub fn unknown(category: Category, key: &str) -> Self {
      Self {
         kind: ErrorKind::UnknownIdentifier,
         category,
         message: format!("unknown {} {}", category, key),
      }
   }

   pub fn kind(&self) -> ErrorKind {
      self.kind
   }

   // The field (catalog section) the failure is about
   pub fn category(&self) -> Category {
      self.category
   }

   pub fn message(&self) -> &str {
      &self.message
   }
}

// Catalog supplied from outside could not be used
#[derive(Debug, Display, Error, From)]
pub enum LoadError {
   // The inner error is part of the message, not a separate source
   #[display("cannot read catalog: {_0}")]
   Io(#[error(not(source))] std::io::Error),
   #[display("cannot parse catalog: {_0}")]
   Json(#[error(not(source))] serde_json::Error),
}
