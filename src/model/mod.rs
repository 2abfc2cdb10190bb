//! # Model Module
//!
//! Typed representation of the input document: a map of API names to
//! [`Api`] definitions, each owning its [`Scenario`]s and [`Environment`]s.
//!
//! The model carries data only. Defaults (scenario numbering) are applied by
//! [`crate::validator::validate`], which returns a new model rather than
//! mutating the loaded one.
//!
//! ## Document shape
//!
//! ```json
//! {
//!   "petstore": {
//!     "environments": [
//!       { "name": "dev", "protocol": "http", "host": "localhost", "port": 8080 }
//!     ],
//!     "scenarios": [
//!       {
//!         "requestMethod": "POST",
//!         "contextPath": "/pets",
//!         "consumes": "application/json",
//!         "produces": "application/json",
//!         "responseStatus": 201,
//!         "hasRequestBody": true,
//!         "hasResponseBody": true
//!       }
//!     ]
//!   }
//! }
//! ```

mod load;
mod types;

#[cfg(test)]
mod tests;

pub use load::*;
pub use types::*;
