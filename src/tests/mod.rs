//! Test modules for hirehub-cli.
//!
//! - `model_test` - record deserialization and shape normalization
//! - `view_test` - filter/sort/paginate view-model properties
//! - `render_test` - row projection, escaping, pagination controls
//! - `form_test` - field validation and submit gating
//! - `api_test` - payload serialization and error formatting
//! - `store_test` - listing envelope normalization

#[cfg(test)]
pub mod model_test;

#[cfg(test)]
pub mod view_test;



#[cfg(test)]
pub mod api_test;

#[cfg(test)]
pub mod store_test;
