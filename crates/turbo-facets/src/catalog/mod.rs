//! Product catalog module.
//!
//! Contains the product shape consumed from the catalog data source.

mod catalog;
mod product;

pub use catalog::Catalog;
pub use product::{ApparelType, Product, ProductFamily};
