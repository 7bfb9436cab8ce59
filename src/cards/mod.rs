//! Card system: the card value type and the fixed catalog.
//!
//! ## Key Types
//!
//! - `Card`: Point or coin card (closed sum, pattern-matched)
//! - `CatalogEntry`: Card definition plus starting supply quantity
//!
//! The six standard card names are exported as constants.

pub mod card;
pub mod catalog;

pub use card::Card;
pub use catalog::{
    bitcoin, dogecoin, ethereum, framework, method, module, standard_catalog, CatalogEntry,
    BITCOIN, DOGECOIN, ETHEREUM, FRAMEWORK, METHOD, MODULE,
};
