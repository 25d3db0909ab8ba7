//! Individual record checks.
//!
//! Each check inspects one concern and returns every reason it finds. Checks
//! never look at each other's results.

pub mod contact;
pub mod name;
pub mod phone;
