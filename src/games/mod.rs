//! Game implementations.

pub mod numfact;
