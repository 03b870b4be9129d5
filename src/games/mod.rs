//! Game implementations.

pub mod race;
