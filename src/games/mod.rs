//! Game implementations.

pub mod petteia;
