//! Runtime configuration loading.

pub mod phrases;
