//! Request extractors.

pub mod host_key;
