//! Service layer: orchestration between HTTP handlers and the domain.

pub mod game;
