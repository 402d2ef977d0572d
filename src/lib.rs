//! tradelens: trade journal analytics and risk metrics engine.
//!
//! Hexagonal architecture: analytics logic in [`domain`], port traits in
//! [`ports`], concrete implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
