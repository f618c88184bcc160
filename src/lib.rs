//! # u-atsp
//!
//! Asymmetric Traveling Salesman optimization with Tabu Search: a dense
//! integer distance matrix, greedy and random tour construction, and a
//! time-bounded search engine.
//!
//! ## Modules
//!
//! - [`models`] — Solution type (tour + cyclic weight)
//! - [`distance`] — Dense asymmetric distance matrix
//! - [`constructive`] — Starting tours (nearest neighbor, seeded random)
//! - [`tabu`] — The search engine (tabu list, neighborhood scan, solver)
//! - [`error`] — Crate error type

pub mod constructive;
pub mod distance;
pub mod error;
pub mod models;
pub mod tabu;
