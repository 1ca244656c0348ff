//! National Insurance engine for UK pension contribution planning.
//!
//! This crate calculates employee Class 1 National Insurance on a monthly
//! salary after pension contributions, and compares how different monthly
//! distributions of an annual pension contribution change the NI paid over
//! a year.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
