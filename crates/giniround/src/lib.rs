//! # Giniround
//!
//! Command-line front end for the gini rounding conformance harness.

pub mod cli;
pub mod commands;
pub mod report;
