//! Shared test utilities for the docroute workspace.
//!
//! This crate provides standardised content-tree fixtures so crate test
//! suites do not each hand-roll temp directories. It is a dev-dependency
//! only, never published.
//!
//! # Modules
//!
//! - [`site`]: [`TestSite`] builder for Markdown content roots

pub mod site;

pub use site::TestSite;
