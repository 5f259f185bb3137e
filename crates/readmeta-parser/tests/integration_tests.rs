//! Integration test suite for the readme parser.
//!
//! Parses complete readme documents end to end and checks the resulting
//! records: header fields, warnings, sections, FAQ and upgrade notices.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
mod integration;
