//! Test Module
//!
//! Cross-module test suite for the analysis core.
//!
//! ## Test Categories
//! - `classifier_tests`: static answers, triage, fact and emotion branches, confidence bounds
//! - `screening_tests`: news screener routing, scoring and sources

pub mod screening_tests;
