//! Core data structures extracted from Gaussian log output.
//!
//! This module provides the types that flow out of the `gausslog` parsers:
//!
//! - [`document`] – The immutable, ordered line sequence of one log file.
//! - [`geometry`] – Standard-orientation coordinate frames and their rows.
//! - [`spectrum`] – Parallel per-mode series from frequency calculations.
//! - [`termination`] – The run outcome reported at the end of the file.
//!
//! The data model intentionally separates the raw line sequence
//! ([`LogDocument`]) from derived entities: every extractor in
//! [`crate::extract`] computes its result fresh from the document, so no
//! derived value ever feeds back into the parsing layer.
//!
//! [`LogDocument`]: document::LogDocument

pub mod document;
pub mod geometry;
pub mod spectrum;
pub mod termination;
