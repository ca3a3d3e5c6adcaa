//! Command-line interface for cluemine.
//!
//! This crate provides the CLI for extracting crossword clues and
//! candidate answers from exported chat transcripts.

#![deny(missing_docs, unsafe_code)]

/// CLI command definitions and parsing.
pub mod commands;

/// CLI application entry point and configuration.
pub mod app;

/// Error types for CLI operations.
pub mod error;
