//! Transcript parsing and clue/answer inference for cluemine.
//!
//! This crate turns an exported chat transcript into clue rows: it parses
//! the export into messages, detects crossword clues by their enumeration
//! pattern, and searches the surrounding conversation for candidate
//! answers.

#![deny(missing_docs, unsafe_code)]

/// Multi-format transcript parsers.
pub mod parsers;

/// Transcript preprocessing.
pub mod preprocess;

/// Text normalization helpers.
pub mod normalize;

/// Enumeration pattern parsing.
pub mod enumeration;

/// Affirmation and annotation classification.
pub mod classify;

/// Clue detection.
pub mod detect;

/// Enumeration-aligned answer matching.
pub mod matcher;

/// Candidate answer ranking.
pub mod rank;

/// Context search for candidate answers.
pub mod search;

/// Export row building.
pub mod report;

/// Error types for analysis operations.
pub mod error;
