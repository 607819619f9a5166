//! HazSheet extraction pipeline.
//!
//! A single forward pipeline over an uploaded safety-data-sheet:
//! text extraction -> code matching -> normalization -> reference lookup
//! -> result assembly. Each run is independent and idempotent given the
//! same document and reference workbook.

pub mod lookup;
pub mod matcher;
pub mod normalizer;
pub mod pdf_text;
pub mod pipeline;
pub mod report;
