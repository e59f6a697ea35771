//! Core submission pipeline for Ficha.
//!
//! This crate contains the registration pipeline with ZERO web or database
//! dependencies. Every external collaborator sits behind a trait so each stage
//! can be exercised on its own.
//!
//! # Modules
//!
//! - `registration` - Payload decoding and record normalization
//! - `storage` - Object storage through OpenDAL
//! - `attachment` - Per-file upload, metadata and signed links
//! - `notification` - Back-office email rendering and delivery
//! - `submission` - The orchestrating pipeline

pub mod attachment;
pub mod notification;
pub mod registration;
pub mod storage;
pub mod submission;

#[cfg(test)]
mod testing;
