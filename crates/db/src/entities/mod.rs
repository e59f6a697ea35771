//! `SeaORM` entities.

#![allow(missing_docs)]

pub mod prelude;

pub mod form_files;
pub mod form_submissions;
