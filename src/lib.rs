#![warn(
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms
)]
#![deny(rustdoc::broken_intra_doc_links)]

//! `jvm-descriptors` classifies JVM type descriptors without ever panicking.
//!
//! It converts between three views of a runtime type: the class-file descriptor string
//! (`I`, `[Ljava/lang/String;`, `(II)V`), its [`Sort`](types::sort::Sort), and the type
//! implied by a local-variable access instruction.
//! Malformed descriptors are expected when analyzing arbitrary class files, so every
//! operation on untrusted input reports failure through its return value.
//!
//! ## Features
#![doc = document_features::document_features!()]

pub(crate) mod intrinsics;
pub mod jvm;
pub mod types;

/// Test utilities
#[cfg(test)]
pub mod tests;
