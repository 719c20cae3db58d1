//! File I/O for documents.
//!
//! This module loads document text from disk or stdin. Gzip-compressed input
//! is decompressed transparently.

pub mod loader;
