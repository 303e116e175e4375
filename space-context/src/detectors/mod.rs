//! Environment detectors.
//!
//! Each detector handles one external source: a command or a file.

pub mod git;
pub mod go;
pub mod kube;
