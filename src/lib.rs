//! debber generates a Debian packaging directory from one TOML descriptor.
//! The descriptor is decoded and validated, then rendered into
//! `debian/control`, `debian/rules`, `debian/changelog` and `debian/copyright`.

/// Command-line interface module for the debber application
pub mod cli;

/// Packaging descriptor model (`debian.toml`)
pub mod config;

/// Default file names and fixed strings
pub mod constants;

/// Error types and handling for the debber application
pub mod error;

/// Logger initialization
pub mod logger;

/// Descriptor reading, decoding and validation
pub mod parser;

/// `create` command orchestration
pub mod processor;

/// Per-file projections of the descriptor
pub mod render;

/// Template engine and embedded templates
pub mod renderer;

/// `debian/` directory creation
pub mod scaffold;

/// Descriptor template for the `new` command
pub mod template;

/// Field rules checked after decoding
pub mod validation;
