//! Common constants used throughout debber.

/// Descriptor file name used when `--name` is not given
pub const DEFAULT_DESCRIPTOR: &str = "debian.toml";

/// Base directory the `debian/` tree is created under by default
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Name of the generated packaging directory
pub const DEBIAN_DIR: &str = "debian";

/// First line of every descriptor written by `debber new`
pub const GENERATED_HEADER: &str = "# Generated by debber";

/// Copyright format written into new descriptors
pub const COPYRIGHT_FORMAT: &str =
    "https://www.debian.org/doc/packaging-manuals/copyright-format/1.0/";
