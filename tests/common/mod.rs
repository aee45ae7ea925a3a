#![allow(dead_code)]

use debber::config::PackagingDescriptor;
use debber::parser::parse_str;
use std::path::{Path, PathBuf};

pub const VALID_DESCRIPTOR: &str = r#"
[source]
name = "foo"
maintainer = "A <a@b.c>"
section = "utils"
priority = "optional"
standards-version = "4.6.0"

[[source.changelog]]
version = "1.0-1"
distribution = ["stable"]
urgency = "low"
changes = ["Initial release"]
changed_by = "A <a@b.c>"
date = "Mon, 01 Jan 2024 00:00:00 +0000"

[source.copyright]
format = "https://www.debian.org/doc/packaging-manuals/copyright-format/1.0/"
source = "https://example.com/foo"
upstream_name = "foo"
upstream_contact = "A <a@b.c>"

[[source.copyright.files]]
files = "*"
copyright = ["2024 A"]
license = "MIT"

[[packages]]
name = "foo"
arch = "any"
section = "utils"
priority = "optional"
description = "desc"
"#;

pub fn valid_descriptor() -> PackagingDescriptor {
    parse_str(VALID_DESCRIPTOR, "test").unwrap()
}

pub fn write_descriptor(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("debian.toml");
    std::fs::write(&path, content).unwrap();
    path
}
