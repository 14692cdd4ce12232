//! Test fixture data.

/// A small directory: four fields, six subfields, three researchers and
/// one of every other entity, with links between them.
pub const DIRECTORY: &str = include_str!("directory.json");
