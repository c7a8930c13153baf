//! Exif tag dictionary and directory kinds
//!
//! This module loads the tag, field type and JPEG marker name tables from
//! the bundled TOML asset. The tables are parsed once at first use and are
//! read-only afterwards, so concurrent decode calls can share them freely.

use std::collections::HashMap;
use std::fs;

use lazy_static::lazy_static;

use crate::exif::constants::tags;
use crate::exif::errors::{ExifError, ExifResult};

lazy_static! {
    // Parse the TOML asset at first use
    static ref EXIF_DEFINITIONS: ExifDefinitions = {
        let content = include_str!("../../exif_tags.toml");
        ExifDefinitions::from_str(content).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse Exif tag definitions: {}", e);
                ExifDefinitions::default()
            })
    };
}

/// The kind of directory a tag code is resolved against.
///
/// Tag codes are only unique within a directory kind (GPS tag 1 and
/// Interoperability tag 1 are different tags), so every lookup is scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IfdKind {
    /// IFD0/IFD1 chain (TIFF baseline tags)
    Primary,
    /// Exif private directory
    Exif,
    /// GPS info directory
    Gps,
    /// Interoperability directory
    Interop,
}

impl IfdKind {
    /// Returns a display name for this directory kind
    pub fn name(&self) -> &'static str {
        match self {
            IfdKind::Primary => "IFD",
            IfdKind::Exif => "Exif IFD",
            IfdKind::Gps => "GPS IFD",
            IfdKind::Interop => "Interoperability IFD",
        }
    }
}

/// One tag definition: display name plus the expected field type
#[derive(Debug, Clone)]
pub struct TagDef {
    pub name: String,
    pub type_hint: Option<String>,
}

/// Container for Exif tag, field type and marker definitions
#[derive(Debug, Default)]
pub struct ExifDefinitions {
    // Maps field type codes to names
    pub type_names: HashMap<u16, String>,
    // Maps primary (IFD0/IFD1) tag codes to definitions
    pub ifd_tags: HashMap<u16, TagDef>,
    // Maps Exif private directory tag codes to definitions
    pub exif_tags: HashMap<u16, TagDef>,
    // Maps GPS directory tag codes to definitions
    pub gps_tags: HashMap<u16, TagDef>,
    // Maps Interoperability directory tag codes to definitions
    pub interop_tags: HashMap<u16, TagDef>,
    // Maps JPEG marker codes to names
    pub marker_names: HashMap<u16, String>,
}

impl ExifDefinitions {
    /// Parse Exif definitions from a TOML string
    pub fn from_str(content: &str) -> ExifResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(ExifError::GenericError(format!("Failed to parse TOML: {}", e))),
        };

        let mut defs = ExifDefinitions::default();

        Self::parse_name_table(&toml_value, "field_types", &mut defs.type_names);
        Self::parse_name_table(&toml_value, "markers", &mut defs.marker_names);

        Self::parse_tag_table(&toml_value, "ifd_tags", &mut defs.ifd_tags);
        Self::parse_tag_table(&toml_value, "exif_tags", &mut defs.exif_tags);
        Self::parse_tag_table(&toml_value, "gps_tags", &mut defs.gps_tags);
        Self::parse_tag_table(&toml_value, "interop_tags", &mut defs.interop_tags);

        Ok(defs)
    }

    /// Helper to parse simple code-to-name tables from TOML
    fn parse_name_table(toml_value: &toml::Value, table_name: &str, target: &mut HashMap<u16, String>) {
        if let Some(table) = toml_value.get(table_name).and_then(|v| v.as_table()) {
            for (k, v) in table {
                if let (Ok(id), Some(name)) = (k.parse::<u16>(), v.as_str()) {
                    target.insert(id, name.to_string());
                }
            }
        }
    }

    /// Helper to parse tag tables ({ name, type } entries) from TOML
    fn parse_tag_table(toml_value: &toml::Value, table_name: &str, target: &mut HashMap<u16, TagDef>) {
        if let Some(table) = toml_value.get(table_name).and_then(|v| v.as_table()) {
            for (k, v) in table {
                let id = match k.parse::<u16>() {
                    Ok(id) => id,
                    Err(_) => continue,
                };

                let entry = match v.as_table() {
                    Some(entry) => entry,
                    None => continue,
                };

                if let Some(name) = entry.get("name").and_then(|n| n.as_str()) {
                    let type_hint = entry.get("type")
                        .and_then(|t| t.as_str())
                        .map(|t| t.to_string());

                    target.insert(id, TagDef { name: name.to_string(), type_hint });
                }
            }
        }
    }

    /// Load Exif definitions from a TOML file
    pub fn from_file(path: &str) -> ExifResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => return Err(ExifError::IoError(e)),
        };

        Self::from_str(&contents)
    }

    /// Returns the tag tables searched for the given directory kind.
    ///
    /// The Exif private directory shares the primary table (some writers
    /// put baseline tags in either), GPS and Interoperability tables stand
    /// alone because their codes collide with baseline codes.
    fn tag_tables(&self, kind: IfdKind) -> [&HashMap<u16, TagDef>; 2] {
        match kind {
            IfdKind::Primary => [&self.ifd_tags, &self.exif_tags],
            IfdKind::Exif => [&self.exif_tags, &self.ifd_tags],
            IfdKind::Gps => [&self.gps_tags, &self.gps_tags],
            IfdKind::Interop => [&self.interop_tags, &self.interop_tags],
        }
    }

    /// Get the definition for a tag code, scoped by directory kind
    pub fn get_tag_def(&self, kind: IfdKind, tag: u16) -> Option<&TagDef> {
        let [first, second] = self.tag_tables(kind);
        first.get(&tag).or_else(|| second.get(&tag))
    }

    /// Get a tag name by code; misses synthesize an "Unknown tag" name
    pub fn get_tag_name(&self, kind: IfdKind, tag: u16) -> String {
        self.get_tag_def(kind, tag)
            .map(|def| def.name.clone())
            .unwrap_or_else(|| format!("Unknown tag 0x{:04X}", tag))
    }

    /// Get a field type name by code
    pub fn get_type_name(&self, type_code: u16) -> String {
        self.type_names.get(&type_code)
            .cloned()
            .unwrap_or_else(|| format!("Unknown-{}", type_code))
    }

    /// Get a JPEG marker name by code
    pub fn get_marker_name(&self, marker: u16) -> String {
        self.marker_names.get(&marker)
            .cloned()
            .unwrap_or_else(|| format!("Unknown marker 0x{:04X}", marker))
    }
}

/// Get a tag name, scoped by directory kind
pub fn get_tag_name(kind: IfdKind, tag: u16) -> String {
    EXIF_DEFINITIONS.get_tag_name(kind, tag)
}

/// Get the expected field type for a tag, if the dictionary knows it
pub fn get_type_hint(kind: IfdKind, tag: u16) -> Option<String> {
    EXIF_DEFINITIONS.get_tag_def(kind, tag)
        .and_then(|def| def.type_hint.clone())
}

/// Get a field type name
pub fn get_type_name(type_code: u16) -> String {
    EXIF_DEFINITIONS.get_type_name(type_code)
}

/// Get a JPEG marker name
pub fn get_marker_name(marker: u16) -> String {
    EXIF_DEFINITIONS.get_marker_name(marker)
}

/// Returns the directory kind a pointer tag links to, if the tag is one
/// of the three pointer tags
pub fn pointer_target(tag: u16) -> Option<IfdKind> {
    match tag {
        tags::EXIF_IFD_POINTER => Some(IfdKind::Exif),
        tags::GPS_IFD_POINTER => Some(IfdKind::Gps),
        tags::INTEROP_IFD_POINTER => Some(IfdKind::Interop),
        _ => None,
    }
}
