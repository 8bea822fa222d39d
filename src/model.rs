//! Data model for extracted enum documentation
//!
//! The extractor produces an [`EnumCatalog`] of [`EnumDescriptor`]s; the
//! renderer consumes it together with the fixed [`ENUM_SPECS`] configuration.
//! Nothing here is mutated after extraction.

use std::collections::HashMap;

/// One documented enum constant: name, integer value and optional
/// human-readable description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumEntry {
    /// Constant name as it appears in the C header (e.g. `XML_ERR_WARNING`)
    pub name: String,
    /// Integer value of the constant
    pub value: u32,
    /// Free-text description following the value, if the documentation has one
    pub description: Option<String>,
}

impl EnumEntry {
    /// Create an entry, normalizing an empty description to `None`.
    pub fn new(name: impl Into<String>, value: u32, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
            description: description.filter(|d| !d.is_empty()),
        }
    }
}

/// A documented C enum: its type name and entries in document order.
///
/// Entry order is load-bearing: it determines declaration order in the
/// regenerated output and must match the order of anchors in the source HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    /// C enum type name (e.g. `xmlErrorLevel`)
    pub name: String,
    /// Entries in document order, never empty after extraction
    pub entries: Vec<EnumEntry>,
}

/// All enums extracted from the documentation page, keyed by enum name.
#[derive(Debug, Clone, Default)]
pub struct EnumCatalog {
    enums: HashMap<String, EnumDescriptor>,
}

impl EnumCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor under its own name. A later duplicate replaces an
    /// earlier one, matching how repeated blocks would overwrite each other.
    pub fn insert(&mut self, descriptor: EnumDescriptor) {
        self.enums.insert(descriptor.name.clone(), descriptor);
    }

    pub fn get(&self, enum_name: &str) -> Option<&EnumDescriptor> {
        self.enums.get(enum_name)
    }

    pub fn len(&self) -> usize {
        self.enums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enums.is_empty()
    }
}

/// Static configuration row mapping a documented enum to its generated
/// output: the packed-table variable name and the prefix stripped from
/// constant names in the compact encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumSpec {
    /// C enum type name expected in the documentation
    pub enum_name: &'static str,
    /// Variable name of the packed constants table in the `.pxi` output
    pub var_name: &'static str,
    /// Prefix removed from constant names in the compact encoding only
    pub strip_prefix: &'static str,
}

/// The three enums the generated sources are built from, in output order:
/// error levels, error domains, parser error codes.
pub const ENUM_SPECS: [EnumSpec; 3] = [
    EnumSpec {
        enum_name: "xmlErrorLevel",
        var_name: "__ERROR_LEVELS",
        strip_prefix: "XML_ERR_",
    },
    EnumSpec {
        enum_name: "xmlErrorDomain",
        var_name: "__ERROR_DOMAINS",
        strip_prefix: "XML_FROM_",
    },
    EnumSpec {
        enum_name: "xmlParserErrors",
        var_name: "__ERROR_TYPES",
        strip_prefix: "XML_",
    },
];
