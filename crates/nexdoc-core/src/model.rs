//! Semantic documentation model
//!
//! Flattened view of a declaration tree: protocols with their methods and
//! parameters, plus the structures the tree declares. Built once per tree by
//! the extractor, consumed by the renderer, and thrown away afterwards.

use std::collections::HashSet;

/// A documented protocol
#[derive(Debug, Clone)]
pub struct ProtocolDoc {
    /// Display name; unique within one run once the disambiguator ran
    pub name: String,
    /// Protocol identifier, or the unknown-identifier placeholder
    pub id: String,
    /// Methods in declaration order
    pub methods: Vec<MethodDoc>,
}

/// A documented protocol method
#[derive(Debug, Clone)]
pub struct MethodDoc {
    /// 1-based position in the protocol's method list
    pub ordinal: u32,
    pub name: String,
    /// Request parameters in declaration order
    pub request: Vec<ParamDoc>,
    /// Response parameters; a return value always sits at index 0
    pub response: Vec<ParamDoc>,
}

impl MethodDoc {
    /// Section anchor derived from ordinal and lowercased name
    pub fn anchor(&self) -> String {
        format!("{}-{}", self.ordinal, self.name.to_lowercase())
    }
}

/// A method parameter
#[derive(Debug, Clone)]
pub struct ParamDoc {
    pub name: String,
    /// Uninterpreted type token; the resolver gives it meaning later
    pub raw_type: String,
}

/// A documented structure
#[derive(Debug, Clone)]
pub struct StructDoc {
    pub name: String,
    /// Parent type name; the base sentinel when the source declares none
    pub parent: String,
    /// Members in declaration order
    pub members: Vec<StructMember>,
}

impl StructDoc {
    /// Section anchor derived from the lowercased name
    pub fn anchor(&self) -> String {
        self.name.to_lowercase()
    }
}

/// A structure member
#[derive(Debug, Clone)]
pub struct StructMember {
    pub name: String,
    pub raw_type: String,
}

/// Everything extracted from one declaration tree
#[derive(Debug, Clone, Default)]
pub struct TreeDoc {
    /// Protocols in declaration order, names not yet disambiguated
    pub protocols: Vec<ProtocolDoc>,
    /// Structures in declaration order
    pub structures: Vec<StructDoc>,
}

impl TreeDoc {
    /// True when the tree held no protocol declarations
    pub fn is_non_protocol(&self) -> bool {
        self.protocols.is_empty()
    }

    /// The structure symbol set the type resolver tests names against
    pub fn structure_names(&self) -> HashSet<String> {
        self.structures.iter().map(|s| s.name.clone()).collect()
    }
}
