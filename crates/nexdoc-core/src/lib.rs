//! nexdoc core - documentation engine for NEX DDL protocol definitions
//!
//! This crate turns parsed DDL declaration trees into markdown reference
//! documentation:
//! - Tree: typed input contract for the parser collaborator's trees
//! - Extractor: normalizes a tree into the flat semantic model
//! - Name registry: collision-free protocol display names across one run
//! - Type resolver: canonical, cross-linked display types
//! - Markdown generator: the final per-protocol documents

use std::collections::HashSet;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error and warning types
pub mod error;

/// Tree normalization - declaration tree to semantic model
pub mod extract;

/// Markdown document renderer
pub mod markdown;

/// Semantic documentation model
pub mod model;

/// Protocol name disambiguation
pub mod names;

/// Canonical type tables (embedded static data)
pub mod registry;

/// Type resolution and cross-linking
pub mod resolve;

/// Parsed DDL declaration tree (input contract)
pub mod tree;

pub use error::{DocError, DocWarning};
pub use extract::TreeExtractor;
pub use markdown::MarkdownGenerator;
pub use model::{MethodDoc, ParamDoc, ProtocolDoc, StructDoc, StructMember, TreeDoc};
pub use names::NameRegistry;
pub use resolve::{ResolvedType, TypeResolver};
pub use tree::DeclarationTree;

/// A rendered document, keyed by the protocol's disambiguated name
#[derive(Debug, Clone)]
pub struct ProtocolDocument {
    pub name: String,
    pub markdown: String,
}

/// Output of processing one declaration tree
#[derive(Debug, Clone)]
pub enum TreeOutput {
    /// One markdown document per protocol declaration in the tree
    Protocols(Vec<ProtocolDocument>),
    /// The tree held no protocol declarations; its raw dump is kept for
    /// offline inspection instead of a documentation file
    NonProtocol { index: u32, dump: String },
}

/// Run-lifetime documentation generator.
///
/// Owns the protocol-name registry and the non-protocol dump counter, so a
/// protocol name appearing in two different trees of the same run is still
/// disambiguated against the first occurrence. Trees are processed one at a
/// time, in call order.
#[derive(Debug, Default)]
pub struct DocGenerator {
    names: NameRegistry,
    dumps: u32,
    warnings: Vec<DocWarning>,
}

impl DocGenerator {
    /// Create a generator with fresh run state
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one declaration tree.
    ///
    /// Returns the rendered protocol documents, or the raw-dump artifact for
    /// a tree without protocol declarations. Fails only when the tree
    /// violates the grammar contract (see [`DocError`]).
    pub fn generate(&mut self, tree: &DeclarationTree) -> Result<TreeOutput, DocError> {
        let doc = TreeExtractor::extract(tree)?;

        if doc.is_non_protocol() {
            let index = self.dumps;
            self.dumps += 1;
            self.warnings.push(DocWarning::NonProtocolTree { index });
            // Serializing our own tree types cannot fail
            let dump = serde_json::to_string_pretty(tree).unwrap_or_default();
            return Ok(TreeOutput::NonProtocol { index, dump });
        }

        let structure_names: HashSet<String> = doc.structure_names();
        let resolver = TypeResolver::new(&structure_names);

        let mut documents = Vec::with_capacity(doc.protocols.len());
        for mut protocol in doc.protocols {
            let candidate = std::mem::take(&mut protocol.name);
            protocol.name = self.names.assign(&candidate);
            if candidate.is_empty() {
                self.warnings.push(DocWarning::UnnamedProtocol {
                    assigned: protocol.name.clone(),
                });
            }

            let markdown = MarkdownGenerator::generate(&protocol, &doc.structures, &resolver);
            documents.push(ProtocolDocument {
                name: protocol.name,
                markdown,
            });
        }

        Ok(TreeOutput::Protocols(documents))
    }

    /// Warnings accumulated across every tree processed so far
    pub fn warnings(&self) -> &[DocWarning] {
        &self.warnings
    }
}
