//! Markdown document renderer
//!
//! Produces one complete markdown document per protocol: the title line, the
//! method index table, a section per method with request/response parameter
//! tables, and a trailing Types section for the structures discovered in the
//! same tree. Rows keep input order everywhere; nothing is sorted.

use std::fmt::Write;

use crate::model::{MethodDoc, ProtocolDoc, StructDoc};
use crate::registry;
use crate::resolve::TypeResolver;

/// Generates markdown documentation from the semantic model
pub struct MarkdownGenerator;

impl MarkdownGenerator {
    /// Generate the document for one protocol and its sibling structures
    pub fn generate(
        protocol: &ProtocolDoc,
        structures: &[StructDoc],
        resolver: &TypeResolver<'_>,
    ) -> String {
        let mut output = String::new();

        write!(
            output,
            "## [NEX-Protocols]({}/NEX-Protocols) > {} ({})",
            registry::WIKI_BASE,
            protocol.name,
            protocol.id
        )
        .unwrap();

        write!(output, "\n\n{}", Self::method_index(&protocol.methods)).unwrap();

        for method in &protocol.methods {
            write!(output, "\n\n{}", Self::method_section(method, resolver)).unwrap();
        }

        if !structures.is_empty() {
            output.push_str("\n\n# Types");
            for structure in structures {
                write!(output, "\n\n{}", Self::structure_section(structure, resolver)).unwrap();
            }
        }

        output
    }

    /// One row per method, each name linking to its section anchor
    fn method_index(methods: &[MethodDoc]) -> String {
        let mut table = String::from("| Method ID | Method Name |\n| --- | --- |");

        for method in methods {
            write!(
                table,
                "\n| {} | [{}](#{}) |",
                method.ordinal,
                method.name,
                method.anchor()
            )
            .unwrap();
        }

        table
    }

    fn method_section(method: &MethodDoc, resolver: &TypeResolver<'_>) -> String {
        let mut section = format!("# ({}) {}", method.ordinal, method.name);

        section.push_str("\n\n## Request");
        if method.request.is_empty() {
            section.push_str("\nThis method does not take any parameters");
        } else {
            section.push_str("\n| Type | Name | Description |");
            section.push_str("\n| --- | --- | --- |");
            for parameter in &method.request {
                write!(
                    section,
                    "\n| {} | {} |  |",
                    resolver.resolve(&parameter.raw_type).to_markdown(),
                    parameter.name
                )
                .unwrap();
            }
        }

        section.push_str("\n\n## Response");
        if method.response.is_empty() {
            section.push_str("\nThis method does not return anything");
        } else {
            section.push_str("\n| Type | Name | Description |");
            section.push_str("\n| --- | --- | --- |");
            for parameter in &method.response {
                write!(
                    section,
                    "\n| {} | {} |  |",
                    resolver.resolve(&parameter.raw_type).to_markdown(),
                    parameter.name
                )
                .unwrap();
            }
        }

        section
    }

    fn structure_section(structure: &StructDoc, resolver: &TypeResolver<'_>) -> String {
        let mut section = format!("## {}", structure.name);

        if structure.parent != registry::BASE_STRUCTURE {
            write!(
                section,
                "\nThis structure inherits from {}",
                resolver.resolve(&structure.parent).to_markdown()
            )
            .unwrap();
        }

        if structure.members.is_empty() {
            section.push_str("\nThis structure does not have any fields");
        } else {
            section.push_str("\n| Type | Name |");
            section.push_str("\n| --- | --- |");
            for member in &structure.members {
                write!(
                    section,
                    "\n| {} | {} |",
                    resolver.resolve(&member.raw_type).to_markdown(),
                    member.name
                )
                .unwrap();
            }
        }

        section
    }
}
