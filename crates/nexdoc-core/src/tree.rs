//! Parsed DDL declaration tree
//!
//! The DDL parser is an external collaborator; it hands trees over as JSON.
//! These types define the shape of that contract: a root namespace with an
//! ordered element list, each element tagged as a class declaration, a
//! protocol declaration, or something else entirely.

use serde::{Deserialize, Serialize};

/// Direction bit marking a parameter as part of the request.
pub const DIRECTION_REQUEST: u8 = 1;

/// Direction bit marking a parameter as part of the response.
pub const DIRECTION_RESPONSE: u8 = 2;

/// One parsed declaration tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationTree {
    /// The root namespace holding every top-level element
    pub root_namespace: Namespace,
}

/// A namespace with an ordered sequence of elements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Namespace {
    pub elements: Vec<Element>,
}

/// A single top-level element
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub body: ElementBody,
}

/// The declaration kind of an element body.
///
/// Closed set: anything the parser emits that is neither a class nor a
/// protocol declaration lands on `Other` and is skipped during extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ElementBody {
    Class(ClassDeclaration),
    Protocol(ProtocolDeclaration),
    #[serde(other)]
    Other,
}

/// A class-like declaration (becomes a structure in the documentation)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDeclaration {
    /// Type name
    pub name: String,
    /// Parent class name, if the source declares one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Ordered member list
    #[serde(default)]
    pub members: Vec<ClassMember>,
}

/// A member of a class declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassMember {
    pub name: String,
    /// Raw type-use token, uninterpreted (may encode a container)
    #[serde(rename = "type")]
    pub ty: String,
}

/// A protocol-like declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtocolDeclaration {
    /// Protocol name; the parser may leave this empty
    #[serde(default)]
    pub name: String,
    /// Ordered method list
    #[serde(default)]
    pub methods: Vec<MethodDeclaration>,
}

/// A method inside a protocol declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodDeclaration {
    pub name: String,
    /// Ordered parameter list
    #[serde(default)]
    pub parameters: Vec<ParameterDeclaration>,
}

/// A method parameter with its direction indicator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDeclaration {
    pub name: String,
    /// Raw type-use token, uninterpreted
    #[serde(rename = "type")]
    pub ty: String,
    /// Direction bit set: bit 0 = request, bit 1 = response, both legal
    #[serde(default)]
    pub direction: u8,
    /// Distinct tag for the method's return value (direction bits unset)
    #[serde(default)]
    pub return_value: bool,
}
