//! Tree normalization - walks a declaration tree and builds the semantic model
//!
//! One pass over the tree's top-level elements: class declarations become
//! structures, protocol declarations become protocols with 1-based method
//! ordinals and direction-classified parameters. Raw type tokens are kept
//! verbatim; the resolver interprets them at render time.

use crate::error::DocError;
use crate::model::{MethodDoc, ParamDoc, ProtocolDoc, StructDoc, StructMember, TreeDoc};
use crate::registry;
use crate::tree::{
    ClassDeclaration, DeclarationTree, ElementBody, MethodDeclaration, ProtocolDeclaration,
    DIRECTION_REQUEST, DIRECTION_RESPONSE,
};

/// Extracts the semantic model from a parsed declaration tree
pub struct TreeExtractor;

impl TreeExtractor {
    /// Normalize one declaration tree.
    ///
    /// A tree with zero protocol declarations is a valid result; the caller
    /// checks [`TreeDoc::is_non_protocol`] and diverts it to the dump path.
    pub fn extract(tree: &DeclarationTree) -> Result<TreeDoc, DocError> {
        let mut doc = TreeDoc::default();

        for element in &tree.root_namespace.elements {
            match &element.body {
                ElementBody::Class(class) => doc.structures.push(Self::extract_structure(class)),
                ElementBody::Protocol(protocol) => {
                    doc.protocols.push(Self::extract_protocol(protocol)?);
                }
                ElementBody::Other => {}
            }
        }

        Ok(doc)
    }

    fn extract_structure(class: &ClassDeclaration) -> StructDoc {
        let parent = class
            .parent
            .as_deref()
            .filter(|parent| !parent.is_empty())
            .unwrap_or(registry::BASE_STRUCTURE)
            .to_string();

        let members = class
            .members
            .iter()
            .map(|member| StructMember {
                name: member.name.clone(),
                raw_type: member.ty.clone(),
            })
            .collect();

        StructDoc {
            name: class.name.clone(),
            parent,
            members,
        }
    }

    fn extract_protocol(declaration: &ProtocolDeclaration) -> Result<ProtocolDoc, DocError> {
        let mut methods = Vec::with_capacity(declaration.methods.len());
        for (index, method) in declaration.methods.iter().enumerate() {
            methods.push(Self::extract_method(method, index as u32 + 1)?);
        }

        Ok(ProtocolDoc {
            name: declaration.name.clone(),
            id: registry::UNKNOWN_PROTOCOL_ID.to_string(),
            methods,
        })
    }

    fn extract_method(declaration: &MethodDeclaration, ordinal: u32) -> Result<MethodDoc, DocError> {
        let mut request = Vec::new();
        let mut response = Vec::new();

        for parameter in &declaration.parameters {
            let doc = ParamDoc {
                name: parameter.name.clone(),
                raw_type: parameter.ty.clone(),
            };

            let mut classified = false;
            if parameter.direction & DIRECTION_REQUEST != 0 {
                request.push(doc.clone());
                classified = true;
            }
            if parameter.direction & DIRECTION_RESPONSE != 0 {
                response.push(doc.clone());
                classified = true;
            }

            if !classified {
                if parameter.return_value {
                    // Return values always come first in the response
                    response.insert(0, doc);
                } else {
                    return Err(DocError::UnrecognizedDirection {
                        method: declaration.name.clone(),
                        parameter: parameter.name.clone(),
                        direction: parameter.direction,
                    });
                }
            }
        }

        Ok(MethodDoc {
            ordinal,
            name: declaration.name.clone(),
            request,
            response,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Element, Namespace, ParameterDeclaration};

    fn tree_with(elements: Vec<ElementBody>) -> DeclarationTree {
        DeclarationTree {
            root_namespace: Namespace {
                elements: elements
                    .into_iter()
                    .map(|body| Element { body })
                    .collect(),
            },
        }
    }

    fn parameter(name: &str, ty: &str, direction: u8) -> ParameterDeclaration {
        ParameterDeclaration {
            name: name.to_string(),
            ty: ty.to_string(),
            direction,
            return_value: false,
        }
    }

    fn return_value(name: &str, ty: &str) -> ParameterDeclaration {
        ParameterDeclaration {
            name: name.to_string(),
            ty: ty.to_string(),
            direction: 0,
            return_value: true,
        }
    }

    fn protocol(name: &str, methods: Vec<MethodDeclaration>) -> ElementBody {
        ElementBody::Protocol(ProtocolDeclaration {
            name: name.to_string(),
            methods,
        })
    }

    fn method(name: &str, parameters: Vec<ParameterDeclaration>) -> MethodDeclaration {
        MethodDeclaration {
            name: name.to_string(),
            parameters,
        }
    }

    #[test]
    fn test_ordinals_are_dense_and_follow_declaration_order() {
        let tree = tree_with(vec![protocol(
            "Ranking",
            vec![
                method("GetScore", vec![]),
                method("UploadScore", vec![]),
                // Duplicate names still get their own ordinal
                method("UploadScore", vec![]),
            ],
        )]);

        let doc = TreeExtractor::extract(&tree).unwrap();
        let ordinals: Vec<u32> = doc.protocols[0].methods.iter().map(|m| m.ordinal).collect();
        assert_eq!(ordinals, vec![1, 2, 3]);
    }

    #[test]
    fn test_direction_bits_classify_parameters() {
        let tree = tree_with(vec![protocol(
            "Ranking",
            vec![method(
                "UploadScore",
                vec![
                    parameter("score", "uint32", DIRECTION_REQUEST),
                    parameter("rank", "uint32", DIRECTION_RESPONSE),
                ],
            )],
        )]);

        let doc = TreeExtractor::extract(&tree).unwrap();
        let m = &doc.protocols[0].methods[0];
        assert_eq!(m.request.len(), 1);
        assert_eq!(m.request[0].name, "score");
        assert_eq!(m.response.len(), 1);
        assert_eq!(m.response[0].name, "rank");
    }

    #[test]
    fn test_parameter_with_both_bits_appears_in_both_sequences() {
        let tree = tree_with(vec![protocol(
            "Ranking",
            vec![method(
                "Exchange",
                vec![parameter(
                    "token",
                    "string",
                    DIRECTION_REQUEST | DIRECTION_RESPONSE,
                )],
            )],
        )]);

        let doc = TreeExtractor::extract(&tree).unwrap();
        let m = &doc.protocols[0].methods[0];
        assert_eq!(m.request.len(), 1);
        assert_eq!(m.response.len(), 1);
    }

    #[test]
    fn test_return_value_is_prepended_to_response() {
        let tree = tree_with(vec![protocol(
            "Ranking",
            vec![method(
                "GetStats",
                vec![
                    parameter("stats", "RankingStats", DIRECTION_RESPONSE),
                    return_value("result", "qresult"),
                ],
            )],
        )]);

        let doc = TreeExtractor::extract(&tree).unwrap();
        let response = &doc.protocols[0].methods[0].response;
        assert_eq!(response.len(), 2);
        assert_eq!(response[0].name, "result");
        assert_eq!(response[1].name, "stats");
    }

    #[test]
    fn test_unrecognized_direction_fails_the_tree() {
        let tree = tree_with(vec![protocol(
            "Ranking",
            vec![method("Broken", vec![parameter("mystery", "uint32", 0)])],
        )]);

        let err = TreeExtractor::extract(&tree).unwrap_err();
        assert_eq!(
            err,
            DocError::UnrecognizedDirection {
                method: "Broken".to_string(),
                parameter: "mystery".to_string(),
                direction: 0,
            }
        );
    }

    #[test]
    fn test_structure_without_parent_gets_base_sentinel() {
        let tree = tree_with(vec![ElementBody::Class(ClassDeclaration {
            name: "RankingData".to_string(),
            parent: None,
            members: vec![],
        })]);

        let doc = TreeExtractor::extract(&tree).unwrap();
        assert_eq!(doc.structures[0].parent, "Structure");
        assert!(doc.structures[0].members.is_empty());
    }

    #[test]
    fn test_empty_parent_string_gets_base_sentinel() {
        let tree = tree_with(vec![ElementBody::Class(ClassDeclaration {
            name: "RankingData".to_string(),
            parent: Some(String::new()),
            members: vec![],
        })]);

        let doc = TreeExtractor::extract(&tree).unwrap();
        assert_eq!(doc.structures[0].parent, "Structure");
    }

    #[test]
    fn test_non_protocol_tree_is_reported_as_such() {
        let tree = tree_with(vec![
            ElementBody::Other,
            ElementBody::Class(ClassDeclaration {
                name: "Orphan".to_string(),
                parent: None,
                members: vec![],
            }),
        ]);

        let doc = TreeExtractor::extract(&tree).unwrap();
        assert!(doc.is_non_protocol());
        assert_eq!(doc.structures.len(), 1);
    }
}
