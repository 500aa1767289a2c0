//! Error and warning types for the documentation engine

use thiserror::Error;

/// Fatal errors raised while normalizing a declaration tree.
///
/// These indicate the input tree does not conform to the DDL grammar
/// contract; processing of that tree stops and the error is surfaced as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocError {
    #[error("parameter `{parameter}` of method `{method}` has unrecognized direction {direction}")]
    UnrecognizedDirection {
        method: String,
        parameter: String,
        direction: u8,
    },
}

/// Non-fatal conditions reported alongside generated output.
///
/// These never abort a run; the engine substitutes a synthetic name or
/// diverts the tree to the raw-dump path and keeps going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocWarning {
    /// A protocol declaration carried no name
    UnnamedProtocol { assigned: String },
    /// A tree held no protocol declarations and was diverted to a raw dump
    NonProtocolTree { index: u32 },
}

impl std::fmt::Display for DocWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocWarning::UnnamedProtocol { assigned } => {
                write!(f, "protocol has no name, documented as `{assigned}`")
            }
            DocWarning::NonProtocolTree { index } => {
                write!(f, "tree {index} contains no protocol declarations, dumped instead")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_method_and_parameter() {
        let err = DocError::UnrecognizedDirection {
            method: "UploadScore".to_string(),
            parameter: "score".to_string(),
            direction: 4,
        };
        let message = err.to_string();
        assert!(message.contains("UploadScore"));
        assert!(message.contains("score"));
        assert!(message.contains('4'));
    }
}
