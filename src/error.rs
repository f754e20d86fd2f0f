//! Error types for scene compilation.
//!
//! Only conditions that abort a whole compile call are errors. Missing image
//! bytes, unbound colors and token misses are absorbed into the output.

use thiserror::Error;

/// Errors that abort a compile call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// An instance node has no resolvable originating component.
    #[error("cannot resolve the main component of instance `{node}`")]
    UnresolvedComponent {
        /// Name of the offending instance node
        node: String,
    },

    /// The host failed to export a vector node to markup.
    #[error("vector export failed for `{node}`: {message}")]
    Export {
        /// Name of the node being exported
        node: String,
        /// Host-provided failure description
        message: String,
    },
}

/// Result type alias for compile operations.
pub type CompileResult<T> = Result<T, CompileError>;

impl CompileError {
    /// Create a resolution error for an instance node.
    pub fn unresolved(node: impl Into<String>) -> Self {
        Self::UnresolvedComponent { node: node.into() }
    }

    /// Create an export error from any displayable host failure.
    pub fn export(node: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Export {
            node: node.into(),
            message: message.to_string(),
        }
    }

    /// Name of the node that caused the failure.
    pub fn node_name(&self) -> &str {
        match self {
            Self::UnresolvedComponent { node } | Self::Export { node, .. } => node,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CompileError::unresolved("Button / Primary");
        assert_eq!(
            err.to_string(),
            "cannot resolve the main component of instance `Button / Primary`"
        );

        let err = CompileError::export("Logo", "timeout");
        assert_eq!(err.to_string(), "vector export failed for `Logo`: timeout");
        assert_eq!(err.node_name(), "Logo");
    }
}
