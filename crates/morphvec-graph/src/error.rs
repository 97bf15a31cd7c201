//! Error types for graph construction and validation.

use thiserror::Error;

use crate::node::NodeId;

/// Errors raised while building a [`RegionGraph`](crate::RegionGraph).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node id was added more than once.
    #[error("duplicate node id: {0}")]
    DuplicateNode(NodeId),

    /// An edge endpoint or signature refers to a node that was never added.
    #[error("unknown node id: {0}")]
    UnknownNode(NodeId),

    /// An edge connects a node to itself.
    #[error("self-loop on node {0}")]
    SelfLoop(NodeId),

    /// The graph is larger than the configured budget allows.
    #[error("{what} count {actual} exceeds budget of {limit}")]
    BudgetExceeded {
        /// Which count overflowed ("node" or "edge").
        what: &'static str,
        /// Configured limit.
        limit: usize,
        /// Observed count.
        actual: usize,
    },
}

impl GraphError {
    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            GraphError::DuplicateNode(_) => "GRAPH_001",
            GraphError::UnknownNode(_) => "GRAPH_002",
            GraphError::SelfLoop(_) => "GRAPH_003",
            GraphError::BudgetExceeded { .. } => "GRAPH_004",
        }
    }
}

/// Error codes reported by [`validate_graph`](crate::validate_graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueCode {
    /// G001: mean color outside {0, 1, 255}
    InvalidMeanColor,
    /// G002: node has no weight
    MissingWeight,
    /// G003: node has no mean color
    MissingMeanColor,
    /// G004: node has no pixel count
    MissingPixelCount,
    /// G005: weight is NaN or infinite
    NonFiniteWeight,
    /// G006: graph has no nodes
    EmptyGraph,
}

impl IssueCode {
    /// Returns the code string (e.g., "G001").
    pub fn code(&self) -> &'static str {
        match self {
            IssueCode::InvalidMeanColor => "G001",
            IssueCode::MissingWeight => "G002",
            IssueCode::MissingMeanColor => "G003",
            IssueCode::MissingPixelCount => "G004",
            IssueCode::NonFiniteWeight => "G005",
            IssueCode::EmptyGraph => "G006",
        }
    }
}

impl std::fmt::Display for IssueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes reported by [`validate_graph`](crate::validate_graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: more than one connected component
    Disconnected,
    /// W002: node without any neighbor
    IsolatedNode,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::Disconnected => "W001",
            WarningCode::IsolatedNode => "W002",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphIssue {
    /// The error code.
    pub code: IssueCode,
    /// Human-readable error message.
    pub message: String,
    /// Offending node, if the issue is node-local.
    pub node: Option<NodeId>,
}

impl GraphIssue {
    /// Creates a graph-level issue.
    pub fn new(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            node: None,
        }
    }

    /// Creates an issue attached to a node.
    pub fn at(code: IssueCode, message: impl Into<String>, node: NodeId) -> Self {
        Self {
            code,
            message: message.into(),
            node: Some(node),
        }
    }
}

impl std::fmt::Display for GraphIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(node) = self.node {
            write!(f, "{}: {} (node {})", self.code, self.message, node)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for GraphIssue {}

/// A validation warning with code, message, and optional node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// Node the warning refers to, if any.
    pub node: Option<NodeId>,
}

impl GraphWarning {
    /// Creates a graph-level warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            node: None,
        }
    }

    /// Creates a warning attached to a node.
    pub fn at(code: WarningCode, message: impl Into<String>, node: NodeId) -> Self {
        Self {
            code,
            message: message.into(),
            node: Some(node),
        }
    }
}

impl std::fmt::Display for GraphWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(node) = self.node {
            write!(f, "{}: {} (node {})", self.code, self.message, node)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Result of graph validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// List of validation errors.
    pub errors: Vec<GraphIssue>,
    /// List of validation warnings.
    pub warnings: Vec<GraphWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: GraphIssue) {
        self.errors.push(error);
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: GraphWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<Vec<GraphWarning>, Vec<GraphIssue>> {
        if self.is_ok() {
            Ok(self.warnings)
        } else {
            Err(self.errors)
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}
