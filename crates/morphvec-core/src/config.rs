//! Vectorizer configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// What to do when the traversal cannot reach every node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisconnectedPolicy {
    /// Return the vector of the root's component and drop the rest.
    #[default]
    Truncate,
    /// Fail with [`VectorizeError::Disconnected`](crate::VectorizeError::Disconnected).
    Reject,
}

/// How a node's neighbors are put in ascending-weight order.
///
/// Both strategies produce the same traversal for every graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeighborOrdering {
    /// Stable sort of each neighbor list.
    #[default]
    Sort,
    /// Binary min-heap keyed by weight, then discovery order.
    Heap,
}

/// Configuration for [`GraphVectorizer`](crate::GraphVectorizer).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VectorizeConfig {
    /// Handling of nodes unreachable from the root.
    pub disconnected: DisconnectedPolicy,
    /// Neighbor ordering strategy.
    pub neighbor_ordering: NeighborOrdering,
    /// Round every output value to this many decimal places.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_decimals: Option<u8>,
}

impl VectorizeConfig {
    /// Largest supported `round_decimals`.
    pub const MAX_ROUND_DECIMALS: u8 = 15;

    /// Parses and validates a config from JSON.
    ///
    /// # Example
    /// ```
    /// use morphvec_core::{DisconnectedPolicy, VectorizeConfig};
    ///
    /// let config = VectorizeConfig::from_json(r#"{"disconnected": "reject"}"#).unwrap();
    /// assert_eq!(config.disconnected, DisconnectedPolicy::Reject);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: VectorizeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.round_decimals {
            Some(value) if value > Self::MAX_ROUND_DECIMALS => {
                Err(ConfigError::RoundDecimalsOutOfRange {
                    value,
                    max: Self::MAX_ROUND_DECIMALS,
                })
            }
            _ => Ok(()),
        }
    }

    /// Sets the disconnected-graph policy.
    pub fn disconnected(mut self, policy: DisconnectedPolicy) -> Self {
        self.disconnected = policy;
        self
    }

    /// Sets the neighbor ordering strategy.
    pub fn neighbor_ordering(mut self, ordering: NeighborOrdering) -> Self {
        self.neighbor_ordering = ordering;
        self
    }

    /// Sets output rounding, clamped to [`Self::MAX_ROUND_DECIMALS`].
    pub fn round_decimals(mut self, decimals: u8) -> Self {
        self.round_decimals = Some(decimals.min(Self::MAX_ROUND_DECIMALS));
        self
    }
}
