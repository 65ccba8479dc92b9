//! sfnet Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use sfnet_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{MetricKind, NodeId, ParseMetricKindError};

// Re-export the Topology trait
pub use crate::topology::Topology;

// Re-export error types
pub use crate::error::{GraphError, Result};
