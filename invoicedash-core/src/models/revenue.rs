//! Monthly revenue reporting rows

use serde::{Deserialize, Serialize};

/// Pre-aggregated revenue bucket. `revenue` is whatever the reporting
/// table holds; it is passed through unformatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revenue {
    pub month: String,
    pub revenue: i32,
}
