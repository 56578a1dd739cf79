use serde::Serialize;

/// Rule set attached to every submitted task.
///
/// These values are not derived from the user's budget or deadline input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FixedRules {
    pub budget_from: u32,
    pub budget_to: u32,
    pub deadline_days: u32,
    pub qty_freelancers: u32,
}

impl FixedRules {
    pub const DEFAULT: FixedRules = FixedRules {
        budget_from: 5000,
        budget_to: 8000,
        deadline_days: 5,
        qty_freelancers: 1,
    };

    /// Compact JSON, fields in declaration order.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Default for FixedRules {
    fn default() -> Self {
        Self::DEFAULT
    }
}
