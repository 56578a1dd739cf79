/// Form values that passed validation, with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTask {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub budget_from: f64,
    pub budget_to: f64,
    pub deadline_days: u32,
    pub number_of_reminders: u32,
    /// Collected by the form but not part of the request.
    pub is_hard: bool,
    pub all_auto_responses: bool,
}
