use dtf_core::FormValues;

use clap::Args;

/// Task form fields. Required fields are checked by the form, not by clap,
/// so every missing field is reported at once.
#[derive(Args, Debug, Default)]
pub struct SubmitArgs {
    /// Task title
    #[arg(long)]
    pub title: Option<String>,

    /// Task description
    #[arg(long)]
    pub description: Option<String>,

    /// Tag (repeatable), e.g. --tag вб --tag дизайн
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Minimum budget
    #[arg(long)]
    pub budget_from: Option<f64>,

    /// Maximum budget
    #[arg(long)]
    pub budget_to: Option<f64>,

    /// Deadline in days
    #[arg(long)]
    pub deadline_days: Option<u32>,

    /// Number of reminders (default: 0)
    #[arg(long = "reminders")]
    pub number_of_reminders: Option<u32>,

    /// Mark the task as hard
    #[arg(long = "hard")]
    pub is_hard: bool,

    /// Enable all auto responses
    #[arg(long)]
    pub all_auto_responses: bool,

    /// Authorization token; saved before submitting
    #[arg(long)]
    pub token: Option<String>,
}

impl SubmitArgs {
    /// Copies the field arguments into the form values.
    pub fn apply(&self, values: &mut FormValues) {
        if let Some(ref title) = self.title {
            values.title = title.clone();
        }
        if let Some(ref description) = self.description {
            values.description = description.clone();
        }
        for tag in &self.tags {
            values.add_tag(tag.clone());
        }
        values.budget_from = self.budget_from.or(values.budget_from);
        values.budget_to = self.budget_to.or(values.budget_to);
        values.deadline_days = self.deadline_days.or(values.deadline_days);
        values.number_of_reminders = self.number_of_reminders.or(values.number_of_reminders);
        values.is_hard |= self.is_hard;
        values.all_auto_responses |= self.all_auto_responses;
    }
}
