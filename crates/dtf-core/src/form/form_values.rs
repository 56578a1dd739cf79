use crate::form::{Field, FieldError, FormError, FormResult, ValidatedTask};

/// User-entered task attributes.
///
/// Numeric inputs are `None` until the user fills them in.
/// `budget_from <= budget_to` is deliberately not checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub budget_from: Option<f64>,
    pub budget_to: Option<f64>,
    pub deadline_days: Option<u32>,
    pub number_of_reminders: Option<u32>,
    pub is_hard: bool,
    pub all_auto_responses: bool,
}

impl FormValues {
    /// Appends a tag. Empty and already-present tags are ignored.
    ///
    /// Returns true when the tag was added.
    pub fn add_tag(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if tag.is_empty() || self.tags.contains(&tag) {
            return false;
        }

        self.tags.push(tag);
        true
    }

    /// Returns true when the tag was present.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    /// Back to the initial empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Checks every per-field constraint and collects all violations.
    pub fn validate(&self) -> FormResult<ValidatedTask> {
        let mut errors = Vec::new();

        if self.title.is_empty() {
            errors.push(FieldError::required(Field::Title));
        }
        if self.description.is_empty() {
            errors.push(FieldError::required(Field::Description));
        }

        let budget_from = Self::check_budget(Field::BudgetFrom, self.budget_from, &mut errors);
        let budget_to = Self::check_budget(Field::BudgetTo, self.budget_to, &mut errors);

        let deadline_days = match self.deadline_days {
            None => {
                errors.push(FieldError::required(Field::DeadlineDays));
                None
            }
            Some(0) => {
                errors.push(FieldError::new(
                    Field::DeadlineDays,
                    "Срок должен быть не меньше 1 дня",
                ));
                None
            }
            Some(days) => Some(days),
        };

        match (budget_from, budget_to, deadline_days) {
            (Some(budget_from), Some(budget_to), Some(deadline_days)) if errors.is_empty() => {
                Ok(ValidatedTask {
                    title: self.title.clone(),
                    description: self.description.clone(),
                    tags: self.tags.clone(),
                    budget_from,
                    budget_to,
                    deadline_days,
                    number_of_reminders: self.number_of_reminders.unwrap_or(0),
                    is_hard: self.is_hard,
                    all_auto_responses: self.all_auto_responses,
                })
            }
            _ => Err(FormError::validation(errors)),
        }
    }

    fn check_budget(field: Field, value: Option<f64>, errors: &mut Vec<FieldError>) -> Option<f64> {
        match value {
            None => {
                errors.push(FieldError::required(field));
                None
            }
            Some(v) if !v.is_finite() || v < 0.0 => {
                errors.push(FieldError::new(field, "Бюджет не может быть отрицательным"));
                None
            }
            // -0 would otherwise travel as "-0"
            Some(v) if v == 0.0 => Some(0.0),
            Some(v) => Some(v),
        }
    }
}
