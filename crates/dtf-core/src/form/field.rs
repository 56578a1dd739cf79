use std::fmt;

use serde::Serialize;

/// Form fields that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Title,
    Description,
    BudgetFrom,
    BudgetTo,
    DeadlineDays,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::BudgetFrom => "budget_from",
            Self::BudgetTo => "budget_to",
            Self::DeadlineDays => "deadline_days",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Заголовок",
            Self::Description => "Описание",
            Self::BudgetFrom => "Бюджет от",
            Self::BudgetTo => "Бюджет до",
            Self::DeadlineDays => "Срок выполнения (дни)",
        }
    }

    /// Message shown when a required field is left empty.
    pub fn required_message(&self) -> &'static str {
        match self {
            Self::Title => "Введите заголовок",
            Self::Description => "Введите описание",
            Self::BudgetFrom => "Введите минимальный бюджет",
            Self::BudgetTo => "Введите максимальный бюджет",
            Self::DeadlineDays => "Введите срок",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
