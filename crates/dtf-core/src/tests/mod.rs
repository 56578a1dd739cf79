mod notification;
mod task_query;

use crate::form::FormValues;

pub(crate) use crate::testing::{FakeGateway, Reply};

/// Values that pass validation.
pub(crate) fn filled_values() -> FormValues {
    FormValues {
        title: String::from("Лендинг"),
        description: String::from("Сверстать лендинг по макету"),
        tags: vec![String::from("дизайн"), String::from("фигма")],
        budget_from: Some(1000.0),
        budget_to: Some(2500.5),
        deadline_days: Some(3),
        number_of_reminders: Some(2),
        is_hard: true,
        all_auto_responses: true,
    }
}
