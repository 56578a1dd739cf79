use crate::form::{FixedRules, FormResult, ValidatedTask};

use url::form_urlencoded;

pub const TOKEN_PARAM: &str = "token";
pub const TITLE_PARAM: &str = "title";
pub const DESCRIPTION_PARAM: &str = "description";
pub const TAGS_PARAM: &str = "tags";
pub const BUDGET_FROM_PARAM: &str = "budget_from";
pub const BUDGET_TO_PARAM: &str = "budget_to";
pub const DEADLINE_PARAM: &str = "deadline";
pub const REMINDS_PARAM: &str = "reminds";
pub const ALL_AUTO_RESPONSES_PARAM: &str = "all_auto_responses";
pub const RULES_PARAM: &str = "rules";

const TAG_SEPARATOR: &str = ", ";

/// Renders a budget the way a browser stringifies a number: plain decimal
/// for magnitudes in `[1e-6, 1e21)`, otherwise exponent form with an
/// explicit sign (`1e+21`, `1e-7`).
fn format_budget(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude == 0.0 {
        return String::from("0");
    }
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

/// Ordered query parameters for one task creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskQuery {
    pairs: Vec<(&'static str, String)>,
}

impl TaskQuery {
    pub fn build(token: &str, task: &ValidatedTask) -> FormResult<Self> {
        let rules = FixedRules::DEFAULT.to_json()?;

        let pairs = vec![
            (TOKEN_PARAM, token.to_string()),
            (TITLE_PARAM, task.title.clone()),
            (DESCRIPTION_PARAM, task.description.clone()),
            (TAGS_PARAM, task.tags.join(TAG_SEPARATOR)),
            (BUDGET_FROM_PARAM, format_budget(task.budget_from)),
            (BUDGET_TO_PARAM, format_budget(task.budget_to)),
            (DEADLINE_PARAM, task.deadline_days.to_string()),
            (REMINDS_PARAM, task.number_of_reminders.to_string()),
            (
                ALL_AUTO_RESPONSES_PARAM,
                task.all_auto_responses.to_string(),
            ),
            (RULES_PARAM, rules),
        ];

        Ok(Self { pairs })
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// `application/x-www-form-urlencoded` serialization (spaces as `+`).
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter().map(|(k, v)| (*k, v.as_str())))
            .finish()
    }

    /// `url` with this query appended.
    pub fn append_to(&self, url: &str) -> String {
        format!("{}?{}", url, self.encode())
    }
}
