use crate::form::{FixedRules, TaskQuery};
use crate::tests::filled_values;

use googletest::prelude::*;

const RULES_JSON: &str =
    r#"{"budget_from":5000,"budget_to":8000,"deadline_days":5,"qty_freelancers":1}"#;

fn query_for(token: &str) -> TaskQuery {
    TaskQuery::build(token, &filled_values().validate().unwrap()).unwrap()
}

#[test]
fn given_valid_task_when_build_then_ten_params_in_order() {
    let query = query_for("abc");

    let names: Vec<&str> = query.pairs().iter().map(|(k, _)| *k).collect();

    assert_that!(
        names,
        elements_are![
            eq(&"token"),
            eq(&"title"),
            eq(&"description"),
            eq(&"tags"),
            eq(&"budget_from"),
            eq(&"budget_to"),
            eq(&"deadline"),
            eq(&"reminds"),
            eq(&"all_auto_responses"),
            eq(&"rules")
        ]
    );
}

#[test]
fn given_valid_task_when_build_then_values_stringified() {
    let query = query_for("abc");

    assert_that!(query.get("token"), some(eq("abc")));
    assert_that!(query.get("tags"), some(eq("дизайн, фигма")));
    assert_that!(query.get("budget_from"), some(eq("1000")));
    assert_that!(query.get("budget_to"), some(eq("2500.5")));
    assert_that!(query.get("deadline"), some(eq("3")));
    assert_that!(query.get("reminds"), some(eq("2")));
    assert_that!(query.get("all_auto_responses"), some(eq("true")));
}

#[test]
fn given_extreme_budgets_when_build_then_rendered_like_browser_numbers() {
    let cases = [
        (-0.0, "0"),
        (0.5, "0.5"),
        (1e20, "100000000000000000000"),
        (1e21, "1e+21"),
        (2.5e22, "2.5e+22"),
        (1e-7, "1e-7"),
    ];

    for (budget, expected) in cases {
        let mut values = filled_values();
        values.budget_to = Some(budget);

        let query = TaskQuery::build("abc", &values.validate().unwrap()).unwrap();

        assert_that!(query.get("budget_to"), some(eq(expected)));
    }
}

#[test]
fn given_no_tags_when_build_then_tags_param_empty() {
    let mut values = filled_values();
    values.tags.clear();
    values.number_of_reminders = None;
    values.all_auto_responses = false;

    let query = TaskQuery::build("", &values.validate().unwrap()).unwrap();

    assert_that!(query.get("tags"), some(eq("")));
    assert_that!(query.get("reminds"), some(eq("0")));
    assert_that!(query.get("all_auto_responses"), some(eq("false")));
}

#[test]
fn given_any_budget_when_build_then_rules_are_fixed() {
    let mut values = filled_values();
    values.budget_from = Some(1.0);
    values.budget_to = Some(2.0);
    values.deadline_days = Some(30);

    let query = TaskQuery::build("t", &values.validate().unwrap()).unwrap();

    assert_that!(query.get("rules"), some(eq(RULES_JSON)));
}

#[test]
fn given_default_rules_when_to_json_then_matches_wire_format() {
    assert_that!(FixedRules::default().to_json().unwrap(), eq(RULES_JSON));
}

#[test]
fn given_is_hard_when_build_then_not_sent() {
    let query = query_for("abc");

    assert_that!(query.get("is_hard"), none());
}

#[test]
fn given_spaces_and_cyrillic_when_encode_then_form_urlencoded() {
    let query = query_for("a b&c");

    let encoded = query.encode();

    assert_that!(encoded, starts_with("token=a+b%26c&title=%D0%9B"));
    assert_that!(encoded, contains_substring("tags=%D0%B4%D0%B8%D0%B7%D0%B0%D0%B9%D0%BD%2C+"));
    assert_that!(
        encoded,
        contains_substring("rules=%7B%22budget_from%22%3A5000%2C")
    );
}

#[test]
fn given_url_when_append_to_then_query_follows_question_mark() {
    let query = query_for("abc");

    let url = query.append_to("http://localhost/api/v1/tasks/client/newhardtask");

    assert_that!(
        url,
        starts_with("http://localhost/api/v1/tasks/client/newhardtask?token=abc&")
    );
}
