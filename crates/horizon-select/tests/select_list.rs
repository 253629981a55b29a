//! End-to-end select list behaviour against the in-memory control.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{Value, json};

use horizon_select::widget::{ListControl, NativeControl, RenderedOption, SelectList};
use horizon_select::{GroupDescriptor, OptionValue, OptionsSource, SelectAttrs, SelectConfig, Selection};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("horizon_select=trace")
        .with_test_writer()
        .try_init();
}

fn record(list: &SelectList<ListControl>) -> Arc<Mutex<Vec<Selection>>> {
    let updates = Arc::new(Mutex::new(Vec::new()));
    let sink = updates.clone();
    list.update
        .connect(move |selection: &Selection| sink.lock().push(selection.clone()));
    updates
}

fn single(value: impl Into<OptionValue>) -> Selection {
    Selection::Single(Some(value.into()))
}

fn texts(list: &SelectList<ListControl>) -> Vec<String> {
    list.control().entries().into_iter().map(|entry| entry.text).collect()
}

fn attrs(value: Value) -> serde_json::Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

#[test]
fn test_plain_options() {
    init_tracing();
    let mut list = SelectList::new(
        ListControl::new(),
        SelectConfig::new(),
        vec!["unknown", "male", "female"],
        "female",
    );
    let updates = record(&list);

    assert_eq!(texts(&list), vec!["unknown", "male", "female"]);
    assert_eq!(list.control().value(), "female");

    list.control_mut().set_value("male");
    list.change();
    assert_eq!(updates.lock().as_slice(), &[single("male")]);
}

#[test]
fn test_external_value_change_moves_selection() {
    let mut list = SelectList::new(
        ListControl::new(),
        SelectConfig::new(),
        vec!["unknown", "male", "female"],
        "female",
    );
    let updates = record(&list);

    list.set_value("male");
    assert_eq!(list.control().value(), "male");

    // Nothing matches; the control falls back to its first entry.
    list.set_value(OptionValue::absent());
    assert_eq!(list.control().value(), "unknown");
    assert_eq!(list.selection(), Selection::Single(None));

    assert!(updates.lock().is_empty());
}

#[test]
fn test_options_replaced_keep_selection() {
    let mut list = SelectList::new(ListControl::new(), SelectConfig::new(), vec!["a", "b"], "b");
    list.set_options(vec!["c", "b", "a"]);
    assert_eq!(list.control().selected_index(), Some(1));
}

#[test]
fn test_option_value_path_reports_whole_record() {
    let male = json!({"id": 1, "value": "male"});
    let female = json!({"id": 2, "value": "female"});
    let config = SelectConfig::new()
        .with_option_value_path("id")
        .with_option_label_path("value");
    let mut list = SelectList::new(
        ListControl::new(),
        config,
        vec![male.clone(), female.clone()],
        female.clone(),
    );
    let updates = record(&list);

    assert_eq!(texts(&list), vec!["male", "female"]);
    assert_eq!(list.control().value(), "2");

    list.control_mut().set_value("1");
    list.change();
    assert_eq!(updates.lock().as_slice(), &[single(male)]);
}

#[test]
fn test_option_target_path_reports_field() {
    let config = SelectConfig::new()
        .with_option_value_path("id")
        .with_option_target_path("id")
        .with_option_label_path("value");
    let mut list = SelectList::new(
        ListControl::new(),
        config,
        vec![json!({"id": 1, "value": "male"}), json!({"id": 2, "value": "female"})],
        2,
    );
    let updates = record(&list);

    assert_eq!(list.control().value(), "2");

    list.control_mut().set_value("1");
    list.change();
    assert_eq!(updates.lock().as_slice(), &[single(1)]);
}

#[test]
fn test_target_path_alone_identifies_options() {
    let config = SelectConfig::new().with_option_target_path("id");
    let mut list = SelectList::new(
        ListControl::new(),
        config,
        vec![json!({"id": 1}), json!({"id": 2})],
        1,
    );
    let updates = record(&list);

    assert_eq!(texts(&list), vec!["1", "2"]);
    assert_eq!(list.control().value(), "1");

    list.control_mut().set_value("2");
    list.change();
    assert_eq!(updates.lock().as_slice(), &[single(2)]);
}

#[test]
fn test_missing_target_field_reports_nothing() {
    let config = SelectConfig::new()
        .with_option_value_path("id")
        .with_option_target_path("code");
    let mut list = SelectList::new(
        ListControl::new(),
        config,
        vec![json!({"id": 1}), json!({"id": 2, "code": "B"})],
        OptionValue::absent(),
    );
    let updates = record(&list);

    list.control_mut().set_value("1");
    list.change();
    list.control_mut().set_value("2");
    list.change();
    assert_eq!(
        updates.lock().as_slice(),
        &[Selection::Single(None), single("B")]
    );
}

#[test]
fn test_group_label_path() {
    let options = vec![
        json!({"value": "unknown", "type": null}),
        json!({"value": "male", "type": "person"}),
        json!({"value": "cat", "type": "animal"}),
        json!({"value": "female", "type": "person"}),
    ];
    let config = SelectConfig::new()
        .with_option_value_path("value")
        .with_group_label_path("type");
    let mut list = SelectList::new(ListControl::new(), config, options, json!({"value": "female"}));
    let updates = record(&list);

    let groups: Vec<Option<&str>> = list.groups().groups().iter().map(|g| g.name()).collect();
    assert_eq!(groups, vec![None, Some("person"), Some("animal")]);

    let entries = list.control().entries();
    let order: Vec<(&str, Option<&str>)> = entries
        .iter()
        .map(|e| (e.value.as_str(), e.group.as_deref()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("unknown", None),
            ("male", Some("person")),
            ("female", Some("person")),
            ("cat", Some("animal")),
        ]
    );
    assert_eq!(list.control().value(), "female");

    list.control_mut().set_value("cat");
    list.change();
    assert_eq!(
        updates.lock().as_slice(),
        &[single(json!({"value": "cat", "type": "animal"}))]
    );
}

#[test]
fn test_pre_grouped_options() {
    let source = OptionsSource::grouped(vec![
        GroupDescriptor::new("group1", vec!["value1"]),
        GroupDescriptor::new("group2", vec!["value2", "value3"]),
    ]);
    let mut list = SelectList::new(ListControl::new(), SelectConfig::new(), source, "value2");
    let updates = record(&list);

    assert!(list.groups().is_pre_grouped());
    assert_eq!(list.control().value(), "value2");
    assert_eq!(list.control().entry(2).unwrap().group.as_deref(), Some("group2"));

    list.control_mut().set_value("value3");
    list.change();
    assert_eq!(updates.lock().as_slice(), &[single("value3")]);
}

#[test]
fn test_pre_grouped_from_host_value() {
    let options = OptionsSource::from_value(json!([
        {"groupName": "Colors", "options": ["red", "green"]},
        {"groupName": "Sizes", "options": ["small"]},
    ]));
    let list = SelectList::new(ListControl::new(), SelectConfig::new(), options, "small");
    assert_eq!(list.groups().len(), 2);
    assert_eq!(list.control().value(), "small");
}

#[test]
fn test_multiple_selection() {
    let config = SelectConfig::new().with_multiple(true);
    let mut list = SelectList::new(
        ListControl::new(),
        config,
        vec!["unknown", "male", "female"],
        vec!["male", "female"],
    );
    let updates = record(&list);

    assert!(list.control().is_multiple());
    assert_eq!(
        list.control().selected_values(),
        vec!["male".to_string(), "female".to_string()]
    );

    list.control_mut().set_selected(0, true);
    list.control_mut().set_selected(2, false);
    list.change();

    for index in 0..list.control().count() {
        list.control_mut().set_selected(index, false);
    }
    list.change();

    assert_eq!(
        updates.lock().as_slice(),
        &[
            Selection::Multiple(vec![OptionValue::from("unknown"), OptionValue::from("male")]),
            Selection::Multiple(vec![]),
        ]
    );
}

#[test]
fn test_multiple_with_paths() {
    let config = SelectConfig::new()
        .with_multiple(true)
        .with_option_value_path("id")
        .with_option_target_path("id");
    let list = SelectList::new(
        ListControl::new(),
        config,
        vec![json!({"id": 1}), json!({"id": 2}), json!({"id": 3})],
        vec![3, 1],
    );
    assert_eq!(list.control().selected_values(), vec!["1".to_string(), "3".to_string()]);
    assert_eq!(
        list.selection(),
        Selection::Multiple(vec![OptionValue::from(3), OptionValue::from(1)])
    );
}

#[test]
fn test_multiple_empty_value_selects_nothing() {
    let config = SelectConfig::new().with_multiple(true).with_prompt(true);
    let list = SelectList::new(ListControl::new(), config, vec!["a", "b"], OptionValue::absent());
    assert!(list.control().selected_values().is_empty());
}

#[test]
fn test_prompt_selects_blank() {
    let config = SelectConfig::new().with_prompt("Choose one");
    let mut list = SelectList::new(
        ListControl::new(),
        config,
        vec!["one", "two", "three"],
        OptionValue::absent(),
    );
    let updates = record(&list);

    assert_eq!(texts(&list), vec!["Choose one", "one", "two", "three"]);
    assert_eq!(list.control().selected_index(), Some(0));
    assert!(list.control().entry(0).unwrap().disabled);

    list.control_mut().set_value("one");
    list.change();
    list.control_mut().set_value("");
    list.change();

    assert_eq!(
        updates.lock().as_slice(),
        &[single("one"), Selection::Single(None)]
    );
}

#[test]
fn test_prompt_is_selectable() {
    let config = SelectConfig::new().with_prompt(true).with_prompt_is_selectable(true);
    let list = SelectList::new(ListControl::new(), config, vec!["one"], "one");

    let prompt = list.control().entry(0).unwrap();
    assert_eq!(prompt.text, "");
    assert!(!prompt.disabled);
    assert!(!prompt.selected);
    assert_eq!(list.control().value(), "one");
}

#[test]
fn test_token_options() {
    let mut list = SelectList::new(
        ListControl::new(),
        SelectConfig::new(),
        OptionsSource::tokens("one two  three"),
        "two",
    );
    let updates = record(&list);

    assert_eq!(texts(&list), vec!["one", "two", "three"]);
    assert_eq!(list.control().value(), "two");

    list.control_mut().set_value("three");
    list.change();
    assert_eq!(updates.lock().as_slice(), &[single("three")]);
}

#[test]
fn test_missing_options_render_nothing() {
    let list = SelectList::new(
        ListControl::new(),
        SelectConfig::new(),
        OptionsSource::from_value(Value::Null),
        "anything",
    );
    assert_eq!(list.control().count(), 0);
    assert_eq!(list.selection(), Selection::Single(None));
}

#[test]
fn test_delegate_sees_render_positions() {
    let list = SelectList::new(
        ListControl::new(),
        SelectConfig::new(),
        vec!["unknown", "male", "female"],
        "male",
    )
    .with_delegate(|option: &RenderedOption| format!("{}-{}", option.label, option.index));
    assert_eq!(texts(&list), vec!["unknown-0", "male-1", "female-2"]);
    assert_eq!(list.control().value(), "male");

    let source = OptionsSource::grouped(vec![
        GroupDescriptor::new("group1", vec!["value1"]),
        GroupDescriptor::new("group2", vec!["value2", "value3"]),
    ]);
    let list = SelectList::new(ListControl::new(), SelectConfig::new(), source, OptionValue::absent())
        .with_delegate(|option: &RenderedOption| {
            format!("{}-{}-{}", option.label, option.group_index.unwrap_or(0), option.index)
        });
    assert_eq!(texts(&list), vec!["value1-0-0", "value2-1-0", "value3-1-1"]);
}

#[test]
fn test_from_attrs() {
    let parsed = SelectAttrs::from_attrs(attrs(json!({
        "options": "one two three",
        "value": "one",
        "paramValue": "two",
        "includeBlank": "Pick",
        "multiple": false,
        "class": "form-control",
        "data-test": "chooser",
        "update": null,
    })))
    .expect("valid attributes");

    let list = SelectList::from_attrs(ListControl::new(), parsed);
    assert_eq!(texts(&list), vec!["Pick", "one", "two", "three"]);
    assert_eq!(list.control().value(), "two");

    let forwarded: Vec<&str> = list.attributes().iter().map(|(key, _)| key).collect();
    assert_eq!(forwarded, vec!["data-test", "multiple"]);
    assert_eq!(list.attributes().get("multiple"), Some(&json!(false)));
}

#[test]
fn test_from_attrs_rejects_bad_path() {
    let result = SelectAttrs::from_attrs(attrs(json!({"optionValuePath": 3})));
    assert!(matches!(
        result,
        Err(horizon_select::Error::InvalidAttribute { ref key, .. }) if key == "optionValuePath"
    ));
}
