use rosewright_config::i18n::StringTable;
use rosewright_config::serialize::{SettingValue, DEVELOPER_KEY};
use rosewright_config::{ConfigPage, Generation};
use rstest::rstest;

fn page(generation: Generation, query: &str) -> ConfigPage {
    ConfigPage::from_query(generation, query, StringTable::builtin()).unwrap()
}

// --- ROUND TRIP ---

#[test]
fn test_untouched_toggle_round_trips() {
    let p = page(Generation::V2_12, "second_hand=1");
    let result = p.submit_form_body("");
    assert_eq!(result.get("second_hand"), Some(&SettingValue::Int(1)));
}

#[test]
fn test_untouched_page_reproduces_query_values() {
    let p = page(
        Generation::V4_14,
        "second_hand=1&sweep_seconds=0&num_faces=4&face_index=2&draw_mode=1\
         &date_window_keys=ab&date_window_a=3&date_window_b=8&display_lang=fr_FR&battery_gauge=3",
    );
    let json = p.submit_form_body("").to_json().unwrap();
    assert_eq!(
        json,
        concat!(
            r#"{"second_hand":1,"sweep_seconds":0,"face_index":2,"draw_mode":1,"#,
            r#""date_window_a":3,"date_window_b":8,"display_lang":"fr_FR","#,
            r#""lunar_background":0,"lunar_direction":0,"hour_buzzer":0,"#,
            r#""bluetooth_buzzer":0,"bluetooth_indicator":0,"battery_gauge":3}"#
        )
    );
}

#[test]
fn test_unmatched_query_value_falls_back_to_first_choice() {
    let p = page(Generation::V3_6, "battery_gauge=9&date_window_keys=a");
    let result = p.submit_form_body("");
    assert_eq!(result.get("battery_gauge"), Some(&SettingValue::Int(0)));
    assert_eq!(
        result.get("display_lang"),
        Some(&SettingValue::Text("cs_CZ".to_string()))
    );
}

#[test]
fn test_form_body_overrides_initial_values() {
    let p = page(Generation::V3_6, "draw_mode=0&date_window_keys=ab");
    let result = p.submit_form_body("draw_mode=1&date_window_1=6&display_lang=ja_JP");
    assert_eq!(result.get("draw_mode"), Some(&SettingValue::Int(1)));
    assert_eq!(result.get("date_window_1"), Some(&SettingValue::Int(6)));
    assert_eq!(result.get("date_window_0"), Some(&SettingValue::Int(0)));
    assert_eq!(
        result.get("display_lang"),
        Some(&SettingValue::Text("ja_JP".to_string()))
    );
}

// --- OMISSION ---

#[rstest]
#[case("second_hand=")]
#[case("second_hand=abc")]
#[case("second_hand=%20")]
#[case("second_hand=-")]
fn test_invalid_integer_is_omitted(#[case] body: &str) {
    let p = page(Generation::V4_14, "second_hand=1");
    let result = p.submit_form_body(body);
    assert!(!result.contains_key("second_hand"));
    assert!(result.contains_key("draw_mode"));
}

#[test]
fn test_integer_prefix_is_kept() {
    let p = page(Generation::V4_14, "");
    let result = p.submit_form_body("battery_gauge=2px");
    assert_eq!(result.get("battery_gauge"), Some(&SettingValue::Int(2)));
}

#[test]
fn test_empty_string_value_is_omitted() {
    let p = page(Generation::V4_14, "date_window_keys=a");
    let result = p.submit_form_body("display_lang=");
    assert!(!result.contains_key("display_lang"));
}

#[test]
fn test_unknown_form_fields_are_ignored() {
    let p = page(Generation::V2_4, "");
    let result = p.submit_form_body("chrono_dial=2&bogus=1");
    assert!(!result.contains_key("chrono_dial"));
    assert!(!result.contains_key("bogus"));
    assert_eq!(result.len(), p.registry.len());
}

#[test]
fn test_repeated_form_field_keeps_first_value() {
    let p = page(Generation::V4_14, "draw_mode=0");
    let result = p.submit_form_body("draw_mode=1&battery_gauge=2&draw_mode=0&battery_gauge=x");
    assert_eq!(result.get("draw_mode"), Some(&SettingValue::Int(1)));
    assert_eq!(result.get("battery_gauge"), Some(&SettingValue::Int(2)));
}

#[test]
fn test_result_keys_follow_declaration_order() {
    let p = page(
        Generation::V3_6,
        "sweep_seconds=1&num_faces=3&chrono_dial=2&date_window_keys=ab&top_subdial=1",
    );
    let result = p.submit_form_body("");
    let keys: Vec<&str> = result.keys().collect();
    assert_eq!(keys, p.registry.storage_keys());
}

// --- DEVELOPER UNLOCK ---

const UNLOCK_FORM: &str = "date_window_a=1&date_window_b=8&display_lang=ta_IN&draw_mode=1";

#[test]
fn test_unlock_adds_developer_key() {
    let p = page(Generation::V4_14, "date_window_keys=ab");
    assert!(!p.registry.contains(DEVELOPER_KEY));

    let result = p.submit_form_body(UNLOCK_FORM);
    assert_eq!(result.get(DEVELOPER_KEY), Some(&SettingValue::Int(1)));
    assert_eq!(result.len(), p.registry.len() + 1);
    assert_eq!(result.keys().last(), Some(DEVELOPER_KEY));
}

#[test]
fn test_unlock_from_untouched_query_values() {
    let p = page(
        Generation::V4_14,
        "date_window_keys=ab&date_window_a=1&date_window_b=8&display_lang=ta_IN&draw_mode=1",
    );
    let result = p.submit_form_body("");
    assert_eq!(result.get(DEVELOPER_KEY), Some(&SettingValue::Int(1)));
}

#[test]
fn test_unlock_overrides_declared_debug_toggle() {
    let p = page(Generation::V4_14, "date_window_keys=ab&show_debug=1");
    let body = format!("{}&show_debug=0", UNLOCK_FORM);
    let result = p.submit_form_body(&body);
    assert_eq!(result.get(DEVELOPER_KEY), Some(&SettingValue::Int(1)));
    assert_eq!(result.len(), p.registry.len());
}

#[rstest]
#[case("date_window_a=2&date_window_b=8&display_lang=ta_IN&draw_mode=1")]
#[case("date_window_a=1&date_window_b=6&display_lang=ta_IN&draw_mode=1")]
#[case("date_window_a=1&date_window_b=8&display_lang=hi_IN&draw_mode=1")]
#[case("date_window_a=1&date_window_b=8&display_lang=ta_IN&draw_mode=0")]
#[case("date_window_a=8&date_window_b=1&display_lang=ta_IN&draw_mode=1")]
fn test_other_combinations_do_not_unlock(#[case] body: &str) {
    let p = page(Generation::V4_14, "date_window_keys=ab");
    let result = p.submit_form_body(body);
    assert!(!result.contains_key(DEVELOPER_KEY));
}

#[test]
fn test_unlock_follows_window_key_letters() {
    let p = page(Generation::V4_14, "date_window_keys=cd");
    let result =
        p.submit_form_body("date_window_c=1&date_window_d=8&display_lang=ta_IN&draw_mode=1");
    assert_eq!(result.get(DEVELOPER_KEY), Some(&SettingValue::Int(1)));
}

#[test]
fn test_no_unlock_before_4_14() {
    let p = page(Generation::V3_6, "date_window_keys=ab");
    let result =
        p.submit_form_body("date_window_0=1&date_window_1=8&display_lang=ta_IN&draw_mode=1");
    assert!(!result.contains_key(DEVELOPER_KEY));
}
