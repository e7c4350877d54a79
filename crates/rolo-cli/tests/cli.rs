use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

fn run_raw(data_path: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    let mut cmd = cargo_bin_cmd!("rolo");
    cmd.args(["--data-path", data_path.to_str().expect("data path")])
        .args(args);
    if let Some(input) = stdin {
        cmd.write_stdin(input.to_string());
    }
    cmd.output().expect("run command")
}

fn run_cmd(data_path: &Path, args: &[&str]) -> String {
    let output = run_raw(data_path, args, None);
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(data_path: &Path, args: &[&str]) -> Value {
    let output = cargo_bin_cmd!("rolo")
        .args(["--data-path", data_path.to_str().expect("data path"), "--json"])
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

#[test]
fn cli_add_list_show_flow() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("book.json");

    run_cmd(&data_path, &["add-contact", "Ada Lovelace"]);

    let list = run_cmd_json(&data_path, &["list"]);
    let items = list.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Ada Lovelace");
    assert_eq!(items[0]["note_count"], 0);

    let detail = run_cmd_json(&data_path, &["show", "ada lovelace"]);
    assert_eq!(detail["name"], "Ada Lovelace");
    assert!(detail["phones"].as_array().expect("array").is_empty());
}

#[test]
fn duplicate_contact_exits_with_invalid_input() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("book.json");

    run_cmd(&data_path, &["add-contact", "Ada"]);
    let output = run_raw(&data_path, &["add-contact", "ada"], None);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn missing_contact_exits_with_not_found() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("book.json");

    let output = run_raw(&data_path, &["show", "Nobody"], None);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn phone_add_normalizes_and_lists() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("book.json");

    run_cmd(&data_path, &["add-contact", "Ada"]);
    run_cmd(&data_path, &["phone", "add", "Ada", "38(050)123-45-67"]);

    let phones = run_cmd_json(&data_path, &["phone", "ls", "Ada"]);
    let items = phones.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["number"], "+380501234567");
    assert_eq!(items[0]["is_main"], false);
}

#[test]
fn invalid_phone_exits_with_invalid_input() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("book.json");

    run_cmd(&data_path, &["add-contact", "Ada"]);
    let output = run_raw(&data_path, &["phone", "add", "Ada", "not-a-number"], None);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn single_candidate_edit_does_not_prompt() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("book.json");

    run_cmd(&data_path, &["add-contact", "Ada"]);
    run_cmd(&data_path, &["phone", "add", "Ada", "+380501234567"]);

    // One candidate auto-selects: no stdin provided, must still succeed.
    let stdout = run_cmd(&data_path, &["phone", "edit", "Ada", "+380507654321"]);
    assert!(stdout.contains("+380507654321"));

    let phones = run_cmd_json(&data_path, &["phone", "ls", "Ada"]);
    assert_eq!(phones.as_array().expect("array")[0]["number"], "+380507654321");
}

#[test]
fn multiple_candidates_read_index_from_stdin() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("book.json");

    run_cmd(&data_path, &["add-contact", "Ada"]);
    run_cmd(&data_path, &["phone", "add", "Ada", "+380501111111"]);
    run_cmd(&data_path, &["phone", "add", "Ada", "+380502222222"]);

    let output = run_raw(&data_path, &["phone", "set-main", "Ada"], Some("1\n"));
    assert!(output.status.success(), "command failed: {:?}", output);

    let phones = run_cmd_json(&data_path, &["phone", "ls", "Ada"]);
    let items = phones.as_array().expect("array");
    assert_eq!(items[0]["is_main"], false);
    assert_eq!(items[1]["is_main"], true);
}

#[test]
fn cancelled_selection_is_not_an_error() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("book.json");

    run_cmd(&data_path, &["add-contact", "Ada"]);
    run_cmd(&data_path, &["phone", "add", "Ada", "+380501111111"]);
    run_cmd(&data_path, &["phone", "add", "Ada", "+380502222222"]);

    let output = run_raw(&data_path, &["phone", "rm", "Ada"], Some("\n"));
    assert!(output.status.success(), "command failed: {:?}", output);
    assert!(String::from_utf8(output.stdout)
        .expect("utf8")
        .contains("no selection"));

    let phones = run_cmd_json(&data_path, &["phone", "ls", "Ada"]);
    assert_eq!(phones.as_array().expect("array").len(), 2);
}

#[test]
fn main_flag_moves_between_emails() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("book.json");

    run_cmd(&data_path, &["add-contact", "Ada"]);
    run_cmd(&data_path, &["email", "add", "Ada", "Ada@Example.COM", "--main"]);
    run_cmd(&data_path, &["email", "add", "Ada", "work@example.com", "--main"]);

    let emails = run_cmd_json(&data_path, &["email", "ls", "Ada"]);
    let items = emails.as_array().expect("array");
    assert_eq!(items[0]["address"], "ada@example.com");
    assert_eq!(items[0]["is_main"], false);
    assert_eq!(items[1]["is_main"], true);
}

#[test]
fn address_fields_are_normalized() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("book.json");

    run_cmd(&data_path, &["add-contact", "Ada"]);
    run_cmd(
        &data_path,
        &[
            "address", "add", "Ada", "--country", "ukraine", "--city", "kyiv", "--street",
            "main   street 1", "--zip", "01001",
        ],
    );

    let addresses = run_cmd_json(&data_path, &["address", "ls", "Ada"]);
    let items = addresses.as_array().expect("array");
    assert_eq!(items[0]["country"], "UKRAINE");
    assert_eq!(items[0]["city"], "Kyiv");
    assert_eq!(items[0]["street_address"], "Main Street 1");
}

#[test]
fn birthday_set_show_and_week_window() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("book.json");

    run_cmd(&data_path, &["add-contact", "Ada"]);
    run_cmd(&data_path, &["birthday", "set", "Ada", "15.03.1990"]);

    let birthday = run_cmd_json(&data_path, &["birthday", "show", "Ada"]);
    assert_eq!(birthday["value"], "15.03.1990");

    // 13.03.2024 is a Wednesday; the occurrence lands in the same week.
    let upcoming = run_cmd_json(&data_path, &["birthdays", "--today", "13.03.2024"]);
    assert_eq!(upcoming["Ada"], "2024-03-15");

    let outside = run_cmd_json(&data_path, &["birthdays", "--today", "13.05.2024"]);
    assert!(outside.as_object().expect("object").is_empty());
}

#[test]
fn note_add_find_and_tag_search() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("book.json");

    run_cmd(&data_path, &["add-contact", "Ada"]);
    run_cmd(
        &data_path,
        &[
            "note", "add", "Ada", "--content", "prefers tea over coffee", "--title",
            "Beverages", "--tags", "Food, Preferences",
        ],
    );

    let found = run_cmd_json(&data_path, &["note", "find", "Ada", "tea"]);
    assert_eq!(found["title"], "Beverages");
    assert_eq!(found["tags"], serde_json::json!(["food", "preferences"]));

    let by_tag = run_cmd_json(&data_path, &["note", "find-by-tag", "Ada", "food"]);
    assert_eq!(by_tag["content"], "prefers tea over coffee");

    let missing = run_raw(&data_path, &["note", "find", "Ada", "meeting"], None);
    assert_eq!(missing.status.code(), Some(2));
}

#[test]
fn snapshot_persists_across_invocations() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("book.json");

    run_cmd(&data_path, &["add-contact", "Ada"]);
    run_cmd(&data_path, &["phone", "add", "Ada", "+380501234567", "--main"]);
    run_cmd(&data_path, &["delete", "Ada"]);
    run_cmd(&data_path, &["add-contact", "Grace"]);

    let list = run_cmd_json(&data_path, &["list"]);
    let items = list.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Grace");
}
