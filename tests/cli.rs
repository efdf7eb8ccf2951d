use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn eval_prints_value() {
    let mut cmd = cargo_bin_cmd!("combilex");
    cmd.arg("eval").arg("1 * (2 + 3)");
    cmd.assert().success().stdout("5\n");
}

#[test]
fn eval_nested_parentheses() {
    let expression = format!("{}6{} * 7", "(".repeat(12), ")".repeat(12));
    let mut cmd = cargo_bin_cmd!("combilex");
    cmd.arg("eval").arg(expression);
    cmd.assert().success().stdout("42\n");
}

#[test]
fn eval_reports_lexing_error_location() {
    let mut cmd = cargo_bin_cmd!("combilex");
    cmd.arg("eval").arg("1 $ 2");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("<stdin>:1:3: Invalid character: '$'"));
}

#[test]
fn eval_reports_parsing_failure() {
    let mut cmd = cargo_bin_cmd!("combilex");
    cmd.arg("eval").arg("(1");
    cmd.assert().failure().stderr(
        predicate::str::contains("RightParen").and(predicate::str::contains("got end of input")),
    );
}

#[test]
fn eval_json_report() {
    let mut cmd = cargo_bin_cmd!("combilex");
    cmd.arg("eval").arg("2 * 3 + 1").arg("--format").arg("json");
    cmd.assert().success().stdout(
        predicate::str::contains(r#""value": 7"#)
            .and(predicate::str::contains(r#""tree": "((2 * 3) + 1)""#))
            .and(predicate::str::contains("tokens").not()),
    );
}

#[test]
fn tokens_from_stdin() {
    let mut cmd = cargo_bin_cmd!("combilex");
    cmd.arg("tokens").arg("-").write_stdin("1 +\n 2");
    cmd.assert().success().stdout(
        predicate::str::contains("<stdin>:1:1\t[Int: \"1\"]")
            .and(predicate::str::contains("<stdin>:2:2\t[Int: \"2\"]")),
    );
}

#[test]
fn tokens_yaml() {
    let mut cmd = cargo_bin_cmd!("combilex");
    cmd.args(["tokens", "-", "--format", "yaml"]).write_stdin("(");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("kind: LeftParen"));
}

#[test]
fn c_name_rewrites_identifier() {
    let mut cmd = cargo_bin_cmd!("combilex");
    cmd.arg("c-name").arg("lisp-name");
    cmd.assert().success().stdout("lisp_45name\n");
}

#[test]
fn config_file_is_layered_over_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[input]\nstdin_name = \"expr\"\n\n[output]\nshow_tokens = true").unwrap();

    let mut cmd = cargo_bin_cmd!("combilex");
    cmd.arg("--config").arg(file.path()).arg("eval").arg("4 + 5");
    cmd.assert().success().stdout(
        predicate::str::contains("expr:1:1\t[Int: \"4\"]").and(predicate::str::ends_with("9\n")),
    );
}

#[test]
fn local_config_file_is_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("combilex.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("combilex");
    cmd.current_dir(dir.path()).args(["c-name", "a-b"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""c_name": "a_45b""#));
}

#[test]
fn format_flag_beats_local_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("combilex.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("combilex");
    cmd.current_dir(dir.path())
        .args(["--format", "text", "c-name", "a-b"]);
    cmd.assert().success().stdout("a_45b\n");
}

#[test]
fn missing_config_file_fails() {
    let mut cmd = cargo_bin_cmd!("combilex");
    cmd.args(["--config", "/nonexistent/combilex.toml", "eval", "1"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error loading configuration"));
}
