mod common;
use common::*;

use serde_json::json;

fn seed_ab(dir: &std::path::Path) {
    write_json(dir, "a.json", &json!([{ "nombre": "Ana" }, { "nombre": "Luis" }]));
    write_json(dir, "b.json", &json!([{ "nombre": "ana" }, { "nombre": "Marco" }]));
}

#[test]
fn merges_two_files_dropping_case_duplicate() {
    let dir = workdir();
    seed_ab(dir.path());

    let stdout = nombres_ok(dir.path(), &["dedupe", "--out", "out.json", "a.json", "b.json"]);

    assert_eq!(
        read_json(dir.path(), "out.json"),
        json!([{ "nombre": "Ana" }, { "nombre": "Luis" }, { "nombre": "Marco" }])
    );
    assert!(stdout.contains("Merging 2 file(s):"), "stdout: {stdout}");
    assert!(stdout.contains("Records read:        4"), "stdout: {stdout}");
    assert!(stdout.contains("Duplicates removed:  1"), "stdout: {stdout}");
    assert!(stdout.contains("keep=first"), "stdout: {stdout}");
    assert!(stdout.contains("out.json"), "stdout: {stdout}");
}

#[test]
fn keep_last_keeps_later_record_in_its_position() {
    let dir = workdir();
    seed_ab(dir.path());

    nombres_ok(
        dir.path(),
        &["dedupe", "--out", "out.json", "a.json", "b.json", "--keep", "last"],
    );

    assert_eq!(
        names(&read_json(dir.path(), "out.json")),
        ["Luis", "ana", "Marco"]
    );
}

#[test]
fn strict_flags_keep_every_spelling() {
    let dir = workdir();
    write_json(
        dir.path(),
        "a.json",
        &json!([{ "nombre": "Ana" }, { "nombre": "ana" }, { "nombre": "Aná" }]),
    );

    let default_out = nombres_ok(dir.path(), &["dedupe", "--out", "d.json", "a.json"]);
    assert!(default_out.contains("Duplicates removed:  2"));
    assert_eq!(names(&read_json(dir.path(), "d.json")), ["Ana"]);

    nombres_ok(
        dir.path(),
        &[
            "dedupe",
            "--out",
            "s.json",
            "a.json",
            "--case-sensitive",
            "--keep-accents",
        ],
    );
    assert_eq!(names(&read_json(dir.path(), "s.json")), ["Ana", "ana", "Aná"]);
}

#[test]
fn glob_never_reads_the_output_file() {
    let dir = workdir();
    seed_ab(dir.path());
    write_json(
        dir.path(),
        "merged.json",
        &json!([{ "nombre": "Stale" }, { "nombre": "Stale" }]),
    );

    let stdout = nombres_ok(dir.path(), &["dedupe", "--out", "merged.json", "*.json"]);

    assert!(stdout.contains("Merging 2 file(s):"), "stdout: {stdout}");
    let merged = read_json(dir.path(), "merged.json");
    assert_eq!(names(&merged), ["Ana", "Luis", "Marco"]);
}

#[test]
fn files_are_merged_in_natural_order() {
    let dir = workdir();
    write_json(dir.path(), "nombres_101_200.json", &json!([{ "nombre": "Second" }]));
    write_json(dir.path(), "nombres_2_100.json", &json!([{ "nombre": "First" }]));
    write_json(dir.path(), "nombres_1000_1100.json", &json!([{ "nombre": "Third" }]));

    let stdout = nombres_ok(dir.path(), &["dedupe", "--out", "all.json", "nombres_*.json"]);

    assert_eq!(
        names(&read_json(dir.path(), "all.json")),
        ["First", "Second", "Third"]
    );
    let first = stdout.find("nombres_2_100.json").expect("listed");
    let second = stdout.find("nombres_101_200.json").expect("listed");
    assert!(first < second, "stdout: {stdout}");
}

#[test]
fn rerun_on_own_output_removes_nothing() {
    let dir = workdir();
    seed_ab(dir.path());
    nombres_ok(dir.path(), &["dedupe", "--out", "once.json", "a.json", "b.json"]);

    let stdout = nombres_ok(dir.path(), &["dedupe", "--out", "twice.json", "once.json"]);

    assert!(stdout.contains("Duplicates removed:  0"), "stdout: {stdout}");
    assert_eq!(
        read_json(dir.path(), "once.json"),
        read_json(dir.path(), "twice.json")
    );
}

#[test]
fn report_lists_collisions_and_config() {
    let dir = workdir();
    seed_ab(dir.path());

    let stdout = nombres_ok(
        dir.path(),
        &[
            "dedupe",
            "--out",
            "out.json",
            "a.json",
            "b.json",
            "--report",
            "dups.txt",
        ],
    );

    let report = std::fs::read_to_string(dir.path().join("dups.txt")).expect("report written");
    assert_eq!(
        report,
        "Duplicates detected: 1\n\
         Key: nombre, keep=first, case_sensitive=false, keep_accents=false\n\
         \n\
         ana  (kept: 0, duplicate: 2)\n"
    );
    assert!(stdout.contains("Report:"), "stdout: {stdout}");
}

#[test]
fn custom_key_field() {
    let dir = workdir();
    write_json(
        dir.path(),
        "a.json",
        &json!([
            { "nombre": "Ana", "id": 7 },
            { "nombre": "Bea", "id": 7 },
            { "nombre": "Ana", "id": 8 },
        ]),
    );

    nombres_ok(dir.path(), &["dedupe", "--out", "out.json", "a.json", "--key", "id"]);

    assert_eq!(names(&read_json(dir.path(), "out.json")), ["Ana", "Ana"]);
}

#[test]
fn no_matching_inputs_exits_with_error() {
    let dir = workdir();

    let out = nombres_in(dir.path(), &["dedupe", "--out", "out.json", "nothing_*.json"]);

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("no input files matched"), "stderr: {stderr}");
    assert!(!dir.path().join("out.json").exists());
}

#[test]
fn output_path_alone_counts_as_no_inputs() {
    let dir = workdir();
    seed_ab(dir.path());

    let stderr = nombres_fails(dir.path(), &["dedupe", "--out", "a.json", "a.json"]);

    assert!(stderr.contains("no input files matched"), "stderr: {stderr}");
}

#[test]
fn non_array_and_broken_files_are_skipped_with_warning() {
    let dir = workdir();
    seed_ab(dir.path());
    write_json(dir.path(), "c.json", &json!({ "nombre": "Object" }));
    std::fs::write(dir.path().join("d.json"), "[{ not json").expect("write");

    let out = nombres_in(
        dir.path(),
        &["dedupe", "--out", "out.json", "a.json", "b.json", "c.json", "d.json"],
    );

    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("warning:"), "stderr: {stderr}");
    assert!(stderr.contains("c.json"), "stderr: {stderr}");
    assert!(stderr.contains("d.json"), "stderr: {stderr}");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(!stdout.contains("warning:"), "warnings leaked to stdout: {stdout}");
    assert_eq!(names(&read_json(dir.path(), "out.json")), ["Ana", "Luis", "Marco"]);
}

#[test]
fn missing_literal_path_is_dropped() {
    let dir = workdir();
    seed_ab(dir.path());

    let stdout = nombres_ok(
        dir.path(),
        &["dedupe", "--out", "out.json", "a.json", "ghost.json"],
    );

    assert!(stdout.contains("Merging 1 file(s):"), "stdout: {stdout}");
}

#[test]
fn non_ascii_is_written_unescaped() {
    let dir = workdir();
    write_json(dir.path(), "a.json", &json!([{ "nombre": "Begoña" }]));

    nombres_ok(dir.path(), &["dedupe", "--out", "out.json", "a.json"]);

    let text = std::fs::read_to_string(dir.path().join("out.json")).expect("read");
    assert!(text.contains("Begoña"), "output: {text}");
    assert!(text.ends_with('\n'));
}

#[test]
fn config_file_sets_defaults_and_flags_override() {
    let dir = workdir();
    seed_ab(dir.path());
    std::fs::write(
        dir.path().join("nombres.toml"),
        "[dedupe]\nkeep = \"last\"\n",
    )
    .expect("write config");

    nombres_ok(dir.path(), &["dedupe", "--out", "cfg.json", "a.json", "b.json"]);
    assert_eq!(names(&read_json(dir.path(), "cfg.json")), ["Luis", "ana", "Marco"]);

    nombres_ok(
        dir.path(),
        &["dedupe", "--out", "cli.json", "a.json", "b.json", "--keep", "first"],
    );
    assert_eq!(names(&read_json(dir.path(), "cli.json")), ["Ana", "Luis", "Marco"]);
}

#[test]
fn invalid_config_is_reported_with_line() {
    let dir = workdir();
    seed_ab(dir.path());
    std::fs::write(dir.path().join("nombres.toml"), "[dedupe]\nbogus = 1\n").expect("write");

    let stderr = nombres_fails(dir.path(), &["dedupe", "--out", "out.json", "a.json"]);

    assert!(stderr.contains("line 2"), "stderr: {stderr}");
}

#[test]
fn explicit_missing_config_fails() {
    let dir = workdir();
    seed_ab(dir.path());

    let stderr = nombres_fails(
        dir.path(),
        &["--config", "nope.toml", "dedupe", "--out", "out.json", "a.json"],
    );

    assert!(stderr.contains("nope.toml"), "stderr: {stderr}");
}

#[test]
fn bad_keep_value_is_rejected() {
    let dir = workdir();
    seed_ab(dir.path());

    nombres_fails(
        dir.path(),
        &["dedupe", "--out", "out.json", "a.json", "--keep", "middle"],
    );
}

#[test]
fn records_keep_field_order_and_number_literals() {
    let dir = workdir();
    std::fs::write(
        dir.path().join("a.json"),
        r#"[{"nombre":"Ana","genero":"F","origen":"Hebreo","id":12345678901234567890123,"peso":0.10,"extra":{"z":1,"a":2}},
            {"nombre":"ana","genero":"F"}]"#,
    )
    .expect("write");

    nombres_ok(dir.path(), &["dedupe", "--out", "out.json", "a.json"]);

    let text = std::fs::read_to_string(dir.path().join("out.json")).expect("read");
    assert_eq!(
        text,
        r#"[
  {
    "nombre": "Ana",
    "genero": "F",
    "origen": "Hebreo",
    "id": 12345678901234567890123,
    "peso": 0.10,
    "extra": {
      "z": 1,
      "a": 2
    }
  }
]
"#
    );
}

#[test]
fn generated_entries_survive_dedupe_unchanged() {
    let dir = workdir();
    std::fs::write(
        dir.path().join("nombres.csv"),
        "Nombre,Género,Origen\nRosa,F,latino\nrosa,F,latino\n",
    )
    .expect("write csv");
    nombres_ok(dir.path(), &["generate", "--in", "nombres.csv", "--out", "batch_1.json"]);

    nombres_ok(dir.path(), &["dedupe", "--out", "all.json", "batch_1.json"]);

    let batch = std::fs::read_to_string(dir.path().join("batch_1.json")).expect("read");
    let all = std::fs::read_to_string(dir.path().join("all.json")).expect("read");
    let first_record = |text: &str| {
        let start = text.find('{').expect("record");
        let end = text.find("\n  }").expect("record end");
        text[start..end].to_owned()
    };
    assert_eq!(first_record(&all), first_record(&batch));
    let nombre = all.find("\"nombre\"").expect("nombre");
    let genero = all.find("\"genero\"").expect("genero");
    let historia = all.find("\"historia\"").expect("historia");
    assert!(nombre < genero && genero < historia, "output: {all}");
}

#[test]
fn no_flags_switch_off_config_booleans() {
    let dir = workdir();
    write_json(
        dir.path(),
        "a.json",
        &json!([{ "nombre": "Ana" }, { "nombre": "ana" }, { "nombre": "Aná" }]),
    );
    std::fs::write(
        dir.path().join("nombres.toml"),
        "[dedupe]\ncase_sensitive = true\nkeep_accents = true\n",
    )
    .expect("write config");

    nombres_ok(dir.path(), &["dedupe", "--out", "cfg.json", "a.json"]);
    assert_eq!(names(&read_json(dir.path(), "cfg.json")), ["Ana", "ana", "Aná"]);

    let stdout = nombres_ok(
        dir.path(),
        &[
            "dedupe",
            "--out",
            "cli.json",
            "a.json",
            "--no-case-sensitive",
            "--no-keep-accents",
        ],
    );
    assert_eq!(names(&read_json(dir.path(), "cli.json")), ["Ana"]);
    assert!(stdout.contains("case_sensitive=false, keep_accents=false"), "stdout: {stdout}");
}

#[test]
fn last_of_a_flag_pair_wins() {
    let dir = workdir();
    write_json(dir.path(), "a.json", &json!([{ "nombre": "Ana" }, { "nombre": "ana" }]));

    nombres_ok(
        dir.path(),
        &[
            "dedupe",
            "--out",
            "out.json",
            "a.json",
            "--no-case-sensitive",
            "--case-sensitive",
        ],
    );

    assert_eq!(names(&read_json(dir.path(), "out.json")), ["Ana", "ana"]);
}
