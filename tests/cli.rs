// End-to-end: run the binary and check its stdout

use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn katas_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stream-katas"));
    cmd.env_remove("STREAM_KATAS_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn stdout_lines(cmd: &mut Command) -> Vec<String> {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|l| l.to_string())
        .collect()
}

#[test]
fn test_all_katas_one_line_each() {
    let lines = stdout_lines(&mut katas_cmd());

    assert_eq!(lines.len(), stream_katas::Kata::ALL.len());
    assert_eq!(lines[0], "false");
    assert_eq!(lines[2], "123456789");
    assert_eq!(lines[8], "60");
}

#[test]
fn test_single_kata() {
    let lines = stdout_lines(katas_cmd().arg("infinite"));
    assert_eq!(lines, vec!["2424"]);

    let lines = stdout_lines(katas_cmd().arg("find-first"));
    assert_eq!(lines, vec!["Some(8)"]);
}

#[test]
fn test_unknown_kata_fails() {
    let output = katas_cmd().arg("bogus").output().unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown kata: bogus"));
}

#[test]
fn test_config_file_from_env() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "output": "json", "generator": {{ "count": 1 }} }}"#).unwrap();
    file.flush().unwrap();

    let lines = stdout_lines(katas_cmd().arg("infinite").env("STREAM_KATAS_CONFIG", file.path()));

    assert_eq!(lines, vec![r#"{"kata":"infinite","result":804}"#]);
}

#[test]
fn test_people_csv_from_config() {
    let mut people = NamedTempFile::new().unwrap();
    write!(people, "name,gender,age\nAna,FEMALE,30\nLeo,MALE,5\n").unwrap();
    people.flush().unwrap();

    let mut config = NamedTempFile::new().unwrap();
    let people_path = people.path().to_str().unwrap().replace('\\', "\\\\");
    write!(config, r#"{{ "people_csv": "{}" }}"#, people_path).unwrap();
    config.flush().unwrap();

    let lines = stdout_lines(katas_cmd().arg("group-by").env("STREAM_KATAS_CONFIG", config.path()));

    assert_eq!(lines, vec!["{Ana=[{Ana, FEMALE, 30}], Leo=[{Leo, MALE, 5}]}"]);
}

#[test]
fn test_generator_overflow_fails_cleanly() {
    let mut config = NamedTempFile::new().unwrap();
    write!(config, r#"{{ "generator": {{ "start": {} }} }}"#, i64::MAX - 100).unwrap();
    config.flush().unwrap();

    let output = katas_cmd()
        .arg("infinite")
        .env("STREAM_KATAS_CONFIG", config.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Arithmetic overflow"));
}
