use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn ls2(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ls2"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn stdout_rows(output: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(output)
        .lines()
        .skip(2)
        .map(str::to_owned)
        .collect()
}

fn scenario() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("file.txt"), vec![b'x'; 120]).unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join(".secret"), "s").unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(dir.path().join("file.txt"), fs::Permissions::from_mode(0o644)).unwrap();
        fs::set_permissions(dir.path().join("sub"), fs::Permissions::from_mode(0o755)).unwrap();
    }
    dir
}

#[test]
fn lists_working_directory() {
    let dir = scenario();
    let assert = ls2(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Name"))
        .stdout(predicate::str::contains("Last Modified"))
        .stdout(predicate::str::contains(".secret").not());

    let rows = stdout_rows(&assert.get_output().stdout);
    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains("file.txt"));
    assert!(rows[0].contains("120"));
    assert!(rows[1].contains("./sub"));
}

#[test]
fn all_flag_shows_hidden_entries() {
    let dir = scenario();
    let assert = ls2(dir.path()).arg("-a").assert().success();
    let rows = stdout_rows(&assert.get_output().stdout);
    assert_eq!(rows.len(), 3);
    assert!(rows[0].contains(".secret"));
}

#[cfg(unix)]
#[test]
fn numeric_flag_switches_permission_format() {
    let dir = scenario();
    ls2(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("-rw-r--r--"))
        .stdout(predicate::str::contains("drwxr-xr-x"));

    ls2(dir.path())
        .arg("-n")
        .assert()
        .success()
        .stdout(predicate::str::contains(" 644 "))
        .stdout(predicate::str::contains(" 755 "))
        .stdout(predicate::str::contains("-rw-r--r--").not());
}

#[test]
fn colors_are_always_emitted() {
    let dir = scenario();
    ls2(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1B[0;36mfile.txt"))
        .stdout(predicate::str::contains("\x1B[0;34m./sub"))
        .stdout(predicate::str::contains("\x1B[33m"));
}

#[test]
fn version_exits_zero() {
    let dir = TempDir::new().unwrap();
    ls2(dir.path())
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains("Running ls2 v"))
        .stdout(predicate::str::contains("Name").not());
}

#[test]
fn help_exits_zero() {
    let dir = TempDir::new().unwrap();
    ls2(dir.path())
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Displays hidden files."));
}

#[test]
fn unknown_flag_fails_with_usage() {
    let dir = TempDir::new().unwrap();
    ls2(dir.path())
        .arg("-z")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn positional_argument_is_rejected() {
    let dir = TempDir::new().unwrap();
    ls2(dir.path()).arg("elsewhere").assert().code(1);
}

#[cfg(unix)]
#[test]
fn stat_failure_is_fatal() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ok.txt"), "fine").unwrap();
    std::os::unix::fs::symlink(dir.path().join("nowhere"), dir.path().join("dangling")).unwrap();

    ls2(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("ls2: cannot stat"));
}

#[cfg(unix)]
#[test]
fn help_and_version_do_not_touch_the_directory() {
    let dir = TempDir::new().unwrap();
    std::os::unix::fs::symlink(dir.path().join("nowhere"), dir.path().join("dangling")).unwrap();

    ls2(dir.path()).arg("-v").assert().success();
    ls2(dir.path()).arg("-h").assert().success();
    ls2(dir.path()).arg("-a").arg("-h").assert().success();
}

#[cfg(unix)]
#[test]
fn hidden_broken_entry_is_skipped_without_all() {
    let dir = TempDir::new().unwrap();
    std::os::unix::fs::symlink(dir.path().join("nowhere"), dir.path().join(".dangling")).unwrap();

    ls2(dir.path()).assert().success();
    ls2(dir.path()).arg("-a").assert().code(1);
}

#[test]
fn repeated_flags_are_accepted() {
    let dir = scenario();
    let assert = ls2(dir.path()).arg("-aa").assert().success();
    assert_eq!(stdout_rows(&assert.get_output().stdout).len(), 3);

    ls2(dir.path()).args(["-n", "-n", "-a", "-a"]).assert().success();
}

#[cfg(target_os = "linux")]
#[test]
fn removed_working_directory_is_fatal() {
    let parent = TempDir::new().unwrap();
    let doomed = parent.path().join("doomed");
    fs::create_dir(&doomed).unwrap();

    Command::new("sh")
        .arg("-c")
        .arg(r#"cd "$1" && rmdir "$1" && exec "$0""#)
        .arg(env!("CARGO_BIN_EXE_ls2"))
        .arg(&doomed)
        .env_remove("RUST_LOG")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("ls2: cannot open directory"));
}

#[cfg(target_os = "linux")]
#[test]
fn help_and_version_report_write_failures() {
    for flag in ["-h", "-v"] {
        Command::new("sh")
            .arg("-c")
            .arg(r#"exec "$0" "$1" > /dev/full"#)
            .arg(env!("CARGO_BIN_EXE_ls2"))
            .arg(flag)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("cannot write output"));
    }
}
