use predicates::str::contains;

mod common;
use common::{read_ledger, read_users, register, setup_data_dir, slog};

#[test]
fn test_init_creates_files_with_header_rows_only() {
    let dir = setup_data_dir("init");

    slog()
        .args(["--data-dir", &dir, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert_eq!(read_users(&dir), "user_id,name\n");
    assert_eq!(read_ledger(&dir), "user,date,clock_in,clock_out,worked_duration\n");
}

#[test]
fn test_start_prints_the_usage_text() {
    slog()
        .arg("start")
        .assert()
        .success()
        .stdout(contains("Welcome to the time attendance tracker"))
        .stdout(contains("clock-in"))
        .stdout(contains("clock-out"));
}

#[test]
fn test_register_stores_the_name_from_stdin() {
    let dir = setup_data_dir("register");

    slog()
        .args(["--data-dir", &dir, "--test", "register", "--user", "42"])
        .write_stdin("Alice Smith\n")
        .assert()
        .success()
        .stdout(contains("Please send your full name"))
        .stdout(contains("Thanks, Alice Smith"));

    assert_eq!(read_users(&dir), "user_id,name\n42,Alice Smith\n");
}

#[test]
fn test_register_short_circuits_when_already_registered() {
    let dir = setup_data_dir("register_twice");
    register(&dir, "42", "Alice Smith");

    slog()
        .args(["--data-dir", &dir, "--test", "register", "--user", "42"])
        .assert()
        .success()
        .stdout(contains("already registered as Alice Smith"));

    // still exactly one identity row
    assert_eq!(read_users(&dir), "user_id,name\n42,Alice Smith\n");
}

#[test]
fn test_register_cancel_aborts_the_dialogue() {
    let dir = setup_data_dir("register_cancel");

    slog()
        .args(["--data-dir", &dir, "--test", "register", "--user", "42"])
        .write_stdin("/cancel\n")
        .assert()
        .success()
        .stdout(contains("cancelled"));

    assert_eq!(read_users(&dir), "user_id,name\n");

    slog()
        .args(["--data-dir", &dir, "--test", "clock-in", "--user", "42"])
        .assert()
        .success()
        .stdout(contains("not registered"));
}

#[test]
fn test_cancel_with_nothing_pending() {
    let dir = setup_data_dir("cancel_idle");

    slog()
        .args(["--data-dir", &dir, "--test", "cancel", "--user", "42"])
        .assert()
        .success()
        .stdout(contains("Nothing to cancel"));
}

#[test]
fn test_clock_commands_require_registration() {
    let dir = setup_data_dir("unregistered");

    slog()
        .args(["--data-dir", &dir, "--test", "clock-in", "--user", "7"])
        .assert()
        .success()
        .stdout(contains("not registered"));

    slog()
        .args(["--data-dir", &dir, "--test", "clock-out", "--user", "7"])
        .assert()
        .success()
        .stdout(contains("not registered"));
}

#[test]
fn test_full_shift_flow() {
    let dir = setup_data_dir("full_flow");
    register(&dir, "42", "Alice Smith");

    slog()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "clock-in",
            "--user",
            "42",
            "--at",
            "09:00 01/01/2024",
        ])
        .assert()
        .success()
        .stdout(contains(
            "Clock-in recorded for Alice Smith at 09:00 on 01/01/2024",
        ));

    slog()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "clock-out",
            "--user",
            "42",
            "--at",
            "17:00 01/01/2024",
        ])
        .assert()
        .success()
        .stdout(contains("Worked: 8:00:00"));

    assert_eq!(
        read_ledger(&dir),
        "user,date,clock_in,clock_out,worked_duration\n\
         Alice Smith,01/01/2024,09:00,17:00,8:00:00\n"
    );
}

#[test]
fn test_clock_out_without_pending_entry() {
    let dir = setup_data_dir("no_pending");
    register(&dir, "42", "Alice Smith");

    slog()
        .args(["--data-dir", &dir, "--test", "clock-out", "--user", "42"])
        .assert()
        .success()
        .stdout(contains("No pending entry found for Alice Smith"));
}

#[test]
fn test_double_clock_in_orphans_the_first_row() {
    let dir = setup_data_dir("double_in");
    register(&dir, "42", "Bob");

    for at in ["08:00 01/01/2024", "09:00 01/01/2024"] {
        slog()
            .args([
                "--data-dir",
                &dir,
                "--test",
                "clock-in",
                "--user",
                "42",
                "--at",
                at,
            ])
            .assert()
            .success();
    }

    slog()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "clock-out",
            "--user",
            "42",
            "--at",
            "17:00 01/01/2024",
        ])
        .assert()
        .success()
        .stdout(contains("Worked: 8:00:00"));

    // first row stays open forever, second one is closed
    assert_eq!(
        read_ledger(&dir),
        "user,date,clock_in,clock_out,worked_duration\n\
         Bob,01/01/2024,08:00,,\n\
         Bob,01/01/2024,09:00,17:00,8:00:00\n"
    );
}

#[test]
fn test_users_interleave_without_closing_each_other() {
    let dir = setup_data_dir("two_users");
    register(&dir, "1", "Alice");
    register(&dir, "2", "Bob");

    slog()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "clock-in",
            "--user",
            "1",
            "--at",
            "09:00 01/01/2024",
        ])
        .assert()
        .success();

    slog()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "clock-in",
            "--user",
            "2",
            "--at",
            "10:00 01/01/2024",
        ])
        .assert()
        .success();

    slog()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "clock-out",
            "--user",
            "1",
            "--at",
            "17:00 01/01/2024",
        ])
        .assert()
        .success()
        .stdout(contains("Worked: 8:00:00"));

    // Bob's shift is still open
    assert_eq!(
        read_ledger(&dir),
        "user,date,clock_in,clock_out,worked_duration\n\
         Alice,01/01/2024,09:00,17:00,8:00:00\n\
         Bob,01/01/2024,10:00,,\n"
    );
}

#[test]
fn test_malformed_at_override_is_rejected() {
    let dir = setup_data_dir("bad_at");
    register(&dir, "42", "Alice");

    slog()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "clock-in",
            "--user",
            "42",
            "--at",
            "yesterday",
        ])
        .assert()
        .failure()
        .stderr(contains("Malformed timestamp"));
}
