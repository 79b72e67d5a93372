//! Interactive session tests using the REAL roster binary
//!
//! Stdin is piped, so the binary reads plain lines instead of driving a
//! terminal prompt.

mod common;

use predicates::prelude::*;

use common::{TestHome, script};

#[test]
fn test_machine_learning_scenario() {
    let home = TestHome::new();
    home.roster_cmd()
        .write_stdin(script(&[
            "Machine Learning",
            "1",
            "Ubaid",
            "12365",
            "95 99 100",
            "1",
            "Sanyam",
            "64721",
            "95 88 92",
            "4",
            "2",
            "64721",
            "4",
            "5",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the course name to manage: "))
        .stdout(predicate::str::contains("Student added successfully."))
        .stdout(predicate::str::contains(
            "Student: Sanyam, ID: 64721, Average GPA: 91.67",
        ))
        .stdout(predicate::str::contains("Course average GPA: 94.83"))
        .stdout(predicate::str::contains("Student removed successfully."))
        .stdout(predicate::str::contains("Course average GPA: 98.00"))
        .stdout(predicate::str::ends_with("Exiting...\n"));
}

#[test]
fn test_empty_course_scenario() {
    let home = TestHome::new();
    home.roster_cmd()
        .write_stdin(script(&["Empty", "4", "3", "x", "2", "x", "5"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Course: Empty\nNo students enrolled."))
        .stdout(predicate::str::contains("Course average GPA").not())
        .stdout(predicate::str::contains("Student not found.").count(2));
}

#[test]
fn test_course_flag_skips_name_prompt() {
    let home = TestHome::new();
    home.roster_cmd()
        .args(["--course", "Compilers"])
        .write_stdin(script(&["4", "5"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the course name").not())
        .stdout(predicate::str::contains("Course: Compilers"));
}

#[test]
fn test_course_from_environment() {
    let home = TestHome::new();
    home.roster_cmd()
        .env("ROSTER_COURSE", "Databases")
        .write_stdin(script(&["4", "5"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Course: Databases"));
}

#[test]
fn test_session_subcommand_is_the_default() {
    let home = TestHome::new();
    home.roster_cmd()
        .args(["session", "-c", "ML"])
        .write_stdin(script(&["5"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Course Management System"));
}

#[test]
fn test_invalid_choice_keeps_session_alive() {
    let home = TestHome::new();
    home.roster_cmd()
        .args(["-c", "ML"])
        .write_stdin(script(&["9", "5"]))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid choice. Please enter a number between 1 and 5.",
        ))
        .stdout(predicate::str::contains("Course Management System").count(2));
}

#[test]
fn test_malformed_grades_are_reported() {
    let home = TestHome::new();
    home.roster_cmd()
        .args(["-c", "ML"])
        .write_stdin(script(&["1", "Ada", "a1", "90 A+", "4", "5"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Invalid grade 'A+'"))
        .stdout(predicate::str::contains("No students enrolled."));
}

#[test]
fn test_end_of_input_ends_session() {
    let home = TestHome::new();
    home.roster_cmd()
        .args(["-c", "ML"])
        .write_stdin("1\nAda\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Exiting...\n"));
}

#[test]
fn test_no_input_at_course_prompt_exits_quietly() {
    let home = TestHome::new();
    home.roster_cmd()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Course Management System").not());
}

#[test]
fn test_duplicates_rejected_by_flag() {
    let home = TestHome::new();
    home.roster_cmd()
        .args(["-c", "ML", "--duplicates", "reject"])
        .write_stdin(script(&["1", "Ada", "7", "", "1", "Bob", "7", "", "4", "5"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Student ID '7' is already enrolled"))
        .stdout(predicate::str::contains("Student: Bob").not());
}

#[test]
fn test_duplicates_replaced_by_environment() {
    let home = TestHome::new();
    home.roster_cmd()
        .args(["-c", "ML"])
        .env("ROSTER_DUPLICATES", "replace")
        .write_stdin(script(&["1", "Ada", "7", "", "1", "Bob", "7", "", "4", "5"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Student 7 replaced."))
        .stdout(predicate::str::contains("Student: Bob, ID: 7"))
        .stdout(predicate::str::contains("Student: Ada, ID: 7").count(1));
}

#[test]
fn test_duplicates_allowed_by_default() {
    let home = TestHome::new();
    home.roster_cmd()
        .args(["-c", "ML"])
        .write_stdin(script(&["1", "Ada", "7", "", "1", "Bob", "7", "", "4", "5"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Student: Ada, ID: 7"))
        .stdout(predicate::str::contains("Student: Bob, ID: 7"));
}

#[test]
fn test_no_color_output_is_not_styled() {
    let home = TestHome::new();
    home.roster_cmd()
        .args(["-c", "ML", "--no-color"])
        .write_stdin(script(&["4", "5"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let home = TestHome::new();
    home.roster_cmd()
        .args(["-c", "ML", "-v"])
        .write_stdin(script(&["1", "Ada", "a1", "", "5"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("enrolling student").not())
        .stderr(predicate::str::contains("enrolling student"));
}
