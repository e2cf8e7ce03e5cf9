//! Integration tests for the calgrid command-line interface.

use assert_cmd::Command;
use predicates::prelude::*;

fn calgrid() -> Command {
    let mut cmd = Command::cargo_bin("calgrid").unwrap();
    cmd.env("CALGRID_TEST_TIME", "2026-02-18")
        .env("LC_ALL", "en_US.UTF-8")
        .env_remove("RUST_LOG");
    cmd
}

mod layout_output {
    use super::*;

    #[test]
    fn current_week_uniform_columns() {
        calgrid()
            .arg("-l")
            .assert()
            .success()
            .stdout(predicate::str::contains("row 2026-02-16..2026-02-22"))
            .stdout(predicate::str::contains("cell 2026-02-16 Mon left=0.00 width=14.29"))
            .stdout(predicate::str::contains("cell 2026-02-22 Sun left=85.71 width=14.29"));
    }

    #[test]
    fn narrow_weekend_columns() {
        calgrid()
            .args(["-l", "-N"])
            .assert()
            .success()
            .stdout(predicate::str::contains("cell 2026-02-20 Fri left=66.67 width=16.67"))
            .stdout(predicate::str::contains("cell 2026-02-21 Sat left=83.33 width=8.33"))
            .stdout(predicate::str::contains("cell 2026-02-22 Sun left=91.67 width=8.33"));
    }

    #[test]
    fn workweek_has_five_equal_columns() {
        calgrid()
            .args(["-l", "-W"])
            .assert()
            .success()
            .stdout(predicate::str::contains("row 2026-02-16..2026-02-20"))
            .stdout(predicate::str::contains("cell 2026-02-19 Thu left=60.00 width=20.00"))
            .stdout(predicate::str::contains("Sat").not());
    }

    #[test]
    fn sunday_start() {
        calgrid()
            .args(["-l", "-s"])
            .assert()
            .success()
            .stdout(predicate::str::contains("row 2026-02-15..2026-02-21"));
    }

    #[test]
    fn explicit_date() {
        calgrid()
            .args(["-l", "2026-03-04"])
            .assert()
            .success()
            .stdout(predicate::str::contains("row 2026-03-02..2026-03-08"));
    }

    #[test]
    fn event_placement() {
        calgrid()
            .args(["-l", "-e", "2026-02-17|2026-02-18|Trip"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "event e1 top=0 left=14.29 width=28.57 exceed_left=false exceed_right=false Trip",
            ));
    }

    #[test]
    fn event_order_and_stacking() {
        calgrid()
            .args([
                "-l",
                "-e",
                "2026-02-17T09:00|2026-02-17T10:00|Standup",
                "-e",
                "2026-02-17|2026-02-17|Holiday",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "event e2 top=0 left=14.29 width=14.29 exceed_left=false exceed_right=false Holiday\n  event e1 top=1",
            ));
    }

    #[test]
    fn month_view_has_six_rows() {
        let output = calgrid()
            .args(["-l", "-M", "2026-02-10"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("row ").count(), 6);
        assert!(text.contains("row 2026-01-26..2026-02-01"));
        assert!(text.contains("row 2026-03-02..2026-03-08"));
    }
}

mod draw_output {
    use super::*;

    #[test]
    fn draws_event_bar() {
        calgrid()
            .args(["-c", "70", "--no-color", "-e", "2026-02-17|2026-02-18|Trip"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Mo 16"))
            .stdout(predicate::str::contains("          [Trip]"));
    }

    #[test]
    fn month_header() {
        calgrid()
            .args(["-M", "-c", "70", "--no-color"])
            .assert()
            .success()
            .stdout(predicate::str::contains("February 2026"));
    }

    #[test]
    fn events_file() {
        let path =
            std::env::temp_dir().join(format!("calgrid-events-{}.txt", std::process::id()));
        std::fs::write(
            &path,
            "# planning\n2026-02-19|2026-02-20|Offsite\n2026-02-16T10:00|2026-02-16T11:00|Sync\n",
        )
        .unwrap();

        calgrid()
            .args(["-l", "-f"])
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("event e1 top=0 left=42.86"))
            .stdout(predicate::str::contains("Offsite"))
            .stdout(predicate::str::contains("event e2 top=0 left=0.00"));

        let _ = std::fs::remove_file(&path);
    }
}

mod errors {
    use super::*;

    #[test]
    fn invalid_event_spec() {
        calgrid()
            .args(["-e", "garbage"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("calgrid: Invalid event 'garbage'"));
    }

    #[test]
    fn event_ending_before_start() {
        calgrid()
            .args(["-e", "2026-02-18|2026-02-17|Backwards"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("ends before it starts"));
    }

    #[test]
    fn invalid_date() {
        calgrid()
            .arg("2026-13-01")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid date: 2026-13-01"));
    }

    #[test]
    fn zero_width() {
        calgrid()
            .args(["-c", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid width value"));
    }

    #[test]
    fn conflicting_week_start() {
        calgrid()
            .args(["-s", "-m"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("mutually exclusive"));
    }

    #[test]
    fn conflicting_workweek_narrow() {
        calgrid()
            .args(["-W", "-N"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Options -W and -N are mutually exclusive"));
    }

    #[test]
    fn week_before_earliest_date() {
        calgrid()
            .args(["--no-color", "--", "-262143-01-01"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("calgrid: Invalid date"))
            .stderr(predicate::str::contains("panicked").not());
    }

    #[test]
    fn month_past_latest_date() {
        calgrid()
            .args(["-M", "-l", "+262142-12-01"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("calgrid: Invalid date"))
            .stderr(predicate::str::contains("panicked").not());
    }

    #[test]
    fn missing_events_file() {
        calgrid()
            .args(["-f", "/nonexistent/calgrid-events.txt"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Cannot read events file"));
    }
}
