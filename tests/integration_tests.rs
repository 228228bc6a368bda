mod common;
use common::{EVENT_HEADER, fake_login, ptl, setup_home, temp_out, write_fixture};
use paycode_portal::config::Config;
use paycode_portal::session::Session;
use predicates::str::contains;
use std::fs;

#[test]
fn test_init_creates_config() {
    let home = setup_home("init_creates_config");

    ptl()
        .args(["--home", home.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"))
        .stdout(contains("PAYCODE_CLIENT_AUTH is not set"));

    let content = fs::read_to_string(home.join("paycode-portal.conf")).unwrap();
    assert!(content.contains("base_url:"));
    assert!(content.contains("start_date: 2026-01-01") || content.contains("start_date: '2026-01-01'"));
}

#[test]
fn test_init_keeps_existing_config() {
    let home = setup_home("init_keeps_config");
    fs::write(
        home.join("paycode-portal.conf"),
        "base_url: http://localhost:9/api/paycode_events\nstart_date: 2027-01-01\n",
    )
    .unwrap();

    ptl()
        .args(["--home", home.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(contains("already present"))
        .stdout(contains("http://localhost:9/api/paycode_events"));
}

#[test]
fn test_config_set_and_print() {
    let home = setup_home("config_set_print");

    ptl()
        .args([
            "--home",
            home.to_str().unwrap(),
            "config",
            "--start-date",
            "2027-03-01",
            "--base-url",
            "http://localhost:9/api/paycode_events/",
            "--print",
        ])
        .assert()
        .success()
        .stdout(contains("Configuration saved"))
        .stdout(contains("http://localhost:9/api/paycodes"));

    let cfg = Config::load(Some(home.clone())).unwrap();
    assert_eq!(cfg.start_date, "2027-03-01");
    assert_eq!(cfg.base_url, "http://localhost:9/api/paycode_events");
}

#[test]
fn test_config_rejects_bad_start_date() {
    let home = setup_home("config_bad_date");

    ptl()
        .args(["--home", home.to_str().unwrap(), "config", "--start-date", "01-03-2027"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    assert!(!home.join("paycode-portal.conf").exists());
}

#[test]
fn test_status_without_session() {
    let home = setup_home("status_no_session");

    ptl()
        .args(["--home", home.to_str().unwrap(), "status"])
        .assert()
        .success()
        .stdout(contains("== Configuration =="))
        .stdout(contains("Not logged in."));
}

#[test]
fn test_upload_requires_login() {
    let home = setup_home("upload_requires_login");
    let file = write_fixture("upload_requires_login.csv", &format!("{EVENT_HEADER}\n"));

    ptl()
        .args(["--home", home.to_str().unwrap(), "upload", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn test_upload_stores_batch_in_session() {
    let home = setup_home("upload_stores_batch");
    let cfg = fake_login(&home);
    let file = write_fixture(
        "upload_stores_batch.csv",
        &format!(
            "{EVENT_HEADER}\n\
             ,A,,5,H1,01-01-2026,,\n\
             ,A,,5,H2,02-01-2026,,\n\
             ,B,,abc,H1,01-01-2026,,\n"
        ),
    );

    ptl()
        .args(["--home", home.to_str().unwrap(), "upload", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(contains("3 rows read, 2 accepted, 1 rejected"))
        .stdout(contains("invalid paycode id 'abc'"))
        .stdout(contains("1 events (2 schedules) ready to submit"));

    let session = Session::require(&cfg).unwrap();
    assert_eq!(session.username, "tester");
    assert_eq!(session.batch.len(), 1);
    assert_eq!(session.batch[0].schedules.len(), 2);
    assert!(session.batch_source.unwrap().ends_with("upload_stores_batch.csv"));

    ptl()
        .args(["--home", home.to_str().unwrap(), "status"])
        .assert()
        .success()
        .stdout(contains("Logged in as tester"))
        .stdout(contains("pending batch: 1 events"));
}

#[test]
fn test_upload_unsupported_file() {
    let home = setup_home("upload_unsupported");
    fake_login(&home);
    let file = write_fixture("upload_unsupported.txt", "hello");

    ptl()
        .args(["--home", home.to_str().unwrap(), "upload", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(contains("Unsupported file type"));
}

#[test]
fn test_logout_drops_session() {
    let home = setup_home("logout_drops_session");
    let cfg = fake_login(&home);

    ptl()
        .args(["--home", home.to_str().unwrap(), "logout"])
        .assert()
        .success()
        .stdout(contains("Logged out"));

    assert!(!cfg.session_file().exists());

    ptl()
        .args(["--home", home.to_str().unwrap(), "logout"])
        .assert()
        .success()
        .stdout(contains("No active session."));
}

#[test]
fn test_submit_empty_batch() {
    let home = setup_home("submit_empty_batch");
    fake_login(&home);

    ptl()
        .args(["--home", home.to_str().unwrap(), "submit"])
        .assert()
        .failure()
        .stderr(contains("Empty batch"));
}

#[test]
fn test_delete_without_numeric_ids_makes_no_call() {
    let home = setup_home("delete_no_ids");
    fake_login(&home);

    ptl()
        .args(["--home", home.to_str().unwrap(), "delete", "--ids", "x, y"])
        .assert()
        .success()
        .stdout(contains("nothing deleted"));
}

#[test]
fn test_delete_requires_login() {
    let home = setup_home("delete_requires_login");

    ptl()
        .args(["--home", home.to_str().unwrap(), "delete", "--ids", "3"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn test_login_without_client_auth() {
    let home = setup_home("login_no_client_auth");

    ptl()
        .args([
            "--home",
            home.to_str().unwrap(),
            "login",
            "-u",
            "alice",
            "-p",
            "secret",
        ])
        .assert()
        .failure()
        .stderr(contains("PAYCODE_CLIENT_AUTH"));

    assert!(!home.join("session.json").exists());
}

#[test]
fn test_template_csv() {
    let home = setup_home("template_csv");
    let out = temp_out("cli_template", "csv");

    ptl()
        .args(["--home", home.to_str().unwrap(), "template", "--file"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Template export completed"));

    let content = fs::read_to_string(&out).unwrap();
    assert_eq!(content.trim_end(), EVENT_HEADER);
}

#[test]
fn test_template_json_rejected() {
    let home = setup_home("template_json");
    let out = temp_out("cli_template", "json");

    ptl()
        .args(["--home", home.to_str().unwrap(), "template", "--format", "json", "--file"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(contains("CSV or XLSX"));

    assert!(!out.exists());
}

#[test]
fn test_export_requires_login() {
    let home = setup_home("export_requires_login");
    let out = temp_out("cli_export_no_login", "csv");

    ptl()
        .args(["--home", home.to_str().unwrap(), "export", "--file"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(contains("Not logged in"));

    assert!(!out.exists());
}
