use confdrift_logger::{LevelFilter, Logger};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn report_dir_receives_named_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let report_dir = tmp_dir.path().join("reports");

    let logger = Logger::builder()
        .name("yarn-fields")
        .console(false)
        .report_dir(&report_dir)
        .level(LevelFilter::INFO)
        .init()?;

    tracing::warn!(key = "yarn.example.key", "missing document entry");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let report = report_dir.join("yarn-fields.log");
    let contents = fs::read_to_string(&report)?;
    assert!(contents.contains("yarn.example.key"), "report should carry the offending key");

    Ok(())
}
