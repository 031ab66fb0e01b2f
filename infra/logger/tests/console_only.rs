use confdrift_logger::{LevelFilter, Logger};

#[test]
fn console_only_has_no_report_guard() {
    let logger = Logger::builder()
        .name("integration-console-only")
        .console(true)
        .test_writer(true)
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    assert!(logger.guard().is_none(), "console-only logger should not create a report guard");
}
