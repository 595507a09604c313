use log::LevelFilter;
use naval_placement::level_from;

#[test]
fn test_log_level_parsing() {
    assert_eq!(level_from(None), LevelFilter::Warn);
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some(" TRACE ")), LevelFilter::Trace);
    assert_eq!(level_from(Some("off")), LevelFilter::Off);
    assert_eq!(level_from(Some("loud")), LevelFilter::Warn);
}
