use std::io::Write;

use chrono::Local;
use log::Level;

// Next level (less verbose)
fn next_level(level: Level) -> Level {
    Level::iter()
        .filter(|item| *item < level)
        .last()
        .unwrap_or(Level::Error)
}

pub fn configure_logger(base_level: Level) -> () {
    let dependency_level = next_level(base_level);
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(buf,
                "{} {} [{}] {}",
                Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.target(),
                record.level(),
                record.args(),
            )
        })
        .filter_level(base_level.to_level_filter())
        .filter_module("image", dependency_level.to_level_filter())
        .parse_default_env()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_level() {
        assert_eq!(next_level(Level::Trace), Level::Debug);
        assert_eq!(next_level(Level::Debug), Level::Info);
        assert_eq!(next_level(Level::Info), Level::Warn);
        assert_eq!(next_level(Level::Warn), Level::Error);
        assert_eq!(next_level(Level::Error), Level::Error);
    }
}
