use crate::paths::ConfigPaths;
use chrono::Utc;
use std::fs;
use std::io::Write;

/// Appends one timestamped line to the wizard log under the config root.
/// Logging is best-effort; callers ignore the result.
pub fn append_setup_log_line(paths: &ConfigPaths, line: &str) -> std::io::Result<()> {
    let path = paths.setup_log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;
    writeln!(file, "{} {line}", Utc::now().format("%Y-%m-%dT%H:%M:%SZ"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_setup_log_line_creates_log_dir_and_appends() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = ConfigPaths::new(dir.path());
        append_setup_log_line(&paths, "setup started").expect("first line");
        append_setup_log_line(&paths, "setup complete").expect("second line");
        let raw = fs::read_to_string(paths.setup_log_path()).expect("read log");
        let lines: Vec<&str> = raw.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("setup started"));
        assert!(lines[1].ends_with("setup complete"));
    }
}
