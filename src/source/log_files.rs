//! Log file discovery for the system logs page.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// A log file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFileEntry {
    /// File name without its directory.
    pub name: String,
    /// Full path.
    pub path: PathBuf,
    /// Size in bytes.
    pub size: u64,
    /// Last modification time, when the platform reports one.
    pub modified: Option<DateTime<Utc>>,
}

/// List log files (names containing `.log`) in `dir`, newest first.
///
/// A missing directory yields an empty list.
pub fn list_log_files(dir: &Path) -> io::Result<Vec<LogFileEntry>> {
    let read_dir = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry?;
        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.contains(".log") {
            continue;
        }
        entries.push(LogFileEntry {
            name,
            path: entry.path(),
            size: metadata.len(),
            modified: metadata.modified().ok().map(DateTime::<Utc>::from),
        });
    }

    entries.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.name.cmp(&b.name)));
    Ok(entries)
}

/// Last `max` lines of the file at `path`, oldest first.
///
/// A missing file yields an empty list. Invalid UTF-8 is replaced with
/// U+FFFD rather than failing the read.
pub fn tail_lines(path: &Path, max: usize) -> io::Result<Vec<String>> {
    let file = match fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let mut reader = BufReader::new(file);
    let mut lines = VecDeque::with_capacity(max);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if max == 0 {
            continue;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        if lines.len() == max {
            lines.pop_front();
        }
        lines.push_back(String::from_utf8_lossy(&buf).into_owned());
    }
    Ok(lines.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_lists_nothing() {
        let files = list_log_files(Path::new("/nonexistent/sidx/logs")).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn lists_only_log_files() {
        let dir = std::env::temp_dir().join("sidx_test_list_log_files");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("update")).unwrap();
        fs::write(dir.join("sidx.log"), "a\n").unwrap();
        fs::write(dir.join("sidx.log.1"), "b\n").unwrap();
        fs::write(dir.join("notes.txt"), "c\n").unwrap();

        let mut names: Vec<String> = list_log_files(&dir)
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        names.sort();
        let _ = fs::remove_dir_all(&dir);

        assert_eq!(names, vec!["sidx.log".to_string(), "sidx.log.1".to_string()]);
    }

    #[test]
    fn tail_keeps_last_lines_in_order() {
        let path = std::env::temp_dir().join("sidx_test_tail_lines.log");
        fs::write(&path, "one\ntwo\nthree\nfour\n").unwrap();

        let lines = tail_lines(&path, 2).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(lines, vec!["three".to_string(), "four".to_string()]);
    }

    #[test]
    fn tail_replaces_invalid_utf8_instead_of_failing() {
        let path = std::env::temp_dir().join("sidx_test_tail_invalid_utf8.log");
        fs::write(&path, b"ok\n\xff\xfebad\r\nlast").unwrap();

        let lines = tail_lines(&path, 10).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ok");
        assert_eq!(lines[1], "\u{FFFD}\u{FFFD}bad");
        assert_eq!(lines[2], "last");
    }

    #[test]
    fn tail_of_missing_file_is_empty() {
        assert!(tail_lines(Path::new("/nonexistent/sidx.log"), 10).unwrap().is_empty());
    }
}
