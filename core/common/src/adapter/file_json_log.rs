//! ファイルへ JSONL で追記する Log 実装
//!
//! ログの出力先はファイルのみ。ユーザー向け表示（stdout / stderr）とは別。

use crate::error::Error;
use crate::ports::outbound::{FileSystem, Log, LogRecord};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// ファイルへ JSONL を追記する Log 実装
pub struct FileJsonLog {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl FileJsonLog {
    /// ログファイルパスへ追記する logger を生成する。
    /// 親ディレクトリが無ければ作成する（初回書き込み時）。
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Log for FileJsonLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        let mut w = self.fs.open_append(&self.path)?;
        let line = serde_json::to_string(record)?;
        w.write_all(line.as_bytes())
            .and_then(|_| w.write_all(b"\n"))
            .and_then(|_| w.flush())
            .map_err(|e| Error::io_msg(e.to_string()))
    }
}

/// 何も出力しない Log 実装（テスト用）
#[derive(Debug, Clone, Default)]
pub struct NoopLog;

impl Log for NoopLog {
    fn log(&self, _record: &LogRecord) -> Result<(), Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::StdFileSystem;
    use crate::ports::outbound::LogLevel;

    #[test]
    fn test_noop_log() {
        let rec = LogRecord::new(LogLevel::Info, "cli", "lifecycle", "test");
        assert!(NoopLog.log(&rec).is_ok());
    }

    #[test]
    fn test_file_json_log_appends_lines() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("logs").join("folio.jsonl");
        let log = FileJsonLog::new(Arc::new(StdFileSystem), &path);
        log.log(&LogRecord::new(LogLevel::Info, "cli", "lifecycle", "command started"))
            .unwrap();
        log.log(&LogRecord::new(LogLevel::Warn, "usecase", "remote", "fallback"))
            .unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["level"], "warn");
        assert_eq!(second["kind"], "remote");
    }
}
