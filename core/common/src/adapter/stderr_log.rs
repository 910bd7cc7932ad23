//! 人間向けログ（LogRecord → stderr への要点のみ出力）と複数出力先への分配
//!
//! `-v/--verbose` 指定時に FileJsonLog と併用する。fields は全量を出さず要約のみ。

use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

const FIELDS_SUMMARY_MAX: usize = 400;

/// fields の要点だけを短い文字列にする（巨大化防止）
fn fields_summary(record: &LogRecord) -> Option<String> {
    let fields = record.fields.as_ref().filter(|f| !f.is_empty())?;
    let s = serde_json::to_string(fields).ok()?;
    if s.len() <= FIELDS_SUMMARY_MAX {
        return Some(s);
    }
    let truncated = s.chars().take(FIELDS_SUMMARY_MAX).collect::<String>();
    Some(format!("{}... (len={})", truncated, s.len()))
}

/// 1 行に整形する（[folio] level layer/kind: message {fields}）
pub fn format_line(record: &LogRecord) -> String {
    let scope = match (&record.layer, &record.kind) {
        (Some(l), Some(k)) => format!(" {}/{}", l, k),
        (Some(l), None) => format!(" {}", l),
        (None, Some(k)) => format!(" {}", k),
        (None, None) => String::new(),
    };
    let mut line = format!("[folio] {}{}: {}", record.level.as_str(), scope, record.message);
    if let Some(summary) = fields_summary(record) {
        line.push(' ');
        line.push_str(&summary);
    }
    line
}

/// stderr へ整形出力する Log 実装。min_level より詳細なレコードは捨てる
pub struct StderrLog {
    min_level: LogLevel,
}

impl StderrLog {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }
}

impl Default for StderrLog {
    fn default() -> Self {
        Self::new(LogLevel::Debug)
    }
}

fn severity(level: LogLevel) -> u8 {
    match level {
        LogLevel::Error => 0,
        LogLevel::Warn => 1,
        LogLevel::Info => 2,
        LogLevel::Debug => 3,
    }
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if severity(record.level) <= severity(self.min_level) {
            eprintln!("{}", format_line(record));
        }
        Ok(())
    }
}

/// 複数の Log に同じレコードを配る。1 つが失敗しても残りには書き、最初のエラーを返す
pub struct TeeLog {
    targets: Vec<Arc<dyn Log>>,
}

impl TeeLog {
    pub fn new(targets: Vec<Arc<dyn Log>>) -> Self {
        Self { targets }
    }
}

impl Log for TeeLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let mut first_err = None;
        for t in &self.targets {
            if let Err(e) = t.log(record) {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}
