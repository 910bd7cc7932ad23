//! 対話による確認実装（CLI 境界）
//!
//! stdin/stderr を用いた対話は adapter 層の責務。`y` / `yes` のみ承認、それ以外と EOF は拒否。

use crate::ports::outbound::{Approval, Confirm};
use common::error::Error;
use std::io::{self, BufRead, Write};

/// 入力行を確認結果にする（大文字小文字・前後の空白は無視）
pub fn parse_answer(line: &str) -> Approval {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Approval::Approved,
        _ => Approval::Denied,
    }
}

/// stderr にプロンプトを出し stdin から 1 行読む
#[derive(Debug, Default)]
pub struct CliConfirm;

impl Confirm for CliConfirm {
    fn confirm(&self, prompt: &str) -> Result<Approval, Error> {
        eprint!("{} [y/N]: ", prompt);
        let _ = io::stderr().flush();
        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::io_msg(format!("Failed to read confirmation: {}", e)))?;
        if read == 0 {
            return Ok(Approval::Denied);
        }
        Ok(parse_answer(&line))
    }
}

/// 非対話用: 常に拒否を返す（--no-interactive。CI 等でプロンプトを出さない）
#[derive(Debug, Default)]
pub struct NonInteractiveConfirm;

impl Confirm for NonInteractiveConfirm {
    fn confirm(&self, _prompt: &str) -> Result<Approval, Error> {
        Ok(Approval::Denied)
    }
}

/// 常に承認する（-y / --yes）
#[derive(Debug, Default)]
pub struct AssumeYesConfirm;

impl Confirm for AssumeYesConfirm {
    fn confirm(&self, _prompt: &str) -> Result<Approval, Error> {
        Ok(Approval::Approved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("y\n"), Approval::Approved);
        assert_eq!(parse_answer(" YES "), Approval::Approved);
        assert_eq!(parse_answer("\n"), Approval::Denied);
        assert_eq!(parse_answer("no"), Approval::Denied);
    }

    #[test]
    fn test_non_interactive_always_denied() {
        assert_eq!(NonInteractiveConfirm.confirm("Delete?").unwrap(), Approval::Denied);
        assert_eq!(AssumeYesConfirm.confirm("Delete?").unwrap(), Approval::Approved);
    }
}
