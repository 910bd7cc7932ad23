//! 確認 Outbound ポート（削除などの取り消せない操作の前に yes/no を得る）
//!
//! usecase は stdin/stderr に直接触れず、この trait 経由で確認を取得する。

use common::error::Error;

/// 確認結果（Approved: 実行、Denied: 中止）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approval {
    Approved,
    Denied,
}

pub trait Confirm: Send + Sync {
    /// プロンプトを示して yes/no を得る。入力が読めない場合は Denied
    fn confirm(&self, prompt: &str) -> Result<Approval, Error>;
}
