//! ファイルシステム Outbound ポート
//!
//! ストレージ・ログ・設定ファイルの I/O はこの trait 経由でのみ行う。

use crate::error::Error;
use std::path::Path;

/// ファイルメタデータ（存在・サイズ・種別）
#[derive(Debug, Clone)]
pub struct FileMetadata {
    len: u64,
    is_file: bool,
}

impl FileMetadata {
    pub fn new(len: u64, is_file: bool) -> Self {
        Self { len, is_file }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_file(&self) -> bool {
        self.is_file
    }
}

/// ファイルシステム抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdFileSystem`。
pub trait FileSystem: Send + Sync {
    fn read_to_string(&self, path: &Path) -> Result<String, Error>;
    fn write(&self, path: &Path, contents: &str) -> Result<(), Error>;
    /// 同一ディレクトリ内の置き換え（一時ファイル → 本体）に使う
    fn rename(&self, from: &Path, to: &Path) -> Result<(), Error>;
    fn create_dir_all(&self, path: &Path) -> Result<(), Error>;
    fn metadata(&self, path: &Path) -> Result<FileMetadata, Error>;
    /// 追記用に開く（存在しなければ作成）。返した Writer を drop すると閉じる。
    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error>;

    /// パスが存在するか（metadata が取れれば true）
    fn exists(&self, path: &Path) -> bool {
        self.metadata(path).is_ok()
    }
}
