//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。バリアントごとに終了コード（sysexits 準拠）を持つ。

/// エラー型
///
/// main で `exit_code()` を使ってプロセスの終了コードに変換する。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 引数不正（usage を表示する）
    #[error("{0}")]
    InvalidArgument(String),
    /// フォーム入力の検証エラー（ネットワーク・ストレージに触れる前に返す）
    #[error("{0}")]
    Validation(String),
    /// JSON のシリアライズ・パース失敗
    #[error("{0}")]
    Json(String),
    /// ファイル I/O 失敗
    #[error("{0}")]
    Io(String),
    /// HTTP 通信・サーバーエラー
    #[error("{0}")]
    Http(String),
    /// 環境変数・設定の解決失敗
    #[error("{0}")]
    Env(String),
    /// その他のシステムエラー（割り込み・多重実行など）
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    /// usage を併せて表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// プロセス終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Validation(_) | Self::Json(_) => 65,
            Self::Http(_) => 69,
            Self::System(_) => 70,
            Self::Io(_) => 74,
            Self::Env(_) => 78,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
