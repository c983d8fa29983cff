//! エラーハンドリング
//!
//! ワークスペース全体で使う統一エラー型。メッセージを保持し、
//! sysexits 互換のプロセス終了コードへの対応付けを持つ。

/// エラー型
///
/// 外部コラボレータ（位置情報・検索・外部アプリ起動）のエラーと
/// 内部ストア操作のエラー（範囲外・空入力）を同じ語彙で扱う。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 引数不正（使い方の誤り）
    #[error("{0}")]
    InvalidArgument(String),
    /// visible 範囲外のインデックス
    #[error("{0}")]
    OutOfRange(String),
    /// 空入力（追加時の名前・検索クエリ）
    #[error("{0}")]
    EmptyInput(String),
    /// 環境変数の不足・不正
    #[error("{0}")]
    Env(String),
    /// I/O 失敗
    #[error("{0}")]
    Io(String),
    /// JSON の生成・解析失敗
    #[error("{0}")]
    Json(String),
    /// HTTP トランスポート失敗
    #[error("{0}")]
    Http(String),
    /// 位置情報の利用が許可されていない
    #[error("{0}")]
    LocationDenied(String),
    /// 位置情報の取得失敗
    #[error("{0}")]
    LocationFailed(String),
    /// 上流プレイス検索の失敗
    #[error("{0}")]
    SearchFailed(String),
    /// 外部ナビゲーションアプリを開けない
    #[error("{0}")]
    LaunchFailed(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Error::OutOfRange(msg.into())
    }

    pub fn empty_input(msg: impl Into<String>) -> Self {
        Error::EmptyInput(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Error::Env(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Error::Json(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Error::Http(msg.into())
    }

    pub fn location_denied(msg: impl Into<String>) -> Self {
        Error::LocationDenied(msg.into())
    }

    pub fn location_failed(msg: impl Into<String>) -> Self {
        Error::LocationFailed(msg.into())
    }

    pub fn search_failed(msg: impl Into<String>) -> Self {
        Error::SearchFailed(msg.into())
    }

    pub fn launch_failed(msg: impl Into<String>) -> Self {
        Error::LaunchFailed(msg.into())
    }

    /// 使い方の誤りなら true（main が usage を表示する判定に使う）
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidArgument(_) | Error::EmptyInput(_))
    }

    /// sysexits 互換の終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) | Error::EmptyInput(_) => 64,
            Error::OutOfRange(_) | Error::Json(_) => 65,
            Error::Http(_)
            | Error::LocationFailed(_)
            | Error::SearchFailed(_)
            | Error::LaunchFailed(_) => 69,
            Error::Io(_) => 74,
            Error::LocationDenied(_) => 77,
            Error::Env(_) => 78,
        }
    }
}
