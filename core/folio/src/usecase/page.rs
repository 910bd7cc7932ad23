//! コレクション一覧ページ（読み込み・統合・表示状態）
//!
//! 読み込みは世代チケットで管理する。古いチケットの結果や、ページを閉じた後に届いた結果は捨てる。
//! remote の取得失敗は表示を止めず、seed + local で描画して注記を出す。

use super::reconcile::merge;
use crate::domain::{Collection, Entry, RemoteError};
use crate::ports::outbound::{LocalOverlayStore, Log, LogLevel, LogRecord, RemoteStore};
use std::sync::{Arc, Mutex, MutexGuard};

pub const OFFLINE_NOTICE: &str = "Note: Using local data. Backend connection unavailable.";

/// 表示状態
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageView {
    pub entries: Vec<Entry>,
    /// 情報レベルの注記（エラーではない）
    pub notice: Option<String>,
    pub loading: bool,
}

/// 読み込み 1 回分の世代番号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

struct PageState {
    generation: u64,
    mounted: bool,
    view: PageView,
}

pub struct CollectionPage {
    collection: Collection,
    seed: Vec<Entry>,
    remote: Option<Arc<dyn RemoteStore>>,
    local: Arc<dyn LocalOverlayStore>,
    log: Arc<dyn Log>,
    state: Mutex<PageState>,
}

impl CollectionPage {
    pub fn new(
        collection: Collection,
        seed: Vec<Entry>,
        remote: Option<Arc<dyn RemoteStore>>,
        local: Arc<dyn LocalOverlayStore>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self {
            collection,
            seed,
            remote,
            local,
            log,
            state: Mutex::new(PageState {
                generation: 0,
                mounted: true,
                view: PageView::default(),
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// 新しい読み込みを開始する（それ以前のチケットは無効になる）
    pub fn begin_load(&self) -> LoadTicket {
        let mut state = self.state();
        state.generation += 1;
        state.view.loading = true;
        LoadTicket(state.generation)
    }

    /// remote を取得する。offline 時は Ok(None)
    pub fn fetch(&self) -> Result<Option<Vec<Entry>>, RemoteError> {
        match &self.remote {
            Some(remote) => remote.get_all().map(Some),
            None => Ok(None),
        }
    }

    /// 取得結果を反映する。古いチケット・閉じたページでは何もせず false
    pub fn finish_load(&self, ticket: LoadTicket, fetched: Result<Option<Vec<Entry>>, RemoteError>) -> bool {
        {
            let state = self.state();
            if !state.mounted || state.generation != ticket.0 {
                let _ = self.log.log(
                    &LogRecord::new(LogLevel::Debug, "usecase", "page", "discarded stale load result")
                        .field("collection", self.collection.name())
                        .field("ticket", ticket.0),
                );
                return false;
            }
        }

        let (remote, notice) = match fetched {
            Ok(remote) => (remote, None),
            Err(e) => {
                let _ = self.log.log(
                    &LogRecord::new(LogLevel::Warn, "usecase", "remote", "falling back to local data")
                        .field("collection", self.collection.name())
                        .field("error", e.to_string()),
                );
                (None, Some(OFFLINE_NOTICE.to_string()))
            }
        };
        let local = self.local.load();
        let entries = merge(&self.seed, remote.as_deref(), &local, &self.collection.denylist());

        let mut state = self.state();
        if !state.mounted || state.generation != ticket.0 {
            return false;
        }
        state.view = PageView {
            entries,
            notice,
            loading: false,
        };
        true
    }

    /// 読み込み → 統合 → 表示状態の更新を一度に行う
    pub fn load(&self) -> PageView {
        let ticket = self.begin_load();
        let fetched = self.fetch();
        self.finish_load(ticket, fetched);
        self.view()
    }

    /// ページを閉じる。以降に届いた結果は捨てる
    pub fn unmount(&self) {
        self.state().mounted = false;
    }

    pub fn view(&self) -> PageView {
        self.state().view.clone()
    }
}
