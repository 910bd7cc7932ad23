//! ローカルエントリ ID を生成する IdGenerator の標準実装（Clock + プロセス内単調増加）
//!
//! 形式: `user-<unix ms>`。同一 ms 内に 2 回呼ばれた場合は前回値 + 1 を使うため、
//! プロセス内では必ず一意になる（実時刻とはずれうる）。

use crate::domain::EntryId;
use crate::ports::outbound::{Clock, IdGenerator};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub const LOCAL_ID_PREFIX: &str = "user-";

static LAST_MS: AtomicU64 = AtomicU64::new(0);

/// Clock + グローバルな直前値で ID を生成する標準実装
pub struct StdIdGenerator {
    clock: Arc<dyn Clock>,
}

impl StdIdGenerator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl IdGenerator for StdIdGenerator {
    fn next_id(&self) -> EntryId {
        let now = self.clock.now_ms();
        loop {
            let prev = LAST_MS.load(Ordering::SeqCst);
            let next = if now > prev { now } else { prev + 1 };
            if LAST_MS
                .compare_exchange(prev, next, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                return EntryId::new(format!("{}{}", LOCAL_ID_PREFIX, next));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::FixedClock;
    use std::collections::HashSet;

    #[test]
    fn test_ids_have_prefix() {
        let gen = StdIdGenerator::new(Arc::new(FixedClock(1_700_000_000_000)));
        let id = gen.next_id();
        assert!(id.starts_with(LOCAL_ID_PREFIX), "{}", id);
    }

    #[test]
    fn test_ids_unique_with_frozen_clock() {
        let gen = StdIdGenerator::new(Arc::new(FixedClock(1_600_000_000_000)));
        let ids: HashSet<EntryId> = (0..100).map(|_| gen.next_id()).collect();
        assert_eq!(ids.len(), 100);
    }
}
