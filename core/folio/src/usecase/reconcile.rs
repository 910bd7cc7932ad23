//! seed・remote・local の 3 ソースを 1 つの表示リストに統合する（純粋関数）

use crate::domain::Entry;
use std::collections::BTreeSet;

/// 統合リストを作る
///
/// 1. seed をコピー
/// 2. remote の各エントリ: denylist なら捨てる。同じ title があれば id と image だけ上書き
///    （remote に image が無ければ既存の image を残す）。無ければ末尾に追加
/// 3. title / description が空のもの、denylist の title を除外
/// 4. local をそのまま（フィルタせず）末尾に連結
///
/// `remote` が None（取得失敗）の場合、手順 2 は何もしない。
pub fn merge(
    seed: &[Entry],
    remote: Option<&[Entry]>,
    local: &[Entry],
    denylist: &BTreeSet<String>,
) -> Vec<Entry> {
    let mut merged: Vec<Entry> = seed.to_vec();

    for incoming in remote.unwrap_or_default() {
        if denylist.contains(&incoming.title) {
            continue;
        }
        match merged.iter_mut().find(|e| e.title == incoming.title) {
            Some(existing) => {
                existing.id = incoming.id.clone();
                if let Some(image) = incoming.image.as_ref().filter(|s| !s.is_empty()) {
                    existing.image = Some(image.clone());
                }
            }
            None => merged.push(incoming.clone()),
        }
    }

    merged.retain(|e| e.is_complete() && !denylist.contains(&e.title));
    merged.extend(local.iter().cloned());
    merged
}
