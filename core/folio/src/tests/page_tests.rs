use crate::adapter::stubs::{CollectLog, StubRemoteStore};
use crate::adapter::KvLocalOverlayStore;
use crate::domain::{seed_entries, Collection, Entry, Origin, RemoteError};
use crate::ports::outbound::{LocalOverlayStore, LogLevel, RemoteStore};
use crate::usecase::{CollectionPage, OFFLINE_NOTICE};
use common::adapter::MemoryKeyValueStore;
use std::sync::Arc;

fn local_store(collection: Collection, entries: Vec<Entry>) -> Arc<KvLocalOverlayStore> {
    let store = Arc::new(KvLocalOverlayStore::new(
        collection,
        Arc::new(MemoryKeyValueStore::new()),
        Arc::new(CollectLog::default()),
    ));
    for e in entries {
        store.add(e).unwrap();
    }
    store
}

fn page(remote: Option<StubRemoteStore>, local: Arc<KvLocalOverlayStore>, log: Arc<CollectLog>) -> CollectionPage {
    CollectionPage::new(
        Collection::Projects,
        seed_entries(Collection::Projects),
        remote.map(|r| Arc::new(r) as Arc<dyn RemoteStore>),
        local,
        log,
    )
}

#[test]
fn test_network_error_renders_seed_and_local_with_notice() {
    let log = Arc::new(CollectLog::default());
    let local = local_store(
        Collection::Projects,
        vec![Entry::project("user-1", "Foo", "Bar", Origin::Local)],
    );
    let p = page(
        Some(StubRemoteStore::failing(
            Collection::Projects,
            RemoteError::Network("connection refused".to_string()),
        )),
        local,
        log.clone(),
    );

    let view = p.load();
    assert!(!view.loading);
    assert_eq!(view.notice.as_deref(), Some(OFFLINE_NOTICE));
    let titles: Vec<_> = view.entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Pixar Movie Gallery", "Word Guessing Game", "Pokédex Application", "Foo"]
    );
    assert!(view.entries[3].is_editable());
    assert!(log
        .records()
        .iter()
        .any(|r| r.level == LogLevel::Warn && r.kind.as_deref() == Some("remote")));
}

#[test]
fn test_remote_entries_merge_with_seed_and_denylist() {
    let remote = StubRemoteStore::ok(
        Collection::Projects,
        vec![
            Entry::project("r1", "Pixar Movie Gallery", "From the backend", Origin::Remote).with_image("/img/r1.png"),
            Entry::project("r2", "Portfolio Website", "Hidden", Origin::Remote),
            Entry::project("r3", "Chat App", "Realtime chat", Origin::Remote),
        ],
    );
    let p = page(Some(remote), local_store(Collection::Projects, Vec::new()), Arc::new(CollectLog::default()));

    let view = p.load();
    assert_eq!(view.notice, None);
    let pixar = &view.entries[0];
    assert_eq!(pixar.id.as_str(), "r1");
    assert_eq!(pixar.image.as_deref(), Some("/img/r1.png"));
    assert!(pixar.description.starts_with("An interactive movie gallery"));
    assert!(view.entries.iter().all(|e| e.title != "Portfolio Website"));
    assert_eq!(view.entries.last().unwrap().title, "Chat App");
    assert_eq!(view.entries.len(), 4);
}

#[test]
fn test_offline_page_skips_remote() {
    let p = page(None, local_store(Collection::Projects, Vec::new()), Arc::new(CollectLog::default()));
    let view = p.load();
    assert_eq!(view.notice, None);
    assert_eq!(view.entries.len(), 3);
}

#[test]
fn test_stale_load_result_is_ignored() {
    let p = page(None, local_store(Collection::Projects, Vec::new()), Arc::new(CollectLog::default()));
    let first = p.begin_load();
    let second = p.begin_load();

    let late = vec![Entry::project("r9", "Late", "Arrived after a newer load", Origin::Remote)];
    assert!(!p.finish_load(first, Ok(Some(late))));
    assert!(p.view().loading);

    assert!(p.finish_load(second, Ok(Some(Vec::new()))));
    let view = p.view();
    assert!(!view.loading);
    assert!(view.entries.iter().all(|e| e.title != "Late"));
}

#[test]
fn test_result_after_unmount_is_discarded() {
    let p = page(None, local_store(Collection::Projects, Vec::new()), Arc::new(CollectLog::default()));
    let ticket = p.begin_load();
    p.unmount();
    assert!(!p.finish_load(ticket, Err(RemoteError::Network("late".to_string()))));
    assert_eq!(p.view().notice, None);
    assert!(p.view().entries.is_empty());
}
