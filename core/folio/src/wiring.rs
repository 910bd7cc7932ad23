//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{
    FileJsonLog, FileKeyValueStore, StderrLog, StdClock, StdEnvResolver, StdFileSystem, StdIdGenerator, TeeLog,
};
use common::domain::dirs::Dirs;
use common::domain::HomeDir;
use common::error::Error;
use common::ports::outbound::{EnvResolver, FileSystem};

use crate::adapter::{
    load_config, resolve_config, AssumeYesConfirm, CliConfirm, HttpRemoteStore, HttpResource, KvLocalOverlayStore,
    KvSession, NonInteractiveConfirm, ReqwestTransport,
};
use crate::cli::Config;
use crate::domain::{seed_entries, Collection, Resource};
use crate::ports::outbound::{
    Clock, Confirm, HttpTransport, IdGenerator, JsonResource, KeyValueStore, LocalOverlayStore, Log, LogLevel,
    RemoteStore, SessionStore,
};
use crate::usecase::{
    AccountUseCase, CollectionPage, ConnectionCheck, ContactsUseCase, FormController, FormDeps,
};

/// 配線時に CLI から受け取るフラグ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WireOptions {
    pub non_interactive: bool,
    pub assume_yes: bool,
    pub offline: bool,
    pub verbose: bool,
}

impl From<&Config> for WireOptions {
    fn from(config: &Config) -> Self {
        Self {
            non_interactive: config.non_interactive,
            assume_yes: config.assume_yes,
            offline: config.offline,
            verbose: config.verbose,
        }
    }
}

/// コレクション 1 つ分（一覧ページとフォーム）
pub struct CollectionApp {
    pub page: CollectionPage,
    pub form: FormController,
}

/// 配線済みのアプリ（main の Runner が保持する）
pub struct App {
    pub logger: Arc<dyn Log>,
    pub offline: bool,
    pub projects: CollectionApp,
    pub services: CollectionApp,
    pub contacts: ContactsUseCase,
    pub account: AccountUseCase,
    pub connection: ConnectionCheck,
}

impl App {
    pub fn collection(&self, collection: Collection) -> &CollectionApp {
        match collection {
            Collection::Projects => &self.projects,
            Collection::Services => &self.services,
        }
    }
}

/// 環境変数からホームと API URL を解決して配線する
pub fn wire_folio(options: WireOptions) -> Result<App, Error> {
    let env_resolver = StdEnvResolver;
    let home = env_resolver.resolve_home_dir()?;
    wire_folio_at(home, env_resolver.api_url_override(), options)
}

/// ホームディレクトリを指定して配線する（テストでは一時ディレクトリを渡す）
pub fn wire_folio_at(home: HomeDir, api_url_override: Option<String>, options: WireOptions) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let dirs = Dirs::new(home);

    let file_log: Arc<dyn Log> = Arc::new(FileJsonLog::new(Arc::clone(&fs), dirs.log_file()));
    let logger: Arc<dyn Log> = if options.verbose {
        Arc::new(TeeLog::new(vec![file_log, Arc::new(StderrLog::new(LogLevel::Debug))]))
    } else {
        file_log
    };

    let config = resolve_config(&load_config(fs.as_ref(), &dirs, logger.as_ref()), api_url_override, &dirs);

    let kv: Arc<dyn KeyValueStore> =
        Arc::new(FileKeyValueStore::new(Arc::clone(&fs), &config.storage_file).with_log(Arc::clone(&logger)));
    let session: Arc<dyn SessionStore> = Arc::new(KvSession::new(Arc::clone(&kv)));
    let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new(config.api_url.clone()));
    let resource = |r: Resource| -> Arc<dyn JsonResource> {
        Arc::new(HttpResource::new(r, Arc::clone(&transport), Arc::clone(&session)))
    };

    let confirm: Arc<dyn Confirm> = if options.assume_yes {
        Arc::new(AssumeYesConfirm)
    } else if options.non_interactive {
        Arc::new(NonInteractiveConfirm)
    } else {
        Arc::new(CliConfirm)
    };
    let clock: Arc<dyn Clock> = Arc::new(StdClock);
    let ids: Arc<dyn IdGenerator> = Arc::new(StdIdGenerator::new(Arc::clone(&clock)));

    let collection_app = |collection: Collection| -> CollectionApp {
        let remote: Option<Arc<dyn RemoteStore>> = if options.offline {
            None
        } else {
            Some(Arc::new(HttpRemoteStore::new(collection, resource(collection.resource()))))
        };
        let local: Arc<dyn LocalOverlayStore> =
            Arc::new(KvLocalOverlayStore::new(collection, Arc::clone(&kv), Arc::clone(&logger)));
        CollectionApp {
            page: CollectionPage::new(
                collection,
                seed_entries(collection),
                remote.clone(),
                Arc::clone(&local),
                Arc::clone(&logger),
            ),
            form: FormController::new(
                collection,
                FormDeps {
                    remote,
                    local,
                    ids: Arc::clone(&ids),
                    clock: Arc::clone(&clock),
                    confirm: Arc::clone(&confirm),
                    log: Arc::clone(&logger),
                },
            ),
        }
    };

    Ok(App {
        projects: collection_app(Collection::Projects),
        services: collection_app(Collection::Services),
        contacts: ContactsUseCase::new(resource(Resource::Contacts), Arc::clone(&confirm), Arc::clone(&logger)),
        account: AccountUseCase::new(resource(Resource::Users), Arc::clone(&session)),
        connection: ConnectionCheck::new(Arc::clone(&transport)),
        offline: options.offline,
        logger: Arc::clone(&logger),
    })
}
