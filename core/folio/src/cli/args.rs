use crate::domain::entry::CATEGORIES;
use crate::domain::{Collection, ContactForm, FieldOverrides, FolioCommand, SignupForm};
use clap::builder::ArgAction;
use clap::error::ErrorKind;
use clap::value_parser;
use clap_complete::Shell;
use common::domain::EntryId;
use common::error::Error;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// --no-interactive: 確認プロンプトを出さず CI 等でブロックしない（確認は常に拒否）
    pub non_interactive: bool,
    /// -y / --yes: 確認を常に承認する
    pub assume_yes: bool,
    /// --offline: バックエンドを呼ばず seed + ローカルだけで動く
    pub offline: bool,
    /// -v / --verbose: ログを stderr にも出す
    pub verbose: bool,
    /// サブコマンド（未指定ならヘルプ）
    pub command: Option<FolioCommand>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成 / clap がヘルプを表示済み
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
    HelpShown,
}

fn text_arg(name: &'static str, help: &'static str) -> clap::Arg {
    clap::Arg::new(name)
        .long(name)
        .value_name("text")
        .help(help)
        .num_args(1)
}

fn id_arg(help: &'static str) -> clap::Arg {
    clap::Arg::new("id").index(1).required(true).value_name("id").help(help)
}

fn entry_field_args(collection: Collection) -> Vec<clap::Arg> {
    let mut args = vec![
        text_arg("title", "Title (required when adding)"),
        text_arg("description", "Description (required when adding)"),
    ];
    match collection {
        Collection::Projects => args.extend([
            text_arg("technologies", "Comma-separated technologies (e.g. \"React, Node.js\")").alias("tags"),
            text_arg("github", "GitHub URL"),
            text_arg("demo", "Live demo URL"),
            text_arg("role", "Your role"),
            text_arg("outcome", "Outcome / result"),
            text_arg("category", "Category")
                .value_name("category")
                .value_parser(clap::builder::PossibleValuesParser::new(CATEGORIES.iter().copied())),
        ]),
        Collection::Services => args.extend([
            text_arg("features", "Comma-separated features").alias("tags"),
            text_arg("pricing", "Pricing (required when adding, e.g. \"Starting at $100\")"),
            text_arg("icon", "Icon class (default: fas fa-code)"),
        ]),
    }
    args
}

fn collection_command(collection: Collection) -> clap::Command {
    let (about, label) = match collection {
        Collection::Projects => ("Browse and manage projects", "project"),
        Collection::Services => ("Browse and manage services", "service"),
    };
    clap::Command::new(collection.name())
        .about(about)
        .subcommand_required(true)
        .subcommand(
            clap::Command::new("list")
                .about("Show seed, backend and locally added entries")
                .arg(
                    clap::Arg::new("json")
                        .long("json")
                        .help("Print the merged list as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            clap::Command::new("add")
                .about(format!("Add a {} (saved to the backend when reachable, always locally)", label))
                .args(entry_field_args(collection)),
        )
        .subcommand(
            clap::Command::new("edit")
                .about(format!("Edit a locally added {}; omitted fields keep their values", label))
                .arg(id_arg("Local id (e.g. user-1700000000000)"))
                .args(entry_field_args(collection)),
        )
        .subcommand(
            clap::Command::new("delete")
                .about(format!("Delete a locally added {} (asks for confirmation)", label))
                .arg(id_arg("Entry id")),
        )
        .subcommand(clap::Command::new("clear").about(format!(
            "Remove every locally added {} (asks for confirmation)",
            label
        )))
}

fn contact_field_args(required: bool) -> Vec<clap::Arg> {
    vec![
        text_arg("first-name", "First name").required(required),
        text_arg("last-name", "Last name"),
        text_arg("email", "Email address").required(required),
        text_arg("phone", "Phone number"),
        text_arg("message", "Message").required(required),
    ]
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("folio")
        .about("Portfolio client: projects, services, contacts and account")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .global(false)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("no-interactive")
                .long("no-interactive")
                .help("Do not prompt for confirmations (CI-friendly: confirmations are declined)")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("yes")
                .short('y')
                .long("yes")
                .help("Answer yes to confirmations")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("offline")
                .long("offline")
                .help("Do not contact the backend; use built-in and local data only")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Mirror log records to stderr (for troubleshooting)")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .subcommand(collection_command(Collection::Projects))
        .subcommand(collection_command(Collection::Services))
        .subcommand(
            clap::Command::new("contacts")
                .about("Contact form submissions (backend only)")
                .subcommand_required(true)
                .subcommand(clap::Command::new("list").about("List submitted contacts (requires login)"))
                .subcommand(
                    clap::Command::new("submit")
                        .about("Send the contact form")
                        .args(contact_field_args(true)),
                )
                .subcommand(
                    clap::Command::new("edit")
                        .about("Replace a submitted contact")
                        .arg(id_arg("Contact id"))
                        .args(contact_field_args(true)),
                )
                .subcommand(
                    clap::Command::new("delete")
                        .about("Delete a submitted contact (asks for confirmation)")
                        .arg(id_arg("Contact id")),
                ),
        )
        .subcommand(
            clap::Command::new("signup")
                .about("Create a user account")
                .arg(text_arg("first-name", "First name").required(true))
                .arg(text_arg("last-name", "Last name"))
                .arg(text_arg("email", "Email address").required(true))
                .arg(text_arg("password", "Password").required(true))
                .arg(text_arg("confirm-password", "Repeat the password")),
        )
        .subcommand(
            clap::Command::new("auth")
                .about("Manage the stored credential")
                .subcommand_required(true)
                .subcommand(
                    clap::Command::new("login")
                        .about("Store a bearer token (and optional user JSON)")
                        .arg(text_arg("token", "Bearer token").required(true))
                        .arg(text_arg("user", "User profile as JSON").value_name("json")),
                )
                .subcommand(clap::Command::new("logout").about("Forget the stored credential"))
                .subcommand(clap::Command::new("status").about("Show whether a credential is stored")),
        )
        .subcommand(clap::Command::new("status").about("Check that the backend is reachable"))
}

fn string_of(m: &clap::ArgMatches, name: &str) -> Option<String> {
    m.try_get_one::<String>(name).ok().flatten().cloned()
}

fn id_of(m: &clap::ArgMatches) -> EntryId {
    EntryId::new(string_of(m, "id").unwrap_or_default())
}

fn overrides_of(m: &clap::ArgMatches) -> FieldOverrides {
    FieldOverrides {
        title: string_of(m, "title"),
        description: string_of(m, "description"),
        tags: string_of(m, "technologies").or_else(|| string_of(m, "features")),
        github: string_of(m, "github"),
        demo: string_of(m, "demo"),
        role: string_of(m, "role"),
        outcome: string_of(m, "outcome"),
        category: string_of(m, "category"),
        pricing: string_of(m, "pricing"),
        icon: string_of(m, "icon"),
    }
}

fn contact_of(m: &clap::ArgMatches) -> ContactForm {
    ContactForm {
        first_name: string_of(m, "first-name").unwrap_or_default(),
        last_name: string_of(m, "last-name").unwrap_or_default(),
        email: string_of(m, "email").unwrap_or_default(),
        phone: string_of(m, "phone").unwrap_or_default(),
        message: string_of(m, "message").unwrap_or_default(),
    }
}

fn collection_to_command(collection: Collection, m: &clap::ArgMatches) -> Result<FolioCommand, Error> {
    Ok(match m.subcommand() {
        Some(("list", sub)) => FolioCommand::List {
            collection,
            json: sub.get_flag("json"),
        },
        Some(("add", sub)) => FolioCommand::Add {
            collection,
            fields: overrides_of(sub),
        },
        Some(("edit", sub)) => {
            let fields = overrides_of(sub);
            if fields.is_empty() {
                return Err(Error::invalid_argument(
                    "Nothing to change: pass at least one field (e.g. --title)",
                ));
            }
            FolioCommand::Edit {
                collection,
                id: id_of(sub),
                fields,
            }
        }
        Some(("delete", sub)) => FolioCommand::Delete {
            collection,
            id: id_of(sub),
        },
        Some(("clear", _)) => FolioCommand::Clear { collection },
        _ => return Err(Error::invalid_argument(format!("Missing {} subcommand", collection.name()))),
    })
}

fn subcommand_to_command(name: &str, m: &clap::ArgMatches) -> Result<FolioCommand, Error> {
    Ok(match (name, m.subcommand()) {
        ("projects", _) => collection_to_command(Collection::Projects, m)?,
        ("services", _) => collection_to_command(Collection::Services, m)?,
        ("contacts", Some(("list", _))) => FolioCommand::ContactsList,
        ("contacts", Some(("submit", sub))) => FolioCommand::ContactSubmit { form: contact_of(sub) },
        ("contacts", Some(("edit", sub))) => FolioCommand::ContactEdit {
            id: id_of(sub),
            form: contact_of(sub),
        },
        ("contacts", Some(("delete", sub))) => FolioCommand::ContactDelete { id: id_of(sub) },
        ("signup", _) => FolioCommand::Signup {
            form: SignupForm {
                first_name: string_of(m, "first-name").unwrap_or_default(),
                last_name: string_of(m, "last-name").unwrap_or_default(),
                email: string_of(m, "email").unwrap_or_default(),
                password: string_of(m, "password").unwrap_or_default(),
                confirm_password: string_of(m, "confirm-password"),
            },
        },
        ("auth", Some(("login", sub))) => {
            let user = match string_of(sub, "user") {
                Some(raw) => Some(
                    serde_json::from_str::<Value>(&raw)
                        .map_err(|e| Error::invalid_argument(format!("--user is not valid JSON: {}", e)))?,
                ),
                None => None,
            };
            FolioCommand::AuthLogin {
                token: string_of(sub, "token").unwrap_or_default(),
                user,
            }
        }
        ("auth", Some(("logout", _))) => FolioCommand::AuthLogout,
        ("auth", Some(("status", _))) => FolioCommand::AuthStatus,
        ("status", _) => FolioCommand::Status,
        (other, _) => return Err(Error::invalid_argument(format!("Unknown command: {}", other))),
    })
}

fn matches_to_config(matches: &clap::ArgMatches) -> Result<Config, Error> {
    let command = match matches.subcommand() {
        Some((name, sub)) => Some(subcommand_to_command(name, sub)?),
        None => None,
    };
    Ok(Config {
        help: matches.get_flag("help"),
        non_interactive: matches.get_flag("no-interactive"),
        assume_yes: matches.get_flag("yes"),
        offline: matches.get_flag("offline"),
        verbose: matches.get_flag("verbose"),
        command,
    })
}

fn to_error(e: clap::Error) -> Error {
    Error::invalid_argument(e.to_string())
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = match build_clap_command().try_get_matches() {
        Ok(m) => m,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return Ok(ParseOutcome::HelpShown);
        }
        Err(e) => return Err(to_error(e)),
    };

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)?))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(to_error)?;
    matches_to_config(&matches)
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "folio", &mut std::io::stdout());
}

/// Config を FolioCommand に変換する
pub fn config_to_command(config: Config) -> FolioCommand {
    if config.help {
        return FolioCommand::Help;
    }
    config.command.unwrap_or(FolioCommand::Help)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.help);
        assert!(!config.non_interactive);
        assert!(!config.offline);
        assert!(config.command.is_none());
        assert_eq!(config_to_command(config), FolioCommand::Help);
    }

    #[test]
    fn test_parse_no_args_is_help() {
        let config = parse_args_from(&["folio"]).unwrap();
        assert_eq!(config_to_command(config), FolioCommand::Help);
        let config = parse_args_from(&["folio", "-h"]).unwrap();
        assert!(config.help);
    }

    #[test]
    fn test_parse_unknown_option() {
        let err = parse_args_from(&["folio", "--unknown"]).unwrap_err();
        assert_eq!(err.exit_code(), 64);
        assert!(err.is_usage());
    }

    #[test]
    fn test_parse_projects_list_json() {
        let config = parse_args_from(&["folio", "projects", "list", "--json"]).unwrap();
        assert_eq!(
            config.command,
            Some(FolioCommand::List {
                collection: Collection::Projects,
                json: true
            })
        );
    }

    #[test]
    fn test_parse_project_add_fields() {
        let config = parse_args_from(&[
            "folio",
            "projects",
            "add",
            "--title",
            "Foo",
            "--description",
            "Bar",
            "--technologies",
            "Rust, CLI",
            "--category",
            "desktop",
        ])
        .unwrap();
        match config.command {
            Some(FolioCommand::Add { collection, fields }) => {
                assert_eq!(collection, Collection::Projects);
                assert_eq!(fields.title.as_deref(), Some("Foo"));
                assert_eq!(fields.tags.as_deref(), Some("Rust, CLI"));
                assert_eq!(fields.category.as_deref(), Some("desktop"));
                assert_eq!(fields.pricing, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_category_and_service_only_fields_on_projects() {
        assert!(parse_args_from(&["folio", "projects", "add", "--category", "game"]).is_err());
        assert!(parse_args_from(&["folio", "projects", "add", "--pricing", "$1"]).is_err());
    }

    #[test]
    fn test_parse_service_features_alias() {
        let config = parse_args_from(&["folio", "services", "add", "--tags", "A, B", "--pricing", "$5"]).unwrap();
        match config.command {
            Some(FolioCommand::Add { fields, .. }) => {
                assert_eq!(fields.tags.as_deref(), Some("A, B"));
                assert_eq!(fields.pricing.as_deref(), Some("$5"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_edit_requires_a_field() {
        let err = parse_args_from(&["folio", "projects", "edit", "user-1"]).unwrap_err();
        assert!(err.to_string().contains("Nothing to change"));
        let config = parse_args_from(&["folio", "projects", "edit", "user-1", "--title", "New"]).unwrap();
        match config.command {
            Some(FolioCommand::Edit { id, .. }) => assert_eq!(id.as_str(), "user-1"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let config = parse_args_from(&["folio", "projects", "delete", "user-1", "--no-interactive", "-v"]).unwrap();
        assert!(config.non_interactive);
        assert!(config.verbose);
        assert_eq!(
            config.command,
            Some(FolioCommand::Delete {
                collection: Collection::Projects,
                id: EntryId::new("user-1")
            })
        );
    }

    #[test]
    fn test_parse_auth_login_user_json() {
        let config = parse_args_from(&["folio", "auth", "login", "--token", "t", "--user", r#"{"email":"a@b.c"}"#]).unwrap();
        match config.command {
            Some(FolioCommand::AuthLogin { token, user }) => {
                assert_eq!(token, "t");
                assert_eq!(user.unwrap()["email"], "a@b.c");
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(parse_args_from(&["folio", "auth", "login", "--token", "t", "--user", "{bad"]).is_err());
    }

    #[test]
    fn test_parse_contacts_submit_requires_fields() {
        assert!(parse_args_from(&["folio", "contacts", "submit", "--first-name", "A"]).is_err());
        let config = parse_args_from(&[
            "folio",
            "contacts",
            "submit",
            "--first-name",
            "Ada",
            "--email",
            "ada@example.com",
            "--message",
            "Hi",
        ])
        .unwrap();
        assert!(matches!(config.command, Some(FolioCommand::ContactSubmit { .. })));
    }

    #[test]
    fn test_parse_missing_subcommand_is_error() {
        assert!(parse_args_from(&["folio", "projects"]).is_err());
    }
}
