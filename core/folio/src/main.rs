mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;
use cli::render::{entries_json, render_contacts, render_page};
use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::error::Error;
use domain::{Collection, DeleteOutcome, FieldOverrides, FolioCommand, FormFields, FormMode, LocalStatus};
use ports::inbound::UseCaseRunner;
use ports::outbound::{LogLevel, LogRecord};
use serde_json::Value;
use wiring::{wire_folio, App, WireOptions};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(config);
        let command_name = cmd.name();
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "cli", "lifecycle", "command started").field("command", command_name.as_str()),
        );

        let result = self.dispatch(cmd);

        let code = result.as_ref().copied().unwrap_or(0);
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "cli", "lifecycle", "command finished")
                .field("command", command_name.as_str())
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self
                .app
                .logger
                .log(&LogRecord::new(LogLevel::Error, "cli", "error", e.to_string()).field("command", command_name.as_str()));
        }
        result
    }
}

impl Runner {
    fn dispatch(&self, cmd: FolioCommand) -> Result<i32, Error> {
        match cmd {
            FolioCommand::Help => {
                print_help();
                Ok(0)
            }
            FolioCommand::List { collection, json } => {
                let view = self.app.collection(collection).page.load();
                if json {
                    if let Some(notice) = &view.notice {
                        eprintln!("{}", notice);
                    }
                    println!("{}", entries_json(&view.entries)?);
                } else {
                    print!("{}", render_page(collection, &view));
                }
                Ok(0)
            }
            FolioCommand::Add { collection, fields } => self.add(collection, &fields),
            FolioCommand::Edit { collection, id, fields } => {
                let form = &self.app.collection(collection).form;
                let mut current = form.edit_fields(&id).ok_or_else(|| {
                    Error::validation(format!(
                        "{} {} cannot be edited: only entries added on this device are editable",
                        collection.label(),
                        id
                    ))
                })?;
                fields.apply(&mut current);
                let outcome = form.submit(&current, FormMode::Edit(id))?;
                println!("{}", outcome.message);
                Ok(0)
            }
            FolioCommand::Delete { collection, id } => {
                match self.app.collection(collection).form.delete(&id)? {
                    DeleteOutcome::Cancelled => println!("Cancelled."),
                    DeleteOutcome::Deleted { write, .. } if write.local == LocalStatus::Unchanged => println!(
                        "Nothing deleted: no locally added {} has id {}.",
                        collection.label().to_lowercase(),
                        id
                    ),
                    DeleteOutcome::Deleted { message, .. } => println!("{}", message),
                }
                Ok(0)
            }
            FolioCommand::Clear { collection } => {
                if self.app.collection(collection).form.clear()? {
                    println!("Removed all locally added {}.", collection.name());
                } else {
                    println!("Cancelled.");
                }
                Ok(0)
            }
            FolioCommand::ContactsList => {
                self.require_online("contacts list")?;
                print!("{}", render_contacts(&self.app.contacts.list()?));
                Ok(0)
            }
            FolioCommand::ContactSubmit { form } => {
                self.require_online("contacts submit")?;
                println!("{}", self.app.contacts.submit(&form)?);
                Ok(0)
            }
            FolioCommand::ContactEdit { id, form } => {
                self.require_online("contacts edit")?;
                println!("{}", self.app.contacts.edit(&id, &form)?);
                Ok(0)
            }
            FolioCommand::ContactDelete { id } => {
                self.require_online("contacts delete")?;
                match self.app.contacts.delete(&id)? {
                    Some(message) => println!("{}", message),
                    None => println!("Cancelled."),
                }
                Ok(0)
            }
            FolioCommand::Signup { form } => {
                self.require_online("signup")?;
                self.app.account.signup(&form)?;
                println!("Account created for {}.", form.email.trim());
                Ok(0)
            }
            FolioCommand::AuthLogin { token, user } => {
                self.app.account.login(&token, user)?;
                println!("Signed in.");
                Ok(0)
            }
            FolioCommand::AuthLogout => {
                self.app.account.logout()?;
                println!("Signed out.");
                Ok(0)
            }
            FolioCommand::AuthStatus => {
                let status = self.app.account.status();
                if !status.authenticated {
                    println!("Not signed in.");
                    return Ok(0);
                }
                match status.user.as_ref().and_then(|u| u.get("email")).and_then(Value::as_str) {
                    Some(email) => println!("Signed in as {}.", email),
                    None => println!("Signed in."),
                }
                Ok(0)
            }
            FolioCommand::Status => {
                if self.app.offline {
                    println!("Offline mode: the backend was not contacted.");
                    return Ok(0);
                }
                let connection = self.app.connection.test_backend_connection();
                println!("{}", connection.message);
                if !connection.ok {
                    return Err(Error::http("Backend is not reachable"));
                }
                let health = self.app.connection.check_backend_health();
                println!("{}", health.message);
                if health.ok {
                    Ok(0)
                } else {
                    Err(Error::http("Backend health check failed"))
                }
            }
        }
    }

    fn add(&self, collection: Collection, overrides: &FieldOverrides) -> Result<i32, Error> {
        let mut fields = FormFields::default();
        overrides.apply(&mut fields);
        let outcome = self.app.collection(collection).form.submit(&fields, FormMode::Create)?;
        println!("{}", outcome.message);
        println!("id: {}", outcome.entry.id);
        Ok(0)
    }

    fn require_online(&self, command: &str) -> Result<(), Error> {
        if self.app.offline {
            return Err(Error::invalid_argument(format!(
                "{} needs the backend and cannot run with --offline",
                command
            )));
        }
        Ok(())
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("folio: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
        ParseOutcome::HelpShown => return Ok(0),
    };
    let app = wire_folio(WireOptions::from(&config))?;
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: folio [options] <command>");
}

fn print_help() {
    println!("Usage: folio [options] <command>");
    println!();
    println!("Commands:");
    println!("  projects list [--json]          Show built-in, backend and locally added projects");
    println!("  projects add --title <t> --description <d> [--technologies <a, b>] [--github <url>]");
    println!("               [--demo <url>] [--role <r>] [--outcome <o>] [--category web|mobile|desktop|other]");
    println!("  projects edit <id> [fields...]  Edit a locally added project (omitted fields keep their values)");
    println!("  projects delete <id>            Delete a locally added project (asks for confirmation)");
    println!("  projects clear                  Remove every locally added project");
    println!("  services list|add|edit|delete|clear");
    println!("                                  Same as projects; fields: --title --description --features");
    println!("                                  --pricing --icon");
    println!("  contacts list|submit|edit|delete");
    println!("                                  Contact form submissions (fields: --first-name --last-name");
    println!("                                  --email --phone --message)");
    println!("  signup --first-name <f> --email <e> --password <p> [--last-name <l>] [--confirm-password <p>]");
    println!("  auth login --token <t> [--user <json>] | auth logout | auth status");
    println!("  status                          Check that the backend is reachable");
    println!();
    println!("Options:");
    println!("  -h, --help                      Show this help message");
    println!("  -v, --verbose                   Mirror log records to stderr");
    println!("  -y, --yes                       Answer yes to confirmations");
    println!("  --no-interactive                Do not prompt for confirmations (CI-friendly: confirmations are declined)");
    println!("  --offline                       Do not contact the backend; use built-in and local data only");
    println!("  --generate <shell>              Generate shell completion script (bash, zsh, fish).");
    println!();
    println!("Environment:");
    println!("  FOLIO_HOME      Home directory (config.json, storage.json, logs/).");
    println!("                  If unset, $XDG_CONFIG_HOME/folio (e.g. ~/.config/folio) is used.");
    println!("  FOLIO_API_URL   Backend base URL. Overrides api_url in config.json (default: http://localhost:3000).");
    println!();
    println!("Description:");
    println!("  Entries you add are sent to the backend when it is reachable and are always kept locally,");
    println!("  so they stay visible and editable even when the backend is down.");
}
