mod commands;
mod error;
mod prompt;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, warn};

use crate::commands::{
    addresses, birthdays, completions, contacts, emails, notes, phones, shell, Context,
};
use crate::error::{exit_code_for, report_error};
use rolo_config as config;
use rolo_store::{paths, Store};

#[derive(Debug, Parser)]
#[command(name = "rolo", version, about = "rolo address book CLI")]
struct Cli {
    #[arg(long, global = true)]
    data_path: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
    #[command(name = "add-contact")]
    AddContact(contacts::AddContactArgs),
    #[command(name = "rename-contact")]
    RenameContact(contacts::RenameContactArgs),
    Show(contacts::ShowArgs),
    List(contacts::ListArgs),
    Delete(contacts::DeleteArgs),
    #[command(subcommand)]
    Phone(phones::PhoneCommand),
    #[command(subcommand)]
    Email(emails::EmailCommand),
    #[command(subcommand)]
    Address(addresses::AddressCommand),
    #[command(subcommand)]
    Note(notes::NoteCommand),
    #[command(subcommand)]
    Birthday(birthdays::BirthdayCommand),
    /// Contacts with a birthday in the current week
    Birthdays(birthdays::BirthdaysArgs),
    /// Interactive session
    Shell(shell::ShellArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        data_path,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
        command => {
            let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
            if verbose {
                match config::resolve_config_path(config_path) {
                    Ok(path) => {
                        if path.exists() {
                            debug!(path = %path.display(), "config resolved");
                        } else {
                            debug!(path = %path.display(), "config missing, using defaults");
                        }
                    }
                    Err(err) => {
                        debug!(error = %err, "config unavailable");
                    }
                }
            }
            let data_path = paths::resolve_snapshot_path(
                data_path.or_else(|| app_config.data_path.clone()),
            )
            .with_context(|| "resolve snapshot path")?;

            if verbose {
                debug!(path = %data_path.display(), "snapshot path resolved");
            }

            let store = Store::open(&data_path);
            let outcome = store.load();
            if outcome.recovered {
                warn!(path = %data_path.display(), "snapshot unreadable, starting empty");
            }

            let mut ctx = Context {
                book: outcome.book,
                store,
                config: app_config,
                json,
            };

            match command {
                Command::AddContact(args) => contacts::add_contact(&mut ctx, args),
                Command::RenameContact(args) => contacts::rename_contact(&mut ctx, args),
                Command::Show(args) => contacts::show_contact(&ctx, args),
                Command::List(args) => contacts::list_contacts(&ctx, args),
                Command::Delete(args) => contacts::delete_contact(&mut ctx, args),
                Command::Phone(cmd) => match cmd {
                    phones::PhoneCommand::Add(args) => phones::add_phone(&mut ctx, args),
                    phones::PhoneCommand::Edit(args) => phones::edit_phone(&mut ctx, args),
                    phones::PhoneCommand::Rm(args) => phones::remove_phone(&mut ctx, args),
                    phones::PhoneCommand::Ls(args) => phones::list_phones(&ctx, args),
                    phones::PhoneCommand::SetMain(args) => phones::set_main_phone(&mut ctx, args),
                },
                Command::Email(cmd) => match cmd {
                    emails::EmailCommand::Add(args) => emails::add_email(&mut ctx, args),
                    emails::EmailCommand::Edit(args) => emails::edit_email(&mut ctx, args),
                    emails::EmailCommand::Rm(args) => emails::remove_email(&mut ctx, args),
                    emails::EmailCommand::Ls(args) => emails::list_emails(&ctx, args),
                    emails::EmailCommand::SetMain(args) => emails::set_main_email(&mut ctx, args),
                },
                Command::Address(cmd) => match cmd {
                    addresses::AddressCommand::Add(args) => addresses::add_address(&mut ctx, args),
                    addresses::AddressCommand::Edit(args) => {
                        addresses::edit_address(&mut ctx, args)
                    }
                    addresses::AddressCommand::Rm(args) => {
                        addresses::remove_address(&mut ctx, args)
                    }
                    addresses::AddressCommand::Ls(args) => addresses::list_addresses(&ctx, args),
                    addresses::AddressCommand::SetMain(args) => {
                        addresses::set_main_address(&mut ctx, args)
                    }
                },
                Command::Note(cmd) => match cmd {
                    notes::NoteCommand::Add(args) => notes::add_note(&mut ctx, args),
                    notes::NoteCommand::Edit(args) => notes::edit_note(&mut ctx, args),
                    notes::NoteCommand::Rm(args) => notes::remove_note(&mut ctx, args),
                    notes::NoteCommand::Ls(args) => notes::list_notes(&ctx, args),
                    notes::NoteCommand::Find(args) => notes::find_note(&ctx, args),
                    notes::NoteCommand::FindByTag(args) => notes::find_note_by_tag(&ctx, args),
                },
                Command::Birthday(cmd) => match cmd {
                    birthdays::BirthdayCommand::Set(args) => {
                        birthdays::set_birthday(&mut ctx, args)
                    }
                    birthdays::BirthdayCommand::Show(args) => birthdays::show_birthday(&ctx, args),
                },
                Command::Birthdays(args) => birthdays::upcoming_birthdays(&ctx, args),
                Command::Shell(args) => shell::run_shell(&mut ctx, args),
                Command::Completions(_) => {
                    unreachable!("completions command handled before store initialization")
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
