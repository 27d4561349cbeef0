//! # Command Line Interface
//! 
//! Simple subcommands are directly in `main.rs`.
//! More elaborate subcommands are in the `commands` module.

mod cli;

use env_logger;
use std::process::ExitCode;
use clap::error::ErrorKind;
use log::error;
use a2apex::commands;
use a2apex::commands::CommandError;
use a2apex::STDRESULT;

fn run() -> STDRESULT {
    let main_cmd = cli::build_cli();
    let matches = main_cmd.clone().try_get_matches()?;

    // Catalog a disk image
    if let Some(cmd) = matches.subcommand_matches("catalog") {
        let mut disk = commands::open_disk(cmd)?;
        return disk.catalog_to_stdout();
    }

    // Directory as JSON
    if let Some(cmd) = matches.subcommand_matches("tree") {
        let mut disk = commands::open_disk(cmd)?;
        let indent = cmd.get_one::<u16>("indent").copied();
        println!("{}",disk.tree(indent)?);
        return Ok(());
    }

    if let Some(cmd) = matches.subcommand_matches("get") {
        return commands::get::get(cmd);
    }

    if let Some(cmd) = matches.subcommand_matches("extract") {
        return commands::extract::extract(cmd);
    }

    if let Some(cmd) = matches.subcommand_matches("dump") {
        return commands::dump::dump(cmd);
    }

    if let Some(cmd) = matches.subcommand_matches("completions") {
        return commands::completions::generate(main_cmd,cmd);
    }

    error!("No subcommand was found, try `a2apex --help`");
    Err(Box::new(CommandError::InvalidCommand))
}

fn main() -> ExitCode
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // help and version also arrive here as clap errors
            if let Some(clap_err) = e.downcast_ref::<clap::Error>() {
                let _ = clap_err.print();
                return match clap_err.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                    _ => ExitCode::FAILURE
                };
            }
            eprintln!("Error: {}",e);
            ExitCode::from(a2apex::exit_status(&e))
        }
    }
}
