//! `hazard-lookup` command line front end

mod render;

use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use hazard_lookup::{
    insert_error_message, insert_success_message, LookupConfig, LookupSession, MatchMode,
};
use hazard_store::LoadSource;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("hazard-lookup")
        .version(hazard_lookup::VERSION)
        .about("Hazard classification code lookup")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding the persisted record set"),
        )
        .arg(
            Arg::new("prefix")
                .long("prefix")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Match codes by prefix instead of substring"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v info, -vv debug)"),
        )
        .subcommand(
            Command::new("search")
                .about("List codes matching a query")
                .arg(Arg::new("query").required(true).help("Code fragment, e.g. 1.1")),
        )
        .subcommand(
            Command::new("show")
                .about("Show one classification")
                .arg(Arg::new("code").required(true).help("Exact code, e.g. 1.4S")),
        )
        .subcommand(
            Command::new("add")
                .about("Add a classification")
                .arg(Arg::new("code").long("code").required(true).help("Classification code"))
                .arg(
                    Arg::new("description")
                        .long("description")
                        .required(true)
                        .help("Description"),
                )
                .arg(
                    Arg::new("compatible")
                        .long("compatible")
                        .help("Compatible codes, comma separated"),
                ),
        )
        .subcommand(Command::new("list").about("List all codes"))
        .subcommand(Command::new("export").about("Print the persisted record set"))
        .subcommand(Command::new("config").about("Print the effective configuration"))
}

fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn effective_config(matches: &ArgMatches) -> Result<LookupConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => LookupConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => LookupConfig::new(),
    };
    if let Some(dir) = matches.get_one::<PathBuf>("data-dir") {
        config = config.with_data_dir(dir);
    }
    if matches.get_flag("prefix") {
        config.search.mode = MatchMode::Prefix;
    }
    Ok(config)
}

fn arg<'a>(args: &'a ArgMatches, name: &str) -> &'a str {
    args.get_one::<String>(name).map_or("", String::as_str)
}

fn run(matches: &ArgMatches) -> Result<ExitCode> {
    let config = effective_config(matches)?;

    if let Some(("config", _)) = matches.subcommand() {
        print!("{}", config.to_toml_string()?);
        return Ok(ExitCode::SUCCESS);
    }

    tracing::debug!(
        data_dir = %config.storage.data_dir.display(),
        key = %config.storage.key,
        "opening record store"
    );
    let mut session = LookupSession::from_config(&config);
    if let LoadSource::Recovered { reason } = session.store().source() {
        eprintln!("warning: using built-in records ({reason})");
    }

    match matches.subcommand() {
        Some(("search", args)) => {
            print!("{}", render::suggestions(session.on_query_changed(arg(args, "query"))));
        }
        Some(("show", args)) => {
            let code = arg(args, "code");
            match session.on_match_chosen(code) {
                Some(view) => print!("{}", render::detail(&view)),
                None => {
                    eprintln!("No classification found for '{}'.", code.trim());
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Some(("add", args)) => {
            match session.on_submit_new_record(
                arg(args, "code"),
                arg(args, "description"),
                arg(args, "compatible"),
            ) {
                Ok(record) => println!("{}", insert_success_message(&record)),
                Err(e) => {
                    eprintln!("{}", insert_error_message(&e));
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Some(("list", _)) => {
            for record in session.store().records() {
                println!("{}", record.code());
            }
        }
        Some(("export", _)) => {
            println!("{}", session.store().to_json()?);
        }
        Some((other, _)) => bail!("unknown command: {other}"),
        None => bail!("no command given"),
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_tracing(matches.get_count("verbose"));

    match run(&matches) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
