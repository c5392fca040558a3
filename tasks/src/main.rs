use clap::{Arg, ArgAction, Command};
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};
use tfhe_security_params::{Error, Registry, SecurityLevel, UnwrapResultExt};

mod table;

// -------------------------------------------------------------------------------------------------
// MAIN
// -------------------------------------------------------------------------------------------------

fn cli() -> Command {
    Command::new("tasks")
        .about("Maintenance of the certified parameter tables")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Prints debug messages"),
        )
        .subcommand(
            Command::new("audit").about("Build the registry and check every row of the tables"),
        )
        .subcommand(
            Command::new("list")
                .about("Print the entries certified for a security level")
                .arg(
                    Arg::new("level")
                        .long("level")
                        .value_parser(["80", "128"])
                        .default_value("128")
                        .help("Security level in bits"),
                )
                .arg(
                    Arg::new("scheme")
                        .long("scheme")
                        .value_parser(["lwe", "rlwe"])
                        .help("Only list the entries of one table"),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Save one parameter set to a file")
                .arg(Arg::new("name").long("name").required(true))
                .arg(Arg::new("output").long("output").required(true)),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
}

fn main() -> Result<(), Error> {
    // We parse the input args
    let matches = cli().get_matches();

    // We initialize the logger with proper verbosity
    let verb = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    CombinedLogger::init(vec![TermLogger::new(
        verb,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .unwrap_display();

    // A defect in the shipped tables aborts every task
    let registry = Registry::certified()?;

    match matches.subcommand() {
        Some(("audit", _)) => table::audit(&registry),
        Some(("list", args)) => {
            let level = args
                .get_one::<String>("level")
                .and_then(|bits| bits.parse().ok())
                .and_then(SecurityLevel::from_bits)
                .unwrap_or(SecurityLevel::Bits128);
            let scheme = args.get_one::<String>("scheme").map(String::as_str);
            table::list(&registry, level, scheme)?;
        }
        Some(("export", args)) => {
            // Both are required by clap
            let name = args.get_one::<String>("name").map_or("", String::as_str);
            let output = args.get_one::<String>("output").map_or("", String::as_str);
            table::export(&registry, name, output)?;
        }
        _ => unreachable!("clap requires a known subcommand"),
    }

    Ok(())
}
