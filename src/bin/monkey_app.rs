//! Interactive monkey species browser.
//!
//! Reads menu commands from stdin and renders results on stdout until the
//! user exits or input ends. Tuning happens through `MONKEY_APP_*`
//! environment variables (see `monkey_explorer::config`).

use anyhow::Result;
use monkey_explorer::{AppConfig, Menu, MenuOptions, catalog_for, logging, rng_for};
use std::env;
use std::io::{self, Write};

fn main() {
    match parse_args() {
        Invocation::Run => {}
        Invocation::Help => {
            print!("{}", usage());
            return;
        }
        Invocation::Version => {
            println!("monkey-app {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Invocation::Unknown(arg) => {
            eprintln!("monkey-app: unexpected argument '{arg}'");
            eprint!("{}", usage());
            std::process::exit(2);
        }
    }

    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = AppConfig::from_env()?;
    logging::init(&config.log_filter);

    let catalog = catalog_for(&config)?;
    let mut menu = Menu::new(&catalog, rng_for(&config), MenuOptions::from(&config));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();
    menu.run(&mut input, &mut output)?;
    output.flush()?;
    Ok(())
}

enum Invocation {
    Run,
    Help,
    Version,
    Unknown(String),
}

fn parse_args() -> Invocation {
    let mut args = env::args().skip(1);
    let Some(first) = args.next() else {
        return Invocation::Run;
    };
    match first.as_str() {
        "-h" | "--help" => Invocation::Help,
        "-V" | "--version" => Invocation::Version,
        _ => Invocation::Unknown(first),
    }
}

fn usage() -> &'static str {
    "Usage: monkey-app\n\nInteractive menu: 1 list, 2 find by name, 3 random, 4 exit.\n\nEnvironment:\n  MONKEY_APP_CATALOG     Path to an alternate catalog JSON document.\n  MONKEY_APP_SEED        Seed for reproducible random picks.\n  MONKEY_APP_REVEAL_MS   Pause before showing a random pick.\n  MONKEY_APP_NO_ART      Set to disable decorative art.\n  MONKEY_APP_LOG         tracing filter for stderr diagnostics (default: warn).\n"
}
