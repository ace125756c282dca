// SPDX-License-Identifier: MPL-2.0
use krishi_officer::app::{paths, App, Flags, Message};
use krishi_officer::i18n::Catalog;
use std::ffi::OsString;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Usage: krishi-officer [OPTIONS] [KEY...]

Prints the navigation shell, or the translation of each KEY.

Options:
  --lang <ml|en>       Language for this session only
  --config-dir <DIR>   Directory holding settings.toml
  --route <PATH>       Route to render (default: /)
  --toggle             Switch language and remember the choice
  --ephemeral          Do not read or write settings.toml
  --check              Verify that every locale has the same keys
  -h, --help           Print this help
";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return ExitCode::SUCCESS;
    }

    let parsed = parse_args(&mut args);
    let (flags, toggle, check) = match parsed {
        Ok(parsed) => parsed,
        Err(error) => {
            eprintln!("error: {}", error);
            return ExitCode::from(2);
        }
    };
    let keys = match collect_keys(args.finish()) {
        Ok(keys) => keys,
        Err(error) => {
            eprintln!("error: {}", error);
            return ExitCode::from(2);
        }
    };

    if check {
        return check_catalog();
    }

    paths::init_cli_override(flags.config_dir.clone());
    let mut app = match App::new(&flags) {
        Ok(app) => app,
        Err(error) => {
            eprintln!("error: {}", error);
            return ExitCode::FAILURE;
        }
    };

    if toggle {
        app.update(Message::ToggleLanguage);
    }

    if keys.is_empty() {
        for line in app.view() {
            println!("{}", line);
        }
    } else {
        for key in &keys {
            let lookup = app.store().resolve(key);
            if !lookup.is_found() {
                let locale = app.store().active();
                tracing::warn!(key = %key, %locale, "no translation, printing key");
            }
            println!("{}", lookup.or_key(key));
        }
    }
    ExitCode::SUCCESS
}

fn parse_args(args: &mut pico_args::Arguments) -> Result<(Flags, bool, bool), pico_args::Error> {
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        route: args.opt_value_from_str("--route")?,
        ephemeral: args.contains("--ephemeral"),
    };
    Ok((flags, args.contains("--toggle"), args.contains("--check")))
}

/// Positional arguments left after option parsing. Keys never start with `-`.
fn collect_keys(rest: Vec<OsString>) -> Result<Vec<String>, String> {
    rest.into_iter()
        .map(|arg| match arg.into_string() {
            Ok(key) if key.starts_with('-') => Err(format!("unknown option '{}'", key)),
            Ok(key) => Ok(key),
            Err(arg) => Err(format!("argument is not valid UTF-8: {:?}", arg)),
        })
        .collect()
}

fn check_catalog() -> ExitCode {
    let result = Catalog::embedded().and_then(|catalog| {
        let report = catalog.parity_report();
        println!("{}", report);
        catalog.verify_parity()
    });
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}
