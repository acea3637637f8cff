//! Zuelen CLI entry point.

use std::env;
use std::process::ExitCode;

use zuelen_runtime::{Mode, Repl, Session, init_tracing};

/// CLI configuration parsed from arguments.
#[derive(Debug, Default)]
struct CliConfig {
    phrases: Vec<String>,
    language: Option<String>,
    mode: Mode,
    json: bool,
    log_level: Option<String>,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut mode_flag: Option<&'static str> = None;
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-j" | "--json" => config.json = true,
            "-d" | "--date" => set_mode(&mut config, &mut mode_flag, "--date", Mode::Date)?,
            "-t" | "--tokens" => {
                set_mode(&mut config, &mut mode_flag, "--tokens", Mode::Tokens)?;
            }
            "-l" | "--lang" => {
                let tag = args.next().ok_or("--lang requires a language tag")?;
                config.language = Some(tag);
            }
            "--log" => {
                let level = args.next().ok_or("--log requires a level")?;
                config.log_level = Some(level);
            }
            "--" => config.phrases.extend(args.by_ref()),
            other if other.starts_with('-') && other.len() > 1 => {
                return Err(format!("unknown option: {other}").into());
            }
            _ => config.phrases.push(arg),
        }
    }

    Ok(config)
}

fn set_mode(
    config: &mut CliConfig,
    mode_flag: &mut Option<&'static str>,
    flag: &'static str,
    mode: Mode,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(previous) = mode_flag.filter(|previous| *previous != flag) {
        return Err(format!("{flag} cannot be combined with {previous}").into());
    }
    *mode_flag = Some(flag);
    config.mode = mode;
    Ok(())
}

/// Returns whether every phrase evaluated.
fn run(args: Vec<String>) -> Result<bool, Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(true);
    }

    if config.show_version {
        println!("zuelen {}", env!("CARGO_PKG_VERSION"));
        return Ok(true);
    }

    init_tracing(config.log_level.as_deref());

    let mut session = Session::new()
        .with_mode(config.mode)
        .with_json(config.json);
    if let Some(tag) = &config.language {
        session = session.with_language(tag)?;
    }

    if config.phrases.is_empty() {
        Repl::new()?.with_session(session).run()?;
        return Ok(true);
    }

    let mut all_ok = true;
    for phrase in &config.phrases {
        match session.evaluate(phrase) {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => {
                all_ok = false;
                eprintln!("\x1b[31mError: {e}\x1b[0m");
            }
        }
    }
    Ok(all_ok)
}

fn print_help() {
    println!(
        "\x1b[1mZuelen\x1b[0m - Luxembourgish number words to numbers

\x1b[1mUSAGE:\x1b[0m
    zuelen [OPTIONS] [PHRASES...]

\x1b[1mARGUMENTS:\x1b[0m
    [PHRASES...]    Phrases to evaluate, one per argument. Without any,
                    an interactive REPL starts.

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -l, --lang TAG     Language tag (default: lb)
    -d, --date         Read phrases as dates
    -t, --tokens       Show the token stream instead of the value
    -j, --json         Print results as JSON
    --log LEVEL        Log filter, e.g. debug or zuelen_parser=trace
                       (default: RUST_LOG, then warn)

\x1b[1mEXAMPLES:\x1b[0m
    zuelen véierafoffzeg                      54
    zuelen \"zwee komma fënnef\"                2.5
    zuelen --date \"éischte Januar zweedausendvéier\"
    zuelen --json drëtten

\x1b[1mREPL COMMANDS:\x1b[0m
    :number, :date, :tokens [phrase]   Switch mode, or evaluate once
    :lang [tag]                        Show or switch the language
    :json                              Toggle JSON output
    :help, :quit                       Help, exit
    Ctrl+D                             Exit REPL"
    );
}
