//! lineparse: interactive front-end for the line parser.
//!
//! Reads lines with a rustyline prompt, parses each into a
//! [`ParsedCommand`], and prints the structured record — human-readable
//! by default, one JSON object per line with `--json`.

use lineparse::config::Config;
use lineparse::{LineParser, ParseError, ParsedCommand};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

struct Options {
    json: bool,
    verbose: bool,
    dump_config: bool,
}

fn parse_args() -> Result<Options, String> {
    let mut opts = Options {
        json: false,
        verbose: false,
        dump_config: false,
    };
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => opts.json = true,
            "--verbose" | "-v" => opts.verbose = true,
            "--dump-config" => opts.dump_config = true,
            other => return Err(format!("unknown flag: {other}")),
        }
    }
    Ok(opts)
}

fn main() {
    let opts = match parse_args() {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: lineparse [--json] [--verbose] [--dump-config]");
            std::process::exit(1);
        }
    };

    lineparse::logging::init(opts.verbose);
    let config = Config::load();

    if opts.dump_config {
        match toml::to_string_pretty(&config) {
            Ok(text) => print!("{text}"),
            Err(e) => {
                eprintln!("failed to serialize config: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let parser = LineParser::from_config(&config);
    if let Err(e) = read_loop(&parser, &config.settings.prompt, opts.json) {
        eprintln!("readline error: {e}");
        std::process::exit(1);
    }
}

/// Prompt, parse, print, repeat. Ctrl-C and Ctrl-D end the session.
fn read_loop(parser: &LineParser, prompt: &str, json: bool) -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    log::info!("session started");

    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                match parser.parse(&line) {
                    Ok(record) => {
                        log::debug!("parsed {:?} from {:?}", record.command, record.raw);
                        print_record(&record, json);
                    }
                    // blank or comment-only line
                    Err(ParseError::EmptyInput) => {}
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        }
    }

    log::info!("session ended");
    Ok(())
}

fn print_record(record: &ParsedCommand, json: bool) {
    if json {
        match serde_json::to_string(record) {
            Ok(s) => println!("{s}"),
            Err(e) => log::error!("failed to encode record: {e}"),
        }
    } else {
        println!("command: {}", record.command);
        if let Some(args) = &record.args {
            println!("args:    {args}");
        }
        if let Some(dest) = &record.pipe_to {
            println!("pipe to: {dest}");
        }
    }
}
