use std::env;
use std::fmt::Display;

use flagscan::{Flag, Parser, usage};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

static INCLUDE: Flag = Flag::string("-I", "--include").help("Path to include files");
static INTEGER: Flag = Flag::integer("-i", "--integer");
static FLOAT: Flag = Flag::float("-f", "--float").help("Floating point value");
static VERBOSE: Flag = Flag::presence("-v", "--verbose").help("Log every lookup");

fn print_contents<T: Display>(parser: &Parser<'_>, flag: &Flag<'_>, value: Option<T>) {
    let status = if parser.passed(flag) { "Passed" } else { "Not_passed" };
    match value {
        Some(v) => println!("{}: {}", status, v),
        None => println!("{}: NULL", status),
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let parser = Parser::new(&args);

    let level = if parser.passed(&VERBOSE) {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("could not initialize logger: {}", e);
    }

    println!("{}", usage(&[&INCLUDE, &INTEGER, &FLOAT, &VERBOSE]));

    print_contents(&parser, &INCLUDE, parser.parse_str(&INCLUDE));
    print_contents(&parser, &INTEGER, parser.parse_int(&INTEGER));
    print_contents(&parser, &FLOAT, parser.parse_float(&FLOAT));

    let float = parser
        .parse_float_or(&FLOAT, 69.420)
        .unwrap_or_else(|e| e.exit());
    println!("Float or default: {}", float);
}
