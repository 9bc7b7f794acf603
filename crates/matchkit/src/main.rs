//! Matchkit CLI
//!
//! Evaluates, classifies and encodes patterns from the command line.

use matchkit::commands::{classify, decode, encode, eval, CommandError};

fn main() {
    matchkit::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "eval" => {
            if args.len() < 4 {
                eprintln!("Usage: matchkit eval <pattern> <value>...");
                eprintln!();
                eprintln!("Example: matchkit eval 'between(10, 20)' 9 10 20 21");
                std::process::exit(1);
            }
            match eval(&args[2], &args[3..]) {
                Ok(lines) => {
                    for line in lines {
                        println!("{line}");
                    }
                }
                Err(err) => fail(&err),
            }
        }
        "classify" => {
            if args.len() < 4 {
                eprintln!("Usage: matchkit classify <value> <pattern>...");
                eprintln!();
                eprintln!("Prints the index of the first matching pattern, or `none`.");
                eprintln!("Example: matchkit classify 85 'ge(90)' 'between(80, 89)' _");
                std::process::exit(1);
            }
            match classify(&args[2], &args[3..]) {
                Ok(Some(index)) => println!("{index}"),
                Ok(None) => println!("none"),
                Err(err) => fail(&err),
            }
        }
        "encode" => {
            if args.len() < 3 {
                eprintln!("Usage: matchkit encode <pattern>");
                std::process::exit(1);
            }
            match encode(&args[2]) {
                Ok(packed) => println!("{packed:#018x}"),
                Err(err) => fail(&err),
            }
        }
        "decode" => {
            if args.len() < 3 {
                eprintln!("Usage: matchkit decode <hex>");
                std::process::exit(1);
            }
            match decode(&args[2]) {
                Ok(pattern) => println!("{pattern}"),
                Err(err) => fail(&err),
            }
        }
        "--version" | "-V" => {
            println!("matchkit {}", env!("CARGO_PKG_VERSION"));
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("error: unknown command '{command}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn fail(err: &CommandError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}

fn print_usage() {
    println!("Matchkit - structural pattern matching");
    println!();
    println!("Usage: matchkit <command> [args]");
    println!();
    println!("Commands:");
    println!("  eval <pattern> <value>...      Test each value against a pattern");
    println!("  classify <value> <pattern>...  Index of the first matching pattern");
    println!("  encode <pattern>               Print the packed one-word form");
    println!("  decode <hex>                   Print the pattern a packed word holds");
    println!("  help                           Show this message");
    println!();
    println!("Patterns:");
    println!("  42  'c'  _  gt(n)  ge(n)  lt(n)  le(n)  ne(n)");
    println!("  range(lo, hi)  between(lo, hi)  variant(tag)  Ok  Err  Some  None");
    println!();
    println!("Values:");
    println!("  integers, 'c', Ok, Err, Some, None, tag(n)");
    println!();
    println!("Set RUST_LOG=trace to log every pattern test.");
}
