//! Command-line argument parsing.

/// Result of parsing command-line arguments.
#[derive(Clone)]
pub struct ParsedArgs {
    pub verbose: bool,
}

/// Parse command-line arguments.
pub fn parse_args() -> ParsedArgs {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "-v" || a == "--verbose");
    ParsedArgs { verbose }
}
