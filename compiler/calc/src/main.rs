use std::io::{self, Read};

use calc::{analyze, CalcError, Evaluation};
use calc_parser::parser::DEFAULT_MAX_DEPTH;
use calc_parser::{render_snippet, ParserConfig};
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(
    name = "calc",
    version,
    about = "Evaluate arithmetic expressions",
    long_about = "calc evaluates arithmetic expressions over floating-point numbers.\n\n\
        Supported operators, loosest binding first: '+' '-', then '*' '/', then '^'\n\
        (right-associative). Parentheses group sub-expressions.\n\n\
        EXAMPLES:\n\
        \n  calc eval '2 + 3 * 4'            Print 14\n\
        \n  calc eval --ast '2 ^ 3 ^ 2'      Print the tree, then 512\n\
        \n  echo '(2 + 3) * 4' | calc eval   Evaluate stdin\n\
        \n  calc                             Start the interactive REPL"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Args, Clone, Copy)]
struct OutputArgs {
    /// Print the token sequence before the result
    #[arg(long, global = true)]
    tokens: bool,

    /// Print the expression tree before the result
    #[arg(long, global = true)]
    ast: bool,

    /// Print the expression tree as JSON before the result
    #[arg(long, global = true)]
    json: bool,

    /// Maximum nesting of parentheses and exponents
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH, global = true)]
    max_depth: usize,
}

impl OutputArgs {
    fn parser_config(&self) -> ParserConfig {
        ParserConfig {
            max_depth: self.max_depth,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate one expression
    #[command(
        about = "Evaluate one expression",
        long_about = "Evaluate one expression and print the result.\n\n\
            Arguments are joined with spaces. Reads stdin when none are given."
    )]
    Eval {
        /// Expression text
        #[arg(value_name = "EXPR", allow_negative_numbers = true)]
        expr: Vec<String>,
    },

    /// Start an interactive Read-Eval-Print Loop
    #[command(
        about = "Start an interactive REPL session",
        long_about = "Start an interactive Read-Eval-Print Loop.\n\n\
            Commands:\n\
            \n  :help   Show available REPL commands\n\
            \n  :quit   Exit the REPL (also :q, :exit)"
    )]
    Repl,
}

/// Trees deeper than this are not dumped; printing and JSON both recurse per level.
const MAX_DUMP_DEPTH: usize = 1024;

/// Renders one input: optional dumps followed by the value.
///
/// An error comes back as a rendered snippet.
fn evaluate_line(source: &str, output: &OutputArgs) -> Result<Vec<String>, String> {
    let Evaluation { tokens, ast, value } = analyze(source, output.parser_config())
        .map_err(|e: CalcError| render_snippet(&e.diagnostic(source), source))?;

    let mut lines = Vec::new();
    if output.tokens {
        lines.extend(tokens.iter().map(|t| t.describe()));
    }
    if let Some(ast) = ast.as_ref().filter(|_| output.ast || output.json) {
        let depth = ast.depth();
        if depth > MAX_DUMP_DEPTH {
            log::warn!("skipping tree dump, depth {depth} exceeds {MAX_DUMP_DEPTH}");
            lines.push(format!(
                "note: expression tree is {depth} levels deep, too deep to print"
            ));
        } else if output.ast {
            lines.push(ast.describe().trim_end().to_string());
        }
        if output.json && depth <= MAX_DUMP_DEPTH {
            let json = calc_ast::to_json(ast).map_err(|e| format!("error: {e}"))?;
            lines.push(json);
        }
    }
    if let Some(value) = value {
        lines.push(value.to_string());
    }
    Ok(lines)
}

#[derive(Debug)]
struct ReplSession {
    output: OutputArgs,
}

impl ReplSession {
    fn new(output: OutputArgs) -> Self {
        Self { output }
    }

    fn prompt(&self) -> &'static str {
        "calc> "
    }

    fn handle_command(&mut self, line: &str) -> (Vec<String>, bool) {
        match line {
            ":help" => (
                vec![
                    "commands: :help, :quit".to_string(),
                    "operators: + - * / ^ and parentheses, e.g. (2 + 3) * 4".to_string(),
                ],
                false,
            ),
            ":q" | ":quit" | ":exit" => (Vec::new(), true),
            other => (vec![format!("error: unknown command '{other}'")], false),
        }
    }

    /// Returns the lines to print and whether the session should end.
    fn handle_line(&mut self, line: &str) -> (Vec<String>, bool) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return (Vec::new(), false);
        }
        if trimmed.starts_with(':') {
            return self.handle_command(trimmed);
        }

        match evaluate_line(line, &self.output) {
            Ok(lines) => (lines, false),
            Err(rendered) => (vec![rendered], false),
        }
    }
}

fn run_repl(output: OutputArgs) -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::Editor;
    // Lines are never added to the history
    let mut rl = match Editor::<(), rustyline::history::DefaultHistory>::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize repl: {e}");
            return 2;
        }
    };

    let mut session = ReplSession::new(output);
    loop {
        match rl.readline(session.prompt()) {
            Ok(line) => {
                let (out, exit) = session.handle_line(&line);
                for l in out {
                    println!("{l}");
                }
                if exit {
                    return 0;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return 0,
            Err(e) => {
                eprintln!("error: repl failed: {e}");
                return 2;
            }
        }
    }
}

fn read_source(expr: &[String]) -> Result<String, String> {
    if !expr.is_empty() {
        return Ok(expr.join(" "));
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read from stdin: {e}"))?;
    Ok(buf)
}

fn run_eval(expr: &[String], output: &OutputArgs) -> i32 {
    let source = match read_source(expr) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    match evaluate_line(&source, output) {
        Ok(lines) => {
            for l in lines {
                println!("{l}");
            }
            0
        }
        Err(rendered) => {
            eprintln!("{rendered}");
            1
        }
    }
}

fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8) {
    // RUST_LOG is parsed after the flag so it takes precedence
    let _ = env_logger::Builder::new()
        .filter_level(level_for_verbosity(verbose))
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    log::debug!("{cli:?}");

    match cli.command.unwrap_or(Command::Repl) {
        Command::Eval { expr } => run_eval(&expr, &cli.output),
        Command::Repl => run_repl(cli.output),
    }
}

fn main() {
    std::process::exit(run_cli());
}
