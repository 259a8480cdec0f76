use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use arith::analyze_source;
use arith_ast::AstPrinter;
use arith_parser::{render_snippet, SyntaxTree};
use clap::{Args, Parser, Subcommand};
use log::{debug, LevelFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Text { positions: bool },
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "arith",
    version,
    about = "Parse arithmetic expressions and report what went wrong",
    long_about = "arith tokenizes and parses a single arithmetic expression.\n\n\
        It understands integers, true/false, + - * / and parentheses, and prints\n\
        the resulting expression tree along with any diagnostics.\n\n\
        EXAMPLES:\n\
        \n  arith parse '1 + 2 * 3'          Print the tree for an expression\n\
        \n  echo '(1 + 2' | arith parse      Parse from stdin\n\
        \n  arith json '-4 / 2'              Emit a JSON report\n\
        \n  arith                            Start the interactive REPL"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse an expression and print its tree
    #[command(
        about = "Parse an expression and print its tree",
        long_about = "Parses one expression and prints its tree followed by any diagnostics.\n\n\
            The expression is taken from the argument, from --file, or from stdin.\n\
            Exits with 1 if any diagnostic was reported."
    )]
    Parse(ParseArgs),

    /// Output the tree and diagnostics as JSON
    #[command(
        about = "Output the tree and diagnostics as JSON",
        long_about = "Prints a JSON report with the reprinted expression, the full tree and\n\
            every diagnostic. Tokens and diagnostics always carry their byte spans."
    )]
    Json(SourceArgs),

    /// Start an interactive Read-Eval-Print Loop
    #[command(
        about = "Start an interactive REPL session",
        long_about = "Start an interactive loop that parses one expression per line.\n\n\
            Commands:\n\
            \n  :tree   Toggle printing of the expression tree\n\
            \n  :help   Show available REPL commands\n\
            \n  :quit   Exit the REPL (also :q, :exit)"
    )]
    Repl,
}

#[derive(Debug, Args, Clone)]
struct SourceArgs {
    /// Expression to parse (reads from --file or stdin if not provided)
    #[arg(value_name = "EXPR")]
    expression: Option<String>,

    /// Read the expression from a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "expression")]
    file: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
struct ParseArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Show the byte position of every node in the tree
    #[arg(long)]
    positions: bool,
}

#[derive(Debug)]
struct ReplSession {
    show_tree: bool,
}

impl ReplSession {
    fn new() -> Self {
        Self { show_tree: true }
    }

    fn prompt(&self) -> &'static str {
        "arith> "
    }

    fn handle_command(&mut self, line: &str) -> (Vec<String>, bool) {
        match line {
            ":help" => (
                vec![
                    "commands: :help, :quit, :tree".to_string(),
                    "note: enter one expression per line".to_string(),
                ],
                false,
            ),
            ":q" | ":quit" | ":exit" => (Vec::new(), true),
            ":tree" => {
                self.show_tree = !self.show_tree;
                let state = if self.show_tree { "on" } else { "off" };
                (vec![format!("tree output {state}")], false)
            }
            other => (vec![format!("error: unknown command '{other}'")], false),
        }
    }

    /// Handles one line of input.
    ///
    /// Returns the lines to print, whether to exit, and whether the line
    /// was acted on (blank lines are not).
    fn handle_line(&mut self, line: &str) -> (Vec<String>, bool, bool) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return (Vec::new(), false, false);
        }

        if trimmed.starts_with(':') {
            let (out, exit) = self.handle_command(trimmed);
            return (out, exit, true);
        }

        let tree = SyntaxTree::parse(line);
        let mut out = Vec::new();
        if self.show_tree {
            out.extend(AstPrinter::new().print(&tree.root).lines().map(String::from));
        } else {
            out.push(tree.root.to_string());
        }
        for diagnostic in &tree.diagnostics {
            out.push(render_snippet(diagnostic, line));
        }
        (out, false, true)
    }
}


fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn read_source(args: &SourceArgs) -> Result<String, String> {
    if let Some(expression) = &args.expression {
        return Ok(expression.clone());
    }
    if let Some(path) = &args.file {
        return fs::read_to_string(path)
            .map_err(|e| format!("failed to read '{}': {e}", path.display()));
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read from stdin: {e}"))?;
    Ok(buf)
}

fn run_parse(source: &str, mode: OutputMode) -> i32 {
    if source.trim().is_empty() {
        eprintln!("error: no expression given");
        return 2;
    }

    match mode {
        OutputMode::Text { positions } => {
            let tree = SyntaxTree::parse(source);
            print!("{}", AstPrinter::new().with_positions(positions).print(&tree.root));
            for diagnostic in &tree.diagnostics {
                eprintln!("{}", render_snippet(diagnostic, source));
            }
            debug!("parsed with {} diagnostic(s)", tree.diagnostics.len());
            i32::from(tree.has_errors())
        }
        OutputMode::Json => {
            let report = analyze_source(source);
            let has_errors = !report.diagnostics.is_empty();
            match serde_json::to_string_pretty(&report) {
                Ok(json) => {
                    println!("{json}");
                    i32::from(has_errors)
                }
                Err(e) => {
                    eprintln!("error: failed to serialize report: {e}");
                    2
                }
            }
        }
    }
}

fn run_repl() -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;
    let mut rl = match DefaultEditor::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize repl: {e}");
            return 2;
        }
    };

    let mut session = ReplSession::new();
    loop {
        match rl.readline(session.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }
                let (out, exit, _committed) = session.handle_line(&line);
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

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.unwrap_or(Command::Repl) {
        Command::Parse(args) => match read_source(&args.source) {
            Ok(source) => run_parse(
                &source,
                OutputMode::Text {
                    positions: args.positions,
                },
            ),
            Err(e) => {
                eprintln!("error: {e}");
                2
            }
        },
        Command::Json(args) => match read_source(&args) {
            Ok(source) => run_parse(&source, OutputMode::Json),
            Err(e) => {
                eprintln!("error: {e}");
                2
            }
        },
        Command::Repl => run_repl(),
    }
}

fn main() {
    std::process::exit(run_cli());
}
