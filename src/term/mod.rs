use ansi_term::Style;
use clap::Parser;
use linefeed::{Completer, Completion, DefaultTerminal, Interface, Prompter, ReadResult, Terminal};
use rayscode::lang::{lex, Opcode};
use rayscode::mach::{Evaluator, Limits, RunResult, Stack};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Run raysCode programs.
#[derive(Parser, Debug)]
#[command(name = "rays", version)]
struct Args {
    /// Source file. Without one, every entered line is run as a program.
    file: Option<PathBuf>,
    /// Print a trace line for every executed token.
    #[arg(long)]
    debug: bool,
    /// Maximum number of values on the stack.
    #[arg(long, default_value_t = Limits::MAX_STACK)]
    max_stack: usize,
    /// Maximum run time in milliseconds, not counting time spent waiting for input.
    #[arg(long, default_value_t = Limits::MAX_DURATION.as_millis() as u64)]
    max_millis: u64,
    /// Maximum depth of nested function calls.
    #[arg(long, default_value_t = Limits::MAX_CALLS)]
    max_calls: usize,
}

impl Args {
    fn limits(&self) -> Limits {
        Limits {
            max_stack: self.max_stack,
            max_duration: Duration::from_millis(self.max_millis),
            max_calls: self.max_calls,
        }
    }
}

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    if let Err(error) = main_loop(&args) {
        eprintln!("{}", error);
    }
}

fn main_loop(args: &Args) -> std::io::Result<()> {
    let command = Interface::new("rays")?;
    command.set_prompt("> ")?;
    command.set_completer(Arc::new(KeywordCompleter));
    let input = Interface::new("input")?;
    input.set_prompt("? ")?;

    if let Some(path) = &args.file {
        let source = std::fs::read_to_string(path)?;
        run(&command, &input, args, &source)?;
        return Ok(());
    }
    loop {
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if string.trim().is_empty() {
            continue;
        }
        command.add_history_unique(string.clone());
        if !run(&command, &input, args, &string)? {
            break;
        }
    }
    Ok(())
}

/// Returns false when the session ended while a program waited for input.
fn run(
    command: &Interface<DefaultTerminal>,
    input: &Interface<DefaultTerminal>,
    args: &Args,
    source: &str,
) -> std::io::Result<bool> {
    let program = match lex(source) {
        Ok(program) => program,
        Err(error) => {
            print_error(command, &error)?;
            return Ok(true);
        }
    };
    let mut evaluator = Evaluator::new(program).with_limits(args.limits());
    if args.debug {
        evaluator = evaluator.with_trace(|chunk| eprint!("{}", Style::new().dimmed().paint(chunk)));
    }
    loop {
        match evaluator.run() {
            RunResult::Paused(mut paused) => {
                let output = paused.take_output();
                if !output.is_empty() {
                    command.write_fmt(format_args!("{}\n", output))?;
                }
                match input.read_line()? {
                    ReadResult::Input(string) => {
                        input.add_history_unique(string.clone());
                        evaluator = paused.supply_input(string);
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => return Ok(false),
                }
            }
            RunResult::Completed { stack, output } => {
                if output.is_empty() {
                    command.write_fmt(format_args!("{}\n", Stack::from(stack)))?;
                } else {
                    command.write_fmt(format_args!("{}\n", output))?;
                }
                return Ok(true);
            }
            RunResult::Failed(error) => {
                print_error(command, &error)?;
                return Ok(true);
            }
        }
    }
}

fn print_error<E: std::fmt::Display>(
    command: &Interface<DefaultTerminal>,
    error: &E,
) -> std::io::Result<()> {
    command.write_fmt(format_args!(
        "{}\n",
        Style::new().bold().paint(format!("?{}", error))
    ))
}

struct KeywordCompleter;

impl<Term: Terminal> Completer<Term> for KeywordCompleter {
    fn complete(
        &self,
        word: &str,
        _prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let upper = word.to_ascii_uppercase();
        let comp_list: Vec<Completion> = Opcode::field_less()
            .iter()
            .map(|op| op.keywords()[0])
            .filter(|kw| kw.starts_with(upper.as_str()))
            .map(|kw| Completion::simple(kw.to_string()))
            .collect();
        if comp_list.is_empty() {
            None
        } else {
            Some(comp_list)
        }
    }
}
