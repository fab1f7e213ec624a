//! The interactive read-evaluate-print shell.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use super::{help, CliError};
use crate::{
    ast::{Control, Input},
    evaluator::Evaluator,
    normalize::normalize,
    output::format_results,
    parser::parse,
    store::{MemoryStore, ResultSet, StoreError},
};

enum Action {
    Continue,
    Exit,
}

/// One interactive session over the prompt loop.
///
/// The store is opened lazily on the first filtering query and reused for
/// the remainder of the session; `help` and `exit` never touch it. Every
/// error short of a confirmed exit is recovered at the top of the loop.
pub struct Repl {
    data_path: Option<PathBuf>,
    engine: Option<Evaluator<MemoryStore>>,
}

impl Repl {
    /// A shell reading the dataset from `data_path`, or the embedded seed
    /// dataset when `None`.
    pub fn new(data_path: Option<PathBuf>) -> Self {
        Repl {
            data_path,
            engine: None,
        }
    }

    /// Run the loop over stdin/stdout until a confirmed `exit` or EOF.
    pub fn run(&mut self) -> Result<(), CliError> {
        let interactive = atty::is(atty::Stream::Stdin);
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_loop(&mut stdin.lock(), &mut stdout.lock(), interactive)
    }

    /// The loop itself, over any line source and sink.
    ///
    /// `interactive` controls the banner and the prompt markers; piped
    /// sessions get clean output.
    pub fn run_loop<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
        interactive: bool,
    ) -> Result<(), CliError> {
        if interactive {
            writeln!(out, "{}", help::welcome_banner())?;
        }

        loop {
            if interactive {
                write!(out, "> ")?;
                out.flush()?;
            }

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // EOF behaves like a confirmed exit.
                writeln!(out, "{}", help::FAREWELL_MESSAGE)?;
                return Ok(());
            }
            // An empty line goes through the parser like anything else and
            // earns the fixed error message.
            match self.dispatch(line.trim(), input, out, interactive)? {
                Action::Continue => {}
                Action::Exit => return Ok(()),
            }
        }
    }

    fn dispatch<R: BufRead, W: Write>(
        &mut self,
        line: &str,
        input: &mut R,
        out: &mut W,
        interactive: bool,
    ) -> Result<Action, CliError> {
        let tokens = match parse(line) {
            Ok(tokens) => tokens,
            Err(_) => {
                writeln!(out, "{}", help::PARSE_ERROR_MESSAGE)?;
                return Ok(Action::Continue);
            }
        };
        let normalized = match normalize(&tokens) {
            Ok(normalized) => normalized,
            Err(_) => {
                writeln!(out, "{}", help::PARSE_ERROR_MESSAGE)?;
                return Ok(Action::Continue);
            }
        };

        match normalized {
            Input::Control(Control::Help) => {
                writeln!(out, "{}", help::help_screen())?;
            }
            Input::Control(Control::Exit) => {
                if self.confirm_exit(input, out, interactive)? {
                    writeln!(out, "{}", help::FAREWELL_MESSAGE)?;
                    return Ok(Action::Exit);
                }
            }
            Input::Filters(query) => match self.evaluate(&query) {
                Ok(results) => writeln!(out, "{}", format_results(&results, &query))?,
                Err(_) => writeln!(out, "{}", help::STORE_ERROR_MESSAGE)?,
            },
        }

        Ok(Action::Continue)
    }

    fn evaluate(&mut self, query: &crate::ast::Query) -> Result<ResultSet, StoreError> {
        self.engine()?.evaluate(query)
    }

    /// The lazily opened store connection: loaded on the first filtering
    /// query, reused for the rest of the session.
    fn engine(&mut self) -> Result<&Evaluator<MemoryStore>, StoreError> {
        match &mut self.engine {
            Some(engine) => Ok(engine),
            slot => {
                let store = match &self.data_path {
                    Some(path) => MemoryStore::from_path(path)?,
                    None => MemoryStore::seeded()?,
                };
                Ok(slot.insert(Evaluator::new(store)))
            }
        }
    }

    /// The y/n confirmation dialog for `exit`. EOF counts as a yes.
    fn confirm_exit<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
        interactive: bool,
    ) -> Result<bool, CliError> {
        loop {
            writeln!(out, "\nAre you sure you want to exit? (y/n)")?;
            if interactive {
                write!(out, ">>> ")?;
                out.flush()?;
            }

            let mut answer = String::new();
            if input.read_line(&mut answer)? == 0 {
                return Ok(true);
            }
            match answer.trim().to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => writeln!(out, "\nInvalid option.")?,
            }
        }
    }
}
