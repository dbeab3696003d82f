//! Contains the command-line driver that scans a Lox source file and prints its tokens.

use std::{
    fmt::Display,
    fs::File,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

pub use clap::Parser;
use lox_base::{
    diagnostic::{Counter, Handler},
    log::{Message, Severity},
    source_file::{self, SourceFile},
};
use lox_lexical::{scanner::ScanEvent, token::Token, token_stream::TokenStream};

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "lox",
    about = "Scans a Lox source file and lists its tokens.",
    author = "66011245@kmitl.ac.th"
)]
pub struct Argument {
    /// The input file to scan.
    pub file: PathBuf,

    /// Prints every scanning step to the standard error stream.
    #[clap(long = "trace")]
    pub trace: bool,

    /// Only prints the lexical errors, not the token listing.
    #[clap(short = 'q', long = "quiet")]
    pub quiet: bool,
}

/// A struct that implements [`Handler`] but prints all the message to the standard error stream.
#[derive(Debug, Default)]
struct Printer {
    printed: Counter,
}

impl Printer {
    fn printed(&self) -> usize { self.printed.count() }
}

impl<E: Display> Handler<E> for Printer {
    fn receive(&self, error: E) {
        eprintln!("{error}");
        self.printed.receive(());
    }
}

/// Forwards the scan events to the standard error stream.
#[derive(Debug, Clone, Copy)]
struct Tracer;

impl Handler<ScanEvent> for Tracer {
    fn receive(&self, event: ScanEvent) { eprintln!("{}", Message::new(Severity::Info, event)); }
}

/// Writes one line per token: the line number (or `|` when it repeats the previous token's
/// line), the token kind and the lexeme in quotes.
///
/// # Errors
/// Any error returned by `out`.
pub fn write_listing(out: &mut impl Write, tokens: &[Token]) -> io::Result<()> {
    let mut previous_line = None;

    for token in tokens {
        if previous_line == Some(token.line) {
            write!(out, "   | ")?;
        } else {
            write!(out, "{:4} ", token.line)?;
            previous_line = Some(token.line);
        }

        let kind: &'static str = token.kind.into();
        writeln!(out, "{kind:<13} '{}'", token.lexeme)?;
    }

    Ok(())
}

fn report(argument: &Argument, error: impl Display) -> ExitCode {
    eprintln!(
        "{}",
        Message::new(
            Severity::Error,
            format!("{}: {error}", argument.file.display())
        )
    );

    ExitCode::FAILURE
}

/// Runs the program with the given arguments.
pub fn run(argument: Argument) -> ExitCode {
    let source_file = match File::open(&argument.file)
        .map_err(source_file::Error::from)
        .and_then(|file| SourceFile::load(file, argument.file.clone()))
    {
        Ok(source_file) => source_file,
        Err(error) => return report(&argument, error),
    };

    let printer = Printer::default();

    let token_stream = if argument.trace {
        TokenStream::tokenize_with_trace(&source_file, &printer, Tracer)
    } else {
        TokenStream::tokenize(&source_file, &printer)
    };

    if !argument.quiet {
        if let Err(error) = write_listing(&mut io::stdout().lock(), &token_stream) {
            return report(&argument, error);
        }
    }

    match printer.printed() {
        0 => ExitCode::SUCCESS,
        count => report(&argument, format!("aborting due to {count} lexical error(s)")),
    }
}
