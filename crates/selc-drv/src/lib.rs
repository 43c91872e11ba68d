//! selc-drv - Compiler Driver
//!
//! The driver wires the front end together: it parses command-line
//! arguments, loads source files, runs the lexer over each one, renders a
//! token dump, and prints collected diagnostics.

use std::fmt::Write as _;
use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use selc_lex::{Token, TokenBuffer};
use selc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
use selc_util::messages::Message;
use selc_util::span::SourceMap;
use selc_util::ColorConfig;

/// Warning verbosity, selected with `--warn {all|extra}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WarnLevel {
    /// Standard warnings
    #[default]
    All,
    /// Standard warnings plus pedantic ones
    Extra,
}

/// Configuration for one driver invocation
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Source files named on the command line
    pub input_files: Vec<PathBuf>,
    /// Inline source passed with `--code`
    pub code: Option<String>,
    /// Destination of the token dump; stdout when absent
    pub output_file: Option<PathBuf>,
    /// Warning verbosity
    pub warn: WarnLevel,
    /// Verbose progress output on stderr
    pub verbose: bool,
    /// Suppress ANSI colors in diagnostics
    pub no_color: bool,
    /// `--help` was requested
    pub help: bool,
    /// `--version` was requested
    pub version: bool,
}

/// Parse command line arguments
pub fn parse_args() -> Result<Config, String> {
    parse_arg_list(std::env::args().skip(1))
}

/// Parse an explicit argument list (testable form of [`parse_args`])
///
/// Long options taking a value accept both `--opt value` and `--opt=value`.
pub fn parse_arg_list(mut args: impl Iterator<Item = String>) -> Result<Config, String> {
    let mut config = Config::default();

    while let Some(arg) = args.next() {
        let (name, inline_value) = split_long_opt(&arg);

        if arg == "--help" || arg == "-h" {
            config.help = true;
            return Ok(config);
        } else if arg == "--version" || arg == "-V" {
            config.version = true;
            return Ok(config);
        } else if arg == "--verbose" || arg == "-v" {
            config.verbose = true;
        } else if arg == "--no-color" {
            config.no_color = true;
        } else if name == "--out" || arg == "-o" {
            let value = take_value(name, inline_value, &mut args)?;
            config.output_file = Some(PathBuf::from(value));
        } else if name == "--code" {
            let value = take_value(name, inline_value, &mut args)?;
            config.code = Some(value);
        } else if name == "--warn" {
            let value = take_value(name, inline_value, &mut args)?;
            config.warn = match value.to_ascii_lowercase().as_str() {
                "all" => WarnLevel::All,
                "extra" => WarnLevel::Extra,
                other => return Err(format!("unknown warn level: {}", other)),
            };
        } else if arg.starts_with('-') && arg.len() > 1 {
            return Err(format!("unknown option: {}", arg));
        } else {
            config.input_files.push(PathBuf::from(arg));
        }
    }

    Ok(config)
}

/// Split `--name=value` into (`--name`, `Some(value)`); other shapes pass
/// through with no inline value.
fn split_long_opt(arg: &str) -> (&str, Option<&str>) {
    if !arg.starts_with("--") {
        return (arg, None);
    }
    match arg.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (arg, None),
    }
}

fn take_value(
    name: &str,
    inline: Option<&str>,
    args: &mut impl Iterator<Item = String>,
) -> Result<String, String> {
    if let Some(value) = inline {
        return Ok(value.to_string());
    }
    args.next()
        .ok_or_else(|| format!("missing argument for {}", name))
}

/// Print help message
pub fn print_help() {
    println!("Selena Compiler v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: selc [OPTIONS] <input files>");
    println!();
    println!("Options:");
    println!("  -h, --help           Print this help message");
    println!("  -V, --version        Print version information");
    println!("  -v, --verbose        Enable verbose output");
    println!("  -o, --out <FILE>     Write the token dump to FILE");
    println!("  --code <SOURCE>      Lex SOURCE instead of reading a file");
    println!("  --warn <LEVEL>       Warning level: all, extra");
    println!("  --no-color           Disable colored diagnostics");
    println!();
    println!("Examples:");
    println!("  selc hello.sln               Lex hello.sln and dump its tokens");
    println!("  selc --code 'var x = 1'      Lex an inline snippet");
    println!("  selc -o tokens.txt hello.sln Write the dump to tokens.txt");
}

/// Print version
pub fn print_version() {
    println!("selc {}", env!("CARGO_PKG_VERSION"));
}

/// One driver invocation: configuration, loaded sources, and diagnostics
pub struct Session {
    /// Invocation configuration
    pub config: Config,
    /// Loaded source files
    pub sources: SourceMap,
    /// Collected diagnostics
    pub handler: Handler,
}

impl Session {
    /// Create a session with no sources loaded yet
    pub fn new(config: Config) -> Self {
        Self {
            config,
            sources: SourceMap::new(),
            handler: Handler::new(),
        }
    }

    /// Load `--code` and every named input file into the source map
    pub fn load_inputs(&mut self) -> Result<()> {
        if let Some(code) = self.config.code.clone() {
            self.sources.add_file("<code>", code);
        }

        for path in self.config.input_files.clone() {
            match std::fs::read_to_string(&path) {
                Ok(content) => {
                    self.sources.add_file(path.display().to_string(), content);
                }
                Err(err) => {
                    DiagnosticBuilder::error(format!(
                        "{}: {}",
                        Message::UnreadableInput.text(),
                        path.display()
                    ))
                    .code(DiagnosticCode::E_UNREADABLE_INPUT)
                    .emit(&self.handler);
                    return Err(err)
                        .with_context(|| format!("{}: {}", Message::UnreadableInput.text(), path.display()));
                }
            }
        }

        Ok(())
    }

    /// Lex every loaded source and write the token dump
    pub fn run(&self) -> Result<()> {
        let mut dump = String::new();

        for file in self.sources.iter() {
            if self.config.verbose {
                eprintln!("[verbose] Lexing: {}", file.name());
            }

            let mut buffer = TokenBuffer::new();
            selc_lex::generate(Some(file.content()), Some(&mut buffer), Some(&self.handler))
                .with_context(|| format!("lexing {}", file.name()))?;

            self.check_stream(file.name(), &buffer);
            render_tokens(&mut dump, file.name(), &buffer);
        }

        match &self.config.output_file {
            Some(path) => std::fs::write(path, dump)
                .with_context(|| format!("writing {}", path.display()))?,
            None => print!("{}", dump),
        }

        Ok(())
    }

    /// Driver-level policy over the finished stream: unknown tokens are
    /// the lexer's recoverable leftovers, reported here as warnings.
    fn check_stream(&self, name: &str, buffer: &TokenBuffer) {
        let unknown_count = buffer
            .iter()
            .filter(|t| matches!(t, Token::Unknown))
            .count();
        if unknown_count > 0 {
            DiagnosticBuilder::warning(format!(
                "{}: {} ({} unknown)",
                name,
                Message::UnknownTokens.text(),
                unknown_count
            ))
            .code(DiagnosticCode::W_UNKNOWN_TOKENS)
            .emit(&self.handler);
        }

        if self.config.warn == WarnLevel::Extra && buffer.len() == 1 {
            DiagnosticBuilder::warning(format!("{}: no tokens produced", name)).emit(&self.handler);
        }
    }

    /// Print collected diagnostics to stderr
    pub fn print_diagnostics(&self, colors: &ColorConfig) {
        for diag in self.handler.diagnostics() {
            let label = match diag.code {
                Some(code) => format!("{}[{}]", diag.level, code),
                None => diag.level.to_string(),
            };
            eprintln!(
                "{}: {}",
                colors.paint_bold(diag.level.color(), &label),
                diag.message
            );
            for note in &diag.notes {
                eprintln!("  note: {}", note);
            }
            for help in &diag.helps {
                eprintln!("  help: {}", help);
            }
        }
    }
}

/// Append the dump of one file's tokens
fn render_tokens(out: &mut String, name: &str, buffer: &TokenBuffer) {
    let _ = writeln!(out, "; {} ({} tokens)", name, buffer.len());
    for (index, token) in buffer.iter().enumerate() {
        let _ = writeln!(out, "{:>5}  {:?}", index, token);
    }
}

/// Driver entry point: parse arguments, load inputs, lex, report
pub fn main() -> Result<()> {
    let config = parse_args().map_err(anyhow::Error::msg)?;

    if config.help {
        print_help();
        return Ok(());
    }
    if config.version {
        print_version();
        return Ok(());
    }
    if config.input_files.is_empty() && config.code.is_none() {
        bail!("{}", Message::NoInputFiles.text());
    }

    let color_enabled = std::io::stderr().is_terminal() && !config.no_color;
    let colors = ColorConfig::new(color_enabled);

    let mut session = Session::new(config);
    let result = session.load_inputs().and_then(|_| session.run());
    session.print_diagnostics(&colors);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, String> {
        parse_arg_list(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_empty() {
        let config = parse(&[]).unwrap();
        assert!(config.input_files.is_empty());
        assert!(config.code.is_none());
        assert_eq!(config.warn, WarnLevel::All);
    }

    #[test]
    fn test_parse_files_and_flags() {
        let config = parse(&["-v", "a.sln", "b.sln"]).unwrap();
        assert!(config.verbose);
        assert_eq!(config.input_files.len(), 2);
    }

    #[test]
    fn test_parse_code_both_forms() {
        let config = parse(&["--code", "var x"]).unwrap();
        assert_eq!(config.code.as_deref(), Some("var x"));
        let config = parse(&["--code=var x"]).unwrap();
        assert_eq!(config.code.as_deref(), Some("var x"));
    }

    #[test]
    fn test_parse_out() {
        let config = parse(&["-o", "dump.txt", "a.sln"]).unwrap();
        assert_eq!(config.output_file, Some(PathBuf::from("dump.txt")));
        let config = parse(&["--out=dump.txt", "a.sln"]).unwrap();
        assert_eq!(config.output_file, Some(PathBuf::from("dump.txt")));
    }

    #[test]
    fn test_parse_warn_levels() {
        assert_eq!(parse(&["--warn", "all"]).unwrap().warn, WarnLevel::All);
        assert_eq!(parse(&["--warn", "extra"]).unwrap().warn, WarnLevel::Extra);
        assert_eq!(parse(&["--warn=EXTRA"]).unwrap().warn, WarnLevel::Extra);
        assert!(parse(&["--warn", "everything"]).is_err());
    }

    #[test]
    fn test_parse_missing_value() {
        assert!(parse(&["--code"]).is_err());
        assert!(parse(&["-o"]).is_err());
    }

    #[test]
    fn test_parse_unknown_option() {
        assert!(parse(&["--frobnicate"]).is_err());
        assert!(parse(&["-z"]).is_err());
    }

    #[test]
    fn test_parse_help_short_circuits() {
        let config = parse(&["--help", "--frobnicate"]).unwrap();
        assert!(config.help);
    }

    #[test]
    fn test_session_lexes_inline_code() {
        let config = parse(&["--code", "var x = $"]).unwrap();
        let mut session = Session::new(config);
        session.load_inputs().unwrap();
        session.run().unwrap();
        // The unknown byte surfaces as a warning, not an error.
        assert_eq!(session.handler.warning_count(), 1);
        assert!(!session.handler.has_errors());
    }

    #[test]
    fn test_session_extra_warns_on_empty_input() {
        let config = parse(&["--warn", "extra", "--code", ""]).unwrap();
        let mut session = Session::new(config);
        session.load_inputs().unwrap();
        session.run().unwrap();
        assert_eq!(session.handler.warning_count(), 1);
    }

    #[test]
    fn test_session_missing_file_reports_diagnostic() {
        let config = parse(&["definitely/not/here.sln"]).unwrap();
        let mut session = Session::new(config);
        assert!(session.load_inputs().is_err());
        assert!(session.handler.has_errors());
    }

    #[test]
    fn test_render_tokens_format() {
        let mut buffer = TokenBuffer::new();
        buffer.push(Token::Var).unwrap();
        buffer.push(Token::Eof).unwrap();
        let mut out = String::new();
        render_tokens(&mut out, "<code>", &buffer);
        assert!(out.contains("; <code> (2 tokens)"));
        assert!(out.contains("Var"));
        assert!(out.contains("Eof"));
    }
}
