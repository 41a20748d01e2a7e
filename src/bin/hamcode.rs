//! Encode, decode and correct (single bit) a binary code using Hamming code.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use hamcode::ecc::hamming::{correct, decode, encode};
use hamcode::ecc::{format_bits, parse_bits, BitOrder};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    name = "hamcode",
    about = "Encode, decode and correct (single bit) a binary code using Hamming code.",
    arg_required_else_help = true
)]
struct Cli {
    /// Log codec activity to stderr (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the corrected binary code
    Correct(CodeArgs),
    /// Print the encoded data binary using Hamming code
    Encode(CodeArgs),
    /// Print the data binary code inside the input Hamming code
    Decode(CodeArgs),
}

#[derive(Args, Debug)]
struct CodeArgs {
    /// Binary code made of '0' and '1' characters
    binary: String,
    /// Read the data right to left (applies to encode input and decode output)
    #[arg(long)]
    rtl: bool,
}

impl CodeArgs {
    fn order(&self) -> BitOrder {
        if self.rtl {
            BitOrder::RightToLeft
        } else {
            BitOrder::LeftToRight
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

/// Whether a clap error is really a request for help or version output.
fn is_help_request(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}

fn run(command: Command) -> Result<String, hamcode::Error> {
    let output = match command {
        Command::Correct(args) => {
            let codeword = parse_bits(&args.binary)?;
            format_bits(&correct(&codeword).codeword)
        }
        Command::Encode(args) => {
            let mut data = parse_bits(&args.binary)?;
            args.order().apply(&mut data);
            format_bits(&encode(&data))
        }
        Command::Decode(args) => {
            let codeword = parse_bits(&args.binary)?;
            let mut data = decode(&codeword);
            args.order().apply(&mut data);
            format_bits(&data)
        }
    };
    Ok(output)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            // Bare invocation prints usage on stdout
            return match Cli::command().print_help() {
                Ok(()) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            };
        }
        Err(err) => {
            let _ = err.print();
            return if is_help_request(err.kind()) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };

    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Invalid binary code: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(binary: &str, rtl: bool) -> CodeArgs {
        CodeArgs {
            binary: binary.to_string(),
            rtl,
        }
    }

    fn parse_error(argv: &[&str]) -> ErrorKind {
        Cli::try_parse_from(argv.iter().copied()).unwrap_err().kind()
    }

    #[test]
    fn test_encode_and_decode_commands() {
        assert_eq!(run(Command::Encode(args("101", false))).unwrap(), "101101");
        assert_eq!(run(Command::Decode(args("101101", false))).unwrap(), "101");
        assert_eq!(run(Command::Encode(args("", false))).unwrap(), "");
    }

    #[test]
    fn test_right_to_left_option() {
        let codeword = run(Command::Encode(args("1100101", true))).unwrap();
        assert_eq!(codeword, "00110100011");
        assert_eq!(codeword, run(Command::Encode(args("1010011", false))).unwrap());

        assert_eq!(
            run(Command::Decode(args(&codeword, true))).unwrap(),
            "1100101"
        );
        assert_eq!(
            run(Command::Decode(args(&codeword, false))).unwrap(),
            "1010011"
        );
    }

    #[test]
    fn test_correct_prints_only_codeword() {
        assert_eq!(run(Command::Correct(args("0100011", false))).unwrap(), "0110011");
        // Correction always reads left to right
        assert_eq!(run(Command::Correct(args("0100011", true))).unwrap(), "0110011");
        assert_eq!(run(Command::Correct(args("1010101", false))).unwrap(), "1010101");
    }

    #[test]
    fn test_invalid_binary_is_an_error() {
        assert_eq!(
            run(Command::Encode(args("10a", false))),
            Err(hamcode::Error::InvalidBinary {
                index: 2,
                found: 'a'
            })
        );
        assert!(run(Command::Decode(args("012", false))).is_err());
        assert!(run(Command::Correct(args("x", false))).is_err());
    }

    #[test]
    fn test_parse_commands() {
        let cli = Cli::try_parse_from(["hamcode", "encode", "101", "--rtl"]).unwrap();
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Command::Encode(args) => {
                assert_eq!(args.binary, "101");
                assert_eq!(args.order(), BitOrder::RightToLeft);
            }
            other => panic!("unexpected command {:?}", other),
        }

        let cli = Cli::try_parse_from(["hamcode", "-vv", "correct", "0110011"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Correct(_)));
    }

    #[test]
    fn test_help_requests_succeed() {
        assert_eq!(
            parse_error(&["hamcode"]),
            ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
        for argv in [&["hamcode", "help"][..], &["hamcode", "-h"], &["hamcode", "--help"]] {
            assert!(is_help_request(parse_error(argv)), "{:?}", argv);
        }
        assert!(is_help_request(ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand));
    }

    #[test]
    fn test_usage_errors_fail() {
        assert!(matches!(
            parse_error(&["hamcode", "frob", "101"]),
            ErrorKind::InvalidSubcommand | ErrorKind::UnknownArgument
        ));
        assert_eq!(
            parse_error(&["hamcode", "encode"]),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            parse_error(&["hamcode", "encode", "101", "--foo"]),
            ErrorKind::UnknownArgument
        );
        for argv in [
            &["hamcode", "frob", "101"][..],
            &["hamcode", "decode"],
            &["hamcode", "correct", "101", "--foo"],
        ] {
            assert!(!is_help_request(parse_error(argv)), "{:?}", argv);
        }
    }
}
