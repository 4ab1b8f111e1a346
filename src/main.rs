use std::io::{self, Read};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use gsm7::{Codec, Gsm7Config, Language};

#[derive(Parser)]
#[command(name = "gsm7")]
#[command(about = "Encode, decode and check text in the GSM 7-bit SMS alphabet", long_about = None)]
struct Cli {
    /// National language table set (basic, spanish, portuguese, turkish)
    #[arg(short, long, global = true, default_value = "basic")]
    language: Language,

    /// Pack septets into octets
    #[arg(short, long, global = true)]
    packed: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text and print the bytes as hex
    Encode {
        /// Text to encode (reads from stdin if not provided)
        text: Option<String>,
    },
    /// Decode hex bytes and print the text
    Decode {
        /// Encoded bytes as hex
        hex: String,
    },
    /// List characters or bytes the selected alphabet cannot represent
    Validate {
        /// Text to check (reads from stdin if neither this nor --hex is given)
        text: Option<String>,

        /// Check encoded bytes given as hex instead of text
        #[arg(long, conflicts_with = "text")]
        hex: Option<String>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .init();
}

fn read_text(text: Option<String>) -> io::Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            // Drop the newline a shell pipe usually appends.
            if buf.ends_with('\n') {
                buf.pop();
                if buf.ends_with('\r') {
                    buf.pop();
                }
            }
            Ok(buf)
        }
    }
}

fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let codec = Codec::from_config(Gsm7Config::new(cli.packed, cli.language));
    log::info!("{} using {} tables", codec, cli.language);

    match cli.command {
        Command::Encode { text } => {
            let text = read_text(text)?;
            let encoded = codec.encode(&text)?;
            println!("{}", hex::encode(encoded));
            Ok(true)
        }
        Command::Decode { hex: input } => {
            let data = hex::decode(input.trim())?;
            println!("{}", codec.decode(&data)?);
            Ok(true)
        }
        Command::Validate {
            hex: Some(input), ..
        } => {
            let data = hex::decode(input.trim())?;
            let invalid = codec.invalid_bytes(&data);
            for b in &invalid {
                println!("0x{b:02X}");
            }
            Ok(invalid.is_empty())
        }
        Command::Validate { text, hex: None } => {
            let text = read_text(text)?;
            let invalid = codec.invalid_text(&text);
            for ch in &invalid {
                println!("{ch:?} U+{:04X}", *ch as u32);
            }
            Ok(invalid.is_empty())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}
