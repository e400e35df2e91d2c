use std::error::Error;
use std::io::{self, Read, Write};
use clap::{Parser, Subcommand};
use chordshift_core::batch::{self, LineFormat};
use chordshift_core::{Accidental, ShiftArg};

#[derive(Parser,Debug)]
#[command(name = "chordshift")]
#[command(version, about = "Transpose chord symbols and respell their accidentals")]
#[command(
    long_about = "Transpose chord symbols and respell their accidentals.

Examples:
  chordshift transpose F# 2
  chordshift transpose 'Bb/C#' -2 b
  chordshift transpose Eb sharp
  printf 'Fmaj7 1 #\\nEb -5\\n' | chordshift batch
  echo '{\"chord\":\"G13(♭9♯11)\",\"shift\":-1,\"accidental\":\"b\"}' | chordshift batch --json"
)]
struct Cli{
    /// Log filter (RUST_LOG takes precedence when set)
    #[arg(long, global = true, default_value = "warn")]
    log_level : String,

    #[command(subcommand)]
    command : Commands
}

#[derive(Subcommand,Debug)]
enum Commands{
    /// Transpose a single chord
    Transpose{
        chord : String,

        /// Semitone steps, or an accidental token (#, b, sharp, flat, ♯, ♭, 0)
        #[arg(allow_negative_numbers = true)]
        shift : Option<ShiftArg>,

        /// Accidental token (#, b, sharp, flat, ♯, ♭, 0)
        accidental : Option<Accidental>
    },
    /// Transpose one chord per stdin line
    Batch{
        /// Semitone steps (or accidental token) for lines that do not give one
        #[arg(short, long, allow_negative_numbers = true)]
        steps : Option<ShiftArg>,

        /// Accidental for lines that do not give one
        #[arg(short, long)]
        accidental : Option<Accidental>,

        /// Read JSON requests and write JSON results
        #[arg(long)]
        json : bool
    }
}

fn init_tracing(level : &str)->Result<(),Box<dyn Error>>{
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = match EnvFilter::try_from_default_env(){
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e|format!("Invalid log level '{}': {}", level, e))?
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
    Ok(())
}

/// Returns whether every input was transposed.
fn run(command : Commands)->Result<bool,Box<dyn Error>>{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match command{
        Commands::Transpose{chord, shift, accidental} => {
            writeln!(out, "{}", chordshift_core::transpose(&chord, shift, accidental))?;
            Ok(true)
        }
        Commands::Batch{steps, accidental, json} => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            let format = if json { LineFormat::Json } else { LineFormat::Plain };
            let results = batch::process_lines(&input, format, steps, accidental);
            for (_line,outcome) in &results.outcomes{
                if json{
                    writeln!(out, "{}", serde_json::to_string(outcome)?)?;
                }else{
                    writeln!(out, "{}", outcome.result)?;
                }
            }
            for err in &results.errors{
                eprintln!("{}: {}", err, err.detail);
            }
            Ok(results.errors.is_empty())
        }
    }
}

fn main(){
    let cli = Cli::parse();
    if let Err(e) = init_tracing(&cli.log_level){
        eprintln!("{}", e);
        std::process::exit(2);
    }
    match run(cli.command){
        Ok(true) => (),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
