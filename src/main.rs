use clap::{Parser, Subcommand, ValueEnum};
use log::error;
use radixcalc::converter::Conversion;
use radixcalc::math::{base::NumberBase, bmi::Bmi};
use radixcalc::{egui_frontend, term_frontend};
use std::process::ExitCode;

#[derive(Parser)]
#[command(version, about = "Convert numbers between binary, octal, decimal and hexadecimal")]
pub struct Args {
    #[arg(short, long, value_enum, default_value_t = Frontend::Egui)]
    frontend: Frontend,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Frontend {
    Egui,
    Term,
}

#[derive(Subcommand)]
enum Command {
    /// Print a number in all four bases
    Convert {
        /// Base of VALUE (b, o, d, x). Without it a 0b/0o/0x prefix decides, else decimal
        #[arg(long)]
        from: Option<NumberBase>,
        value: String,
    },
    /// Body-mass index from weight and height
    Bmi {
        #[arg(long, help = "weight in kilograms")]
        weight: f64,
        #[arg(long, help = "height in centimeters")]
        height: f64,
    },
}

/// Output of a one-shot subcommand, or the message to fail with.
fn run(command: Command) -> Result<String, String> {
    match command {
        Command::Convert { from, value } => {
            let conversion = match from {
                Some(base) => Conversion::parse(base, &value),
                None => Conversion::detect(&value),
            };
            conversion.map(|c| c.to_string()).map_err(|e| e.to_string())
        },
        Command::Bmi { weight, height } => {
            Bmi::from_metric(weight, height).map(|b| format!("{b}\n")).map_err(|e| e.to_string())
        },
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let result = match args.command {
        Some(command) => run(command).map(|out| print!("{out}")),
        None => match args.frontend {
            Frontend::Egui => egui_frontend::egui_main().map_err(|e| e.to_string()),
            Frontend::Term => term_frontend::crossterm_main().map_err(|e| e.to_string()),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        },
    }
}
