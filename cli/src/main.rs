//! # Threshold secret sharing command line interface
//!
//! ```text
//! Usage: sss [COMMAND]
//!
//! Commands:
//!   split        Split a secret into shares
//!   recover      Recover a secret from shares
//!   prime        Generate a probable prime modulus
//!   interactive  Prompt for a secret, split it, then recover it from typed shares
//!   help         Print this message or the help of the given subcommand(s)
//! ```
//!
//! ## Split
//!
//! ```text
//! $ sss split --secret 1234 --threshold 3 --shares 5
//! Splitting secret.
//! Prime: 340282366920938463463374607431768211297
//! Shares:
//! 1,...
//! 2,...
//! ```
//!
//! ## Recover
//!
//! ```text
//! $ sss recover --prime 340282366920938463463374607431768211297 -t 3 \
//!     --share 1,... --share 3,... --share 5,...
//! Recovering secret.
//! Secret: 1234
//! ```
//!
//! Status lines go to stderr, values to stdout.

use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize as _;

use interactive::Interactive;
use prime::Prime;
use recover::Recover;
use split::Split;

mod interactive;
mod prime;
mod recover;
mod split;
mod utilities;

#[derive(Parser)]
#[command(version, about("Threshold secret sharing over a prime field"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Split(Split),
    Recover(Recover),
    Prime(Prime),
    Interactive(Interactive),
}

fn main() {
    let cli = Cli::parse();

    let res = match &cli.command {
        Some(Commands::Split(split)) => split.split_secret(),
        Some(Commands::Recover(recover)) => recover.recover_secret(),
        Some(Commands::Prime(prime)) => prime.print_prime(),
        Some(Commands::Interactive(interactive)) => interactive.run(),
        None => {
            let _ = Cli::command().print_help();
            Ok(())
        }
    };

    if let Err(err) = res {
        eprintln!("{}", format!("{err:#}").red());
        std::process::exit(1);
    }
}
