//! Interactive

use std::io::{self, BufRead, Write};

use anyhow::{Context as _, Result};
use clap::Parser;
use rand::rngs::OsRng;

use math::prelude::*;
use sss_core::{ShamirScheme, Share, SharingParams};

use crate::utilities::prompt;

const SECRET_PROMPT: &str = "Enter the secret (integer): ";
const THRESHOLD_PROMPT: &str =
    "Enter the threshold (minimum number of shares required to recover the secret): ";
const SHARE_COUNT_PROMPT: &str = "Enter the total number of shares to generate: ";

#[derive(Parser)]
#[command(
    about("Prompt for a secret, split it, then recover it from typed shares"),
    long_about = None
)]
pub struct Interactive {
    /// Bit length of the generated prime
    #[arg(short, long, default_value_t = DEFAULT_PRIME_BITS)]
    bits: u64,
}

impl Interactive {
    pub fn run(&self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(&mut stdin.lock(), &mut stdout.lock(), &mut OsRng)
    }

    fn run_with<I, O, R>(
        &self,
        input: &mut I,
        output: &mut O,
        rng: &mut R,
    ) -> Result<()>
    where
        I: BufRead,
        O: Write,
        R: SecureRng,
    {
        let secret: BigUint = prompt(input, output, SECRET_PROMPT)?
            .parse()
            .context("the secret must be a non-negative base-10 integer")?;
        let threshold: usize = prompt(input, output, THRESHOLD_PROMPT)?
            .parse()
            .context("the threshold must be a non-negative integer")?;
        let share_count: usize = prompt(input, output, SHARE_COUNT_PROMPT)?
            .parse()
            .context("the share count must be a non-negative integer")?;

        let params = SharingParams::new(threshold, share_count)?;
        let field = PrimeField::new(generate_prime(self.bits, rng)?)?;
        let scheme = ShamirScheme::with_params(params, field);
        writeln!(output, "Prime: {}", scheme.field())?;

        let shares = scheme.split_secret(&secret, rng)?;
        writeln!(output, "Secret: {secret}")?;
        writeln!(output, "Shares:")?;
        for share in &shares {
            writeln!(output, "  ({share})")?;
        }

        let mut selected = Vec::with_capacity(threshold);
        for i in 1..=threshold {
            let line = prompt(
                input,
                output,
                &format!("Enter the {i}th share (format: x,y): "),
            )?;
            let share: Share = line.parse()?;
            selected.push(share);
        }

        let recovered = scheme.reconstruct_secret(&selected)?;
        writeln!(output, "Recovered secret: {recovered}")?;
        Ok(())
    }
}
