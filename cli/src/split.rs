//! Split

use anyhow::{Context as _, Result};
use clap::Parser;
use rand::rngs::OsRng;

use math::prelude::*;
use sss_core::ShamirScheme;

use crate::utilities::{print_label, print_title, select_field};

#[derive(Parser)]
#[command(about("Split a secret into shares"), long_about = None)]
pub struct Split {
    /// Secret to split, as a base-10 integer smaller than the prime
    #[arg(short, long)]
    secret: BigUint,

    /// Minimum number of shares required to recover the secret
    #[arg(short, long)]
    threshold: usize,

    /// Total number of shares to generate
    #[arg(short = 'n', long)]
    shares: usize,

    /// Bit length of the generated prime
    #[arg(short, long, default_value_t = DEFAULT_PRIME_BITS)]
    bits: u64,

    /// Use this prime instead of generating one
    #[arg(short, long, conflicts_with = "bits")]
    prime: Option<BigUint>,
}

impl Split {
    pub fn split_secret(&self) -> Result<()> {
        print_title("Splitting secret.");
        let field = select_field(self.prime.as_ref(), self.bits)?;
        let scheme = ShamirScheme::new(self.threshold, self.shares, field)?;

        let shares = scheme
            .split_secret(&self.secret, &mut OsRng)
            .with_context(|| {
                format!("cannot split with prime {}", scheme.field())
            })?;

        print_label("Prime: ");
        println!("{}", scheme.field());
        print_label("Shares:\n");
        for share in &shares {
            println!("{share}");
        }
        Ok(())
    }
}
