//! Prime generation

use anyhow::Result;
use clap::Parser;
use rand::rngs::OsRng;

use math::prelude::*;

use crate::utilities::{print_label, print_title};

#[derive(Parser)]
#[command(about("Generate a probable prime modulus"), long_about = None)]
pub struct Prime {
    /// Bit length of the prime
    #[arg(short, long, default_value_t = DEFAULT_PRIME_BITS)]
    bits: u64,
}

impl Prime {
    pub fn print_prime(&self) -> Result<()> {
        print_title("Generating prime.");
        let prime = generate_prime(self.bits, &mut OsRng)?;
        print_label("Prime: ");
        println!("{prime}");
        Ok(())
    }
}
