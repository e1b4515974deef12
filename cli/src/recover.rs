//! Recover

use anyhow::Result;
use clap::Parser;
use rand::rngs::OsRng;

use math::prelude::*;
use sss_core::{recovery::recover, Share};

use crate::utilities::{print_label, print_title};

#[derive(Parser)]
#[command(about("Recover a secret from shares"), long_about = None)]
pub struct Recover {
    /// Prime modulus the shares were generated with
    #[arg(short, long)]
    prime: BigUint,

    /// Number of shares the secret was split for
    #[arg(short, long)]
    threshold: usize,

    /// One share as `x,y`; repeat for each share
    #[arg(short, long = "share", value_name = "X,Y", required = true)]
    shares: Vec<Share>,
}

impl Recover {
    pub fn recover_secret(&self) -> Result<()> {
        print_title("Recovering secret.");
        let field = PrimeField::new_checked(self.prime.clone(), &mut OsRng)?;
        let secret = recover(&self.shares, self.threshold, &field)?;

        print_label("Secret: ");
        println!("{secret}");
        Ok(())
    }
}
