//! Output helpers shared by the subcommands.

use std::io::{BufRead, Write};

use anyhow::{bail, Context as _, Result};
use colored::Colorize as _;
use rand::rngs::OsRng;

use math::prelude::*;

pub(crate) fn print_title(title: &str) {
    eprintln!("{}", title.green().bold());
}

pub(crate) fn print_label(label: &str) {
    eprint!("{}", label.blue());
}

/// Use the caller's modulus after a primality check, or generate a fresh
/// prime of `bits` bits.
pub(crate) fn select_field(
    prime: Option<&BigUint>,
    bits: u64,
) -> Result<PrimeField> {
    let mut rng = OsRng;
    match prime {
        Some(modulus) => PrimeField::new_checked(modulus.clone(), &mut rng)
            .context("rejected --prime"),
        None => {
            let modulus = generate_prime(bits, &mut rng)
                .context("failed to generate a prime")?;
            Ok(PrimeField::new(modulus)?)
        }
    }
}

/// Write `message`, then read one trimmed line from `input`.
pub(crate) fn prompt<R, W>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("unexpected end of input");
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn prompt_reads_a_trimmed_line() {
        let mut input = Cursor::new("  42 \nrest\n");
        let mut output = Vec::new();
        let line = prompt(&mut input, &mut output, "Value: ").unwrap();
        assert_eq!(line, "42");
        assert_eq!(output, b"Value: ");
    }

    #[test]
    fn prompt_fails_on_eof() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert!(prompt(&mut input, &mut output, "Value: ").is_err());
    }

    #[test]
    fn select_field_checks_given_prime() {
        assert!(select_field(Some(&BigUint::from(221u32)), 128).is_err());
        let field = select_field(Some(&BigUint::from(223u32)), 128).unwrap();
        assert_eq!(field.modulus(), &BigUint::from(223u32));
    }

    #[test]
    fn select_field_generates_requested_size() {
        let field = select_field(None, 64).unwrap();
        assert_eq!(field.bits(), 64);
    }
}
