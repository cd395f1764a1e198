use std::io::BufRead;

use anyhow::{Context, bail};
use secrecy::SecretString;

/// Read the new password from the first line of `reader`.
///
/// Only the line terminator is stripped; the rest is kept byte for byte.
///
/// # Errors
///
/// Fails if the input cannot be read or is closed before any line.
pub fn read_password(reader: &mut impl BufRead) -> anyhow::Result<SecretString> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    if read == 0 {
        bail!("no password on stdin");
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(SecretString::from(line))
}
