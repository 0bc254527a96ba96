use std::io::Write;

use secrecy::ExposeSecret;

use crate::store::CredentialEntry;

const MASK: &str = "********";

/// One line per entry: favorite marker, name, icon, and the secret (or a mask).
pub fn entries<W: Write>(out: &mut W, entries: &[CredentialEntry], mask: bool) -> std::io::Result<()> {
    if entries.is_empty() {
        writeln!(out, "No entries.")?;
        return Ok(());
    }
    let width = entries.iter().map(|e| e.name.chars().count()).max().unwrap_or(0);
    for entry in entries {
        let marker = if entry.is_favorite { '*' } else { ' ' };
        let secret = if mask {
            MASK
        } else {
            entry.secret.expose_secret().as_str()
        };
        writeln!(
            out,
            "{} {:<width$}  [{}]  {}",
            marker,
            entry.name,
            entry.icon.as_str(),
            secret,
            width = width
        )?;
    }
    Ok(())
}

/// Full detail for a single entry, secret included.
pub fn detail<W: Write>(out: &mut W, entry: &CredentialEntry) -> std::io::Result<()> {
    writeln!(out, "Name:     {}", entry.name)?;
    writeln!(out, "Icon:     {}", entry.icon.as_str())?;
    writeln!(out, "Favorite: {}", if entry.is_favorite { "yes" } else { "no" })?;
    writeln!(out, "Password: {}", entry.secret.expose_secret())?;
    Ok(())
}
