use colored::Colorize;
use std::{io, path::PathBuf};

/// Expands `~` and environment variables in a user supplied path, and checks
/// that it names an existing file. Errors come back as printable messages.
pub fn resolve_file(path: &str) -> Result<PathBuf, String> {
    let expanded = shellexpand::full(path).map_err(|e| {
        format!(
            "{}\n{}",
            "Could not expand the given path:".red(),
            e.to_string().red()
        )
    })?;
    let resolved = PathBuf::from(expanded.into_owned())
        .canonicalize()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => format!("{} does not exist.", path),
            io::ErrorKind::PermissionDenied => format!("Permission denied for {}", path),
            _ => e.to_string(),
        })?;
    if !resolved.is_file() {
        return Err(format!("{} is not a file.", path));
    }
    Ok(resolved)
}
