use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::{
    constants::STDIN_INDICATOR,
    error::{Error, Result},
};

/// Reads the template named by `source`, or standard input when it is `-`.
pub fn read_template(source: &str) -> Result<String> {
    if source == STDIN_INDICATOR {
        log::debug!("Reading template from stdin");
        return read_from(std::io::stdin());
    }
    log::debug!("Reading template from '{source}'");
    std::fs::read_to_string(source).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::TemplateNotFound { path: source.to_string() },
        _ => Error::IoError(e),
    })
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}

/// Writes rendered output verbatim to `dest`, or to stdout when it is `None`.
pub fn write_output(content: &str, dest: Option<&Path>) -> Result<()> {
    match dest {
        Some(path) => write_file(content, path),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush().map_err(Error::IoError)
        }
    }
}

pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    log::debug!("Writing output to '{}'", dest_path.display());
    std::fs::write(dest_path, content).map_err(Error::IoError)
}
