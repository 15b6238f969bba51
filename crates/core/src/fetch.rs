//! Stylesheet and font file retrieval.

use std::{
    fs::{File, remove_file},
    io::{self, Read},
    path::Path,
};

use log::{debug, warn};

use crate::{
    error::{Error, Result},
    transport::Transport,
};

const HTTP_OK: u16 = 200;

/// Fetch the stylesheet at `url` and return its body as text.
///
/// Any status other than 200 fails with [`Error::StylesheetStatus`] and the body
/// is left unread.
pub fn fetch_stylesheet(transport: &dyn Transport, url: &str) -> Result<String> {
    let response = transport.get(url)?;
    if response.status != HTTP_OK {
        return Err(Error::StylesheetStatus { status: response.status });
    }

    let mut body = String::new();
    let mut reader = response.body;
    reader
        .read_to_string(&mut body)
        .map_err(|source| Error::Read { url: url.to_string(), source })?;
    debug!("Fetched stylesheet ({} bytes) from {url}", body.len());
    Ok(body)
}

/// Stream the font at `url` into `dest`, returning the number of bytes written.
///
/// The destination file is only created once the server answers 200. If the
/// transfer fails midway the partial file is removed.
pub fn download_font(transport: &dyn Transport, url: &str, dest: &Path) -> Result<u64> {
    let response = transport.get(url)?;
    if response.status != HTTP_OK {
        return Err(Error::FontStatus { url: url.to_string(), status: response.status });
    }

    let mut file = File::create(dest).map_err(|source| Error::io(dest, source))?;
    let mut body = response.body;
    match io::copy(&mut body, &mut file) {
        Ok(bytes) => {
            debug!("Wrote {bytes} bytes to {}", dest.display());
            Ok(bytes)
        }
        Err(source) => {
            drop(file);
            if let Err(e) = remove_file(dest) {
                warn!("Failed to remove partial file {}: {e}", dest.display());
            }
            Err(Error::Transfer { url: url.to_string(), source })
        }
    }
}
