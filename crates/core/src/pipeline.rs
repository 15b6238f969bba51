//! The `download` command: fetch, extract, download, rewrite, and write `index.css`.

use std::{
    fmt::Display,
    fs::{create_dir_all, write},
    io::{Write, stdout},
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use crate::{
    config::INDEX_CSS,
    css::{FontFile, extract_font_faces},
    error::{Error, Result},
    fetch::{download_font, fetch_stylesheet},
    license::{LicenseOutcome, attach_license},
    transport::{HttpTransport, Transport},
};

/// Counts from a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Unique font files referenced by the stylesheet.
    pub fonts: usize,
    pub downloaded: usize,
    pub bytes: u64,
    pub licenses_written: usize,
}

/// Self-host the stylesheet at `api_url` into `dest` over HTTPS.
///
/// Progress and failures are reported on stdout.
pub fn download(dest: &Path, api_url: &str) -> Result<Summary> {
    let transport = match HttpTransport::new() {
        Ok(transport) => transport,
        Err(e) => {
            println!("{e}");
            return Err(e);
        }
    };
    Pipeline::new(&transport, dest).run(api_url)
}

/// One `download` invocation against a destination directory.
pub struct Pipeline<'a> {
    transport: &'a dyn Transport,
    dest: PathBuf,
    out: Box<dyn Write + 'a>,
}

impl<'a> Pipeline<'a> {
    /// Pipeline reporting to stdout.
    pub fn new(transport: &'a dyn Transport, dest: impl Into<PathBuf>) -> Self {
        Self { transport, dest: dest.into(), out: Box::new(stdout()) }
    }

    /// Send progress and failure messages to `out` instead of stdout.
    pub fn with_output(mut self, out: impl Write + 'a) -> Self {
        self.out = Box::new(out);
        self
    }

    /// Run the pipeline.
    ///
    /// Nothing is written if the stylesheet cannot be fetched or has no usable
    /// `@font-face` blocks. Downloads run in stylesheet order and stop at the
    /// first failure; `index.css` is still written with the rewrites made so
    /// far, and the failure is returned as [`Error::Aborted`]. Every failure is
    /// reported on the output before it is returned.
    pub fn run(&mut self, api_url: &str) -> Result<Summary> {
        let result = self.execute(api_url);
        if let Err(e) = &result
            && !matches!(e, Error::Aborted(_))
        {
            self.say(e);
        }
        result
    }

    fn execute(&mut self, api_url: &str) -> Result<Summary> {
        info!("Fetching stylesheet {api_url}");
        let mut css = fetch_stylesheet(self.transport, api_url)?;
        let files = extract_font_faces(&css)?;
        info!("Found {} font files", files.len());

        create_dir_all(&self.dest).map_err(|source| Error::io(&self.dest, source))?;

        let mut summary = Summary { fonts: files.len(), ..Summary::default() };
        let mut failure = None;

        for file in &files {
            if let Err(e) = self.download_one(file, &mut css, &mut summary) {
                self.say(&e);
                self.say("Operation aborted.");
                failure = Some(e);
                break;
            }
        }

        let index = self.dest.join(INDEX_CSS);
        write(&index, &css).map_err(|source| Error::io(&index, source))?;
        self.say(format_args!("Successfully generated {INDEX_CSS}"));

        match failure {
            Some(e) => Err(Error::Aborted(Box::new(e))),
            None => {
                info!(
                    "Downloaded {} files ({} bytes), wrote {} license files",
                    summary.downloaded, summary.bytes, summary.licenses_written
                );
                Ok(summary)
            }
        }
    }

    /// Download `file`, point the stylesheet at the local copy, then attach its license.
    fn download_one(&mut self, file: &FontFile, css: &mut String, summary: &mut Summary) -> Result<()> {
        let family_dir = self.dest.join(&file.font_name);
        create_dir_all(&family_dir).map_err(|source| Error::io(&family_dir, source))?;

        let bytes = download_font(self.transport, &file.url, &family_dir.join(&file.file_name))?;
        *css = file.rewrite(css);
        summary.downloaded += 1;
        summary.bytes += bytes;
        self.say(format_args!("Successfully downloaded {}.", file.url));

        match attach_license(&family_dir, &file.font_name)? {
            LicenseOutcome::Unknown => self.say(format_args!(
                "The font {} doesn't have a copyright information. No copyright notice generated for the font.",
                file.font_name
            )),
            LicenseOutcome::Existing(path) => debug!("Keeping {}", path.display()),
            LicenseOutcome::Written(path) => {
                debug!("Wrote {}", path.display());
                summary.licenses_written += 1;
            }
        }
        Ok(())
    }

    fn say(&mut self, line: impl Display) {
        if let Err(e) = writeln!(self.out, "{line}") {
            warn!("Failed to write progress message: {e}");
        }
    }
}
