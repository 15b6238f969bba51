//! Self-host Google Fonts: download the font files a CSS API response
//! references, rewrite the stylesheet to point at them, and bundle license
//! notices alongside.

pub mod config;
pub mod css;
pub mod error;
pub mod fetch;
pub mod license;
pub mod pipeline;
pub mod transport;

pub use css::{FontFile, FontFiles, extract_font_faces};
pub use error::{Error, Result};
pub use license::{COPYRIGHTS, Copyright, License, LicenseOutcome, attach_license};
pub use pipeline::{Pipeline, Summary, download};
pub use transport::{HttpResponse, HttpTransport, Transport};
