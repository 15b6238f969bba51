//! Fixed values shared by the download pipeline.

use std::time::Duration;

/// Name used in user-facing messages.
pub const CLI_NAME: &str = "g-font/cli";

/// File name of the rewritten stylesheet, written at the destination root.
pub const INDEX_CSS: &str = "index.css";

/// User agent sent with every request.
///
/// Google Fonts picks the font format from the user agent. A non-browser agent
/// gets TrueType sources.
pub const USER_AGENT: &str = concat!("gfont/", env!("CARGO_PKG_VERSION"));

/// Total time allowed for one request, body included.
///
/// `None` lets a slow download run to completion instead of reqwest's
/// 30 second default.
pub const REQUEST_TIMEOUT: Option<Duration> = None;
