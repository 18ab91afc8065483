//! Embedded static assets for the admin UI.

use rust_embed::RustEmbed;

/// The admin single-page app, embedded at compile time.
#[derive(RustEmbed)]
#[folder = "static/"]
pub struct Assets;
