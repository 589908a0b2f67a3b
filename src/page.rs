//! # Page Abstractions
//!
//! The review site owns the markup; this crate only pushes state changes at
//! it. [`Surface`] is that one-way projection, [`Navigator`] stands in for
//! the browser location. Both contracts are total: a page state without the
//! next-step button or the loading indicator swallows the call instead of
//! failing.

use tracing::{debug, info};

use crate::utils::url_path;

/// One-way projection of review state onto the rendered page.
pub trait Surface {
    /// Switch a card into its validated visual state.
    fn mark_validated(&mut self, item_id: &str);

    /// Show or hide a card's detail body.
    fn set_content_visible(&mut self, item_id: &str, visible: bool);

    /// Enable or disable the next-step control, if the page has one.
    fn set_next_step_enabled(&mut self, enabled: bool);

    /// Enable or disable the importation confirm/cancel controls.
    fn set_confirm_enabled(&mut self, enabled: bool);

    /// Show or hide the importation loading indicator.
    fn set_loading_visible(&mut self, visible: bool);
}

/// Browser location stand-in.
pub trait Navigator {
    fn current_url(&self) -> String;

    fn current_path(&self) -> String;

    /// Navigate, keeping the current page in history.
    fn assign(&mut self, url: &str);

    /// Navigate, replacing the current history entry.
    fn replace(&mut self, url: &str);

    fn reload(&mut self);
}

/// Projects every transition into the log. Used by the driver binary and by
/// embedders that have no page to paint.
pub struct ConsoleSurface;

impl Surface for ConsoleSurface {
    fn mark_validated(&mut self, item_id: &str) {
        debug!(item_id, "card validated");
    }

    fn set_content_visible(&mut self, item_id: &str, visible: bool) {
        debug!(item_id, visible, "card content toggled");
    }

    fn set_next_step_enabled(&mut self, enabled: bool) {
        info!(enabled, "next step control");
    }

    fn set_confirm_enabled(&mut self, enabled: bool) {
        debug!(enabled, "confirm controls");
    }

    fn set_loading_visible(&mut self, visible: bool) {
        debug!(visible, "loading indicator");
    }
}

/// In-memory location that logs every move.
pub struct TracedNavigator {
    url: String,
}

impl TracedNavigator {
    pub fn at(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Navigator for TracedNavigator {
    fn current_url(&self) -> String {
        self.url.clone()
    }

    fn current_path(&self) -> String {
        url_path(&self.url).to_string()
    }

    fn assign(&mut self, url: &str) {
        info!(from = %self.url, to = %url, "navigate");
        self.url = url.to_string();
    }

    fn replace(&mut self, url: &str) {
        info!(from = %self.url, to = %url, "navigate, replacing history");
        self.url = url.to_string();
    }

    fn reload(&mut self) {
        info!(url = %self.url, "reload");
    }
}
