//! # Importation
//!
//! Confirming an importation is a single upload request keyed on the
//! brand's wikidata code, which the page URL carries as a path segment.
//! While the request is in flight the confirm/cancel controls are disabled
//! and the loading indicator shown; a successful upload navigates home.
//! On failure the controls come back and the error is returned.

use reqwest::Client;
use tracing::{info, warn};

use crate::{
    error::FlowError,
    page::{Navigator, Surface},
    utils::extract_wikidata,
};

pub struct ImportClient {
    http: Client,
    base: String,
}

impl ImportClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base: base.into(),
        }
    }

    pub async fn confirm_import(
        &self,
        navigator: &mut dyn Navigator,
        surface: &mut dyn Surface,
    ) -> Result<(), FlowError> {
        surface.set_confirm_enabled(false);
        surface.set_loading_visible(true);

        let url = navigator.current_url();
        let wikidata = match extract_wikidata(&url) {
            Some(code) => code.to_string(),
            None => {
                warn!(%url, "page url carries no wikidata code");
                surface.set_loading_visible(false);
                surface.set_confirm_enabled(true);
                return Err(FlowError::MissingWikidata(url));
            }
        };

        match self.upload(&wikidata).await {
            Ok(()) => {
                info!(%wikidata, "importation confirmed");
                navigator.assign("/");
                Ok(())
            }
            Err(err) => {
                warn!(%wikidata, error = %err, "importation upload failed");
                surface.set_loading_visible(false);
                surface.set_confirm_enabled(true);
                Err(err)
            }
        }
    }

    async fn upload(&self, wikidata: &str) -> Result<(), FlowError> {
        let res = self
            .http
            .post(format!("{}/brands/{}/upload", self.base, wikidata))
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(FlowError::Rejected(status));
        }

        #[cfg(feature = "verbose")]
        tracing::info!(%status, "upload answered");

        Ok(())
    }
}
