//! # Session
//!
//! Login answers with the redirect target as a plain-text body; the client
//! follows it with a history-replacing navigation. Logout always lands the
//! reviewer back on the home page, reloading if they are already there.
//!
//! Navigation only happens on a success status.

use reqwest::Client;
use tracing::{debug, warn};

use crate::{error::FlowError, page::Navigator};

const HOME: &str = "/";

pub struct SessionClient {
    http: Client,
    base: String,
}

impl SessionClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base: base.into(),
        }
    }

    pub async fn login(&self, navigator: &mut dyn Navigator) -> Result<(), FlowError> {
        let res = self.http.post(format!("{}/login", self.base)).send().await?;

        let status = res.status();
        if !status.is_success() {
            warn!(%status, "login rejected");
            return Err(FlowError::Rejected(status));
        }

        let target = res.text().await?;
        debug!(%target, "login redirect target");

        navigator.replace(&target);
        Ok(())
    }

    pub async fn logout(&self, navigator: &mut dyn Navigator) -> Result<(), FlowError> {
        let res = self
            .http
            .post(format!("{}/logout", self.base))
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            warn!(%status, "logout rejected");
            return Err(FlowError::Rejected(status));
        }

        if navigator.current_path() == HOME {
            navigator.reload();
        } else {
            navigator.assign(HOME);
        }
        Ok(())
    }
}
