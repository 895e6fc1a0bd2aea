//! Mail composition collaborator.

use url::form_urlencoded;

use super::desktop::{DesktopOpener, SystemDesktopOpener};

/// Message handed to the mail collaborator for composing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MailDraft {
    /// Recipient address.
    pub recipient: String,
    /// Subject line.
    pub subject: String,
    /// Body text; empty when composed from the command line.
    pub body: String,
}

impl MailDraft {
    /// Builds a `mailto:` URL for this draft.
    pub fn mailto_url(&self) -> String {
        let mut url = format!("mailto:{}", encode_component(&self.recipient));
        let mut separator = '?';
        for (key, value) in [("subject", &self.subject), ("body", &self.body)] {
            if value.is_empty() {
                continue;
            }
            url.push(separator);
            url.push_str(key);
            url.push('=');
            url.push_str(&encode_component(value));
            separator = '&';
        }
        url
    }
}

/// Percent-encodes `text`, spelling spaces as `%20` as mail clients expect.
fn encode_component(text: &str) -> String {
    form_urlencoded::byte_serialize(text.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
        .replace("%40", "@")
}

/// Host service that opens a draft for the user to finish and send.
pub trait MailService {
    /// Opens `draft` in a composer.
    fn compose(&self, draft: &MailDraft) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Composes drafts by opening a `mailto:` URL with the desktop opener.
pub struct MailtoMailService;

impl MailService for MailtoMailService {
    fn compose(&self, draft: &MailDraft) -> Result<(), String> {
        SystemDesktopOpener.open_url(&draft.mailto_url())
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op mail service for headless hosts.
pub struct NoopMailService;

impl MailService for NoopMailService {
    fn compose(&self, _draft: &MailDraft) -> Result<(), String> {
        Ok(())
    }
}
