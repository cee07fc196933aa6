//! Tab panel discovery
//!
//! Drives the live page to enumerate `[role="tab"]` controls and capture the
//! panel text each activation reveals. Tab components are optional page
//! features, so every failure here is recovered into
//! [`TabDiscovery::Unavailable`] and the caller degrades to zero tabs.

use crate::browser::PageHandle;
use crate::document::TabEntry;
use crate::error::DiscoveryError;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Settle delay after each tab activation, letting the panel swap complete
pub const TAB_SETTLE_MS: u64 = 1000;

/// Outcome of a tab discovery pass
///
/// Distinguishes "the page has these tabs" from "discovery could not run",
/// so tests and callers can inspect why a page produced no tab entries.
#[derive(Debug)]
pub enum TabDiscovery {
    /// Discovery ran; entries may still be empty for pages without tabs
    Found(Vec<TabEntry>),
    /// Discovery could not run or broke mid-pass
    Unavailable(DiscoveryError),
}

impl TabDiscovery {
    /// Collapse the outcome into tab entries, logging the unavailable case
    pub fn into_entries(self) -> Vec<TabEntry> {
        match self {
            TabDiscovery::Found(entries) => entries,
            TabDiscovery::Unavailable(reason) => {
                warn!("Tab discovery unavailable, continuing without tabs: {reason}");
                Vec::new()
            }
        }
    }

    /// Whether discovery could not run
    pub fn is_unavailable(&self) -> bool {
        matches!(self, TabDiscovery::Unavailable(_))
    }
}

/// Tab discovery functionality
pub struct TabDiscoverer;

impl TabDiscoverer {
    /// Enumerate tab controls and capture each revealed panel's text
    ///
    /// Activations are strictly sequential: each click mutates the one
    /// shared page, and the following panel read depends on it.
    #[instrument(skip(page))]
    pub async fn discover(page: &PageHandle) -> TabDiscovery {
        match Self::try_discover(page).await {
            Ok(entries) => {
                info!("Discovered {} tab entries", entries.len());
                TabDiscovery::Found(entries)
            }
            Err(reason) => TabDiscovery::Unavailable(reason),
        }
    }

    async fn try_discover(
        page: &PageHandle,
    ) -> std::result::Result<Vec<TabEntry>, DiscoveryError> {
        let count = Self::tab_count(page).await?;
        debug!("Found {} tab controls", count);

        let mut entries = Vec::new();
        for index in 0..count {
            // Re-resolve the control list on every iteration: activation may
            // replace the controls, and index-based re-lookup avoids holding
            // stale detached elements.
            let Some(label) = Self::tab_label(page, index).await? else {
                continue;
            };

            Self::activate(page, index).await?;
            tokio::time::sleep(Duration::from_millis(TAB_SETTLE_MS)).await;

            let panel_text = Self::panel_text(page).await?;
            if let Some(entry) = entry_for(&label, panel_text.as_deref()) {
                entries.push(entry);
            }
        }

        Ok(entries)
    }

    /// Count the tab controls currently in the document
    async fn tab_count(page: &PageHandle) -> std::result::Result<usize, DiscoveryError> {
        let script = r#"document.querySelectorAll('[role="tab"]').length"#;

        page.page
            .evaluate(script)
            .await
            .map_err(|e| DiscoveryError::SessionUnavailable(e.to_string()))?
            .into_value()
            .map_err(|e| DiscoveryError::EvaluationFailed(e.to_string()))
    }

    /// Label text of the control at `index`, or None if the list shrank
    async fn tab_label(
        page: &PageHandle,
        index: usize,
    ) -> std::result::Result<Option<String>, DiscoveryError> {
        let script = format!(
            r#"
            (() => {{
                const tabs = document.querySelectorAll('[role="tab"]');
                return {index} < tabs.length ? tabs[{index}].innerText : null;
            }})()
            "#,
        );

        page.page
            .evaluate(script.as_str())
            .await
            .map_err(|e| DiscoveryError::SelectorFailed(e.to_string()))?
            .into_value()
            .map_err(|e| DiscoveryError::EvaluationFailed(e.to_string()))
    }

    /// Simulate activation of the control at `index`
    async fn activate(
        page: &PageHandle,
        index: usize,
    ) -> std::result::Result<(), DiscoveryError> {
        let script = format!(
            r#"
            (() => {{
                const tabs = document.querySelectorAll('[role="tab"]');
                if ({index} < tabs.length) {{
                    tabs[{index}].click();
                }}
                return true;
            }})()
            "#,
        );

        page.page
            .evaluate(script.as_str())
            .await
            .map_err(|e| DiscoveryError::SelectorFailed(e.to_string()))?;
        Ok(())
    }

    /// Text of the first visible tab panel, or None if no panel is visible
    async fn panel_text(
        page: &PageHandle,
    ) -> std::result::Result<Option<String>, DiscoveryError> {
        let script = r#"
            (() => {
                const panel = document.querySelector('[role="tabpanel"]:not([hidden])');
                return panel ? panel.innerText : null;
            })()
        "#;

        page.page
            .evaluate(script)
            .await
            .map_err(|e| DiscoveryError::SelectorFailed(e.to_string()))?
            .into_value()
            .map_err(|e| DiscoveryError::EvaluationFailed(e.to_string()))
    }
}

/// Build the entry for one activation, if the revealed panel has text
///
/// An activation that reveals no visible panel, or a panel that is empty
/// after trimming, produces no entry.
fn entry_for(label: &str, panel_text: Option<&str>) -> Option<TabEntry> {
    let text = panel_text?.trim();
    if text.is_empty() {
        return None;
    }
    Some(TabEntry {
        label: label.trim().to_string(),
        content: text.to_string(),
    })
}
