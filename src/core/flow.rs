use crate::core::links::LinkGenerator;
use crate::core::selection::{SelectionStore, SummaryGroup};
use crate::domain::catalog::Catalog;
use crate::domain::model::{Category, CategoryInfo, Device, SubCategory};
use crate::domain::ports::Navigator;
use crate::utils::error::{ConfiguratorError, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Configuring,
    Reviewing,
    Submitted,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            View::Configuring => "configuring",
            View::Reviewing => "reviewing",
            View::Submitted => "submitted",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitChannel {
    Email,
    Whatsapp,
}

impl SubmitChannel {
    /// WhatsApp opens in a new context; mail replaces the current one.
    pub fn opens_new_context(&self) -> bool {
        matches!(self, SubmitChannel::Whatsapp)
    }
}

/// Devices shown for the active category. Lighting is split in two columns.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceSection {
    Flat(Vec<&'static Device>),
    Split(Vec<(SubCategory, Vec<&'static Device>)>),
}

/// 一次瀏覽工作階段的完整狀態，由呼叫端擁有並傳給各個畫面
#[derive(Debug, Clone)]
pub struct ConfiguratorSession {
    selection: SelectionStore,
    links: LinkGenerator,
    view: View,
    active_category: Category,
    last_link: Option<String>,
}

impl ConfiguratorSession {
    pub fn new(catalog: Catalog, links: LinkGenerator) -> Self {
        Self {
            selection: SelectionStore::new(catalog),
            links,
            view: View::Configuring,
            active_category: catalog.first_category(),
            last_link: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    /// Quantity and contact edits are allowed in every view, as in the form.
    pub fn selection_mut(&mut self) -> &mut SelectionStore {
        &mut self.selection
    }

    pub fn links(&self) -> &LinkGenerator {
        &self.links
    }

    pub fn last_link(&self) -> Option<&str> {
        self.last_link.as_deref()
    }

    pub fn active_category(&self) -> &'static CategoryInfo {
        let catalog = *self.selection.catalog();
        catalog
            .category(self.active_category)
            .unwrap_or(&catalog.categories()[0])
    }

    pub fn select_category(&mut self, category: Category) {
        self.active_category = category;
    }

    pub fn active_devices(&self) -> DeviceSection {
        let catalog = self.selection.catalog();
        let category = self.active_category;

        if category == Category::Lighting {
            let columns: Vec<(SubCategory, Vec<&'static Device>)> =
                [SubCategory::Replace, SubCategory::Module]
                    .into_iter()
                    .map(|sub| (sub, catalog.devices_in_sub(category, sub).collect()))
                    .collect();
            DeviceSection::Split(columns)
        } else {
            DeviceSection::Flat(catalog.devices_in(category).collect())
        }
    }

    /// The empty review state hides the submit actions.
    pub fn is_review_empty(&self) -> bool {
        self.view == View::Reviewing && self.selection.total_count() == 0
    }

    pub fn can_submit(&self) -> bool {
        self.view == View::Reviewing && self.selection.total_count() > 0
    }

    pub fn summary(&self) -> Vec<SummaryGroup> {
        self.selection.grouped_summary()
    }

    pub fn view_summary(&mut self) -> Result<()> {
        match self.view {
            View::Configuring => {
                self.transition(View::Reviewing);
                Ok(())
            }
            other => Err(ConfiguratorError::invalid_transition("view summary", other)),
        }
    }

    pub fn back(&mut self) -> Result<()> {
        match self.view {
            View::Reviewing => {
                self.transition(View::Configuring);
                Ok(())
            }
            other => Err(ConfiguratorError::invalid_transition("go back", other)),
        }
    }

    /// Generates the link for `channel`, hands it to the navigator and marks
    /// the session submitted. Returns the generated link.
    ///
    /// A navigator failure is logged but does not block the transition:
    /// whether a mail client or WhatsApp actually opened is not observable.
    pub fn submit<N: Navigator + ?Sized>(
        &mut self,
        channel: SubmitChannel,
        navigator: &mut N,
    ) -> Result<String> {
        if self.view != View::Reviewing {
            return Err(ConfiguratorError::invalid_transition("submit", self.view));
        }
        if self.selection.total_count() == 0 {
            return Err(ConfiguratorError::EmptySelection);
        }

        let link = match channel {
            SubmitChannel::Email => self.links.build_email_link(&self.selection),
            SubmitChannel::Whatsapp => self.links.build_whatsapp_link(&self.selection),
        };

        tracing::info!(
            "📨 Submitting {} items via {:?}",
            self.selection.total_count(),
            channel
        );
        if let Err(e) = navigator.open(&link, channel.opens_new_context()) {
            tracing::warn!("⚠️ Could not open link: {}", e);
        }

        self.last_link = Some(link.clone());
        self.transition(View::Submitted);
        Ok(link)
    }

    pub fn start_new(&mut self) -> Result<()> {
        match self.view {
            View::Submitted => {
                self.selection.reset();
                self.last_link = None;
                self.active_category = self.selection.catalog().first_category();
                self.transition(View::Configuring);
                Ok(())
            }
            other => Err(ConfiguratorError::invalid_transition(
                "start a new configuration",
                other,
            )),
        }
    }

    fn transition(&mut self, next: View) {
        tracing::debug!("🔀 {} -> {}", self.view, next);
        self.view = next;
    }
}
