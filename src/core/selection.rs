use crate::domain::catalog::Catalog;
use crate::domain::model::{Category, CategoryInfo, ContactDraft, Device, QuoteRequest};
use crate::utils::error::{ConfiguratorError, Result};
use serde_json::json;
use std::collections::HashMap;

/// Largest quantity a single add/remove command may apply at once.
pub const MAX_QUANTITY_STEP: u32 = 999;

/// One category block of the review summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryGroup {
    pub category: &'static CategoryInfo,
    pub items: Vec<(&'static Device, u32)>,
}

impl SummaryGroup {
    pub fn total(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |total, (_, quantity)| total.saturating_add(*quantity))
    }
}

/// 使用者目前選擇的設備數量，以及一併送出的聯絡資料
///
/// 只存放數量 >= 1 的設備；降到 0 的項目會直接移除。
#[derive(Debug, Clone)]
pub struct SelectionStore {
    catalog: Catalog,
    quantities: HashMap<&'static str, u32>,
    contact: ContactDraft,
}

impl SelectionStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            quantities: HashMap::new(),
            contact: ContactDraft::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn lookup(&self, device_id: &str) -> Result<&'static Device> {
        self.catalog
            .device(device_id)
            .ok_or_else(|| ConfiguratorError::UnknownDevice {
                id: device_id.to_string(),
            })
    }

    /// Returns the new quantity.
    pub fn increment(&mut self, device_id: &str) -> Result<u32> {
        let device = self.lookup(device_id)?;
        let quantity = self.quantities.entry(device.id).or_insert(0);
        *quantity = quantity.saturating_add(1);
        tracing::debug!("➕ {} -> {}", device.id, quantity);
        Ok(*quantity)
    }

    /// Returns the new quantity; 0 means the entry was removed.
    pub fn decrement(&mut self, device_id: &str) -> Result<u32> {
        let device = self.lookup(device_id)?;
        let next = match self.quantities.get(device.id) {
            Some(&current) => current.saturating_sub(1),
            None => return Ok(0),
        };

        if next == 0 {
            self.quantities.remove(device.id);
        } else {
            self.quantities.insert(device.id, next);
        }
        tracing::debug!("➖ {} -> {}", device.id, next);
        Ok(next)
    }

    pub fn quantity(&self, device_id: &str) -> u32 {
        self.quantities.get(device_id).copied().unwrap_or(0)
    }

    pub fn contains(&self, device_id: &str) -> bool {
        self.quantities.contains_key(device_id)
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    pub fn total_count(&self) -> u32 {
        self.quantities
            .values()
            .fold(0u32, |total, quantity| total.saturating_add(*quantity))
    }

    pub fn category_count(&self, category: Category) -> u32 {
        self.quantities
            .iter()
            .filter(|(id, _)| {
                self.catalog
                    .device(id)
                    .is_some_and(|device| device.category == category)
            })
            .fold(0u32, |total, (_, quantity)| total.saturating_add(*quantity))
    }

    /// 依目錄順序分組；沒有選擇的類別不會出現
    pub fn grouped_summary(&self) -> Vec<SummaryGroup> {
        self.catalog
            .categories()
            .iter()
            .filter_map(|category| {
                let items: Vec<_> = self
                    .catalog
                    .devices_in(category.id)
                    .filter_map(|device| {
                        let quantity = self.quantity(device.id);
                        (quantity > 0).then_some((device, quantity))
                    })
                    .collect();

                (!items.is_empty()).then_some(SummaryGroup { category, items })
            })
            .collect()
    }

    /// Flattened grouped summary, the order used in outbound messages.
    pub fn summary_lines(&self) -> Vec<(&'static Device, u32)> {
        self.grouped_summary()
            .into_iter()
            .flat_map(|group| group.items)
            .collect()
    }

    pub fn contact(&self) -> &ContactDraft {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactDraft {
        &mut self.contact
    }

    pub fn reset(&mut self) {
        self.quantities.clear();
        self.contact.clear();
        tracing::debug!("🧹 Selection and contact draft cleared");
    }

    /// Builds the backend payload for this selection.
    pub fn to_quote_request(&self) -> QuoteRequest {
        let items = self
            .summary_lines()
            .into_iter()
            .map(|(device, quantity)| {
                json!({
                    "id": device.id,
                    "name": device.name,
                    "category": device.category,
                    "quantity": quantity,
                })
            })
            .collect::<Vec<_>>();

        QuoteRequest {
            items: serde_json::Value::Array(items),
            contact_info: json!({
                "name": self.contact.name,
                "email": self.contact.email,
                "phone": self.contact.phone,
                "notes": self.contact.notes,
                "switchBrand": self.contact.switch_brand,
            }),
        }
    }
}
