use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Lighting,
    Power,
    Climate,
    Security,
    Multimedia,
    Network,
}

impl Category {
    pub fn id(&self) -> &'static str {
        match self {
            Category::Lighting => "lighting",
            Category::Power => "power",
            Category::Climate => "climate",
            Category::Security => "security",
            Category::Multimedia => "multimedia",
            Category::Network => "network",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "lighting" => Some(Category::Lighting),
            "power" => Some(Category::Power),
            "climate" => Some(Category::Climate),
            "security" => Some(Category::Security),
            "multimedia" => Some(Category::Multimedia),
            "network" => Some(Category::Network),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}

/// 照明分兩組：換掉現有開關，或保留開關加裝模組
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubCategory {
    Replace,
    Module,
}

impl SubCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SubCategory::Replace => "Substituir Interruptores",
            SubCategory::Module => "Manter Interruptores Existentes",
        }
    }
}

/// Presentation tag; the rendering layer decides which asset each one maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceIcon {
    Lightbulb,
    Zap,
    Thermometer,
    Shield,
    Tv,
    Smartphone,
    Monitor,
    Wifi,
    Speaker,
    Lock,
    Video,
    Blinds,
    Box,
    CloudRain,
    Droplets,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<SubCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    pub icon: DeviceIcon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub id: Category,
    pub label: &'static str,
    pub icon: DeviceIcon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Idea {
    pub title: &'static str,
    pub description: &'static str,
    pub level: &'static str,
}

/// 與選擇一起保存的自由文字欄位，重設時一併清空
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub switch_brand: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
}

impl ContactDraft {
    /// True when any of the personal contact fields carries text.
    pub fn has_contact_details(&self) -> bool {
        [&self.name, &self.email, &self.phone, &self.notes]
            .iter()
            .any(|field| !field.trim().is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Wire payload of `POST /api/submit-quote`. Neither field is validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub items: serde_json::Value,
    #[serde(default, rename = "contactInfo")]
    pub contact_info: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteAck {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
