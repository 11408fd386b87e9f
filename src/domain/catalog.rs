use crate::domain::model::{Category, CategoryInfo, Device, DeviceIcon, Idea, SubCategory};

const KEEP_SWITCH: &str = "Para manter o interruptor existente";

macro_rules! device {
    ($id:literal, $name:literal, $category:ident, $icon:ident) => {
        Device {
            id: $id,
            name: $name,
            category: Category::$category,
            sub_category: None,
            description: None,
            icon: DeviceIcon::$icon,
        }
    };
    ($id:literal, $name:literal, $category:ident, $sub:ident, $icon:ident) => {
        Device {
            id: $id,
            name: $name,
            category: Category::$category,
            sub_category: Some(SubCategory::$sub),
            description: None,
            icon: DeviceIcon::$icon,
        }
    };
    ($id:literal, $name:literal, $category:ident, $sub:ident, $icon:ident, $desc:expr) => {
        Device {
            id: $id,
            name: $name,
            category: Category::$category,
            sub_category: Some(SubCategory::$sub),
            description: Some($desc),
            icon: DeviceIcon::$icon,
        }
    };
}

pub static DEVICES: &[Device] = &[
    // 照明：替換開關
    device!("switch_1", "Interruptor 1 Tecla", Lighting, Replace, Lightbulb),
    device!("switch_2", "Interruptor 2 Teclas", Lighting, Replace, Lightbulb),
    device!("switch_3", "Interruptor 3 Teclas", Lighting, Replace, Lightbulb),
    device!("dimmer", "Dimmer (Regulador)", Lighting, Replace, Lightbulb),
    device!("led_strip", "Fita LED (metros)", Lighting, Replace, Lightbulb),
    // 照明：保留現有開關
    device!("module_switch_1", "Módulo 1 Canal", Lighting, Module, Box, KEEP_SWITCH),
    device!("module_switch_2", "Módulo 2 Canais", Lighting, Module, Box, KEEP_SWITCH),
    device!("module_switch_3", "Módulo 3 Canais", Lighting, Module, Box, KEEP_SWITCH),
    device!("module_dimmer", "Módulo Dimmer", Lighting, Module, Box, KEEP_SWITCH),
    device!("led_strip_rgb", "Fita LED RGB (metros)", Lighting, Module, Lightbulb, "Fita multicolorida"),
    // 電力
    device!("socket", "Tomada Inteligente", Power, Zap),
    device!("socket_meter", "Tomada com Medidor de Consumo", Power, Zap),
    device!("socket_module_16a", "Módulo para Tomada 16A", Power, Zap),
    device!("energy_meter", "Medidor de Energia (Quadro)", Power, Zap),
    // 空調與窗簾
    device!("thermostat", "Termostato Inteligente", Climate, Thermometer),
    device!("ac_controller", "Controlador de Ar Condicionado", Climate, Thermometer),
    device!("blinds_motor", "Motor de Estores/Cortinas", Climate, Blinds),
    device!("blinds_switch", "Comando de Estores", Climate, Blinds),
    device!("temp_humidity_sensor", "Sensor Temperatura/Humidade", Climate, Thermometer),
    device!("rain_sensor", "Sensor de Chuva", Climate, CloudRain),
    // 安全
    device!("camera_indoor", "Câmara Interior", Security, Video),
    device!("camera_outdoor", "Câmara Exterior", Security, Video),
    device!("door_sensor", "Sensor Porta/Janela", Security, Shield),
    device!("motion_sensor", "Sensor de Movimento", Security, Shield),
    device!("flood_sensor", "Sensor de Inundação", Security, Droplets),
    device!("smart_lock", "Fechadura Inteligente", Security, Lock),
    device!("video_doorbell", "Video Porteiro", Security, Video),
    // 控制與多媒體
    device!("central_hub", "Hub Central", Multimedia, Box),
    device!("central_panel_4", "Ecrã Central de Controlo 4\" c/ Alexa build in", Multimedia, Monitor),
    device!("central_panel_10", "Ecrã Central de Controlo 10\" c/ Alexa build in", Multimedia, Monitor),
    device!("ir_hub", "Hub Infravermelhos (TV/Som)", Multimedia, Tv),
    device!("virtual_assistant", "Assistente Virtual", Multimedia, Speaker),
    // 網路
    device!("mesh_point_1", "Ponto de Acesso Wi-Fi Mesh (1 Router)", Network, Wifi),
    device!("mesh_point_2", "Ponto de Acesso Wi-Fi Mesh (2 Routers)", Network, Wifi),
    device!("mesh_point_3", "Ponto de Acesso Wi-Fi Mesh (3 Routers)", Network, Wifi),
];

pub static CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo { id: Category::Lighting, label: "Iluminação", icon: DeviceIcon::Lightbulb },
    CategoryInfo { id: Category::Power, label: "Energia", icon: DeviceIcon::Zap },
    CategoryInfo { id: Category::Climate, label: "Clima & Estores", icon: DeviceIcon::Blinds },
    CategoryInfo { id: Category::Security, label: "Segurança", icon: DeviceIcon::Shield },
    CategoryInfo { id: Category::Multimedia, label: "Controlo & Multimédia", icon: DeviceIcon::Monitor },
    CategoryInfo { id: Category::Network, label: "Rede", icon: DeviceIcon::Wifi },
];

pub static IDEAS: &[Idea] = &[
    Idea {
        title: "Básico: Conforto Inicial",
        description: "Comece pelo essencial. Controle as luzes da sala e do quarto pelo telemóvel e programe as tomadas para desligar aparelhos em stand-by.",
        level: "Iniciante",
    },
    Idea {
        title: "Intermédio: Automação Total",
        description: "Sensores de movimento que acendem luzes, estores que abrem com o nascer do sol e termostatos que ajustam a temperatura antes de chegar a casa.",
        level: "Avançado",
    },
    Idea {
        title: "Premium: Casa do Futuro",
        description: "Integração total. Câmaras com IA, som ambiente em todas as divisões, ecrãs centrais de controlo e cenários complexos de 'Cinema' ou 'Férias'.",
        level: "Expert",
    },
];

/// Read-only view over the device and category tables.
///
/// Order matters: categories and devices are always reported in the order
/// they are declared, which is also the order of the review summary.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    devices: &'static [Device],
    categories: &'static [CategoryInfo],
    ideas: &'static [Idea],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            devices: DEVICES,
            categories: CATEGORIES,
            ideas: IDEAS,
        }
    }

    pub fn devices(&self) -> &'static [Device] {
        self.devices
    }

    pub fn categories(&self) -> &'static [CategoryInfo] {
        self.categories
    }

    pub fn ideas(&self) -> &'static [Idea] {
        self.ideas
    }

    pub fn device(&self, id: &str) -> Option<&'static Device> {
        let devices = self.devices;
        devices.iter().find(|d| d.id == id)
    }

    pub fn category(&self, id: Category) -> Option<&'static CategoryInfo> {
        let categories = self.categories;
        categories.iter().find(|c| c.id == id)
    }

    pub fn first_category(&self) -> Category {
        self.categories
            .first()
            .map(|c| c.id)
            .unwrap_or(Category::Lighting)
    }

    pub fn devices_in(&self, category: Category) -> impl Iterator<Item = &'static Device> {
        let devices = self.devices;
        devices.iter().filter(move |d| d.category == category)
    }

    pub fn devices_in_sub(
        &self,
        category: Category,
        sub_category: SubCategory,
    ) -> impl Iterator<Item = &'static Device> {
        let devices = self.devices;
        devices
            .iter()
            .filter(move |d| d.category == category && d.sub_category == Some(sub_category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_device_ids_are_unique() {
        let ids: HashSet<&str> = DEVICES.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), DEVICES.len());
        assert_eq!(DEVICES.len(), 35);
    }

    #[test]
    fn test_every_device_category_is_listed() {
        let catalog = Catalog::builtin();
        for device in catalog.devices() {
            assert!(
                catalog.category(device.category).is_some(),
                "{} has an unlisted category",
                device.id
            );
        }
        assert_eq!(catalog.categories().len(), 6);
        assert_eq!(catalog.first_category(), Category::Lighting);
    }

    #[test]
    fn test_sub_categories_only_in_lighting() {
        for device in DEVICES {
            if device.sub_category.is_some() {
                assert_eq!(device.category, Category::Lighting, "{}", device.id);
            }
        }
        let catalog = Catalog::builtin();
        let replace: Vec<_> = catalog
            .devices_in_sub(Category::Lighting, SubCategory::Replace)
            .map(|d| d.id)
            .collect();
        assert_eq!(replace, ["switch_1", "switch_2", "switch_3", "dimmer", "led_strip"]);
        assert_eq!(
            catalog
                .devices_in_sub(Category::Lighting, SubCategory::Module)
                .count(),
            5
        );
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::builtin();
        let thermostat = catalog.device("thermostat").unwrap();
        assert_eq!(thermostat.name, "Termostato Inteligente");
        assert_eq!(thermostat.category, Category::Climate);
        assert!(catalog.device("toaster").is_none());
        assert_eq!(catalog.devices_in(Category::Network).count(), 3);
    }
}
