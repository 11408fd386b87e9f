use crate::core::selection::SelectionStore;
use crate::domain::ports::ConfigProvider;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Characters left as-is by a URI component encoder; everything else,
/// including newlines and non-ASCII text, is percent-encoded.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const DEFAULT_EMAIL_RECIPIENT: &str = "al.casa.inteligente@proton.me";
pub const DEFAULT_EMAIL_SUBJECT: &str = "Validação de Equipamentos";
pub const DEFAULT_WHATSAPP_BASE_URL: &str = "https://wa.me";
pub const DEFAULT_WHATSAPP_NUMBER: &str = "351917807428";

const GREETING: &str = "Olá,";
const INTRO: &str =
    "A título de exemplo e para agilizar o contacto, envio lista de equipamentos:";
const SWITCH_BRAND_LABEL: &str = "Marca/Série dos interruptores:";

pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Where generated links point to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactTargets {
    pub email_recipient: String,
    pub email_subject: String,
    pub whatsapp_base_url: String,
    pub whatsapp_number: String,
}

impl Default for ContactTargets {
    fn default() -> Self {
        Self {
            email_recipient: DEFAULT_EMAIL_RECIPIENT.to_string(),
            email_subject: DEFAULT_EMAIL_SUBJECT.to_string(),
            whatsapp_base_url: DEFAULT_WHATSAPP_BASE_URL.to_string(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
        }
    }
}

impl ContactTargets {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            email_recipient: config.email_recipient().to_string(),
            email_subject: config.email_subject().to_string(),
            whatsapp_base_url: config.whatsapp_base_url().to_string(),
            whatsapp_number: config.whatsapp_number().to_string(),
        }
    }
}

/// 把目前的選擇轉成 mailto / WhatsApp 連結，不做任何 I/O
#[derive(Debug, Clone, Default)]
pub struct LinkGenerator {
    targets: ContactTargets,
}

impl LinkGenerator {
    pub fn new(targets: ContactTargets) -> Self {
        Self { targets }
    }

    pub fn targets(&self) -> &ContactTargets {
        &self.targets
    }

    /// Plain-text message shared by both channels. Always ends with the
    /// switch brand line, even when the brand was left blank.
    pub fn message_body(&self, selection: &SelectionStore) -> String {
        let items = selection
            .summary_lines()
            .into_iter()
            .map(|(device, quantity)| format!("- {}x {}", quantity, device.name))
            .collect::<Vec<_>>()
            .join("\n");

        let mut body = format!("{}\n\n{}\n\n{}\n\n", GREETING, INTRO, items);

        let contact = selection.contact();
        if contact.has_contact_details() {
            let mut lines = vec!["Contacto:".to_string()];
            for (label, value) in [
                ("Nome", &contact.name),
                ("Email", &contact.email),
                ("Telefone", &contact.phone),
                ("Notas", &contact.notes),
            ] {
                if !value.trim().is_empty() {
                    lines.push(format!("{}: {}", label, value));
                }
            }
            body.push_str(&lines.join("\n"));
            body.push_str("\n\n");
        }

        body.push_str(SWITCH_BRAND_LABEL);
        body.push(' ');
        body.push_str(&contact.switch_brand);
        body
    }

    pub fn build_email_link(&self, selection: &SelectionStore) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.targets.email_recipient,
            encode_component(&self.targets.email_subject),
            encode_component(&self.message_body(selection))
        )
    }

    pub fn build_whatsapp_link(&self, selection: &SelectionStore) -> String {
        format!(
            "{}/{}?text={}",
            self.targets.whatsapp_base_url.trim_end_matches('/'),
            self.targets.whatsapp_number,
            encode_component(&self.message_body(selection))
        )
    }
}
