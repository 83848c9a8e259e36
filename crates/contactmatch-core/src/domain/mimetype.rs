use serde::{Deserialize, Serialize};

pub const PHONE: &str = "vnd.android.cursor.item/phone_v2";
pub const EMAIL: &str = "vnd.android.cursor.item/email_v2";
pub const SIP_ADDRESS: &str = "vnd.android.cursor.item/sip_address";
pub const IM: &str = "vnd.android.cursor.item/im";
pub const STRUCTURED_POSTAL: &str = "vnd.android.cursor.item/postal-address_v2";
pub const WEBSITE: &str = "vnd.android.cursor.item/website";

/// Short aliases accepted wherever a mimetype is read from user input.
pub fn resolve_mimetype(raw: &str) -> &str {
    match raw.trim() {
        "phone" => PHONE,
        "email" => EMAIL,
        "sip" => SIP_ADDRESS,
        "im" => IM,
        "postal" => STRUCTURED_POSTAL,
        "website" => WEBSITE,
        other => other,
    }
}

/// One row of contact data: a mimetype and its value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataItem {
    pub mimetype: Option<String>,
    pub value: Option<String>,
}

impl DataItem {
    pub fn new(mimetype: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            mimetype: Some(mimetype.into()),
            value: Some(value.into()),
        }
    }

    pub fn phone(value: impl Into<String>) -> Self {
        Self::new(PHONE, value)
    }

    pub fn mimetype(&self) -> Option<&str> {
        self.mimetype.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}
