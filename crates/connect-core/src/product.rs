//! # Product Configuration
//!
//! Display metadata for the single item this server sells. Loaded from
//! `config/product.toml` when present; the built-in default matches the
//! demo storefront. Pricing stays out of this struct on purpose: the unit
//! amount comes from server configuration so customers cannot manipulate
//! it client-side.

use serde::{Deserialize, Serialize};

/// The catalog item offered at checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Display name shown on the hosted checkout page
    pub name: String,

    /// Optional product image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    /// Load product metadata from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}

impl Default for Product {
    fn default() -> Self {
        Self {
            name: "Guitar lesson".to_string(),
            image_url: Some("https://i.ibb.co/2PNy7yB/guitar.png".to_string()),
        }
    }
}
