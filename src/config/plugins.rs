//! Plugin descriptors handed to the host framework.
//!
//! The list is fixed and ordered; option values are pulled from the
//! environment snapshot uninspected, so an absent variable reaches the
//! plugin as a null option. Serde renames reproduce the exact option
//! keys each plugin expects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_UPLOAD_DIR, PLUGIN_ADMIN, PLUGIN_FILE_LOCAL, PLUGIN_FULFILLMENT_MANUAL,
    PLUGIN_MEILISEARCH, PLUGIN_PAYMENT_MANUAL, PLUGIN_PAYMENT_RAZORPAY, PLUGIN_SENDGRID,
    PRODUCT_DISPLAYED_ATTRIBUTES, PRODUCT_INDEX_PRIMARY_KEY, PRODUCT_SEARCHABLE_ATTRIBUTES,
    RAZORPAY_AUTOMATIC_EXPIRY_MINUTES, RAZORPAY_MANUAL_EXPIRY_MINUTES, RAZORPAY_REFUND_SPEED,
    SENDGRID_LOCALIZED_LOCALE,
};
use super::environment::Environment;

/// A plugin activation entry: a bare name, or a name plus options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PluginDescriptor {
    Bare(String),
    Configured {
        resolve: String,
        options: PluginOptions,
    },
}

impl PluginDescriptor {
    fn bare(name: &str) -> Self {
        PluginDescriptor::Bare(name.to_string())
    }

    fn configured(name: &str, options: PluginOptions) -> Self {
        PluginDescriptor::Configured {
            resolve: name.to_string(),
            options,
        }
    }

    /// Name the host framework resolves for this entry.
    pub fn resolve(&self) -> &str {
        match self {
            PluginDescriptor::Bare(name) => name,
            PluginDescriptor::Configured { resolve, .. } => resolve,
        }
    }

    /// Options mapping, if this entry carries one.
    pub fn options(&self) -> Option<&PluginOptions> {
        match self {
            PluginDescriptor::Bare(_) => None,
            PluginDescriptor::Configured { options, .. } => Some(options),
        }
    }

    pub(crate) fn options_mut(&mut self) -> Option<&mut PluginOptions> {
        match self {
            PluginDescriptor::Bare(_) => None,
            PluginDescriptor::Configured { options, .. } => Some(options),
        }
    }
}

/// Options mapping of a configured plugin.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PluginOptions {
    Razorpay(RazorpayOptions),
    Meilisearch(MeilisearchOptions),
    Sendgrid(SendgridOptions),
    LocalFile(LocalFileOptions),
    Admin(AdminOptions),
}

/// Razorpay payment provider options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RazorpayOptions {
    pub key_id: Option<String>,
    pub key_secret: Option<String>,
    pub razorpay_account: Option<String>,
    pub automatic_expiry_period: u32,
    pub manual_expiry_period: u32,
    pub refund_speed: String,
    pub webhook_secret: Option<String>,
}

impl RazorpayOptions {
    fn from_env(env: &Environment) -> Self {
        let key_secret = env.var("RAZORPAY_SECRET").map(str::to_owned);
        Self {
            key_id: env.var("RAZORPAY_ID").map(str::to_owned),
            key_secret: key_secret.clone(),
            razorpay_account: env.var("RAZORPAY_ACCOUNT").map(str::to_owned),
            automatic_expiry_period: RAZORPAY_AUTOMATIC_EXPIRY_MINUTES,
            manual_expiry_period: RAZORPAY_MANUAL_EXPIRY_MINUTES,
            refund_speed: RAZORPAY_REFUND_SPEED.to_string(),
            // The gateway signs webhooks with the API secret
            webhook_secret: key_secret,
        }
    }
}

/// Meilisearch plugin options: connection plus index settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeilisearchOptions {
    pub config: MeilisearchConnection,
    pub settings: MeilisearchSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeilisearchConnection {
    pub host: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeilisearchSettings {
    pub products: ProductIndex,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductIndex {
    pub index_settings: ProductIndexSettings,
    pub primary_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductIndexSettings {
    pub searchable_attributes: Vec<String>,
    pub displayed_attributes: Vec<String>,
}

impl MeilisearchOptions {
    fn from_env(env: &Environment) -> Self {
        Self {
            config: MeilisearchConnection {
                host: env.var("MEILISEARCH_HOST").map(str::to_owned),
                api_key: env.var("MEILISEARCH_API_KEY").map(str::to_owned),
            },
            settings: MeilisearchSettings {
                products: ProductIndex {
                    index_settings: ProductIndexSettings {
                        searchable_attributes: owned(PRODUCT_SEARCHABLE_ATTRIBUTES),
                        displayed_attributes: owned(PRODUCT_DISPLAYED_ATTRIBUTES),
                    },
                    primary_key: PRODUCT_INDEX_PRIMARY_KEY.to_string(),
                },
            },
        }
    }
}

/// SendGrid transactional email options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendgridOptions {
    pub api_key: Option<String>,
    pub from: Option<String>,
    pub order_placed_template: Option<String>,
    pub localization: BTreeMap<String, SendgridLocalization>,
}

/// Per-locale template overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendgridLocalization {
    pub order_placed_template: Option<String>,
}

impl SendgridOptions {
    fn from_env(env: &Environment) -> Self {
        let mut localization = BTreeMap::new();
        localization.insert(
            SENDGRID_LOCALIZED_LOCALE.to_string(),
            SendgridLocalization {
                order_placed_template: env
                    .var("SENDGRID_ORDER_PLACED_ID_LOCALIZED")
                    .map(str::to_owned),
            },
        );
        Self {
            api_key: env.var("SENDGRID_API_KEY").map(str::to_owned),
            from: env.var("SENDGRID_FROM").map(str::to_owned),
            order_placed_template: env.var("SENDGRID_ORDER_PLACED_ID").map(str::to_owned),
            localization,
        }
    }
}

/// Local filesystem storage options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalFileOptions {
    pub upload_dir: String,
}

/// Admin dashboard options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOptions {
    pub auto_rebuild: bool,
    pub develop: AdminDevelopOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminDevelopOptions {
    pub open: bool,
}

impl AdminOptions {
    fn from_env(env: &Environment) -> Self {
        Self {
            auto_rebuild: true,
            develop: AdminDevelopOptions {
                // Opening the browser is opt-out: only the exact value
                // "false" disables it
                open: env.var("OPEN_BROWSER") != Some("false"),
            },
        }
    }
}

/// The fixed, ordered plugin list.
pub fn plugin_list(env: &Environment) -> Vec<PluginDescriptor> {
    vec![
        PluginDescriptor::bare(PLUGIN_FULFILLMENT_MANUAL),
        PluginDescriptor::bare(PLUGIN_PAYMENT_MANUAL),
        PluginDescriptor::configured(
            PLUGIN_PAYMENT_RAZORPAY,
            PluginOptions::Razorpay(RazorpayOptions::from_env(env)),
        ),
        PluginDescriptor::configured(
            PLUGIN_MEILISEARCH,
            PluginOptions::Meilisearch(MeilisearchOptions::from_env(env)),
        ),
        PluginDescriptor::configured(
            PLUGIN_SENDGRID,
            PluginOptions::Sendgrid(SendgridOptions::from_env(env)),
        ),
        PluginDescriptor::configured(
            PLUGIN_FILE_LOCAL,
            PluginOptions::LocalFile(LocalFileOptions {
                upload_dir: DEFAULT_UPLOAD_DIR.to_string(),
            }),
        ),
        PluginDescriptor::configured(
            PLUGIN_ADMIN,
            PluginOptions::Admin(AdminOptions::from_env(env)),
        ),
    ]
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
