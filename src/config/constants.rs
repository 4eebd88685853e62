//! Application-wide constants
//!
//! Centralized location for the literal defaults and fixed option values
//! used when assembling the settings record.

// =============================================================================
// Environment Selection
// =============================================================================

/// Environment indicator variable, set by the host framework's tooling
pub const ENV_INDICATOR: &str = "NODE_ENV";

/// Environment file loaded for development and unrecognized environments
pub const ENV_FILE_DEFAULT: &str = ".env";

/// Environment file loaded in production
pub const ENV_FILE_PRODUCTION: &str = ".env.production";

/// Environment file loaded in staging
pub const ENV_FILE_STAGING: &str = ".env.staging";

/// Environment file loaded under test
pub const ENV_FILE_TEST: &str = ".env.test";

// =============================================================================
// CORS
// =============================================================================

/// Default origins allowed to call the admin API
pub const DEFAULT_ADMIN_CORS: &str = "http://localhost:7000,http://localhost:7001";

/// Default origins allowed to call the storefront API
pub const DEFAULT_STORE_CORS: &str = "http://localhost:8000";

// =============================================================================
// Connections
// =============================================================================

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/medusa-starter-default";

/// Default Redis URL (for development)
pub const DEFAULT_REDIS_URL: &str = "redis://localhost:6379";

// =============================================================================
// Secrets
// =============================================================================

/// Insecure development fallback for the JWT signing secret
pub const DEFAULT_JWT_SECRET: &str = "supersecret";

/// Insecure development fallback for the cookie signing secret
pub const DEFAULT_COOKIE_SECRET: &str = "supersecret";

// =============================================================================
// Plugin Identifiers
// =============================================================================

/// Manual fulfillment plugin
pub const PLUGIN_FULFILLMENT_MANUAL: &str = "medusa-fulfillment-manual";

/// Manual payment plugin
pub const PLUGIN_PAYMENT_MANUAL: &str = "medusa-payment-manual";

/// Razorpay payment provider
pub const PLUGIN_PAYMENT_RAZORPAY: &str = "medusa-payment-razorpay";

/// Meilisearch product indexing plugin
pub const PLUGIN_MEILISEARCH: &str = "medusa-plugin-meilisearch";

/// SendGrid transactional email plugin
pub const PLUGIN_SENDGRID: &str = "medusa-plugin-sendgrid";

/// Local filesystem file storage
pub const PLUGIN_FILE_LOCAL: &str = "@medusajs/file-local";

/// Admin dashboard plugin
pub const PLUGIN_ADMIN: &str = "@medusajs/admin";

/// Redis-backed event bus module
pub const MODULE_EVENT_BUS_REDIS: &str = "@medusajs/event-bus-redis";

/// Redis-backed cache module
pub const MODULE_CACHE_REDIS: &str = "@medusajs/cache-redis";

// =============================================================================
// Payments (Razorpay)
// =============================================================================

/// Automatic payment expiry, in minutes (gateway accepts 12 minutes to 30 days)
pub const RAZORPAY_AUTOMATIC_EXPIRY_MINUTES: u32 = 30;

/// Manual payment expiry, in minutes
pub const RAZORPAY_MANUAL_EXPIRY_MINUTES: u32 = 20;

/// Refund processing speed requested from the gateway
pub const RAZORPAY_REFUND_SPEED: &str = "normal";

// =============================================================================
// Search (Meilisearch)
// =============================================================================

/// Primary key of the product search index
pub const PRODUCT_INDEX_PRIMARY_KEY: &str = "id";

/// Product fields matched by full-text search
pub const PRODUCT_SEARCHABLE_ATTRIBUTES: &[&str] = &["title", "description", "variant_sku"];

/// Product fields returned in search results
pub const PRODUCT_DISPLAYED_ATTRIBUTES: &[&str] = &[
    "id",
    "title",
    "description",
    "variant_sku",
    "thumbnail",
    "handle",
];

// =============================================================================
// Email (SendGrid)
// =============================================================================

/// Locale key carrying the localized order-placed template
pub const SENDGRID_LOCALIZED_LOCALE: &str = "de-DE";

// =============================================================================
// File Storage
// =============================================================================

/// Upload directory for locally stored files
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";
