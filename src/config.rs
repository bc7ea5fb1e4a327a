use {
    crate::domain::id::OrderId,
    secrecy::{ExposeSecret, SecretString},
    std::env,
};

/// One public/secret key pair. Paylike issues separate pairs for live and
/// test mode.
#[derive(Debug, Clone)]
pub struct KeyPair {
    pub public_key: String,
    pub secret_key: SecretString,
}

impl KeyPair {
    pub fn is_complete(&self) -> bool {
        !self.public_key.is_empty() && !self.secret_key.expose_secret().is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Storefront base URL, used for webhook callbacks and buyer redirects.
    pub store_url: String,
    /// ISO code of the store's configured currency. Kept as the raw string
    /// so an unsupported code can disable the gateway instead of failing
    /// startup.
    pub currency_code: String,
    pub test_mode: bool,
    pub prod_keys: KeyPair,
    pub test_keys: KeyPair,
}

impl GatewayConfig {
    /// Reads configuration from the environment. `STORE_URL` is required
    /// (every redirect and webhook URL hangs off it); missing API keys are
    /// treated as empty, which leaves the gateway disabled rather than
    /// failing startup.
    pub fn from_env() -> Self {
        let var = |name: &str| env::var(name).unwrap_or_default();

        Self {
            store_url: env::var("STORE_URL").expect("STORE_URL must be set"),
            currency_code: env::var("STORE_CURRENCY").unwrap_or_else(|_| "USD".to_string()),
            test_mode: env::var("PAYLIKE_TEST_MODE")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true),
            prod_keys: KeyPair {
                public_key: var("PAYLIKE_PROD_PUBLIC_KEY"),
                secret_key: SecretString::new(var("PAYLIKE_PROD_SECRET_KEY")),
            },
            test_keys: KeyPair {
                public_key: var("PAYLIKE_TEST_PUBLIC_KEY"),
                secret_key: SecretString::new(var("PAYLIKE_TEST_SECRET_KEY")),
            },
        }
    }

    /// Key pair for the active environment.
    pub fn keys(&self) -> &KeyPair {
        if self.test_mode {
            &self.test_keys
        } else {
            &self.prod_keys
        }
    }

    pub fn webhook_url(&self, order_id: &OrderId) -> String {
        format!(
            "{}/webhook/paylike?order_id={}",
            self.store_url.trim_end_matches('/'),
            order_id
        )
    }

    pub fn thanks_url(&self, gateway_name: &str) -> String {
        format!(
            "{}?thanks={gateway_name}",
            self.store_url.trim_end_matches('/')
        )
    }

    /// Error landing page; the flash message travels as a query parameter
    /// for the storefront to render.
    pub fn error_url(&self) -> String {
        format!(
            "{}/index.php?msg=pmt_error",
            self.store_url.trim_end_matches('/')
        )
    }
}
