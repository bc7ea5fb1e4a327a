use {
    crate::domain::{
        error::GatewayError,
        id::TransactionId,
        money::{Currency, MoneyAmount},
        provider::ProviderClient,
        transaction::Transaction,
    },
    async_trait::async_trait,
    reqwest::StatusCode,
    secrecy::{ExposeSecret, SecretString},
    serde::{Deserialize, Serialize},
    std::time::Duration,
};

const API_BASE_URL: &str = "https://api.paylike.io";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Paylike merchant API. Authentication is HTTP basic
/// with an empty username and the secret key as password.
pub struct PaylikeClient {
    http: reqwest::Client,
    base_url: String,
    secret_key: SecretString,
}

#[derive(Debug, Deserialize)]
struct TransactionEnvelope {
    transaction: Transaction,
}

#[derive(Debug, Serialize)]
struct CaptureBody {
    amount: i64,
    currency: Currency,
}

impl PaylikeClient {
    pub fn new(secret_key: SecretString) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GatewayError::Provider(e.to_string()))?;
        Ok(Self {
            http,
            base_url: API_BASE_URL.to_string(),
            secret_key,
        })
    }

    async fn read_transaction(
        &self,
        id: &TransactionId,
        resp: reqwest::Response,
    ) -> Result<Transaction, GatewayError> {
        match resp.status() {
            StatusCode::NOT_FOUND => Err(GatewayError::NotFound(id.clone())),
            status if !status.is_success() => {
                Err(GatewayError::Provider(format!("API returned {status}")))
            }
            _ => {
                let envelope: TransactionEnvelope = resp
                    .json()
                    .await
                    .map_err(|e| GatewayError::Provider(e.to_string()))?;
                Ok(envelope.transaction)
            }
        }
    }
}

#[async_trait]
impl ProviderClient for PaylikeClient {
    async fn fetch_transaction(&self, id: &TransactionId) -> Result<Transaction, GatewayError> {
        let url = format!("{}/transactions/{id}", self.base_url);
        let resp = self
            .http
            .get(&url)
            .basic_auth("", Some(self.secret_key.expose_secret()))
            .send()
            .await
            .map_err(|e| GatewayError::Provider(e.to_string()))?;
        self.read_transaction(id, resp).await
    }

    async fn capture(
        &self,
        id: &TransactionId,
        amount: MoneyAmount,
        currency: Currency,
    ) -> Result<Transaction, GatewayError> {
        let url = format!("{}/transactions/{id}/captures", self.base_url);
        let body = CaptureBody {
            amount: amount.minor(),
            currency,
        };
        let resp = self
            .http
            .post(&url)
            .basic_auth("", Some(self.secret_key.expose_secret()))
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Provider(e.to_string()))?;
        self.read_transaction(id, resp).await
    }
}
