use finance_domain::chat_service::rule_reply;
use finance_domain::profile_service::random_profile;
use finance_domain::TransactionService;
use gloo::net::http::Request;
use shared::{
    AppConfig, ChatRequest, ChatResponse, Profile, RecentTransactionsResponse, RemoteTransaction, Transaction,
};

use crate::services::date_utils;

/// API client for the profile, transaction and chat services.
///
/// Every call is best effort: callers fall back to local data on `Err`.
/// With `use_mock_api` set, calls are answered locally without touching the
/// network.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    use_mock: bool,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            use_mock: config.use_mock_api,
        }
    }

    /// Current profile of the remote account
    pub async fn get_profile(&self) -> Result<Profile, String> {
        if self.use_mock {
            return Err("Mock mode: no remote profile".to_string());
        }

        let url = format!("{}/api/profile", self.base_url);
        match Request::get(&url).send().await {
            Ok(response) if response.ok() => response
                .json::<Profile>()
                .await
                .map_err(|e| format!("Failed to parse profile: {}", e)),
            Ok(response) => Err(format!("Server error {}", response.status())),
            Err(e) => Err(format!("Failed to fetch profile: {}", e)),
        }
    }

    /// Ask the profile service for a freshly generated profile
    pub async fn generate_profile(&self) -> Result<Profile, String> {
        if self.use_mock {
            return Ok(random_profile(&mut rand::thread_rng()));
        }

        let url = format!("{}/api/profile/generate", self.base_url);
        match Request::post(&url).send().await {
            Ok(response) if response.ok() => response
                .json::<Profile>()
                .await
                .map_err(|e| format!("Failed to parse generated profile: {}", e)),
            Ok(response) => Err(format!("Server error {}", response.status())),
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Recent transactions converted to the canonical sign (negative = expense)
    pub async fn get_recent_transactions(&self, limit: u32) -> Result<Vec<Transaction>, String> {
        let response = if self.use_mock {
            mock_recent_transactions(limit)
        } else {
            let url = format!("{}/api/transactions/recent?limit={}", self.base_url, limit);
            match Request::get(&url).send().await {
                Ok(response) if response.ok() => response
                    .json::<RecentTransactionsResponse>()
                    .await
                    .map_err(|e| format!("Failed to parse transactions: {}", e))?,
                Ok(response) => return Err(format!("Server error {}", response.status())),
                Err(e) => return Err(format!("Failed to fetch transactions: {}", e)),
            }
        };

        Ok(response
            .transactions
            .into_iter()
            .map(RemoteTransaction::into_transaction)
            .collect())
    }

    pub async fn send_chat(&self, message: &str) -> Result<ChatResponse, String> {
        if self.use_mock {
            return Ok(ChatResponse {
                reply: rule_reply(message).to_string(),
                status: "success".to_string(),
            });
        }

        let url = format!("{}/api/chat", self.base_url);
        let request = ChatRequest {
            message: message.to_string(),
        };

        match Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    response
                        .json::<ChatResponse>()
                        .await
                        .map_err(|e| format!("Failed to parse response: {}", e))
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

/// Local stand-in for the recent transactions endpoint
pub fn mock_recent_transactions(limit: u32) -> RecentTransactionsResponse {
    let transactions = TransactionService::new()
        .sample_recent_transactions(
            date_utils::today(),
            limit as usize,
            &mut rand::thread_rng(),
            date_utils::now_millis(),
        )
        .iter()
        .map(RemoteTransaction::from_transaction)
        .collect();

    RecentTransactionsResponse { transactions }
}
