/*
[INPUT]:  Withdrawal parameters and canonical-UUID identifiers
[OUTPUT]: Withdrawal records and deletion confirmation
[POS]:    HTTP layer - withdrawal endpoints (secret header auth)
[UPDATE]: When adding new withdrawal endpoints or changing response format
*/

use reqwest::{Method, StatusCode};
use tracing::debug;

use crate::http::{LnurlClient, LnurlError, Result};
use crate::types::{CreateWithdrawalRequest, DeleteWithdrawalRequest, Withdrawal, WithdrawalState};
use crate::validate;

impl LnurlClient {
    /// Create a new withdrawal voucher
    ///
    /// POST /v1/withdrawal/create
    ///
    /// The service enforces amount positivity, not the client. An empty
    /// `webhook_url` means no callback is requested. The returned record
    /// always carries `WithdrawalState::Ready`; the creation response is not
    /// trusted to supply a correct initial state label.
    pub async fn create_withdrawal(
        &self,
        amount: i64,
        description: &str,
        webhook_url: &str,
    ) -> Result<Withdrawal> {
        let request = CreateWithdrawalRequest {
            amount,
            description: description.to_string(),
            webhook_url: webhook_url.to_string(),
        };

        debug!(amount, "creating withdrawal");
        let builder = self.api_request(Method::POST, "/v1/withdrawal/create")?;
        let response = builder.json(&request).send().await?;

        let status = response.status();
        if status != StatusCode::OK && status != StatusCode::CREATED {
            return Err(LnurlError::unexpected_status(status));
        }

        let body = response.bytes().await?;
        let mut withdrawal: Withdrawal = serde_json::from_slice(&body)?;
        withdrawal.state = WithdrawalState::Ready;

        Ok(withdrawal)
    }

    /// Fetch an existing withdrawal
    ///
    /// GET /v1/withdrawal/get?ID={id}
    ///
    /// The returned record always carries the input `id`; the identifier
    /// field of the raw response, if present, is not used.
    pub async fn get_withdrawal(&self, id: &str) -> Result<Withdrawal> {
        validate::require_canonical_uuid("ID", id)?;

        debug!(id, "fetching withdrawal");
        let endpoint = format!("/v1/withdrawal/get?ID={id}");
        let response = self.api_request(Method::GET, &endpoint)?.send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(LnurlError::unexpected_status(status));
        }

        let body = response.bytes().await?;
        let mut withdrawal: Withdrawal = serde_json::from_slice(&body)?;
        withdrawal.id = id.to_string();

        Ok(withdrawal)
    }

    /// Delete a withdrawal
    ///
    /// POST /v1/withdrawal/delete
    ///
    /// The response body is not read.
    pub async fn delete_withdrawal(&self, id: &str) -> Result<()> {
        validate::require_canonical_uuid("ID", id)?;

        let request = DeleteWithdrawalRequest { id: id.to_string() };

        debug!(id, "deleting withdrawal");
        let builder = self.api_request(Method::POST, "/v1/withdrawal/delete")?;
        let response = builder.json(&request).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(LnurlError::unexpected_status(status));
        }

        Ok(())
    }
}
