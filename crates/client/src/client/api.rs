//! Authenticated workflow endpoints.
//!
//! Thin wrappers over [`crate::endpoints`] that obtain fresh auth headers
//! before every call. Responses come back as [`ApiResponse`] so callers can
//! inspect rejected requests instead of losing them to an error path.

use crate::client::PlextracClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{BulkFindingsStatusUpdate, FindingStatus};
use crate::prompt::Prompt;
use crate::transport::ApiResponse;

impl PlextracClient {
    /// List all clients visible to the authenticated user.
    pub async fn list_clients(&mut self, ui: &dyn Prompt) -> Result<ApiResponse> {
        let headers = self.auth_headers(ui).await?;
        let base_url = self.session.base_url()?.to_string();
        endpoints::list_clients(&self.http, &base_url, &headers).await
    }

    /// Fetch a single client record.
    pub async fn get_client(&mut self, ui: &dyn Prompt, client_id: u64) -> Result<ApiResponse> {
        let headers = self.auth_headers(ui).await?;
        let base_url = self.session.base_url()?.to_string();
        endpoints::get_client(&self.http, &base_url, &headers, client_id).await
    }

    /// List the reports under a client.
    pub async fn list_client_reports(
        &mut self,
        ui: &dyn Prompt,
        client_id: u64,
    ) -> Result<ApiResponse> {
        let headers = self.auth_headers(ui).await?;
        let base_url = self.session.base_url()?.to_string();
        endpoints::list_client_reports(&self.http, &base_url, &headers, client_id).await
    }

    /// List the findings of one report.
    pub async fn list_report_findings(
        &mut self,
        ui: &dyn Prompt,
        client_id: u64,
        report_id: u64,
    ) -> Result<ApiResponse> {
        let headers = self.auth_headers(ui).await?;
        let base_url = self.session.base_url()?.to_string();
        endpoints::list_report_findings(&self.http, &base_url, &headers, client_id, report_id).await
    }

    /// Set the status of every listed finding in one report.
    pub async fn update_findings_status(
        &mut self,
        ui: &dyn Prompt,
        client_id: u64,
        report_id: u64,
        findings: Vec<u64>,
        status: FindingStatus,
    ) -> Result<ApiResponse> {
        let headers = self.auth_headers(ui).await?;
        let base_url = self.session.base_url()?.to_string();
        let payload = BulkFindingsStatusUpdate::new(findings, status);
        endpoints::bulk_update_findings_status(
            &self.http,
            &base_url,
            &headers,
            client_id,
            report_id,
            &payload,
        )
        .await
    }
}
