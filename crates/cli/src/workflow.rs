//! The bulk finding-status update workflow.
//!
//! One run walks: select a client (configured name or interactive pick),
//! list its reports, pick the target status, confirm, then update every
//! report's findings in sequence, tallying successes. A report whose finding
//! list cannot be read or whose update is rejected is skipped and counted
//! against the tally; only list-shaped responses that are not lists at all
//! stop the run.

use anyhow::{Context, bail};
use serde_json::Value;
use tracing::{info, warn};

use plextrac_client::models::{FindingStatus, Record, records_from};
use plextrac_client::{PlextracClient, Prompt};
use plextrac_config::WorkflowConfig;

/// Tally of one workflow run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WorkflowSummary {
    pub reports_total: usize,
    pub reports_updated: usize,
    pub findings_updated: usize,
}

/// Run the full update workflow against an already-built client.
pub async fn run(
    client: &mut PlextracClient,
    ui: &dyn Prompt,
    workflow: &WorkflowConfig,
) -> anyhow::Result<WorkflowSummary> {
    let chosen = select_client(client, ui, workflow.client_name.as_deref()).await?;
    let client_id = chosen
        .numeric_id()
        .context("selected client record has no numeric id")?;
    let client_label = chosen.name().unwrap_or("<unnamed>").to_string();
    info!(client = %client_label, client_id, "selected client");

    let response = client.list_client_reports(ui, client_id).await?;
    let reports = records_from(&response).context("report list response was not a list")?;
    if reports.is_empty() {
        bail!("client '{client_label}' has no reports");
    }

    let status_labels: Vec<String> = FindingStatus::ALL.iter().map(|s| s.to_string()).collect();
    let status = FindingStatus::ALL[ui.select("Select the status to apply", &status_labels)?];

    let mut summary = WorkflowSummary {
        reports_total: reports.len(),
        ..Default::default()
    };

    if !ui.confirm(&format!(
        "Update all findings in {} report(s) of '{}' to '{}'?",
        reports.len(),
        client_label,
        status
    ))? {
        info!("no updates applied");
        return Ok(summary);
    }

    for report in &reports {
        let Some(report_id) = report.numeric_id() else {
            warn!(id = ?report.id, "report record has no numeric id; skipping");
            continue;
        };
        let report_label = report.name().unwrap_or("<unnamed>");

        let findings_response = client.list_report_findings(ui, client_id, report_id).await?;
        let Some(findings) = records_from(&findings_response) else {
            warn!(report = report_label, "could not list findings; skipping report");
            continue;
        };
        let ids: Vec<u64> = findings.iter().filter_map(Record::numeric_id).collect();
        if ids.is_empty() {
            info!(report = report_label, "report has no findings");
            continue;
        }

        let update = client
            .update_findings_status(ui, client_id, report_id, ids.clone(), status)
            .await?;
        let succeeded = update
            .json()
            .and_then(|v| v.get("status"))
            .and_then(Value::as_str)
            == Some("success");
        if succeeded {
            summary.reports_updated += 1;
            summary.findings_updated += ids.len();
            info!(report = report_label, findings = ids.len(), "updated report");
        } else {
            warn!(report = report_label, "bulk update rejected; skipping report");
        }
    }

    info!(
        reports_updated = summary.reports_updated,
        reports_total = summary.reports_total,
        findings_updated = summary.findings_updated,
        "workflow complete"
    );
    Ok(summary)
}

/// Resolve the target client: an exactly-one name match is used directly,
/// anything else falls back to an interactive pick (among the matches when
/// there are several, among all clients otherwise).
async fn select_client(
    client: &mut PlextracClient,
    ui: &dyn Prompt,
    configured: Option<&str>,
) -> anyhow::Result<Record> {
    let response = client.list_clients(ui).await?;
    let records = records_from(&response).context("client list response was not a list")?;
    if records.is_empty() {
        bail!("no clients are visible to this user");
    }

    if let Some(name) = configured {
        let mut matches: Vec<Record> = records
            .iter()
            .filter(|r| r.matches_name(name))
            .cloned()
            .collect();
        if matches.len() == 1 {
            info!(client = name, "matched configured client name");
            return Ok(matches.remove(0));
        }
        if !matches.is_empty() {
            warn!(
                client = name,
                matches = matches.len(),
                "configured client name matches more than one client"
            );
            return pick_record(ui, "Select a client", matches);
        }
        warn!(client = name, "configured client name matched nothing");
    }

    pick_record(ui, "Select a client", records)
}

fn pick_record(ui: &dyn Prompt, message: &str, mut records: Vec<Record>) -> anyhow::Result<Record> {
    let labels: Vec<String> = records
        .iter()
        .map(|r| r.name().unwrap_or("<unnamed>").to_string())
        .collect();
    let index = ui.select(message, &labels)?;
    Ok(records.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    use plextrac_client::PlextracClient;
    use plextrac_client::testing::{Answer, ScriptedPrompt};
    use plextrac_config::{AuthConfig, Config, ConnectionConfig};
    use secrecy::SecretString;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_auth(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/api/v1/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"text": "Authenticate at /authenticate"})),
            )
            .mount(server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/authenticate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "tenant_id": "tenant_0",
                "mfa_enabled": false,
                "token": "tok",
            })))
            .mount(server)
            .await;
    }

    async fn mount_clients(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/api/v1/client/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "client_10", "doc_id": [10], "data": [10, "Acme Corp"]},
                {"id": "client_11", "doc_id": [11], "data": [11, "Initech"]},
            ])))
            .mount(server)
            .await;
    }

    fn client_for(server: &MockServer, client_name: Option<&str>) -> (PlextracClient, WorkflowConfig) {
        let config = Config {
            connection: ConnectionConfig {
                instance_url: Some(server.uri()),
                ..Default::default()
            },
            auth: AuthConfig {
                username: Some("auditor".to_string()),
                password: Some(SecretString::new("hunter2".to_string().into())),
            },
            workflow: WorkflowConfig {
                client_name: client_name.map(str::to_string),
            },
        };
        let client = PlextracClient::builder()
            .from_config(&config)
            .build()
            .unwrap();
        (client, config.workflow)
    }

    #[tokio::test]
    async fn updates_every_report_and_tallies() {
        let server = MockServer::start().await;
        mount_auth(&server).await;
        mount_clients(&server).await;
        Mock::given(method("GET"))
            .and(path("/api/v1/client/10/reports"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "report_1", "data": [1, "Q1 pentest"]},
                {"id": "report_2", "data": [2, "Q2 pentest"]},
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/client/10/report/1/flaws"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "flaw_101", "data": [101, "SQLi"]},
                {"id": "flaw_102", "data": [102, "XSS"]},
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/client/10/report/2/flaws"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "flaw_201", "data": [201, "CSRF"]},
            ])))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/v2/clients/10/reports/1/findings"))
            .and(body_json(json!({"findings": [101, 102], "data": {"status": "Closed"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/v2/clients/10/reports/2/findings"))
            .and(body_json(json!({"findings": [201], "data": {"status": "Closed"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
            .expect(1)
            .mount(&server)
            .await;

        let (mut client, workflow) = client_for(&server, Some("Acme Corp"));
        let ui = ScriptedPrompt::new([
            Answer::Choice(2), // status: Closed
            Answer::Yes,       // final confirmation
        ]);

        let summary = run(&mut client, &ui, &workflow).await.unwrap();
        assert_eq!(summary.reports_total, 2);
        assert_eq!(summary.reports_updated, 2);
        assert_eq!(summary.findings_updated, 3);
        assert!(ui.exhausted());
    }

    #[tokio::test]
    async fn declined_confirmation_updates_nothing() {
        let server = MockServer::start().await;
        mount_auth(&server).await;
        mount_clients(&server).await;
        Mock::given(method("GET"))
            .and(path("/api/v1/client/10/reports"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "report_1", "data": [1, "Q1 pentest"]},
            ])))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
            .expect(0)
            .mount(&server)
            .await;

        let (mut client, workflow) = client_for(&server, Some("Acme Corp"));
        let ui = ScriptedPrompt::new([Answer::Choice(0), Answer::No]);

        let summary = run(&mut client, &ui, &workflow).await.unwrap();
        assert_eq!(summary.reports_total, 1);
        assert_eq!(summary.reports_updated, 0);
        assert_eq!(summary.findings_updated, 0);
    }

    #[tokio::test]
    async fn unmatched_client_name_falls_back_to_a_pick() {
        let server = MockServer::start().await;
        mount_auth(&server).await;
        mount_clients(&server).await;
        Mock::given(method("GET"))
            .and(path("/api/v1/client/11/reports"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "report_5", "data": [5, "External"]},
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/client/11/report/5/flaws"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "flaw_9", "data": [9, "LFI"]},
            ])))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/v2/clients/11/reports/5/findings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
            .mount(&server)
            .await;

        let (mut client, workflow) = client_for(&server, Some("No Such Client"));
        let ui = ScriptedPrompt::new([
            Answer::Choice(1), // pick "Initech" from the full list
            Answer::Choice(0), // status: Open
            Answer::Yes,
        ]);

        let summary = run(&mut client, &ui, &workflow).await.unwrap();
        assert_eq!(summary.reports_updated, 1);
        assert!(ui.exhausted());
    }

    #[tokio::test]
    async fn client_without_reports_is_an_error() {
        let server = MockServer::start().await;
        mount_auth(&server).await;
        mount_clients(&server).await;
        Mock::given(method("GET"))
            .and(path("/api/v1/client/10/reports"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let (mut client, workflow) = client_for(&server, Some("Acme Corp"));
        let ui = ScriptedPrompt::new([]);

        let err = run(&mut client, &ui, &workflow).await.unwrap_err();
        assert!(err.to_string().contains("has no reports"));
    }

    #[tokio::test]
    async fn non_list_client_response_is_an_error() {
        let server = MockServer::start().await;
        mount_auth(&server).await;
        Mock::given(method("GET"))
            .and(path("/api/v1/client/list"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"status": "doc_error"})),
            )
            .mount(&server)
            .await;

        let (mut client, workflow) = client_for(&server, None);
        let ui = ScriptedPrompt::new([]);

        let err = run(&mut client, &ui, &workflow).await.unwrap_err();
        assert!(err.to_string().contains("not a list"));
    }

    #[tokio::test]
    async fn rejected_update_is_skipped_in_the_tally() {
        let server = MockServer::start().await;
        mount_auth(&server).await;
        mount_clients(&server).await;
        Mock::given(method("GET"))
            .and(path("/api/v1/client/10/reports"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "report_1", "data": [1, "Q1 pentest"]},
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/client/10/report/1/flaws"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "flaw_101", "data": [101, "SQLi"]},
            ])))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/v2/clients/10/reports/1/findings"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_json(json!({"status": "error", "message": "forbidden"})),
            )
            .mount(&server)
            .await;

        let (mut client, workflow) = client_for(&server, Some("Acme Corp"));
        let ui = ScriptedPrompt::new([Answer::Choice(2), Answer::Yes]);

        let summary = run(&mut client, &ui, &workflow).await.unwrap();
        assert_eq!(summary.reports_total, 1);
        assert_eq!(summary.reports_updated, 0);
        assert_eq!(summary.findings_updated, 0);
    }
}
