//! Sheets v4 REST client

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use super::signer::TokenSigner;
use super::{SheetHandle, SheetsExporter};
use crate::config::SheetsConfig;
use crate::errors::{Result, TahfidzError};

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct CreateSpreadsheetResponse {
    #[serde(rename = "spreadsheetId")]
    spreadsheet_id: String,
    #[serde(rename = "spreadsheetUrl")]
    spreadsheet_url: String,
}

/// Real exporter backed by the Google Sheets API.
pub struct GoogleSheetsClient {
    signer: TokenSigner,
    http: reqwest::Client,
    headroom_rows: u64,
}

impl GoogleSheetsClient {
    pub fn new(signer: TokenSigner, config: &SheetsConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .map_err(|e| TahfidzError::sheets_api(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            signer,
            http,
            headroom_rows: config.headroom_rows,
        })
    }

    /// Exchange a signed assertion for a short-lived access token.
    async fn fetch_access_token(&self) -> Result<String> {
        let assertion = self.signer.assertion(chrono::Utc::now())?;

        let response = self
            .http
            .post(self.signer.token_uri())
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", &assertion)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TahfidzError::credential(format!(
                "token exchange failed ({status}): {body}"
            )));
        }

        let token: TokenResponse = response.json().await?;
        debug!("obtained Sheets access token");
        Ok(token.access_token)
    }

    async fn create_spreadsheet(
        &self,
        token: &str,
        title: &str,
        row_count: u64,
        column_count: usize,
    ) -> Result<SheetHandle> {
        let body = json!({
            "properties": { "title": title },
            "sheets": [{
                "properties": {
                    "title": "Setoran",
                    "gridProperties": {
                        "rowCount": row_count,
                        "columnCount": column_count,
                    }
                }
            }]
        });

        let response = self
            .http
            .post(SHEETS_API_BASE)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TahfidzError::sheets_api(format!(
                "spreadsheet create failed ({status}): {body}"
            )));
        }

        let created: CreateSpreadsheetResponse = response.json().await?;
        Ok(SheetHandle {
            spreadsheet_id: created.spreadsheet_id,
            spreadsheet_url: created.spreadsheet_url,
        })
    }

    async fn append_values(
        &self,
        token: &str,
        spreadsheet_id: &str,
        values: Vec<Vec<String>>,
    ) -> Result<()> {
        let url = format!("{SHEETS_API_BASE}/{spreadsheet_id}/values/A1:append");

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .query(&[("valueInputOption", "RAW")])
            .json(&json!({ "values": values }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TahfidzError::sheets_api(format!(
                "values append failed ({status}): {body}"
            )));
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl SheetsExporter for GoogleSheetsClient {
    async fn export(
        &self,
        title: &str,
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> Result<SheetHandle> {
        let token = self.fetch_access_token().await?;

        // header + data + headroom for manual corrections
        let row_count = 1 + rows.len() as u64 + self.headroom_rows;
        let column_count = header.len();

        let handle = self
            .create_spreadsheet(&token, title, row_count, column_count)
            .await?;

        let mut values = Vec::with_capacity(rows.len() + 1);
        values.push(header);
        values.extend(rows);
        self.append_values(&token, &handle.spreadsheet_id, values)
            .await?;

        info!(
            "exported {} rows to spreadsheet {}",
            row_count - 1 - self.headroom_rows,
            handle.spreadsheet_id
        );

        Ok(handle)
    }
}
