use crate::core::extractor::extract_field;
use crate::core::formatter::process_json_data;
use crate::core::statistics::{display_statistics, FrequencyTable};
use crate::core::validator::parse_and_validate;
use crate::core::{ConfigProvider, Fetcher};
use crate::domain::model::{DigestSummary, FetchOutcome, FieldReport};
use crate::utils::error::{DigestError, Result};
use std::io::Write;

pub const FOLLOW_UP_QUESTION: &str = "\nWould you like to fetch posts data?";

/// Section heading printed above the statistics of a field.
pub fn field_heading(field: &str) -> String {
    match field {
        "name" => "User Names".to_string(),
        "email" => "Email Domains".to_string(),
        "city" => "Cities".to_string(),
        other => format!("Field: {}", other),
    }
}

/// Fetch → validate → format/extract → report, written to `out`.
pub struct DigestPipeline<F: Fetcher, C: ConfigProvider> {
    fetcher: F,
    config: C,
}

impl<F: Fetcher, C: ConfigProvider> DigestPipeline<F, C> {
    pub fn new(fetcher: F, config: C) -> Self {
        Self { fetcher, config }
    }

    /// Full run. The follow-up fetch happens only when `follow_up` is set.
    pub async fn run<W: Write>(&self, out: &mut W, follow_up: bool) -> Result<DigestSummary> {
        let mut summary = self.run_primary(out).await?;
        if follow_up {
            summary.follow_up_fetched = self.run_follow_up(out).await?;
        }
        self.finish(out)?;
        Ok(summary)
    }

    /// Fetches and reports the primary resource, up to and including the summary block.
    pub async fn run_primary<W: Write>(&self, out: &mut W) -> Result<DigestSummary> {
        let url = self.config.api_endpoint();

        writeln!(out, "=== Advanced JSON Data Processor ===")?;
        writeln!(out, "Fetching data from {}...", url)?;

        let body = self.fetch_body(url).await;
        if body.is_empty() {
            return Err(DigestError::EmptyResponse {
                url: url.to_string(),
            });
        }

        writeln!(out, "\nData fetched successfully!")?;
        writeln!(out, "\n=== Processed Data ===")?;
        writeln!(out, "{}", process_json_data(&body, self.config.max_items()))?;

        let document = parse_and_validate(&body)?;
        tracing::info!("✅ Parsed document from {}", url);

        let mut summary = DigestSummary::default();
        for field in self.config.fields() {
            let extraction = extract_field(&document, field);
            if let Some(e) = &extraction.error {
                eprintln!("{}", e.user_friendly_message());
            }

            writeln!(out, "\n=== {} ===", field_heading(field))?;
            display_statistics(out, &extraction.values, self.config.top_k())?;

            let unique = FrequencyTable::from_sequence(&extraction.values).distinct();
            summary.fields.push(FieldReport {
                field: extraction.field,
                values: extraction.values,
                unique,
            });
        }

        self.write_summary(out, &summary)?;
        Ok(summary)
    }

    /// Fetches and formats the follow-up resource. Failures are reported but not returned.
    pub async fn run_follow_up<W: Write>(&self, out: &mut W) -> Result<bool> {
        let url = self.config.follow_up_endpoint();
        tracing::info!("🔍 Fetching follow-up resource: {}", url);

        let body = self.fetch_body(url).await;
        if body.is_empty() {
            tracing::debug!("Follow-up fetch returned no data, skipping");
            return Ok(false);
        }

        writeln!(out, "\n=== Recent Posts ===")?;
        writeln!(out, "{}", process_json_data(&body, self.config.max_items()))?;
        Ok(true)
    }

    pub fn finish<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "\n=== Processing Complete ===")?;
        out.flush()?;
        Ok(())
    }

    fn write_summary<W: Write>(&self, out: &mut W, summary: &DigestSummary) -> Result<()> {
        writeln!(out, "\n=== Summary ===")?;

        let processed = summary.fields.first().map_or(0, |report| report.values.len());
        writeln!(out, "Total records processed: {}", processed)?;

        for report in &summary.fields {
            writeln!(out, "Unique {} values: {}", report.field, report.unique)?;
        }
        Ok(())
    }

    /// 傳輸錯誤與非 200 狀態都回傳空字串，並輸出到 stderr
    async fn fetch_body(&self, url: &str) -> String {
        match self.fetcher.fetch(url).await {
            Ok(FetchOutcome::Body(body)) => body,
            Ok(FetchOutcome::HttpStatus(status)) => {
                let e = DigestError::HttpStatus { status };
                tracing::debug!("{} from {}", e, url);
                eprintln!("{}", e);
                String::new()
            }
            Err(e) => {
                tracing::debug!("Fetch failed: {}", e);
                eprintln!("{}", e);
                String::new()
            }
        }
    }
}
