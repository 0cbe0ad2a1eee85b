//! Report generation pipeline
//!
//! ```text
//! topic ──► prompt ──► ContentSource ──► normalize ──┐
//!                 (failure/insufficient) ► fallback ─┤
//! caller text ───────────────────────────────────────┴─► truncate ─► parse ─► render ─► write
//! ```

use std::path::PathBuf;

use formlix_ast::{Outline, RenderRequest, ReportFormat};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::Settings;
use crate::error::{ContentError, RenderError, ReportError, Result};
use crate::fallback::fallback;
use crate::governor::truncate;
use crate::normalize::normalize;
use crate::outline::parse_outline;
use crate::prompt::build_prompt;
use crate::render::renderer_for;
use crate::source::{check_sufficient, ContentSource, HttpContentSource};
use crate::storage;

/// Largest accepted page limit
pub const MAX_PAGE_LIMIT: u32 = 20;

/// Where the report text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentOrigin {
    /// Generated by the content backend
    Backend,
    /// Backend failed; fallback text was used
    Fallback,
    /// Supplied by the caller
    Caller,
}

/// Metadata handed to the persistence layer for a generated report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub topic: String,
    pub format: ReportFormat,
    /// Artifact file name inside the reports directory
    pub file_path: String,
    pub page_limit: Option<u32>,
    pub owner_user_id: Option<i64>,
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedReport {
    /// Path of the artifact, `<reports_dir>/<file name>`
    pub path: PathBuf,
    pub record: ReportRecord,
    pub origin: ContentOrigin,
}

/// Drives the pipeline from topic or text to a written artifact
pub struct ReportGenerator {
    settings: Settings,
    source: Box<dyn ContentSource>,
}

impl ReportGenerator {
    /// Create a generator with an explicit content source
    pub fn new(settings: Settings, source: Box<dyn ContentSource>) -> Self {
        Self { settings, source }
    }

    /// Create a generator backed by the configured HTTP backend
    pub fn from_settings(settings: Settings) -> Self {
        let source = HttpContentSource::new(settings.backend.clone());
        Self::new(settings, Box::new(source))
    }

    /// Settings in use
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Generate a report about `topic` using the content backend
    ///
    /// Without a page limit the prompt asks for 15 pages and the returned
    /// text is not truncated; the record keeps `None`.
    pub fn generate_from_topic(
        &self,
        topic: &str,
        format: ReportFormat,
        page_limit: Option<u32>,
        owner_user_id: Option<i64>,
    ) -> Result<GeneratedReport> {
        let topic = validate_topic(topic)?;
        let page_limit = validate_page_limit(page_limit)?;

        let (content, origin) = self.fetch_content(topic, page_limit);
        self.produce(topic, &content, format, page_limit, owner_user_id, origin)
    }

    /// Generate a report from caller-supplied text
    ///
    /// The text is used as-is; without a page limit it is not truncated.
    pub fn generate_from_text(
        &self,
        topic: &str,
        content: &str,
        format: ReportFormat,
        page_limit: Option<u32>,
        owner_user_id: Option<i64>,
    ) -> Result<GeneratedReport> {
        let topic = validate_topic(topic)?;
        if content.trim().is_empty() {
            return Err(ReportError::MissingContent);
        }
        let page_limit = validate_page_limit(page_limit)?;

        self.produce(
            topic,
            content,
            format,
            page_limit,
            owner_user_id,
            ContentOrigin::Caller,
        )
    }

    /// Obtain report text from the backend, falling back on any failure
    pub fn fetch_content(&self, topic: &str, page_limit: Option<u32>) -> (String, ContentOrigin) {
        let prompt = build_prompt(topic, page_limit);

        let result = self.source.generate(&prompt).and_then(|raw| {
            if raw.trim().is_empty() {
                return Err(ContentError::BackendInsufficient(
                    "empty response".to_string(),
                ));
            }
            let text = normalize(&raw);
            check_sufficient(&text)?;
            Ok(text)
        });

        match result {
            Ok(text) => {
                info!(topic, chars = text.chars().count(), "using generated content");
                (text, ContentOrigin::Backend)
            }
            Err(e) => {
                warn!(topic, reason = %e, "using fallback content");
                (fallback(topic), ContentOrigin::Fallback)
            }
        }
    }

    fn produce(
        &self,
        topic: &str,
        content: &str,
        format: ReportFormat,
        page_limit: Option<u32>,
        owner_user_id: Option<i64>,
        origin: ContentOrigin,
    ) -> Result<GeneratedReport> {
        let outline = build_outline(content, page_limit);
        let request = RenderRequest::new(topic, outline, page_limit, format);

        let renderer = renderer_for(format, &self.settings);
        let bytes = renderer.render(&request)?;
        info!(
            renderer = renderer.name(),
            sections = request.outline().len(),
            bytes = bytes.len(),
            "report rendered"
        );

        let file_name = storage::artifact_file_name(topic, format);
        let path = storage::write_artifact(&self.settings.output.reports_dir, &file_name, &bytes)
            .map_err(RenderError::Io)?;

        Ok(GeneratedReport {
            path,
            record: ReportRecord {
                topic: topic.to_string(),
                format,
                file_path: file_name,
                page_limit,
                owner_user_id,
            },
            origin,
        })
    }
}

/// Truncate and parse report text into the outline that gets rendered
pub fn build_outline(text: &str, page_limit: Option<u32>) -> Outline {
    parse_outline(&truncate(text, page_limit))
}

fn validate_topic(topic: &str) -> Result<&str> {
    let topic = topic.trim();
    if topic.is_empty() {
        Err(ReportError::MissingTopic)
    } else {
        Ok(topic)
    }
}

fn validate_page_limit(page_limit: Option<u32>) -> Result<Option<u32>> {
    match page_limit {
        Some(limit) if !(1..=MAX_PAGE_LIMIT).contains(&limit) => {
            Err(ReportError::InvalidPageLimit(limit))
        }
        other => Ok(other),
    }
}
