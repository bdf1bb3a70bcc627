use crate::error::Result;
use crate::types::{PipelineStages, ResumeRecord};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use tracing::info;

impl ResumeRecord {
    /// Pretty JSON: 2-space indentation, declared field order, non-ASCII kept as-is
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the record as UTF-8 JSON, creating the parent directory if needed.
    ///
    /// Serialization happens before the file is touched, so a failure never
    /// leaves a partial file behind.
    pub fn save_to_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        ensure_parent_dir(path)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// SHA-256 of the source document, hex encoded
pub fn calculate_document_hash(document_bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(document_bytes);
    format!("{:x}", hasher.finalize())
}

/// Dump every pipeline stage into `output_dir`, one file per boundary.
pub fn save_stages(stages: &PipelineStages, output_dir: &Path, input: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    // Stage 1: Raw extracted text
    let text_path = output_dir.join("stage1_raw_text.txt");
    fs::write(&text_path, &stages.raw_text)?;
    info!("  💾 {}", text_path.display());

    // Stage 2: Normalized lines
    let lines_path = output_dir.join("stage2_lines.json");
    fs::write(&lines_path, serde_json::to_string_pretty(&stages.lines)?)?;
    info!("  💾 {} ({} lines)", lines_path.display(), stages.lines.len());

    // Stage 3: Section index
    let sections_path = output_dir.join("stage3_sections.json");
    fs::write(&sections_path, serde_json::to_string_pretty(&stages.sections)?)?;
    info!("  💾 {} ({} sections)", sections_path.display(), stages.sections.len());

    // Stage 4: Final record
    let record_path = output_dir.join("stage4_record.json");
    stages.record.save_to_json(&record_path)?;
    info!("  💾 {}", record_path.display());

    // Summary file: quick reference for validation scripts
    let document_hash = calculate_document_hash(&fs::read(input)?);
    let summary = serde_json::json!({
        "input_document": input.display().to_string(),
        "document_sha256": document_hash,
        "captured_at": chrono::Utc::now().to_rfc3339(),
        "stage_counts": {
            "raw_text_bytes": stages.raw_text.len(),
            "lines": stages.lines.len(),
            "sections": stages.sections.len(),
            "experience_items": stages.record.experience.len(),
            "education_items": stages.record.education.len(),
        }
    });
    let summary_path = output_dir.join("summary.json");
    fs::write(&summary_path, serde_json::to_string_pretty(&summary)?)?;
    info!("  💾 {}", summary_path.display());

    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
