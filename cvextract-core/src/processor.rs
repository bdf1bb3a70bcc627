use crate::config::ParsingConfig;
use crate::error::Result;
use crate::preprocessors::{DocumentPreprocessor, Preprocessor};
use crate::rules::{
    extract_contact, extract_education, extract_experience, extract_summary,
    find_section_indices, PatternSet,
};
use crate::types::*;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

/// Simple profiler that collects timings for pipeline steps
pub struct StepProfiler {
    enabled: bool,
    timings: Vec<(String, Duration)>,
}

impl StepProfiler {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            timings: Vec::new(),
        }
    }

    pub fn time_step<F, R>(&mut self, step_name: &str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        if !self.enabled {
            return f();
        }

        let start = Instant::now();
        let result = f();
        let elapsed = start.elapsed();

        self.timings.push((step_name.to_string(), elapsed));
        info!("⏱️  {}: {:.3}ms", step_name, elapsed.as_secs_f64() * 1000.0);

        result
    }

    pub fn timings(&self) -> &[(String, Duration)] {
        &self.timings
    }

    pub fn print_summary(&self) {
        if !self.enabled || self.timings.is_empty() {
            return;
        }

        let total: Duration = self.timings.iter().map(|(_, d)| *d).sum();
        info!("📊 Performance Summary:");
        for (step, duration) in &self.timings {
            let percentage = if total.is_zero() {
                0.0
            } else {
                (duration.as_secs_f64() / total.as_secs_f64()) * 100.0
            };
            info!(
                "   {:.<35} {:.3}ms ({:.1}%)",
                step,
                duration.as_secs_f64() * 1000.0,
                percentage
            );
        }
        info!("   {:.<35} {:.3}ms", "Total", total.as_secs_f64() * 1000.0);
    }
}

/// Runs one CV document through extraction, normalization and the résumé rules.
pub struct ResumeProcessor {
    preprocessor: Box<dyn Preprocessor>,
    patterns: PatternSet,
}

impl ResumeProcessor {
    /// Create ResumeProcessor with full dependency injection
    pub fn new_with_dependencies(
        preprocessor: Box<dyn Preprocessor>,
        config: &ParsingConfig,
    ) -> Result<Self> {
        Ok(Self {
            preprocessor,
            patterns: PatternSet::from_config(config)?,
        })
    }

    /// Convenience constructor picking a backend from the input's file type
    pub fn for_path(input: &Path, config: &ParsingConfig) -> Result<Self> {
        let preprocessor = DocumentPreprocessor::for_path(input)?;
        info!("🔧 Using {}", preprocessor.backend_name());
        Self::new_with_dependencies(Box::new(preprocessor), config)
    }

    /// Process a document on disk into a résumé record
    pub fn process_file(&self, input: &Path) -> Result<ResumeRecord> {
        self.process_file_with_profiler(input, &mut StepProfiler::new(false))
    }

    /// Process a document on disk, timing each stage
    pub fn process_file_with_profiler(
        &self,
        input: &Path,
        profiler: &mut StepProfiler,
    ) -> Result<ResumeRecord> {
        let start_time = Instant::now();
        info!("📄 Processing: {}", input.display());

        let text = profiler.time_step("1. Document → Text", || self.preprocessor.read_text(input))?;
        let lines = profiler.time_step("2. Text → Lines", || self.preprocessor.normalize(&text));
        let sections =
            profiler.time_step("3. Section Location", || find_section_indices(&lines, &self.patterns));
        let record = profiler.time_step("4. Segment Extraction", || {
            self.build_record(&lines, &sections)
        });

        profiler.print_summary();
        info!(
            "⏱️  Total processing time: {:.3}s",
            start_time.elapsed().as_secs_f64()
        );
        Ok(record)
    }

    /// Run the heuristics on already-extracted text
    pub fn process_text(&self, text: &str) -> ResumeRecord {
        let lines = self.preprocessor.normalize(text);
        self.process_lines(&lines)
    }

    /// Run the heuristics on normalized lines
    pub fn process_lines(&self, lines: &[String]) -> ResumeRecord {
        let sections = find_section_indices(lines, &self.patterns);
        self.build_record(lines, &sections)
    }

    /// Process a document and capture all intermediate stage outputs
    pub fn process_file_capture_stages(&self, input: &Path) -> Result<PipelineStages> {
        let raw_text = self.preprocessor.read_text(input)?;
        info!("📋 Stage 1: raw text captured ({} bytes)", raw_text.len());

        let lines = self.preprocessor.normalize(&raw_text);
        info!("📋 Stage 2: {} lines captured", lines.len());

        let sections = find_section_indices(&lines, &self.patterns);
        info!("📋 Stage 3: {} sections located", sections.len());

        let record = self.build_record(&lines, &sections);
        info!(
            "📋 Stage 4: record captured ({} experience, {} education)",
            record.experience.len(),
            record.education.len()
        );

        Ok(PipelineStages {
            raw_text,
            lines,
            sections,
            record,
        })
    }

    /// Aggregate every extractor's output into one record
    fn build_record(&self, lines: &[String], sections: &SectionIndex) -> ResumeRecord {
        let record = ResumeRecord {
            summary: extract_summary(lines, sections, &self.patterns),
            experience: extract_experience(lines, sections, &self.patterns),
            education: extract_education(lines, sections, &self.patterns),
            contact: extract_contact(lines, &self.patterns),
        };
        info!(
            "✅ Extracted {} experience items and {} education entries",
            record.experience.len(),
            record.education.len()
        );
        record
    }
}
