//! End-to-end extraction pipeline.
//!
//! Read the transcript, annotate it, write the output table. The binary and
//! the integration tests both go through [`run_extraction`].

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::detectors::{annotate, InsightRules};
use crate::table::Table;

#[derive(Debug, Clone, Serialize)]
pub struct ExtractionSummary {
    pub rows: usize,
    pub dialogues: usize,
    pub greetings: usize,
    pub farewells: usize,
    pub introductions: usize,
    pub companies: usize,
    pub managers_ok: usize,
}

pub fn summarize(table: &Table) -> ExtractionSummary {
    let dialogues: HashSet<&str> = table.rows.iter().map(|r| r.dlg_id.as_str()).collect();
    ExtractionSummary {
        rows: table.rows.len(),
        dialogues: dialogues.len(),
        greetings: table
            .rows
            .iter()
            .filter(|r| r.insight.greeting.is_some())
            .count(),
        farewells: table
            .rows
            .iter()
            .filter(|r| r.insight.farewell.is_some())
            .count(),
        introductions: table
            .rows
            .iter()
            .filter(|r| r.insight.introduce.is_some())
            .count(),
        companies: table
            .rows
            .iter()
            .filter(|r| r.insight.company_name.is_some())
            .count(),
        managers_ok: table
            .rows
            .iter()
            .filter(|r| r.insight.manager_is_ok == Some(true))
            .count(),
    }
}

pub fn run_extraction(input: &Path, out: &Path) -> Result<ExtractionSummary> {
    let rules = InsightRules::new()?;
    let mut table =
        Table::read_csv(input).with_context(|| format!("reading {}", input.display()))?;
    tracing::info!(rows = table.rows.len(), "loaded transcript table");

    annotate(&mut table, &rules);
    let summary = summarize(&table);
    tracing::debug!(
        greetings = summary.greetings,
        farewells = summary.farewells,
        introductions = summary.introductions,
        companies = summary.companies,
        "detectors finished"
    );

    table
        .write_csv(out)
        .with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(
        dialogues = summary.dialogues,
        managers_ok = summary.managers_ok,
        "extraction finished"
    );
    Ok(summary)
}
