//! Rendering a `RiskReport` for people (markdown) and programs (JSON).

use dkd_core::tier::format_percent;
use dkd_core::{ALL_FIELDS, ALL_TIERS, Field, RiskReport, TierResult};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::config::CalculatorConfig;

pub const REPORT_TITLE: &str = "Risk of DKD progression";

pub const DISCLAIMER: &str =
    "For research and teaching demonstration only; not the sole basis for clinical decisions.";

/// Per-tier JSON record. Keys match the calculator's historical result
/// dictionary: `lnOR`, `prob`, `error`.
#[derive(Debug, Serialize)]
struct TierResultView {
    #[serde(rename = "lnOR")]
    ln_or: Option<f64>,
    prob: Option<f64>,
    error: Option<String>,
}

impl From<&TierResult> for TierResultView {
    fn from(result: &TierResult) -> Self {
        Self {
            ln_or: result.log_odds(),
            prob: result.probability_percent(),
            error: result.error(),
        }
    }
}

/// Serializes as an object keyed by tier name, in tier order.
struct ReportView<'a>(&'a RiskReport);

impl Serialize for ReportView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ALL_TIERS.len()))?;
        for result in self.0 {
            map.serialize_entry(result.tier.name(), &TierResultView::from(result))?;
        }
        map.end()
    }
}

pub fn render_json(report: &RiskReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ReportView(report))
}

fn percent_cell(result: &TierResult, placeholder: &str) -> String {
    match result.probability_percent() {
        Some(pct) => format!("{} %", format_percent(pct)),
        None => placeholder.to_string(),
    }
}

/// Summary table, then one line per tier that could not be scored.
pub fn render_markdown(report: &RiskReport, config: &CalculatorConfig) -> String {
    let header: Vec<&str> = ALL_TIERS.iter().map(|t| t.name()).collect();
    let cells: Vec<String> = report
        .iter()
        .map(|r| percent_cell(r, &config.absent_placeholder))
        .collect();

    let mut out = String::new();
    out.push_str(&format!("## {REPORT_TITLE}\n\n"));
    out.push_str(&format!("| {} |\n", header.join(" | ")));
    out.push_str(&format!("|{}\n", "---:|".repeat(header.len())));
    out.push_str(&format!("| {} |\n", cells.join(" | ")));

    let errors = report.errors();
    if !errors.is_empty() {
        out.push('\n');
        for err in errors {
            out.push_str(&format!("- {err}\n"));
        }
    }

    out.push_str(&format!("\n_{DISCLAIMER}_\n"));
    out
}

fn field_label(field: Field) -> &'static str {
    match field {
        Field::Age => "Age >= 60",
        Field::HdlC => "HDL-c",
        other => other.name(),
    }
}

/// Field guide with units, shown by `dkd-risk --fields`.
pub fn usage_notes() -> String {
    let mut out = String::from("Measurements (KEY=VALUE, units):\n");
    for &field in ALL_FIELDS {
        out.push_str(&format!(
            "  {:<6} {:<10} {}\n",
            field.name(),
            field_label(field),
            field.unit()
        ));
    }
    out.push_str(
        "\nEnter only the measurements you have. Each risk tier checks its own \
         required fields;\na missing value is reported for that tier and does not \
         affect the others.\n",
    );
    out.push_str("Risk (%) = 1 / (1 + e^(-lnOR)) x 100, two decimals.\n");
    out
}
