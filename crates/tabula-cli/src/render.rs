//! Terminal rendering of signals, proposals, reports, and results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};

use tabula_analytics::GroupTotal;
use tabula_model::{ColumnSignal, ProposalSet};
use tabula_reason::{AnalysisKind, CapabilityReport};

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS);
    table
}

pub fn signals_table(signals: &[ColumnSignal]) -> Table {
    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Missing"),
        header_cell("Unique"),
        header_cell("Detail"),
    ]);
    for signal in signals {
        let detail = match (&signal.numeric, &signal.categorical) {
            (Some(n), _) => format!(
                "min {} / max {} / mean {:.2}{}",
                n.min,
                n.max,
                n.mean,
                if n.integer_like { " (integer-like)" } else { "" }
            ),
            (_, Some(c)) => format!("samples: {}", c.sample_values.join(", ")),
            _ => String::new(),
        };
        table.add_row(vec![
            Cell::new(&signal.name),
            Cell::new(signal.inferred_type),
            Cell::new(signal.missing_count).set_alignment(CellAlignment::Right),
            Cell::new(
                signal
                    .unique_count()
                    .map_or_else(|| "-".to_string(), |n| n.to_string()),
            )
            .set_alignment(CellAlignment::Right),
            Cell::new(detail),
        ]);
    }
    table
}

pub fn proposals_table(proposals: &ProposalSet) -> Table {
    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Role"),
        header_cell("Column"),
        header_cell("Confidence"),
        header_cell("Evidence"),
        header_cell("Hint"),
    ]);
    for proposal in proposals.iter() {
        let hint = proposal
            .hint
            .as_ref()
            .map_or_else(String::new, |h| {
                format!("{} ({:.0}%)", h.label, h.confidence * 100.0)
            });
        table.add_row(vec![
            Cell::new(proposal.role),
            Cell::new(&proposal.source_column),
            Cell::new(format!("{:.2}", proposal.confidence))
                .set_alignment(CellAlignment::Right),
            Cell::new(proposal.evidence_summary()),
            Cell::new(hint),
        ]);
    }
    table
}

pub fn capability_table(report: &CapabilityReport) -> Table {
    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Analysis"),
        header_cell("Status"),
        header_cell("Reason"),
    ]);
    for kind in AnalysisKind::ALL {
        let (status, reason) = if report.is_enabled(kind) {
            (Cell::new("enabled").fg(Color::Green), String::new())
        } else {
            (
                Cell::new("disabled").fg(Color::Red),
                report.disabled.get(&kind).cloned().unwrap_or_default(),
            )
        };
        table.add_row(vec![Cell::new(kind), status, Cell::new(reason)]);
    }
    table
}

pub fn group_table(key_header: &str, groups: &[GroupTotal]) -> Table {
    let mut table = styled_table();
    table.set_header(vec![header_cell(key_header), header_cell("Total")]);
    for group in groups {
        table.add_row(vec![
            Cell::new(&group.key),
            Cell::new(format!("{:.2}", group.total)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn print_notes(report: &CapabilityReport) {
    for assumption in &report.assumptions {
        println!("assumption: {assumption}");
    }
    for risk in &report.risks {
        println!("risk: {risk}");
    }
}
