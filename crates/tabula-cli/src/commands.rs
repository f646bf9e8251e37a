use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use tabula_analytics::{run_compare, run_rank, run_summary, run_trend};
use tabula_ingest::read_csv_frame;
use tabula_map::{FuzzyAdvisor, SemanticAdvisor};
use tabula_model::{CanonicalDataset, Frame};
use tabula_reason::AnalysisKind;
use tabula_cli::pipeline::{ConfirmedSession, Session};

use crate::cli::{AnalyzeArgs, SignalsArgs};
use crate::prompt::InteractivePrompt;
use crate::render::{capability_table, group_table, print_notes, proposals_table, signals_table};

pub fn run_signals(args: &SignalsArgs) -> Result<()> {
    let frame = load_frame(&args.dataset)?;
    let session = Session::start(frame, None);
    println!("{}", signals_table(&session.signals));
    Ok(())
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let frame = load_frame(&args.dataset)?;

    let advisor: Option<Box<dyn SemanticAdvisor>> = if args.no_advisor {
        None
    } else {
        Some(Box::new(FuzzyAdvisor::new()))
    };
    let session = Session::start(frame, advisor);

    println!("Column signals:");
    println!("{}", signals_table(&session.signals));

    if session.proposals.is_empty() {
        println!("No columns qualified for any canonical role.");
        return Ok(());
    }
    println!("Proposed mappings:");
    println!("{}", proposals_table(&session.proposals));

    let mut prompt = InteractivePrompt;
    let confirmed = session
        .confirm(&mut prompt, args.measure.as_deref())
        .context("build canonical dataset")?;
    info!(active_measure = %confirmed.active_measure(), "canonical dataset ready");

    println!();
    println!("Canonical columns: {}", confirmed.dataset.column_names().join(", "));
    print_report(&confirmed);

    interaction_loop(confirmed)
}

fn load_frame(path: &Path) -> Result<Frame> {
    let frame = read_csv_frame(path)?;
    info!(
        path = %path.display(),
        rows = frame.n_rows(),
        columns = frame.n_columns(),
        "loaded dataset"
    );
    Ok(frame)
}

fn print_report(session: &ConfirmedSession) {
    println!();
    println!("Capabilities for measure '{}':", session.active_measure());
    println!("{}", capability_table(&session.report));
    print_notes(&session.report);
}

enum MenuAction {
    Run(AnalysisKind),
    Switch,
}

/// Offer enabled analyses until the user exits or stdin closes.
fn interaction_loop(mut session: ConfirmedSession) -> Result<()> {
    loop {
        let mut actions: Vec<MenuAction> = AnalysisKind::ALL
            .into_iter()
            .filter(|kind| session.report.is_enabled(*kind))
            .map(MenuAction::Run)
            .collect();
        if session.mapping.measures.len() > 1 {
            actions.push(MenuAction::Switch);
        }

        println!();
        println!("Available actions:");
        for (idx, action) in actions.iter().enumerate() {
            match action {
                MenuAction::Run(kind) => println!("  {}. {kind}", idx + 1),
                MenuAction::Switch => println!("  {}. switch measure", idx + 1),
            }
        }
        println!("  0. exit");
        print!("> ");
        let _ = io::stdout().flush();

        let Some(line) = read_line() else { break };
        let input = line.trim();
        if input == "0" || input.eq_ignore_ascii_case("exit") {
            break;
        }
        let choice = match input.parse::<usize>() {
            Ok(n) if (1..=actions.len()).contains(&n) => &actions[n - 1],
            _ => {
                println!("Pick a number between 0 and {}.", actions.len());
                continue;
            }
        };

        match choice {
            MenuAction::Run(kind) => run_analysis(*kind, &session.dataset),
            MenuAction::Switch => switch_measure(&mut session),
        }
    }
    Ok(())
}

fn run_analysis(kind: AnalysisKind, dataset: &CanonicalDataset) {
    match kind {
        AnalysisKind::Summary => {
            let summary = run_summary(dataset);
            println!("Total {}: {:.2}", dataset.active_measure, summary.total_measure);
            if let Some(count) = summary.entity_count {
                println!("Distinct entities: {count}");
            }
        }
        AnalysisKind::Rank => {
            if let Some(result) = run_rank(dataset) {
                println!("{}", group_table("Entity", &result.ranking));
            }
        }
        AnalysisKind::Trend => {
            if let Some(result) = run_trend(dataset) {
                println!("{}", group_table("Time", &result.points));
            }
        }
        AnalysisKind::Compare => {
            if let Some(result) = run_compare(dataset) {
                for (name, groups) in &result.comparisons {
                    println!("{}", group_table(name, groups));
                }
            }
        }
    }
}

fn switch_measure(session: &mut ConfirmedSession) {
    println!("Confirmed measures:");
    for (idx, measure) in session.mapping.measures.iter().enumerate() {
        let marker = if measure == session.active_measure() {
            " (active)"
        } else {
            ""
        };
        println!("  {}. {measure}{marker}", idx + 1);
    }
    print!("measure> ");
    let _ = io::stdout().flush();
    let Some(line) = read_line() else { return };

    let input = line.trim();
    let target = match input.parse::<usize>() {
        Ok(n) if (1..=session.mapping.measures.len()).contains(&n) => {
            session.mapping.measures[n - 1].clone()
        }
        _ => input.to_string(),
    };

    match session.switch_measure(&target) {
        Ok(()) => {
            info!(active_measure = %target, "switched active measure");
            print_report(session);
        }
        Err(error) => {
            warn!(measure = %target, %error, "measure switch rejected");
            println!("Cannot switch: {error}");
        }
    }
}

/// One line from stdin; `None` on EOF or read error.
fn read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}
