//! Interactive confirmation prompt.

use std::io::{self, BufRead, Write};

use tabula_map::{Decision, DecisionSource};
use tabula_model::MappingProposal;

/// Stdin-backed decision source for the interactive workflow.
///
/// `y` accepts, `c <name>` substitutes a custom column, everything
/// else rejects. Typos and read failures therefore reject: nothing is
/// ever accepted silently, and no stray input becomes a column name.
pub struct InteractivePrompt;

impl DecisionSource for InteractivePrompt {
    fn decide(&mut self, proposal: &MappingProposal) -> Decision {
        println!("----------------------------------");
        println!("Canonical role  : {}", proposal.role);
        println!("Proposed column : {}", proposal.source_column);
        println!("Confidence      : {:.2}", proposal.confidence);
        println!("Evidence        : {}", proposal.evidence_summary());
        if let Some(hint) = &proposal.hint {
            println!(
                "Hint (advisory) : {} ({:.0}%)",
                hint.label,
                hint.confidence * 100.0
            );
        }
        print!("Accept mapping? (y = accept / n = reject / c <name> = custom column): ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return Decision::Reject;
        }
        parse_decision(&line)
    }
}

fn parse_decision(line: &str) -> Decision {
    let input = line.trim();
    if let Some(name) = input
        .strip_prefix("c ")
        .or_else(|| input.strip_prefix("C "))
    {
        let name = name.trim();
        if name.is_empty() {
            return Decision::Reject;
        }
        return Decision::Custom(name.to_string());
    }
    match input.to_lowercase().as_str() {
        "y" | "yes" => Decision::Accept,
        _ => Decision::Reject,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_maps_to_decisions() {
        assert_eq!(parse_decision("y\n"), Decision::Accept);
        assert_eq!(parse_decision("YES\n"), Decision::Accept);
        assert_eq!(parse_decision("n\n"), Decision::Reject);
        assert_eq!(parse_decision("\n"), Decision::Reject);
        assert_eq!(
            parse_decision("c total_sales \n"),
            Decision::Custom("total_sales".to_string())
        );
        assert_eq!(
            parse_decision("C revenue\n"),
            Decision::Custom("revenue".to_string())
        );
    }

    #[test]
    fn unrecognized_input_rejects_instead_of_becoming_a_column() {
        assert_eq!(parse_decision("ys\n"), Decision::Reject);
        assert_eq!(parse_decision("accept\n"), Decision::Reject);
        assert_eq!(parse_decision("total_sales\n"), Decision::Reject);
        // marker with no column name is not a usable custom decision
        assert_eq!(parse_decision("c \n"), Decision::Reject);
        assert_eq!(parse_decision("c\n"), Decision::Reject);
    }
}
