//! Text reports for standings and rounds

use swiss_core::Standing;

use crate::rounds::RoundPlan;

/// Standings table, best first.
pub fn standings_report(title: &str, standings: &[Standing]) -> String {
    let mut report = String::new();
    report.push_str(&format!("=== Standings: {} ===\n", title));
    report.push_str(&format!(
        "{:>4} {:>6} {:<24} {:>5} {:>6} {:>5} {:>4}\n",
        "Rank", "Id", "Player", "Wins", "Losses", "Games", "Bye"
    ));
    report.push_str(&"-".repeat(60));
    report.push('\n');

    for (rank, s) in standings.iter().enumerate() {
        report.push_str(&format!(
            "{:>4} {:>6} {:<24} {:>5} {:>6} {:>5} {:>4}\n",
            rank + 1,
            s.id.to_string(),
            s.name,
            s.wins,
            s.losses(),
            s.matches_played,
            if s.had_bye { "yes" } else { "" }
        ));
    }

    report
}

/// Pairings of one round, board by board.
pub fn round_report(number: u32, plan: &RoundPlan) -> String {
    let mut report = String::new();
    report.push_str(&format!("=== Round {} ===\n", number));

    for (board, row) in plan.pairings.iter().enumerate() {
        report.push_str(&format!(
            "Board {:>2}: {:>6} {:<20} vs {:>6} {:<20}\n",
            board + 1,
            row.id_a.to_string(),
            row.name_a,
            row.id_b.to_string(),
            row.name_b
        ));
    }
    if let Some(bye) = &plan.bye {
        report.push_str(&format!("Bye:      {:>6} {}\n", bye.id.to_string(), bye.name));
    }

    report
}
