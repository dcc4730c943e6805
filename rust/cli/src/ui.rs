//! UI helper functions for terminal output formatting.

use std::io::Write;

use blackjack_engine::round::Round;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Formats a reward with an explicit sign, e.g. `+1.5` or `-2.0`.
pub fn format_reward(reward: f64) -> String {
    if reward > 0.0 {
        format!("+{:.1}", reward)
    } else {
        format!("{:.1}", reward)
    }
}

/// Percentage of `part` in `total`, `0.0` for an empty total.
pub fn percent(part: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(part) * 100.0 / f64::from(total)
    }
}

/// Prints the player's hands, marking the one waiting for an action.
pub fn write_table(out: &mut dyn Write, round: &Round) -> std::io::Result<()> {
    writeln!(out, "Dealer shows: {}", round.dealer_upcard())?;
    let active = round.active_index();
    for (i, hand) in round.player_hands().iter().enumerate() {
        let marker = if active == Some(i) { ">" } else { " " };
        writeln!(out, "{} Hand {}: {}", marker, i + 1, hand)?;
    }
    Ok(())
}

/// Prints the dealer's final hand and every hand's settlement.
pub fn write_settlement(out: &mut dyn Write, round: &Round) -> std::io::Result<()> {
    writeln!(out, "Dealer: {}", round.dealer_hand())?;
    for (i, (hand, result)) in round
        .player_hands()
        .iter()
        .zip(round.results())
        .enumerate()
    {
        writeln!(
            out,
            "Hand {}: {} -> {} ({})",
            i + 1,
            hand,
            result.outcome,
            format_reward(result.reward)
        )?;
    }
    writeln!(
        out,
        "Result: {}, net {}",
        round.outcome(),
        format_reward(round.reward())
    )
}
