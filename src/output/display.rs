//! Player-facing messages
//!
//! Game progress goes to stdout, problems with the player's input to stderr.

use crate::core::{Feedback, Word};
use crate::game::GuessError;
use colored::Colorize;

/// Print the welcome banner
pub fn print_welcome(max_attempts: u32) {
    println!("\n{}", "═".repeat(40).bright_cyan());
    println!("{}", "  Welcome to Gordle!".bright_green().bold());
    println!("{}", "═".repeat(40).bright_cyan());
    println!("You have {max_attempts} attempts to find the word.\n");
}

/// Print the prompt for a guess
pub fn print_prompt(solution_len: usize) {
    println!("Enter a {solution_len}-character guess:");
}

/// Print the feedback of one guess
pub fn print_feedback(feedback: &Feedback) {
    println!("{feedback}");
}

/// Report a guess rejected by the validator
pub fn print_invalid_guess(err: &GuessError) {
    eprintln!("Your attempt is invalid with Gordle's solution! {err}.");
}

/// Report a failure to read the player's guess
pub fn print_read_failure(reason: &str) {
    eprintln!("Gordle failed to read your guess: {reason}");
}

/// Print the victory message
pub fn print_win(attempts: u32, solution: &Word) {
    println!(
        "{}",
        format!(
            "🎉 You won! You found it in {attempts} {}! The word was {solution}.",
            if attempts == 1 { "guess" } else { "guesses" }
        )
        .green()
        .bold()
    );
}

/// Print the defeat message
pub fn print_loss(solution: &Word) {
    println!(
        "{}",
        format!("😞 You've lost! The solution was: {solution}.")
            .red()
            .bold()
    );
}

/// Print the message for a game stopped because input ran out
pub fn print_abandoned(solution: &Word) {
    eprintln!(
        "{}",
        format!("Gordle stopped: no more input. The solution was: {solution}.").yellow()
    );
}
