//! CLI output helpers
//!
//! Step lines and a completion message, with ASCII fallbacks for terminals
//! without emoji support.

use std::time::Duration;

use console::{Emoji, style};
use indicatif::HumanDuration;

/// Magnifying glass - for scanning
pub static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
/// Palette - for color conversion
pub static PALETTE: Emoji<'_, '_> = Emoji("🎨 ", "");
/// Document - for written files
pub static DOCUMENT: Emoji<'_, '_> = Emoji("📄 ", "");
/// Sparkles - for completion
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

/// Print a step indicator: `[1/3] 🔍 Message`
pub fn print_step(current: usize, total: usize, emoji: Emoji, msg: &str) {
    println!(
        "{} {}{}",
        style(format!("[{current}/{total}]")).bold().dim(),
        emoji,
        msg
    );
}

/// Print completion message: `✨ Done in 2s`
pub fn print_done(elapsed: Duration) {
    println!("{} Done in {}", SPARKLE, HumanDuration(elapsed));
}
