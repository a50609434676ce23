use colored::Colorize;
use hotelbook_core::navigation::Route;
use hotelbook_core::notification::{Notice, NoticeLevel, Notifier};

/// Prints notices to the terminal as they arrive.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => println!("{}", format!("✓ {}", notice.message).green()),
            NoticeLevel::Info => println!("{}", notice.message.bright_blue()),
            NoticeLevel::Warning => eprintln!("{}", format!("! {}", notice.message).yellow()),
            NoticeLevel::Error => eprintln!("{}", format!("✗ {}", notice.message).red()),
        }
    }
}

pub fn redirected(route: &Route) {
    println!("{}", format!("→ {route}").bright_black());
}

pub fn heading(text: &str) {
    println!("{}", text.bright_magenta().bold());
}

pub fn field(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", format!("{label}:").bright_black(), value);
}
