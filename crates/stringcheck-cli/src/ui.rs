// Status lines for humans. They go to stderr; stdout carries the report.

use std::sync::OnceLock;

pub static USE_COLOR: OnceLock<bool> = OnceLock::new();

pub fn use_color() -> bool {
    USE_COLOR.get().copied().unwrap_or(false)
}

#[macro_export]
macro_rules! ui_ok {
    ($($arg:tt)*) => {{
        use owo_colors::OwoColorize;
        if $crate::ui::use_color() {
            eprintln!("{} {}", "✔".green(), format!($($arg)*));
        } else {
            eprintln!("✔ {}", format!($($arg)*));
        }
    }};
}

#[macro_export]
macro_rules! ui_info {
    ($($arg:tt)*) => {{
        eprintln!("ℹ {}", format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! ui_warn {
    ($($arg:tt)*) => {{
        use owo_colors::OwoColorize;
        if $crate::ui::use_color() {
            eprintln!("{} {}", "⚠".yellow(), format!($($arg)*));
        } else {
            eprintln!("⚠ {}", format!($($arg)*));
        }
    }};
}
