//! Display functions for pipeline and summary output

use console::Style;

use crate::pipeline::RuleEntry;

/// Print a yellow warning line to stderr
pub fn warn(message: &str) {
    eprintln!(
        "{} {}",
        Style::new().bold().yellow().apply_to("Warning:"),
        message
    );
}

/// Print a bold section heading
pub fn heading(text: &str) {
    println!("{}", Style::new().bold().apply_to(text));
}

/// Print an indented label/value field line
pub fn field(label: &str, value: &str) {
    println!("  {} {}", Style::new().bold().apply_to(label), value);
}

/// Print one pipeline rule line at its evaluation position
///
/// Named rules show their registration name; anonymous rules show only the
/// pattern and loader chain.
pub fn print_rule(position: usize, entry: &RuleEntry) {
    let chain = entry.rule.loaders().join(" → ");
    match &entry.name {
        Some(name) => println!(
            "  {}. {}  {}  {}",
            position,
            Style::new().bold().yellow().apply_to(name),
            Style::new().dim().apply_to(entry.rule.test.as_str()),
            Style::new().cyan().apply_to(&chain),
        ),
        None => println!(
            "  {}. {}  {}",
            position,
            Style::new().dim().apply_to(entry.rule.test.as_str()),
            Style::new().cyan().apply_to(&chain),
        ),
    }
}
