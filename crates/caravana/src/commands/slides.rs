use colored::Colorize;

use crate::deck::{self, Advance, SlideIndex};

/// How a slide hands over, in words.
fn describe_advance(index: SlideIndex) -> String {
    match deck::definition(index).map(|d| d.advance) {
        Some(Advance::Timed) => format!("{}s", deck::slide_duration(index).as_secs()),
        Some(Advance::OnComplete) => "on completion".to_string(),
        None => String::new(),
    }
}

pub fn run() {
    println!("{}", "Slides".bold());
    println!();
    for (i, def) in deck::DECK.iter().enumerate() {
        println!(
            "  {}  {} {:<40} {}",
            format!("{:>2}", i + 1).yellow(),
            format!("{:<16}", def.id).cyan(),
            def.title,
            describe_advance(i).dimmed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_advance() {
        assert_eq!(describe_advance(0), "13s");
        assert_eq!(describe_advance(2), "22s");
        assert_eq!(describe_advance(5), "on completion");
    }
}
