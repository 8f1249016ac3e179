use colored::Colorize;

pub fn run() {
    println!(
        "{} {}",
        crate::deck::content::TITLE.bold().yellow(),
        env!("CARGO_PKG_VERSION")
    );
    println!("{}", crate::deck::content::TAGLINE.dimmed());
}
