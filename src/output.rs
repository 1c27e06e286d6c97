use colored::*;

use crate::data::Configuration;

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// List the compared configurations with their [A]..[D] labels
pub(crate) fn print_configurations(configs: &[Configuration]) {
    let labels: Vec<char> = ('A'..='Z').collect();

    println!("Configurations:");
    for (i, config) in configs.iter().enumerate() {
        let label = format!("[{}]", labels[i]);
        println!("  {} {}", label.bold(), config.name);
    }
    println!();
    println!("Curves: solid = Seen Object, dashed = Unseen Object");
    println!();
}
