//! Output formatting for CLI

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format probabilities as a compact fixed-precision list
pub fn format_probabilities(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|p| format!("{p:.3}")).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_probabilities() {
        assert_eq!(format_probabilities(&[0.5, 1.0 / 3.0]), "[0.500, 0.333]");
        assert_eq!(format_probabilities(&[]), "[]");
    }
}
