use crate::registry::Registry;
use crate::services::output::Console;

fn title(project: &str) -> String {
    let mut chars = project.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn help_lines(registry: &Registry) -> Vec<String> {
    let rule = "_".repeat(crate::services::output::RULE_WIDTH);
    let mut lines = vec![
        rule.clone(),
        format!("Help Menu -- {} Grader", title(&registry.project)),
        rule,
        "help -> displays this message".to_string(),
        "all -> make clean & make all".to_string(),
        "clean -> make clean".to_string(),
        "make -> make all".to_string(),
        "d | v | verbose | debug -> stop at the first failing test and show its output".to_string(),
        String::new(),
        "Test cases covered".to_string(),
    ];
    for suite in registry.suites() {
        let aliases = if suite.aliases.is_empty() {
            String::new()
        } else {
            format!(" ({})", suite.aliases.join(", "))
        };
        lines.push(format!(
            "\t{}{aliases} -> run all {} tests",
            suite.selector, suite.name
        ));
    }
    lines.push(String::new());
    lines.push("example usage: \"pintgrade all 1 2\"".to_string());
    lines
}

pub fn print_help(registry: &Registry, console: &mut Console) -> std::io::Result<()> {
    for line in help_lines(registry) {
        console.line(&line)?;
    }
    Ok(())
}
