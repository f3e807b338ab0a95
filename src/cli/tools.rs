//! CLI `tools` command: print the operation catalog.

use coinmarket_mcp::dispatch::Registry;

/// Print every registered operation with its parameters, defaults, and rule.
pub fn print_tools() {
    let registry = Registry::builtin();

    println!("Operations ({})", registry.len());
    println!("{}", "=".repeat(40));

    for op in registry.iter() {
        println!();
        println!("{}", op.name);
        println!("  {}", op.description);
        println!("  Path:       {}", op.path);
        if let Some(rule) = &op.rule {
            println!("  Requires:   {}", rule.describe());
        }
        if !op.defaults.is_empty() {
            let defaults: Vec<String> =
                op.defaults.iter().map(|(k, v)| format!("{k}={v}")).collect();
            println!("  Defaults:   {}", defaults.join(", "));
        }
        println!("  Parameters:");
        for param in op.params {
            println!("    {:<20} {}", param.name, param.description);
        }
    }
}
