use serde_json::Value;

/// Pretty-print the envelope to stdout, two-space indented.
pub fn print_json(value: &Value) {
    match render(value) {
        Ok(body) => println!("{body}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn render(value: &Value) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
