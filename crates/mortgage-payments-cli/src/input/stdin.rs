use serde_json::Value;
use std::io::{self, Read};

/// Loan terms piped on stdin as JSON, or None when stdin is an
/// interactive terminal or carries only whitespace.
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    parse_piped(&buffer)
}

fn parse_piped(buffer: &str) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    log::debug!("read {} bytes of loan terms from stdin", trimmed.len());
    Ok(Some(serde_json::from_str(trimmed)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_none() {
        assert!(parse_piped("  \n\t").unwrap().is_none());
    }

    #[test]
    fn test_piped_terms_parsed() {
        let value = parse_piped("\n{\"amortization_years\": 25}\n").unwrap().unwrap();
        assert_eq!(value["amortization_years"], 25);
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(parse_piped("principal=300000").is_err());
    }
}
