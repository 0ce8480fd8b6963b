// Build-time validation of the engine line grammar.
use regex::Regex;

// Keep in sync with LINE_PATTERN in src/parser/engine.rs.
const LINE_PATTERN: &str = r#"^\[(?P<timestamp>.*?)\]\[(?P<source>.*?)\]\[(?P<sev_short>.)\] time=".*?" level=(?P<severity>.*?) msg="(?P<message>.*)""#;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/parser/engine.rs");

    if let Err(e) = Regex::new(LINE_PATTERN) {
        panic!("engine line grammar failed to compile: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_pattern_compiles() {
        assert!(Regex::new(LINE_PATTERN).is_ok());
    }
}
