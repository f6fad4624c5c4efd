//! O(n) performance verification tests for TokenStream

use crate::template::engine::tokenize::TokenStream;

fn with_step_counter<F: FnOnce()>(f: F) -> usize {
    use crate::template::engine::tokenize::test_counter;
    test_counter::reset();
    f();
    test_counter::get()
}

fn steps_per_byte(text: &str) -> f64 {
    let steps = with_step_counter(|| {
        let mut stream = TokenStream::new(text);
        while stream.next().is_some() {}
    });
    steps as f64 / text.len() as f64
}

#[test]
fn test_tokenstream_linear_in_token_count() {
    for count in [100, 1000, 10000] {
        let text = (0..count)
            .map(|i| format!("<td>{{{{field{}}}}}</td>", i))
            .collect::<String>();
        let spb = steps_per_byte(&text);
        assert!(spb <= 2.0, "Steps-per-byte {} exceeded 2.0 for {} tokens", spb, count);
    }
}

#[test]
fn test_tokenstream_worst_case_single_braces() {
    let text = "{ ".repeat(1000);
    let spb = steps_per_byte(&text);
    assert!(spb <= 2.0, "Steps-per-byte {} exceeded 2.0 for fallback-heavy input", spb);
}

#[test]
fn test_tokenstream_worst_case_rbrace_inside_tokens() {
    let text = (0..500).map(|_| "{{a}b}c}}").collect::<String>();
    let spb = steps_per_byte(&text);
    assert!(spb <= 2.0, "Steps-per-byte {} exceeded 2.0 for brace-heavy tokens", spb);
}

#[test]
fn test_tokenstream_worst_case_nested_braces_pattern() {
    let text = "{{{ ".repeat(500) + &"}}} ".repeat(500);
    let spb = steps_per_byte(&text);
    assert!(spb <= 2.0, "Steps-per-byte {} exceeded 2.0 for nested brace pattern", spb);
}
