use crate::cli::Target;

const CPP_HEADER: &str = "/** @file lipsum.inl
 *
 * @brief File containing all of the words used by lipsum::GenerateWord()
 *
 * This file is for inclusion inside a function, containing a vector of strings,
 * each a word in the original sample lipsum.txt
 *
 * Regenerate with lipsum-words from the scripts directory; do not edit by hand.
 *
 * @author LambBread from github.com
 */
";
const CPP_OPEN: &str = "static std::vector<std::string> lipsumVec = {\n";
const CPP_CLOSE: &str = "};\n";

const RUST_HEADER: &str = "// Every word used by the lorem ipsum sample lipsum.txt, in order of
// first appearance. Meant for `include!` where a word slice is expected.
//
// Regenerate with lipsum-words from the scripts directory; do not edit by hand.
//
// Author: LambBread from github.com
";
const RUST_OPEN: &str = "pub static LIPSUM_WORDS: &[&str] = &[\n";
const RUST_CLOSE: &str = "];\n";

/// Renders `words` as an array literal for `target`.
///
/// Each word sits on its own line followed by a comma, the last one included.
pub fn render<S: AsRef<str>>(words: &[S], target: Target) -> String {
    let (header, open, close) = match target {
        Target::Cpp => (CPP_HEADER, CPP_OPEN, CPP_CLOSE),
        Target::Rust => (RUST_HEADER, RUST_OPEN, RUST_CLOSE),
    };

    let mut output = String::new();
    output.push_str(header);
    output.push_str(open);
    for word in words {
        output.push_str(&format!("\"{}\",\n", escape(word.as_ref())));
    }
    output.push_str(close);
    output
}

// Same escapes in both targets.
fn escape(word: &str) -> String {
    let mut escaped = String::with_capacity(word.len());
    for ch in word.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
