// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic*, `code` and a [link](notes/other.md).\n\n- Bullet point\n- Another item\n1. First\n2. Second\n\n> A quote\n\n---\n\n```swift\nimport Foundation\n\nstruct Point {\n    let x: Double // horizontal\n    let label = \"origin\"\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_swift_source(lines: usize) -> String {
    let mut code = String::new();
    for i in 0..lines {
        match i % 4 {
            0 => code.push_str(&format!("let value{i}: Int = {i} // counter\n")),
            1 => code.push_str(&format!("func step{i}() -> String {{ return \"step {i}\" }}\n")),
            2 => code.push_str("/* block\n   comment */\n"),
            _ => code.push_str("@objc class Widget: NSObject {}\n"),
        }
    }
    code
}
