/// Quote a label for a mermaid node.
/// Whitespace that would vanish in the diagram is spelled out.
pub fn mermaid_escape(label: &str) -> String {
    let s = match label {
        "" => "[empty]".to_string(),
        " " => "[space]".to_string(),
        label => label
            .chars()
            .map(|c| match c {
                '\n' => "[newline]".to_string(),
                '\t' => "[tab]".to_string(),
                '\r' => "[return]".to_string(),
                c => c.to_string(),
            })
            .collect(),
    };
    format!("\"{}\"", v_htmlescape::escape(&s))
}
