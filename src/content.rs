use std::io::Read;
use std::path::Path;

/// Load the document content from a file path, stdin, or pass a URI through.
///
/// With no input the whole of stdin is read. An input naming an existing file
/// is read from disk; anything else is returned as-is (the URI case).
pub fn load_content(input: Option<&str>, uri: bool) -> anyhow::Result<String> {
    let mut content = match input {
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(path) if Path::new(path).is_file() => std::fs::read_to_string(path)?,
        Some(other) => other.to_string(),
    };
    // The annotation service may balk at non-Latin characters in a URI, so
    // round-trip it through the url parser to get a percent-escaped form.
    if uri {
        let parsed = url::Url::parse(content.trim())
            .map_err(|e| anyhow::anyhow!("invalid content uri: {e}"))?;
        content = parsed.to_string();
    }
    Ok(content)
}
