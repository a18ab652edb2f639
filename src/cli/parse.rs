//! Value parsers for CLI arguments

use ripple_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse an edge given as `U,V` into a pair of vertex indices
pub fn parse_edge(s: &str) -> std::result::Result<(usize, usize), String> {
    let (u, v) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `U,V`, got `{s}`"))?;
    let u = u
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid vertex `{u}`: {e}"))?;
    let v = v
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid vertex `{v}`: {e}"))?;
    Ok((u, v))
}
