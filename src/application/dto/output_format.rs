/// Output formats supported by the report renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Full report as pretty-printed JSON
    Json,
    /// Score table with a flagged-dependencies section
    Markdown,
    /// Standalone SVG scatter plot (ecosystem vs. currency)
    Svg,
}
