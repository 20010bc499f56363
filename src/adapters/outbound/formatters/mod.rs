pub mod json_formatter;
pub mod markdown_formatter;
pub mod svg_formatter;

pub use json_formatter::JsonFormatter;
pub use markdown_formatter::MarkdownFormatter;
pub use svg_formatter::SvgPlotFormatter;
