pub use wayfinder_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_format(s: &str) -> wayfinder_core::error::Result<OutputFormat> {
    s.parse()
}
