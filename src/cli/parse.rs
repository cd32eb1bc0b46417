//! Value parsers for CLI arguments
//!
//! Each parser returns the core error so `main` can recover the variant from
//! a clap validation failure.

use wayfinder_core::error::Result;
use wayfinder_core::graph::{BlockedRoad, CoverageMode, Strategy};

/// Parse search strategy from string
pub fn parse_strategy(s: &str) -> Result<Strategy> {
    s.parse()
}

/// Parse coverage mode from string
pub fn parse_coverage_mode(s: &str) -> Result<CoverageMode> {
    s.parse()
}

/// Parse a CITY:CITY blocked road
pub fn parse_blocked_road(s: &str) -> Result<BlockedRoad> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfinder_core::error::WayfinderError;

    #[test]
    fn test_parse_strategy_keeps_variant() {
        let err = parse_strategy("greedy").unwrap_err();
        assert!(matches!(err, WayfinderError::InvalidStrategy { ref value } if value == "greedy"));
    }

    #[test]
    fn test_parse_blocked_road() {
        let road = parse_blocked_road("Gondar:Mekelle").unwrap();
        assert_eq!(road, BlockedRoad::new("Gondar", "Mekelle"));
        assert!(matches!(
            parse_blocked_road("Gondar"),
            Err(WayfinderError::InvalidValue { .. })
        ));
    }
}
