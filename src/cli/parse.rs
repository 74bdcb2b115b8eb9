use graphwalk_core::graph::AlgorithmKind;
use graphwalk_core::maze::Juncture;

/// Parse juncture coordinates from `x,y`
pub fn parse_juncture(s: &str) -> std::result::Result<Juncture, String> {
    s.parse::<Juncture>().map_err(|e| e.to_string())
}

/// Parse algorithm name from string
pub fn parse_algorithm(s: &str) -> std::result::Result<AlgorithmKind, String> {
    s.parse::<AlgorithmKind>().map_err(|e| e.to_string())
}
