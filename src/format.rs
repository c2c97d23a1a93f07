//! Display formatting for large numbers

const SUFFIXES: [&str; 20] = [
    "M", "B", "T", "Qa", "Qn", "Sx", "Sp", "Oc", "No", "De", "UDe", "DDe", "TDe", "QaDe", "QiDe",
    "SxDe", "SpDe", "OcDe", "NDe", "Vg",
];

/// Abbreviate a magnitude for display: values below one million render
/// plainly, larger values get a two-decimal mantissa and a tiered suffix
/// (M, B, T, ... up to Vg). Purely cosmetic; deterministic per input.
pub fn abbreviate(num: f64) -> String {
    if num < 1e6 {
        return plain(num);
    }

    let mut tier = (num.log10() / 3.0).floor() as usize - 2;
    if tier >= SUFFIXES.len() {
        tier = SUFFIXES.len() - 1;
    }
    let scale = 1000f64.powi(tier as i32 + 2);
    format!("{:.2}{}", num / scale, SUFFIXES[tier])
}

/// Render a small amount without a trailing `.0` when it is whole.
pub fn plain(num: f64) -> String {
    if num.fract() == 0.0 {
        format!("{}", num as i64)
    } else {
        format!("{num}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_one_million_renders_plainly() {
        assert_eq!(abbreviate(0.0), "0");
        assert_eq!(abbreviate(42.0), "42");
        assert_eq!(abbreviate(999_999.0), "999999");
        assert_eq!(abbreviate(2.5), "2.5");
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(abbreviate(1e6), "1.00M");
        assert_eq!(abbreviate(1_500_000.0), "1.50M");
        assert_eq!(abbreviate(2.5e9), "2.50B");
        assert_eq!(abbreviate(1e12), "1.00T");
        assert_eq!(abbreviate(7.25e15), "7.25Qa");
    }

    #[test]
    fn deep_tiers_use_compound_de_suffixes() {
        assert_eq!(abbreviate(2e36), "2.00UDe");
        assert_eq!(abbreviate(1.5e63), "1.50Vg");
    }

    #[test]
    fn beyond_the_last_tier_clamps_to_vg() {
        let rendered = abbreviate(1e70);
        assert!(rendered.ends_with("Vg"), "got {rendered}");
    }
}
