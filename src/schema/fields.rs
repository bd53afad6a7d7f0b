//! Wire keys of a year record.

pub const YEAR: &str = "year";

// ── Financial ───────────────────────────────────────────────────────────────
pub const INCREMENTAL_REVENUE_MM: &str = "incrementalRevenueMM";
pub const SPEND_MM: &str = "spendMM";

// ── Volume ──────────────────────────────────────────────────────────────────
pub const INC_BF_MM: &str = "incBF_MM";
pub const TAIL_BF_MM: &str = "tailBF_MM";
pub const TOTAL_BF_MM: &str = "totalBF_MM";

// ── Pricing ─────────────────────────────────────────────────────────────────
pub const AVG_PRICE_PER_THOUSAND_BF: &str = "avgPricePerThousandBF";
/// Older name for the price column, still found in hand-edited sources.
pub const AVG_PRICE_PER_MBF_ALIAS: &str = "avgPrice_perMBF";

// ── Returns ─────────────────────────────────────────────────────────────────
pub const ROI_PER_DOLLAR: &str = "roiPerDollar";
pub const CUMULATIVE_ROI_PER_DOLLAR: &str = "cumulativeRoiPerDollar";

// ── Market context ──────────────────────────────────────────────────────────
pub const SLB_SHARE_PCT: &str = "slbShare_pct";
pub const VOLUME_PORTION_PCT: &str = "volumePortion_pct";
pub const PRICE_PORTION_PCT: &str = "pricePortion_pct";

// ── Quarterly ───────────────────────────────────────────────────────────────
pub const Q1_BF_MM: &str = "q1BF_MM";
pub const Q2_BF_MM: &str = "q2BF_MM";
pub const Q3_BF_MM: &str = "q3BF_MM";
pub const Q4_BF_MM: &str = "q4BF_MM";
pub const PROJECTS: &str = "projects";

pub const ALL: [&str; 18] = [
    YEAR,
    INCREMENTAL_REVENUE_MM,
    SPEND_MM,
    INC_BF_MM,
    TAIL_BF_MM,
    TOTAL_BF_MM,
    AVG_PRICE_PER_THOUSAND_BF,
    AVG_PRICE_PER_MBF_ALIAS,
    ROI_PER_DOLLAR,
    CUMULATIVE_ROI_PER_DOLLAR,
    SLB_SHARE_PCT,
    VOLUME_PORTION_PCT,
    PRICE_PORTION_PCT,
    Q1_BF_MM,
    Q2_BF_MM,
    Q3_BF_MM,
    Q4_BF_MM,
    PROJECTS,
];

pub fn is_known(key: &str) -> bool {
    ALL.contains(&key)
}
