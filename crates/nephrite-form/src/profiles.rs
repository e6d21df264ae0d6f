//! Pre-vetted sample value sets for the entry form. Each profile assigns
//! every required field, and applying one always yields an all-valid
//! form, checked against the full rule set in tests.

/// Names of the shipped profiles, in display order.
pub const PROFILE_NAMES: &[&str] = &["normal", "moderate", "high_risk"];

/// Look up a profile's field assignment. Absent means the name is not
/// registered; callers surface that, they don't ignore it.
pub fn profile(name: &str) -> Option<&'static [(&'static str, f64)]> {
    match name {
        "normal" => Some(NORMAL),
        "moderate" => Some(MODERATE),
        "high_risk" => Some(HIGH_RISK),
        _ => None,
    }
}

/// Typical healthy urinalysis.
const NORMAL: &[(&str, f64)] = &[
    ("gravity", 1.008),
    ("ph", 7.20),
    ("osmo", 321.0),
    ("cond", 12.9),
    ("urea", 95.0),
    ("calc", 1.53),
];

/// Borderline chemistry, no stone expected.
const MODERATE: &[(&str, f64)] = &[
    ("gravity", 1.021),
    ("ph", 4.91),
    ("osmo", 725.0),
    ("cond", 14.0),
    ("urea", 443.0),
    ("calc", 2.45),
];

/// Concentrated, acidic, calcium-heavy sample.
const HIGH_RISK: &[(&str, f64)] = &[
    ("gravity", 1.034),
    ("ph", 5.24),
    ("osmo", 1236.0),
    ("cond", 27.3),
    ("urea", 620.0),
    ("calc", 12.68),
];
