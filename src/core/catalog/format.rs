//! Display formatting for catalog values.

use super::models::MAX_STAT;

/// `"mr-mime"` -> `"Mr Mime"`.
pub fn display_name(name: &str) -> String {
    name.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Zero-padded dex number, e.g. `#006`.
pub fn dex_number(id: u32) -> String {
    format!("#{id:03}")
}

/// Short label for an API stat name. Unknown names pass through.
pub fn stat_label(stat: &str) -> &str {
    match stat {
        "hp" => "HP",
        "attack" => "Attack",
        "defense" => "Defense",
        "special-attack" => "Sp. Atk",
        "special-defense" => "Sp. Def",
        "speed" => "Speed",
        other => other,
    }
}

/// Fraction of the maximum base stat, clamped to `0.0..=1.0`.
pub fn stat_ratio(value: u8) -> f64 {
    (f64::from(value) / f64::from(MAX_STAT)).min(1.0)
}

/// Decimetres to a metre string.
pub fn height_m(decimetres: u32) -> String {
    format!("{:.1} m", f64::from(decimetres) / 10.0)
}

/// Hectograms to a kilogram string.
pub fn weight_kg(hectograms: u32) -> String {
    format!("{:.1} kg", f64::from(hectograms) / 10.0)
}
