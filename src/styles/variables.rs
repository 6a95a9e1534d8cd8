/// Color variables shared by both palettes. Themes refer to them as
/// `var(--color-<name>)`.
pub const COLORS: &[(&str, &str)] = &[
    ("white", "#ffffff"),
    ("black", "#121212"),
    ("charcoal", "#36454f"),
    ("gray-200", "#e2e8f0"),
    ("gray-400", "#cbd5e0"),
    ("gray-600", "#718096"),
    ("gray-700", "#4a5568"),
    ("blue-400", "#63b3ed"),
    ("blue-600", "#3182ce"),
    ("blue-700", "#2b6cb0"),
    ("orange-200", "#fbd38d"),
    ("orange-400", "#f6ad55"),
];

pub const SPACING: &[(&str, &str)] = &[
    ("small", "0.5rem"),
    ("medium", "1rem"),
    ("large", "1.5rem"),
    ("huge", "2rem"),
    ("massive", "3rem"),
    ("giant", "4rem"),
];

/// Declarations for `:root`.
pub fn root_variables() -> String {
    let colors = COLORS
        .iter()
        .map(|(name, value)| format!("--color-{}: {};", name, value));
    let spacing = SPACING
        .iter()
        .map(|(name, value)| format!("--spacing-{}: {};", name, value));

    colors.chain(spacing).collect::<Vec<_>>().join(" ")
}
