/// Taille mémoire lisible (B, KB, MB, GB ; base 1024).
pub trait HumanBytes {
    fn human_bytes(&self) -> String;
}

const UNITS: [(&str, f64); 3] = [
    ("GB", 1024.0 * 1024.0 * 1024.0),
    ("MB", 1024.0 * 1024.0),
    ("KB", 1024.0),
];

fn format_bytes(size: f64) -> String {
    UNITS
        .iter()
        .find(|(_, scale)| size >= *scale)
        .map(|(unit, scale)| format!("{:.2} {}", size / scale, unit))
        .unwrap_or_else(|| format!("{} B", size))
}

impl HumanBytes for usize {
    fn human_bytes(&self) -> String {
        format_bytes(*self as f64)
    }
}

impl HumanBytes for u64 {
    fn human_bytes(&self) -> String {
        format_bytes(*self as f64)
    }
}
