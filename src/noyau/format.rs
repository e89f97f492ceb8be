// src/noyau/format.rs

/// Texte affiché pour un résultat.
///
/// - entier : sans partie décimale ("8")
/// - décimal : plus courte écriture qui se relit à l’identique ("0.30000000000000004")
/// - non fini : "Infinity", "-Infinity", "NaN"
/// - -0 s’affiche "0"
pub fn format_nombre(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }
    format!("{x}")
}
