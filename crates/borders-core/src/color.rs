// crates/borders-core/src/color.rs
use sha2::{Digest, Sha256};

/// Number of trailing hex digits of the digest used as the color.
const COLOR_HEX_DIGITS: usize = 6;

/// Derives a stable `#rrggbb` fill color from a boundary name.
///
/// The color is the last six hex digits of the SHA-256 digest of the UTF-8
/// encoded name, so equal names always share a color and no lookup table is
/// needed.
///
/// # Examples
/// ```rust
/// use borders_core::color::name_to_color;
///
/// let c = name_to_color("Andorra");
/// assert_eq!(c.len(), 7);
/// assert!(c.starts_with('#'));
/// assert_eq!(c, name_to_color("Andorra"));
/// ```
pub fn name_to_color(name: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    format!("#{}", &digest[digest.len() - COLOR_HEX_DIGITS..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_uses_tail_of_known_digest() {
        // sha256("") = e3b0c442...7852b855
        assert_eq!(name_to_color(""), "#52b855");
    }

    #[test]
    fn colors_are_lowercase_hex() {
        for name in ["Andorra", "France_Ile-de-France", "Україна"] {
            let c = name_to_color(name);
            assert!(c[1..].chars().all(|ch| matches!(ch, '0'..='9' | 'a'..='f')), "{c}");
        }
    }

    #[test]
    fn different_names_usually_differ() {
        assert_ne!(name_to_color("Andorra"), name_to_color("Monaco"));
    }
}
