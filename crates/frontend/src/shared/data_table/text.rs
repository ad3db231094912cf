//! Нормализация текста для поиска и сортировки.

/// Нижний регистр (Unicode-aware)
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Нижний регистр без диакритики: "Gómez" -> "gomez", "Ñandú" -> "nandu".
///
/// Работает и для разложенной формы (NFD): комбинируемые знаки
/// U+0300..U+036F отбрасываются.
pub fn fold_diacritics(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| !is_combining_mark(*c))
        .map(strip_accent)
        .collect()
}

fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}

fn strip_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'é' | 'è' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'í' | 'ì' | 'î' | 'ï' | 'ī' | 'į' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ø' | 'ō' | 'ő' => 'o',
        'ú' | 'ù' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' | 'ų' => 'u',
        'ý' | 'ÿ' => 'y',
        'ñ' | 'ń' | 'ň' => 'n',
        'ç' | 'ć' | 'č' => 'c',
        'ś' | 'š' => 's',
        'ź' | 'ż' | 'ž' => 'z',
        'ł' => 'l',
        'ř' => 'r',
        'ď' => 'd',
        'ť' => 't',
        _ => c,
    }
}

/// Обрезает текст до `max` символов: длинный текст режется до `max - 3` и
/// получает "...".
pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_diacritics() {
        assert_eq!(fold_diacritics("Ana Gómez"), "ana gomez");
        assert_eq!(fold_diacritics("Ñandú"), "nandu");
        assert_eq!(fold_diacritics("Plomería"), "plomeria");
        assert_eq!(fold_diacritics("LÓPEZ"), "lopez");
    }

    #[test]
    fn test_fold_diacritics_decomposed_form() {
        assert_eq!(fold_diacritics("Ana Go\u{301}mez"), "ana gomez");
        assert_eq!(fold_diacritics("N\u{303}andu\u{301}"), "nandu");
        assert_eq!(
            fold_diacritics("Ana Go\u{301}mez"),
            fold_diacritics("Ana Gómez")
        );
    }

    #[test]
    fn test_fold_case_keeps_accents() {
        assert_eq!(fold_case("Gómez"), "gómez");
    }

    #[test]
    fn test_truncate_chars() {
        let long = "a".repeat(60);
        let cut = truncate_chars(&long, 50);
        assert_eq!(cut.chars().count(), 50);
        assert!(cut.ends_with("..."));
        assert_eq!(truncate_chars("corto", 50), "corto");
        assert_eq!(truncate_chars(&"é".repeat(50), 50), "é".repeat(50));
    }
}
