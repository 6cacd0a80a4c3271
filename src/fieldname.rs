//
// Formats raw Kiesraad field names as human readable Dutch labels,
// e.g. "AantalGeldigeStemmen" -> "Aantal geldige stemmen".
//
// Lowercases everything, inserts a space before each uppercase
// character and capitalises the first letter again, with the Dutch
// "'s " / "'s-" forms ("'s avonds", "'s-Hertogenbosch") kept intact.
//

pub fn to_human_readable(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        return String::new();
    }

    // insert a space before each uppercase character, lowercasing as we go
    let mut spaced = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        if c.is_uppercase() {
            if !spaced.is_empty() {
                spaced.push(' ');
            }
            spaced.extend(c.to_lowercase());
        } else {
            spaced.push(c);
        }
    }

    let chars: Vec<char> = spaced.chars().collect();
    if starts_with(&chars, &['\'', 's', ' ']) || starts_with(&chars, &['\'', 's', '-']) {
        // "'s avonds" -> "'S Avonds", "'s-hertogenbosch" -> "'S-Hertogenbosch"
        let mut out: String = chars.iter().collect();
        out.replace_range(1..2, "S");
        if let Some(fixed) = capitalize_first_alphanumeric(&out[3..]) {
            out.replace_range(3.., &fixed);
        }
        out
    } else {
        match capitalize_first_alphanumeric(&spaced) {
            Some(fixed) => fixed,
            None => spaced,
        }
    }
}

fn starts_with(chars: &[char], prefix: &[char]) -> bool {
    chars.len() >= prefix.len() && &chars[..prefix.len()] == prefix
}

// None if there is no alphanumeric character at all
fn capitalize_first_alphanumeric(s: &str) -> Option<String> {
    let pos = s.char_indices().find(|&(_, c)| c.is_alphanumeric())?;
    let (idx, c) = pos;
    let mut out = String::with_capacity(s.len());
    out.push_str(&s[..idx]);
    out.extend(c.to_uppercase());
    out.push_str(&s[idx + c.len_utf8()..]);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_camel_case_into_words() {
        assert_eq!(
            to_human_readable("AantalGeldigeStemmen"),
            "Aantal geldige stemmen"
        );
        assert_eq!(
            to_human_readable("AantalOngeldigeStemmen"),
            "Aantal ongeldige stemmen"
        );
        assert_eq!(
            to_human_readable("AantalBlancoStemmen"),
            "Aantal blanco stemmen"
        );
    }

    #[test]
    fn single_words_keep_their_capital() {
        assert_eq!(to_human_readable("Kiesgerechtigden"), "Kiesgerechtigden");
        assert_eq!(to_human_readable("Opkomst"), "Opkomst");
    }

    #[test]
    fn input_is_trimmed() {
        assert_eq!(to_human_readable("  Opkomst  "), "Opkomst");
        assert_eq!(to_human_readable(""), "");
    }

    #[test]
    fn dutch_apostrophe_s_forms() {
        assert_eq!(to_human_readable("'sAvonds"), "'S Avonds");
        assert_eq!(to_human_readable("'s-hertogenbosch"), "'S-Hertogenbosch");
    }
}
