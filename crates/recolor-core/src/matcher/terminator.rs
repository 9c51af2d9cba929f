//! Lookahead that confirms a color token ends its declaration.

/// Whether `rest` (the text right after a color token) reaches `;` or `}`
/// passing only whitespace, `/* ... */` comments and `!annotation` tokens.
pub(crate) fn terminator_follows(rest: &str) -> bool {
    let mut rest = rest;
    loop {
        rest = rest.trim_start();

        if let Some(after) = rest.strip_prefix("/*") {
            match after.find("*/") {
                Some(end) => rest = &after[end + 2..],
                None => return false,
            }
        } else if let Some(after) = rest.strip_prefix('!') {
            let after = after.trim_start();
            let ident_len = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
                .unwrap_or(after.len());
            if ident_len == 0 {
                return false;
            }
            rest = &after[ident_len..];
        } else {
            return rest.starts_with(';') || rest.starts_with('}');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_terminators() {
        assert!(terminator_follows(";"));
        assert!(terminator_follows("}"));
        assert!(terminator_follows("  \t\r\n;"));
    }

    #[test]
    fn annotations_and_comments() {
        assert!(terminator_follows(" !important;"));
        assert!(terminator_follows(" ! important }"));
        assert!(terminator_follows(" /* comment */;"));
        assert!(terminator_follows(" /* a */ !important /* b */ ;"));
    }

    #[test]
    fn rejects_other_content() {
        assert!(!terminator_follows(""));
        assert!(!terminator_follows(" url(x.png);"));
        assert!(!terminator_follows("\";"));
        assert!(!terminator_follows(", blue;"));
        assert!(!terminator_follows(" ! ;"));
        assert!(!terminator_follows(" /* never closed ;"));
    }
}
