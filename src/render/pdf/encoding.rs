//! WinAnsi text encoding for the standard fonts.

use unicode_normalization::UnicodeNormalization;

const REPLACEMENT: u8 = b'?';

/// Encode text as WinAnsi bytes after NFC normalization.
///
/// Control characters become spaces; characters outside the code page
/// become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.nfc().map(encode_char).collect()
}

fn encode_char(c: char) -> u8 {
    match c {
        '\t' | '\n' | '\r' => b' ',
        ' '..='~' => c as u8,
        '\u{A0}'..='\u{FF}' => c as u8,
        '€' => 0x80,
        '‚' => 0x82,
        '„' => 0x84,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        _ => REPLACEMENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(encode_win_ansi("Font 12"), b"Font 12".to_vec());
    }

    #[test]
    fn test_latin1_and_decomposed() {
        assert_eq!(encode_win_ansi("é"), vec![0xE9]);
        // e + combining acute composes to é
        assert_eq!(encode_win_ansi("e\u{301}"), vec![0xE9]);
    }

    #[test]
    fn test_specials_and_replacement() {
        assert_eq!(encode_win_ansi("“x”"), vec![0x93, b'x', 0x94]);
        assert_eq!(encode_win_ansi("漢"), vec![b'?']);
        assert_eq!(encode_win_ansi("a\nb"), b"a b".to_vec());
    }
}
