//! Server-relative URL construction for file names.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Path of the file collection on the server.
pub const FILE_COLLECTION_URL: &str = "/file/";

/// Bytes escaped when a file name is embedded in a URL.
///
/// ASCII alphanumerics and `; , / ? : @ & = + $ - _ . ! ~ * ' ( ) #` pass
/// through unchanged; everything else (space included, and every non-ASCII
/// UTF-8 byte) is percent-encoded. `/` is left unescaped, so a name
/// containing slashes addresses a nested path.
const FILE_NAME_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// Build the server-relative URL for a file name.
pub fn file_url(name: &str) -> String {
    format!(
        "{FILE_COLLECTION_URL}{}",
        utf8_percent_encode(name, FILE_NAME_ESCAPE)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name_passes_through() {
        assert_eq!(file_url("report.pdf"), "/file/report.pdf");
    }

    #[test]
    fn space_is_escaped() {
        assert_eq!(file_url("a b.txt"), "/file/a%20b.txt");
    }

    #[test]
    fn reserved_characters_pass_through() {
        assert_eq!(file_url("a+b&c=d.txt"), "/file/a+b&c=d.txt");
        assert_eq!(file_url("it's(fine)!.txt"), "/file/it's(fine)!.txt");
    }

    #[test]
    fn slash_is_not_escaped() {
        assert_eq!(file_url("backups/2024.tar"), "/file/backups/2024.tar");
    }

    #[test]
    fn quote_and_percent_are_escaped() {
        assert_eq!(file_url(r#"say "hi""#), "/file/say%20%22hi%22");
        assert_eq!(file_url("100%.txt"), "/file/100%25.txt");
    }

    #[test]
    fn non_ascii_is_escaped_as_utf8() {
        assert_eq!(file_url("café.txt"), "/file/caf%C3%A9.txt");
    }

    #[test]
    fn empty_name_yields_collection_url() {
        assert_eq!(file_url(""), FILE_COLLECTION_URL);
    }
}
