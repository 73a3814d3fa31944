//! Extension normalization.
//!
//! Every statistic in this crate is grouped by a normalized extension key:
//! the filename suffix from the last dot onward, dot included. Files without
//! a dot, and dotfiles whose only dot leads the name (`.gitignore`), have no
//! extension and map to the empty string.

/// Extract the normalized extension key from a file name.
///
/// The input is a bare file name, not a path; the caller has already split
/// off the directory component.
///
/// ```
/// use repostatslib::ext_of;
///
/// assert_eq!(ext_of("main.rs"), ".rs");
/// assert_eq!(ext_of("archive.tar.gz"), ".gz");
/// assert_eq!(ext_of("Makefile"), "");
/// assert_eq!(ext_of(".gitignore"), "");
/// ```
pub fn ext_of(file: &str) -> &str {
    match file.rfind('.') {
        Some(idx) if idx > 0 => &file[idx..],
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_extension() {
        assert_eq!(ext_of("stats.py"), ".py");
        assert_eq!(ext_of("lib.rs"), ".rs");
    }

    #[test]
    fn test_last_dot_wins() {
        assert_eq!(ext_of("archive.tar.gz"), ".gz");
        assert_eq!(ext_of("a.b.c.d"), ".d");
    }

    #[test]
    fn test_no_extension() {
        assert_eq!(ext_of("Makefile"), "");
        assert_eq!(ext_of(""), "");
    }

    #[test]
    fn test_dotfiles() {
        assert_eq!(ext_of(".gitignore"), "");
        assert_eq!(ext_of(".bashrc.swp"), ".swp");
    }

    #[test]
    fn test_trailing_dot() {
        assert_eq!(ext_of("name."), ".");
    }
}
