pub(crate) trait StrExt {
    fn starts_with_ignore_case(&self, start: &str) -> bool;

    /// Byte index of the first ASCII case-insensitive occurrence of `needle`
    /// at or after `from`.
    fn find_ignore_case(&self, needle: &str, from: usize) -> Option<usize>;
}

impl StrExt for str {
    fn starts_with_ignore_case(&self, start: &str) -> bool {
        self.len() >= start.len()
            && self.as_bytes()[..start.len()].eq_ignore_ascii_case(start.as_bytes())
    }

    fn find_ignore_case(&self, needle: &str, from: usize) -> Option<usize> {
        let haystack = self.as_bytes().get(from..)?;
        let needle = needle.as_bytes();

        if needle.is_empty() {
            return Some(from);
        }
        // Needles are ASCII, so every match lands on a char boundary.
        haystack
            .windows(needle.len())
            .position(|window| window.eq_ignore_ascii_case(needle))
            .map(|position| from + position)
    }
}
