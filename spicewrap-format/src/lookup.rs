//! Token and hierarchy lookups

/// Index of the first item containing `substring`.
///
/// Typically used on the whitespace-split tokens of an instance line to find
/// where the parameter assignments begin.
pub fn index_containing_substring<S: AsRef<str>>(items: &[S], substring: &str) -> Option<usize> {
    items
        .iter()
        .position(|item| item.as_ref().contains(substring))
}

/// Iterator over the top-down prefixes of a slash-delimited path.
///
/// `"a/b/c"` yields `"a"`, `"a/b"`, `"a/b/c"`. Empty segments are kept, so
/// every path yields one prefix per segment.
#[derive(Debug, Clone)]
pub struct HierPrefixes<'a> {
    path: &'a str,
    pos: Option<usize>,
}

impl<'a> Iterator for HierPrefixes<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.pos?;
        match self.path[start..].find('/') {
            Some(offset) => {
                let end = start + offset;
                self.pos = Some(end + 1);
                Some(&self.path[..end])
            }
            None => {
                self.pos = None;
                Some(self.path)
            }
        }
    }
}

/// Enumerate the prefixes of `path` from the top of the hierarchy down
pub fn hier_top_down(path: &str) -> HierPrefixes<'_> {
    HierPrefixes { path, pos: Some(0) }
}
