//! Non-blank line filtering over in-memory lines

/// Iterator yielding each input line stripped of surrounding whitespace,
/// skipping lines that are empty once stripped.
pub struct NonBlank<I> {
    inner: I,
}

impl<I, S> Iterator for NonBlank<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        for raw in self.inner.by_ref() {
            let line = raw.as_ref().trim();
            if !line.is_empty() {
                return Some(line.to_string());
            }
        }
        None
    }
}

/// Wrap an iterator of raw lines into a [`NonBlank`] filter
pub fn non_blank<I, S>(lines: I) -> NonBlank<I::IntoIter>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    NonBlank {
        inner: lines.into_iter(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank_strips_and_skips() {
        let lines = ["  MX_m2  ", "", "\t", "+LP SENPB\r", "   "];
        let out: Vec<String> = non_blank(lines).collect();
        assert_eq!(out, vec!["MX_m2", "+LP SENPB"]);
    }

    #[test]
    fn test_non_blank_empty_input() {
        let out: Vec<String> = non_blank(Vec::<String>::new()).collect();
        assert!(out.is_empty());
    }
}
