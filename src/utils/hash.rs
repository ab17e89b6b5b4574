/// Number of hash characters shown in log lines
pub const SHORT_HASH_LEN: usize = 5;

/// Abbreviate an info hash for log output
pub fn short_hash(hash: &str) -> &str {
    match hash.char_indices().nth(SHORT_HASH_LEN) {
        Some((idx, _)) => &hash[..idx],
        None => hash,
    }
}

/// Join hashes the way the client's `--hashes` flag expects them
pub fn join_hashes<S: AsRef<str>>(hashes: &[S]) -> String {
    hashes
        .iter()
        .map(|h| h.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_hash_truncates() {
        assert_eq!(short_hash("0123456789abcdef"), "01234");
    }

    #[test]
    fn test_short_hash_keeps_short_input() {
        assert_eq!(short_hash("abc"), "abc");
        assert_eq!(short_hash(""), "");
    }

    #[test]
    fn test_join_hashes() {
        assert_eq!(join_hashes(&["aaa", "bbb", "ccc"]), "aaa,bbb,ccc");
        assert_eq!(join_hashes(&[String::from("one")]), "one");
        assert_eq!(join_hashes::<&str>(&[]), "");
    }
}
