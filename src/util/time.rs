/// Milliseconds since the UNIX epoch, used to name exported files
pub fn timestamp_millis() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_is_monotonic_enough() {
        let first = timestamp_millis();
        let second = timestamp_millis();
        assert!(first > 0);
        assert!(second >= first);
    }
}
