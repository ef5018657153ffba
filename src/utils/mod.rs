pub(crate) mod dates;

/// Split a sequence into consecutive groups of `size` elements. The last
/// group may be shorter when the input length is not a multiple of `size`.
pub(crate) fn chunk<T>(items: Vec<T>, size: usize) -> Vec<Vec<T>> {
    assert!(size > 0, "chunk size must be positive");
    let mut groups = Vec::with_capacity(items.len().div_ceil(size));
    let mut iter = items.into_iter().peekable();

    while iter.peek().is_some() {
        groups.push(iter.by_ref().take(size).collect());
    }

    groups
}

#[cfg(test)]
mod test {
    use super::chunk;

    #[test]
    fn chunk_exact() {
        assert_eq!(
            chunk((1..=6).collect(), 3),
            vec![vec![1, 2, 3], vec![4, 5, 6]]
        );
    }

    #[test]
    fn chunk_with_remainder() {
        assert_eq!(
            chunk((1..=7).collect(), 3),
            vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]
        );
    }

    #[test]
    fn chunk_empty() {
        assert_eq!(chunk(Vec::<u8>::new(), 7), Vec::<Vec<u8>>::new());
    }
}
