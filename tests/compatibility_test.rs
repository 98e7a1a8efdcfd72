use shelfsort::core::{KeyAccessor, fold_key};
use shelfsort::prelude::*;

// Simulate an external column store that keeps folded authors in one flat buffer.
struct FlatAuthorColumn {
    data: String,
    offsets: Vec<usize>,
}

impl FlatAuthorColumn {
    fn new(authors: &[&str]) -> Self {
        let mut data = String::new();
        let mut offsets = vec![0];
        for author in authors {
            data.push_str(&fold_key(author));
            offsets.push(data.len());
        }
        Self { data, offsets }
    }
}

// Proves the trait is implementable by "outside crates".
impl KeyAccessor for FlatAuthorColumn {
    fn get_key(&self, index: usize) -> &str {
        &self.data[self.offsets[index]..self.offsets[index + 1]]
    }

    fn len(&self) -> usize {
        self.offsets.len() - 1
    }
}

#[test]
fn test_external_struct_compatibility() {
    let column = FlatAuthorColumn::new(&["Orwell", "asimov", "Herbert", "ASIMOV"]);
    let indices = merge_sort(&column);

    // sorted: asimov (1), ASIMOV (3), herbert (2), orwell (0)
    assert_eq!(indices, vec![1, 3, 2, 0]);
}

#[test]
fn test_external_struct_bounds() {
    let column = FlatAuthorColumn::new(&["Asimov", "asimov", "Herbert", "Orwell"]);

    assert_eq!(equal_range(&column, "ASIMOV"), 0..2);
    assert_eq!(equal_range(&column, "herbert"), 2..3);
    assert_eq!(equal_range(&column, "Le Guin"), 3..3);
}

#[test]
fn test_vec_deque_and_refs() {
    use std::collections::VecDeque;

    let owned = vec![
        Record::new("Emma", "Jane Austen"),
        Record::new("Dune", "Frank Herbert"),
    ];
    let deque: VecDeque<Record> = owned.iter().cloned().collect();
    assert_eq!(merge_sort(&deque), vec![1, 0]);

    let borrowed: Vec<&Record> = owned.iter().collect();
    let sorted = sort_records(&borrowed);
    assert_eq!(sorted[0].title(), "Dune");
    assert_eq!(find_range(&sorted, "jane austen").len(), 1);
}
