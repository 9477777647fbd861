//! Tests for `PatternSet` membership and set operations

#[cfg(test)]
mod tests {
    use overlapwfc::algorithm::bitset::PatternSet;

    // Verifies new PatternSet is empty with count 0
    // Verified by initializing bitset with all bits set to 1
    #[test]
    fn test_new_set_empty() {
        let set = PatternSet::new(10);
        assert_eq!(set.count(), 0);
        assert_eq!(set.capacity(), 10);
        assert!(set.is_empty());
        assert_eq!(set.first(), None);
    }

    // Tests insertion, removal and containment checking
    // Verified by removing the bit-setting logic from insert method
    #[test]
    fn test_insert_remove_contains() {
        let mut set = PatternSet::new(10);
        set.insert(5);
        set.insert(0);
        set.insert(42);

        assert!(set.contains(0));
        assert!(set.contains(5));
        assert!(!set.contains(3));
        assert!(!set.contains(42));
        assert_eq!(set.count(), 2);

        assert!(set.remove(5));
        assert!(!set.remove(5));
        assert_eq!(set.to_vec(), vec![0]);
    }

    // Tests intersection and union of two sets
    // Verified by changing intersection operation to union operation
    #[test]
    fn test_intersection_and_union() {
        let mut first = PatternSet::new(10);
        let mut second = PatternSet::new(10);
        for id in [1, 3, 5] {
            first.insert(id);
        }
        for id in [3, 5, 7] {
            second.insert(id);
        }

        let mut common = first.clone();
        common.intersect_with(&second);
        assert_eq!(common.to_vec(), vec![3, 5]);

        let mut union = first.clone();
        union.union_with(&second);
        assert_eq!(union.to_vec(), vec![1, 3, 5, 7]);

        first.intersect_with(&PatternSet::new(10));
        assert!(first.is_empty());
    }

    // Tests creation of a set with every id present
    // Verified by initializing all bits to 0 instead of 1
    #[test]
    fn test_all_ids_present() {
        let set = PatternSet::all(5);
        assert!((0..5).all(|id| set.contains(id)));
        assert_eq!(set.count(), 5);
        assert_eq!(set.first(), Some(0));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    // Tests display lists the present ids
    // Verified by printing the capacity instead of the count
    #[test]
    fn test_display() {
        let mut set = PatternSet::new(4);
        set.insert(2);
        set.insert(3);
        assert_eq!(set.to_string(), "PatternSet(2 patterns: [2, 3])");
    }
}
