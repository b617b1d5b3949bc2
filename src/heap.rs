use crate::history::History;
use log::debug;

fn left(parent: usize) -> usize {
    parent * 2 + 1
}
fn right(parent: usize) -> usize {
    parent * 2 + 2
}
fn parent(child: usize) -> usize {
    (child - 1) / 2
}

/// Ordering mode for the heap: which of two values belongs closer to the root.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HeapMode {
    Min,
    Max,
}

impl HeapMode {
    /// True if `a` should sit above `b` in the tree. The comparison is
    /// strict, so equal values never swap; ties keep insertion order.
    pub fn should_rise<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            HeapMode::Min => a < b,
            HeapMode::Max => a > b,
        }
    }

    pub fn flipped(self) -> HeapMode {
        match self {
            HeapMode::Min => HeapMode::Max,
            HeapMode::Max => HeapMode::Min,
        }
    }
}

/// An array-backed binary heap that keeps a snapshot history of every
/// mutation, so callers can step backward and forward through states.
///
/// The array is positional: index 0 is the root, the parent of `i > 0` is at
/// `(i - 1) / 2`, and the children of `i` are at `2i + 1` and `2i + 2`.
/// Every mutating operation records the pre-mutation array as one undo entry
/// and discards any redo entries. Undo and redo only exchange snapshots with
/// the current array; they never run the repair passes.
pub struct HeapEngine<T> {
    elements: Vec<T>,
    mode: HeapMode,
    history: History<T>,
}

impl<T: Ord + Clone> HeapEngine<T> {
    pub fn new(mode: HeapMode) -> Self {
        Self {
            elements: Vec::new(),
            mode,
            history: History::new(),
        }
    }

    /// An engine whose history keeps at most `limit` undo entries.
    pub fn with_history_limit(mode: HeapMode, limit: usize) -> Self {
        Self {
            elements: Vec::new(),
            mode,
            history: History::with_limit(limit),
        }
    }

    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn mode(&self) -> HeapMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Appends `value` and repairs upward until the heap property holds.
    pub fn insert(&mut self, value: T) -> &[T] {
        self.history.record(self.elements.clone());
        self.elements.push(value);
        self.sift_up(self.elements.len() - 1);
        debug!("insert: len = {}", self.elements.len());
        &self.elements
    }

    /// Inserts each value in order, sifting each one up individually.
    ///
    /// The whole batch is one undo entry, captured before any value is
    /// applied; undoing reverts the entire batch. An empty batch is a
    /// complete no-op and records no history entry.
    pub fn insert_many(&mut self, values: &[T]) -> &[T] {
        if values.is_empty() {
            return &self.elements;
        }
        self.history.record(self.elements.clone());
        for value in values.iter() {
            self.elements.push(value.clone());
            self.sift_up(self.elements.len() - 1);
        }
        debug!("insert_many: +{}, len = {}", values.len(), self.elements.len());
        &self.elements
    }

    /// Flips between min- and max-ordering and re-establishes the heap
    /// property for the entire array under the new mode.
    ///
    /// A single pass from the root is not enough after the comparison
    /// inverts; every subtree can violate the new order independently. So
    /// every index from `len / 2` down to 0 is sifted down, highest index
    /// first, so children are already valid heaps before their parent is
    /// repaired.
    pub fn toggle_mode(&mut self) -> &[T] {
        self.history.record(self.elements.clone());
        self.mode = self.mode.flipped();
        debug!("toggle_mode: now {:?}", self.mode);
        for i in (0..=self.elements.len() / 2).rev() {
            self.sift_down(i);
        }
        &self.elements
    }

    /// Restores the array from before the last mutation. The mode is not
    /// part of the snapshot, so undoing a `toggle_mode` brings back the old
    /// array while the flipped mode stays. No-op if there is nothing to
    /// undo.
    pub fn undo(&mut self) -> &[T] {
        if !self.history.undo(&mut self.elements) {
            debug!("undo: history empty, no-op");
        }
        &self.elements
    }

    /// Restores the state discarded by the last undo. No-op if there is
    /// nothing to redo.
    pub fn redo(&mut self) -> &[T] {
        if !self.history.redo(&mut self.elements) {
            debug!("redo: nothing to redo, no-op");
        }
        &self.elements
    }

    fn sift_up(&mut self, index: usize) {
        let mut i = index;
        while i > 0 {
            let parent = parent(i);
            if !self.mode.should_rise(&self.elements[i], &self.elements[parent]) {
                break;
            }
            self.elements.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, index: usize) {
        let mut i = index;
        loop {
            let mut top = i;
            let left = left(i);
            if left < self.elements.len()
                && self.mode.should_rise(&self.elements[left], &self.elements[top])
            {
                top = left;
            }
            let right = right(i);
            if right < self.elements.len()
                && self.mode.should_rise(&self.elements[right], &self.elements[top])
            {
                top = right;
            }
            if top == i {
                break;
            }
            self.elements.swap(i, top);
            i = top;
        }
    }
}

use core::fmt::{Debug, Formatter};

impl<T: Debug> Debug for HeapEngine<T> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "{:?} heap: ", self.mode)?;
        for item in self.elements.iter() {
            write!(fmt, "{:?} ", item)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use crate::Value;
    use log::info;

    fn assert_heap(engine: &HeapEngine<Value>) {
        let elements = engine.elements();
        for i in 1..elements.len() {
            assert!(
                !engine.mode().should_rise(&elements[i], &elements[parent(i)]),
                "heap property violated at index {}: {:?}",
                i,
                elements
            );
        }
    }

    fn sorted(values: &[Value]) -> Vec<Value> {
        let mut copy = values.to_vec();
        copy.sort();
        copy
    }

    #[test]
    fn heap_property_after_inserts() {
        fn case(description: &str, mode: HeapMode, values: &[Value]) {
            let mut engine = HeapEngine::new(mode);
            for &v in values.iter() {
                engine.insert(v);
                assert_heap(&engine);
            }
            info!("{}: {:?}", description, engine);
            assert_eq!(engine.len(), values.len());
            assert_eq!(sorted(engine.elements()), sorted(values));
        }
        init_test();
        case("empty", HeapMode::Min, &[]);
        case("ascending min", HeapMode::Min, &[1, 2, 3, 4, 5, 6, 7]);
        case("descending min", HeapMode::Min, &[7, 6, 5, 4, 3, 2, 1]);
        case("ascending max", HeapMode::Max, &[1, 2, 3, 4, 5, 6, 7]);
        case("mixed max", HeapMode::Max, &[5, -3, 8, 0, 8, 2, -3]);
        case("duplicates", HeapMode::Min, &[4, 4, 4, 4]);
    }

    #[test]
    fn insert_many_is_one_batch() {
        init_test();
        let mut engine: HeapEngine<Value> = HeapEngine::new(HeapMode::Min);
        engine.insert(10);
        engine.insert_many(&[5, 3, 8]);
        assert_heap(&engine);
        assert_eq!(engine.len(), 4);

        // One undo reverts the whole batch, not one element.
        engine.undo();
        assert_eq!(engine.elements(), [10]);
        engine.undo();
        assert!(engine.is_empty());
    }

    #[test]
    fn insert_many_empty_is_a_no_op() {
        init_test();
        let mut engine: HeapEngine<Value> = HeapEngine::new(HeapMode::Min);
        engine.insert_many(&[]);
        assert!(engine.is_empty());
        assert!(!engine.can_undo());
    }

    #[test]
    fn toggle_preserves_multiset_and_flips_mode() {
        fn case(description: &str, mode: HeapMode, values: &[Value]) {
            let mut engine = engine_with(mode, values);
            let before = engine.elements().to_vec();
            engine.toggle_mode();
            info!("{}: {:?}", description, engine);
            assert_eq!(engine.mode(), mode.flipped());
            assert_heap(&engine);
            assert_eq!(sorted(engine.elements()), sorted(&before));
        }
        init_test();
        case("empty", HeapMode::Min, &[]);
        case("single", HeapMode::Min, &[42]);
        case("min to max", HeapMode::Min, &[9, 1, 8, 2, 7, 3, 6, 4, 5]);
        case("max to min", HeapMode::Max, &[1, 5, 1, 5, 1, 5]);
        case("negatives", HeapMode::Min, &[0, -10, 10, -5, 5]);
    }

    #[test]
    fn toggle_twice_keeps_heap_valid() {
        init_test();
        let mut engine = engine_with(HeapMode::Min, &[3, 1, 4, 1, 5, 9, 2, 6]);
        engine.toggle_mode();
        engine.toggle_mode();
        assert_eq!(engine.mode(), HeapMode::Min);
        assert_heap(&engine);
    }

    #[test]
    fn undo_redo_are_exact_inverses() {
        init_test();
        let mut engine = engine_with(HeapMode::Min, &[5, 3, 8]);
        let before = engine.elements().to_vec();

        engine.insert(1);
        let after = engine.elements().to_vec();

        engine.undo();
        assert_eq!(engine.elements(), &before[..]);
        engine.redo();
        assert_eq!(engine.elements(), &after[..]);
    }

    #[test]
    fn new_action_clears_redo() {
        init_test();
        let mut engine = engine_with(HeapMode::Min, &[5, 3]);
        engine.undo();
        assert!(engine.can_redo());

        engine.insert(7);
        assert!(!engine.can_redo());

        engine.undo();
        assert!(engine.can_redo());
        engine.toggle_mode();
        assert!(!engine.can_redo());
    }

    #[test]
    fn undo_redo_on_empty_stacks_change_nothing() {
        init_test();
        let mut engine = engine_with(HeapMode::Min, &[2, 1]);
        while engine.can_undo() {
            engine.undo();
        }
        let at_bottom = engine.elements().to_vec();
        engine.undo();
        assert_eq!(engine.elements(), &at_bottom[..]);
        assert!(engine.can_redo());

        while engine.can_redo() {
            engine.redo();
        }
        let at_top = engine.elements().to_vec();
        engine.redo();
        assert_eq!(engine.elements(), &at_top[..]);
        assert!(!engine.can_redo());
    }

    // The worked example: insert [5, 3, 8, 1] as a min-heap, toggle to max,
    // undo back, redo forward.
    #[test]
    fn min_insert_toggle_undo_redo_example() {
        init_test();
        let mut engine = engine_with(HeapMode::Min, &[5, 3, 8, 1]);
        assert_eq!(engine.elements(), [1, 3, 8, 5]);

        let min_state = engine.elements().to_vec();
        engine.toggle_mode();
        assert_eq!(engine.mode(), HeapMode::Max);
        assert_eq!(engine.elements()[0], 8);
        assert_heap(&engine);
        assert_eq!(sorted(engine.elements()), [1, 3, 5, 8]);
        let max_state = engine.elements().to_vec();

        engine.undo();
        assert_eq!(engine.elements(), &min_state[..]);
        assert_eq!(engine.mode(), HeapMode::Max);

        engine.redo();
        assert_eq!(engine.elements(), &max_state[..]);
    }

    #[test]
    fn history_limit_caps_undo_depth() {
        init_test();
        let mut engine: HeapEngine<Value> = HeapEngine::with_history_limit(HeapMode::Min, 2);
        for v in 0..5 {
            engine.insert(v);
        }
        let mut undos = 0;
        while engine.can_undo() {
            engine.undo();
            undos += 1;
        }
        assert_eq!(undos, 2);
        assert_eq!(engine.len(), 3);
    }
}
