use std::fmt;

/// A binary min-heap over a growable array.
///
/// The smallest element according to `Ord` sits at index 0. Children of
/// index `i` live at `2i + 1` and `2i + 2`.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    elements: Vec<T>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self { elements: Vec::new() }
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { elements: Vec::with_capacity(capacity) }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Elements in heap-array order.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    #[inline(always)]
    fn parent(i: usize) -> Option<usize> {
        if i > 0 { Some((i - 1) / 2) } else { None }
    }

    #[inline(always)]
    fn left_child(i: usize) -> usize {
        2 * i + 1
    }

    #[inline(always)]
    fn right_child(i: usize) -> usize {
        2 * i + 2
    }
}

impl<T: Ord> PriorityQueue<T> {
    /// Heapifies `source` bottom-up in linear time.
    pub fn build(source: Vec<T>) -> Self {
        let mut queue = Self { elements: source };
        if let Some(last_parent) = Self::parent(queue.len().saturating_sub(1)) {
            for i in (0..=last_parent).rev() {
                queue.sift_down(i);
            }
        }
        debug_assert!(queue.is_heap());
        queue
    }

    pub fn insert(&mut self, value: T) {
        self.elements.push(value);
        self.sift_up(self.len() - 1);
        debug_assert!(self.is_heap());
    }

    /// Removes and returns the smallest element, or `None` when empty.
    pub fn extract_min(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let last = self.len() - 1;
        self.elements.swap(0, last);
        let min = self.elements.pop();
        self.sift_down(0);

        debug_assert!(self.is_heap());
        min
    }

    /// Checks that no element is smaller than its parent.
    pub fn is_heap(&self) -> bool {
        (1..self.len()).all(|i| {
            let p = (i - 1) / 2;
            self.elements[p] <= self.elements[i]
        })
    }

    fn sift_up(&mut self, mut i: usize) {
        while let Some(p) = Self::parent(i) {
            if self.elements[i] >= self.elements[p] {
                break;
            }
            self.elements.swap(i, p);
            i = p;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.len();
        loop {
            let left = Self::left_child(i);
            let right = Self::right_child(i);
            let mut smallest = i;

            if left < n && self.elements[left] < self.elements[smallest] {
                smallest = left;
            }
            if right < n && self.elements[right] < self.elements[smallest] {
                smallest = right;
            }

            if smallest == i {
                return;
            }

            self.elements.swap(i, smallest);
            i = smallest;
        }
    }
}

/// Elements in heap-array order, separated by `--`.
impl<T: fmt::Display> fmt::Display for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, "--")?;
            }
            write!(f, "{}", x)?;
        }
        Ok(())
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests;
