use std::ptr;

/// Opens a gap at the end of a vector and fills it from the back,
/// so a whole batch can be merged in with every existing element moving at most once.
///
/// While this is alive, the vector's memory is split in three:
/// 1. `[0, target.len())` holds the original elements that haven't moved yet.
/// 2. `[target.len(), gap_end)` is uninitialized.
/// 3. `[gap_end, end)` holds the elements already in their final place.
///
/// Moving a tail of originals or placing a new element both shrink the gap from the right.
/// We're done once the gap is empty, at which point `target.len() == gap_end`.
///
/// ## Example
/// Merging `8` at index `1` and `3` at index `2` into `[9, 5, 1]`:
/// 1. Reserve room for two elements: `[9, 5, 1, _, _]`
/// 2. Move the tail starting at index `2`: `[9, 5, _, _, 1]`
/// 3. Place `3`: `[9, 5, _, 3, 1]`
/// 4. Move the tail starting at index `1`: `[9, _, 5, 3, 1]`
/// 5. Place `8`: `[9, 8, 5, 3, 1]`, and the gap is closed.
///
/// If anything panics before [`TailShifter::finish`],
/// the elements that already moved are leaked but never double-dropped.
pub struct TailShifter<'a, T: 'a> {
    target: &'a mut Vec<T>,
    /// The inclusive start of the elements in their final place
    gap_end: usize,
    /// The final length, fixed by the reservation made up front
    end: usize,
}
impl<'a, T: 'a> TailShifter<'a, T> {
    pub fn new(target: &'a mut Vec<T>, incoming: usize) -> Self {
        target.reserve(incoming);
        let end = target.len() + incoming;
        TailShifter {
            target,
            gap_end: end,
            end,
        }
    }
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.gap_end == self.target.len()
    }
    /// Move every original element from `start` onwards to just before the placed ones.
    #[inline]
    pub fn shift_from(&mut self, start: usize) {
        let len = self.target.len();
        assert!(start <= len, "Shift start {} > len {}", start, len);
        let moved = len - start;
        if moved == 0 {
            return;
        }
        // `gap_end >= len`, so the destination never starts before `start`
        let destination = self.gap_end - moved;
        unsafe {
            let base = self.target.as_mut_ptr();
            ptr::copy(base.add(start), base.add(destination), moved);
            self.target.set_len(start);
        }
        self.gap_end = destination;
    }
    /// Place a new element directly before the elements already in their final place.
    #[inline]
    pub fn place(&mut self, value: T) {
        assert!(self.gap_end > self.target.len(), "No room left to place an element");
        self.gap_end -= 1;
        unsafe {
            ptr::write(self.target.as_mut_ptr().add(self.gap_end), value);
        }
    }
    #[inline]
    pub fn finish(self) {
        assert!(self.is_closed(), "Gap of {} left open", self.gap_end - self.target.len());
        unsafe {
            self.target.set_len(self.end);
        }
    }
}
