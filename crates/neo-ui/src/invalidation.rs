use std::cell::Cell;

/// "Redraw needed" flag owned by a control.
///
/// Setters raise it when a value actually changes; the host takes it once
/// per frame. Multiple changes between frames coalesce into one redraw.
/// Starts raised so the first frame always draws.
#[derive(Debug)]
pub struct Invalidation {
    dirty: Cell<bool>,
}

impl Invalidation {
    #[inline]
    pub fn new() -> Self {
        Self { dirty: Cell::new(true) }
    }

    #[inline]
    pub fn invalidate(&self) {
        self.dirty.set(true);
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Returns the flag and lowers it.
    #[inline]
    pub fn take(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Stores `value` into `slot`, raising the flag if it differs.
    #[inline]
    pub fn update<T: PartialEq>(&self, slot: &mut T, value: T) {
        if *slot != value {
            *slot = value;
            self.invalidate();
        }
    }
}

impl Default for Invalidation {
    fn default() -> Self {
        Self::new()
    }
}
