//! Sliding windows and fixed-size chunks.

/// Segmentation settings for [`windowed`].
///
/// `size` and `step` are at least 1; the constructors and builders clamp
/// zero up to one so a window never stalls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Windowing {
    /// Number of elements per window.
    pub size: usize,
    /// Distance between the starts of consecutive windows.
    pub step: usize,
    /// Whether undersized trailing windows are kept.
    pub partial: bool,
}

impl Windowing {
    /// Windows of `size` sliding by one, full windows only.
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self {
            size: if size == 0 { 1 } else { size },
            step: 1,
            partial: false,
        }
    }

    /// Non-overlapping chunks of `size`, keeping the trailing remainder.
    #[must_use]
    pub const fn chunks(size: usize) -> Self {
        let size = if size == 0 { 1 } else { size };
        Self {
            size,
            step: size,
            partial: true,
        }
    }

    /// Sets the step between window starts.
    #[must_use]
    pub const fn with_step(mut self, step: usize) -> Self {
        self.step = if step == 0 { 1 } else { step };
        self
    }

    /// Sets whether undersized trailing windows are kept.
    #[must_use]
    pub const fn with_partial(mut self, partial: bool) -> Self {
        self.partial = partial;
        self
    }
}

impl Default for Windowing {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Splits the list into windows described by `windowing`.
///
/// Windows start at every multiple of `step`. A window that would run past
/// the end is truncated when `partial` is set and discarded otherwise.
pub fn windowed<T: Clone>(list: Option<&[T]>, windowing: Windowing) -> Vec<Vec<T>> {
    let Some(list) = list else {
        return Vec::new();
    };
    let Windowing {
        size,
        step,
        partial,
    } = windowing;
    let size = size.max(1);
    let step = step.max(1);

    let mut windows = Vec::new();
    let mut start = 0;
    while start < list.len() {
        let end = start.saturating_add(size);
        if end <= list.len() {
            windows.push(list[start..end].to_vec());
        } else if partial {
            windows.push(list[start..].to_vec());
        } else {
            break;
        }
        start = start.saturating_add(step);
    }
    windows
}

/// Splits the list into consecutive chunks of `size`; the last chunk may be
/// shorter.
pub fn chunked<T: Clone>(list: Option<&[T]>, size: usize) -> Vec<Vec<T>> {
    windowed(list, Windowing::chunks(size))
}
