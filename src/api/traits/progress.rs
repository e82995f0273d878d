/// Trait for reporting progress during a pass over the input files.
/// Implementors should provide a method to handle progress updates,
/// where progress is reported as a float between 0.0 and 1.0.
pub trait Progress {
    /// Reports the current progress of the operation.
    ///
    /// # Arguments
    /// * `progress` - A float between 0.0 and 1.0 representing the completion percentage
    fn report_progress(&self, progress: f64);
}

/// Forwards progress updates to a closure.
pub struct ProgressCallback<F>
where
    F: Fn(f64),
{
    callback: F,
}

impl<F> ProgressCallback<F>
where
    F: Fn(f64),
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> Progress for ProgressCallback<F>
where
    F: Fn(f64),
{
    fn report_progress(&self, progress: f64) {
        (self.callback)(progress);
    }
}

/// Discards all progress updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn report_progress(&self, _progress: f64) {}
}

/// Maps the 0.0..=1.0 progress of a sub-task onto a window of a parent reporter.
///
/// Used when one operation runs several passes but reports as a single task.
pub struct ScaledProgress<'a, P: Progress + ?Sized> {
    inner: &'a P,
    offset: f64,
    scale: f64,
}

impl<'a, P: Progress + ?Sized> ScaledProgress<'a, P> {
    /// Creates a reporter which maps `0.0..=1.0` onto `offset..=offset + scale`.
    pub fn new(inner: &'a P, offset: f64, scale: f64) -> Self {
        Self {
            inner,
            offset,
            scale,
        }
    }
}

impl<P: Progress + ?Sized> Progress for ScaledProgress<'_, P> {
    fn report_progress(&self, progress: f64) {
        self.inner
            .report_progress(self.offset + progress.clamp(0.0, 1.0) * self.scale);
    }
}

/// Fraction of `done` out of `total`, clamped to 1.0. An empty total counts as done.
pub fn fraction(done: u64, total: u64) -> f64 {
    if total == 0 {
        1.0
    } else {
        (done as f64 / total as f64).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn callback_receives_updates() {
        let seen = RefCell::new(Vec::new());
        let progress = ProgressCallback::new(|value| seen.borrow_mut().push(value));
        progress.report_progress(0.25);
        progress.report_progress(1.0);
        assert_eq!(*seen.borrow(), vec![0.25, 1.0]);
    }

    #[test]
    fn scaled_progress_maps_into_window() {
        let seen = RefCell::new(Vec::new());
        let parent = ProgressCallback::new(|value| seen.borrow_mut().push(value));
        let second_half = ScaledProgress::new(&parent, 0.5, 0.5);
        second_half.report_progress(0.0);
        second_half.report_progress(0.5);
        second_half.report_progress(2.0);
        assert_eq!(*seen.borrow(), vec![0.5, 0.75, 1.0]);
    }

    #[test]
    fn fraction_handles_empty_total() {
        assert_eq!(fraction(0, 0), 1.0);
        assert_eq!(fraction(5, 10), 0.5);
        assert_eq!(fraction(20, 10), 1.0);
    }
}
