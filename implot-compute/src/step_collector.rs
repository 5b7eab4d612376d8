/// A sink for the steps taken by an algorithm, such as the rewrite rules applied by the
/// simplifier.
///
/// Pass `&mut ()` to discard the steps, or a `&mut Vec<S>` to record them in the order they were
/// taken.
pub trait StepCollector<S> {
    /// Records a step.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}

/// Counts the steps instead of storing them.
impl<S> StepCollector<S> for usize {
    #[inline]
    fn push(&mut self, _: S) {
        *self += 1;
    }
}
