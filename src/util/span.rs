/// Inclusive range of buffer indices, `[min, max]`.
/// The interior of a field with `N` points is `[1, N]`,
/// ghost cells sit just outside at `0` and `N + 1`.
/// Spans are how the kernel hands out disjoint pieces of work.
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq)]
pub struct Span {
    pub min: usize,
    pub max: usize,
}

impl std::fmt::Display for Span {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> Result<(), std::fmt::Error> {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

impl Span {
    #[inline]
    pub fn new(min: usize, max: usize) -> Self {
        let result = Span { min, max };
        debug_assert!(result.check_validity());
        result
    }

    /// Interior span for a field with `num_points` interior values.
    pub fn interior(num_points: usize) -> Self {
        debug_assert!(num_points >= 1);
        Span::new(1, num_points)
    }

    /// Return the number of indices contained in the instance.
    #[inline]
    pub fn buffer_size(&self) -> usize {
        self.max - self.min + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.min && index <= self.max
    }

    /// Half open range, suitable for slicing.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.min..self.max + 1
    }

    /// Check that max >= min
    pub fn check_validity(&self) -> bool {
        self.min <= self.max
    }

    /// Break the instance into `parts` contiguous spans that cover it exactly.
    /// Sizes differ by at most one, larger pieces first.
    /// If there are fewer indices than parts, every piece holds one index.
    pub fn split(&self, parts: usize) -> Vec<Span> {
        debug_assert!(parts >= 1);
        let n = self.buffer_size();
        let parts = parts.clamp(1, n);
        let base = n / parts;
        let extra = n % parts;

        let mut result = Vec::with_capacity(parts);
        let mut start = self.min;
        for p in 0..parts {
            let width = base + usize::from(p < extra);
            result.push(Span::new(start, start + width - 1));
            start += width;
        }
        debug_assert_eq!(start, self.max + 1);
        result
    }

    /// Break the instance into consecutive spans of `chunk_size` indices,
    /// the last one may be shorter.
    pub fn chunks(&self, chunk_size: usize) -> impl Iterator<Item = Span> {
        debug_assert!(chunk_size >= 1);
        let max = self.max;
        (self.min..=max)
            .step_by(chunk_size)
            .map(move |start| Span::new(start, (start + chunk_size - 1).min(max)))
    }
}
