use im::Vector;

/// A variable's domain: the static declaration plus a prunable working copy.
///
/// The static values are fixed at construction and keep their declaration
/// order. The working copy starts identical and is only ever narrowed (by
/// forward checking) or put back (on backtrack, from a snapshot taken
/// before the narrowing). Because the working copy is a persistent
/// [`Vector`], a snapshot is a cheap structural-share clone rather than a
/// deep copy.
#[derive(Debug, Clone)]
pub struct Domain {
    values: Vec<i64>,
    working: Vector<i64>,
}

impl Domain {
    /// Builds a domain from its declared values. The caller is responsible
    /// for having validated that the values are distinct.
    pub fn new(values: Vec<i64>) -> Self {
        let working = values.iter().copied().collect();
        Self { values, working }
    }

    /// The values as declared, in declaration order.
    pub fn static_values(&self) -> &[i64] {
        &self.values
    }

    /// The current working values, always a subsequence of the static ones.
    pub fn working(&self) -> &Vector<i64> {
        &self.working
    }

    pub fn working_len(&self) -> usize {
        self.working.len()
    }

    pub fn is_wiped_out(&self) -> bool {
        self.working.is_empty()
    }

    /// True if `value` is one of the declared values.
    pub fn contains(&self, value: i64) -> bool {
        self.values.contains(&value)
    }

    /// Narrows the working copy to the values satisfying `keep`, returning
    /// the previous working copy so the caller can restore it later.
    pub fn restrict(&mut self, keep: impl Fn(i64) -> bool) -> Vector<i64> {
        let narrowed = self.working.iter().copied().filter(|v| keep(*v)).collect();
        std::mem::replace(&mut self.working, narrowed)
    }

    /// Reinstates a working copy previously returned by [`Domain::restrict`].
    pub fn restore(&mut self, snapshot: Vector<i64>) {
        self.working = snapshot;
    }

    /// Resets the working copy to the full static domain.
    pub fn reset(&mut self) {
        self.working = self.values.iter().copied().collect();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn working_of(domain: &Domain) -> Vec<i64> {
        domain.working().iter().copied().collect()
    }

    #[test]
    fn working_copy_starts_as_the_static_domain() {
        let domain = Domain::new(vec![3, 1, 2]);
        assert_eq!(domain.static_values(), &[3, 1, 2]);
        assert_eq!(working_of(&domain), vec![3, 1, 2]);
        assert_eq!(domain.working_len(), 3);
        assert!(!domain.is_wiped_out());
    }

    #[test]
    fn restrict_narrows_in_declaration_order_and_returns_the_previous_copy() {
        let mut domain = Domain::new(vec![4, 1, 3, 2]);
        let snapshot = domain.restrict(|v| v >= 2);
        assert_eq!(snapshot.iter().copied().collect::<Vec<_>>(), vec![4, 1, 3, 2]);
        assert_eq!(working_of(&domain), vec![4, 3, 2]);

        let snapshot = domain.restrict(|v| v == 0);
        assert_eq!(snapshot.iter().copied().collect::<Vec<_>>(), vec![4, 3, 2]);
        assert!(domain.is_wiped_out());
    }

    #[test]
    fn restore_reinstates_the_snapshot_exactly() {
        let mut domain = Domain::new(vec![1, 2, 3]);
        let snapshot = domain.restrict(|v| v > 2);
        assert_eq!(working_of(&domain), vec![3]);
        domain.restore(snapshot);
        assert_eq!(working_of(&domain), vec![1, 2, 3]);
    }

    #[test]
    fn reset_returns_to_the_full_static_domain() {
        let mut domain = Domain::new(vec![5, 6, 7]);
        let _ = domain.restrict(|_| false);
        assert!(domain.is_wiped_out());
        domain.reset();
        assert_eq!(working_of(&domain), vec![5, 6, 7]);
    }

    #[test]
    fn contains_checks_the_static_domain() {
        let mut domain = Domain::new(vec![1, 2]);
        let _ = domain.restrict(|v| v == 2);
        // 1 was pruned from the working copy but remains a declared value.
        assert!(domain.contains(1));
        assert!(!domain.contains(9));
    }
}
