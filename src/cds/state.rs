use crate::datastructures::BitSet;

/// Partial assignment of the search: `selected` is the growing connected set, `discarded`
/// holds the vertices it must never contain. Everything else is still available.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PartialSolution {
    selected: BitSet,
    discarded: BitSet,
}

impl PartialSolution {
    pub fn new(selected: BitSet, discarded: BitSet) -> Self {
        assert_eq!(selected.len(), discarded.len());
        Self {
            selected,
            discarded,
        }
    }

    pub fn with_order(order: usize) -> Self {
        Self::new(BitSet::new(order), BitSet::new(order))
    }

    pub fn from_seed(order: usize, selected: &[usize], discarded: &[usize]) -> Self {
        Self::new(
            BitSet::from_slice(order, selected),
            BitSet::from_slice(order, discarded),
        )
    }

    pub fn order(&self) -> usize {
        self.selected.len()
    }

    pub fn selected(&self) -> &BitSet {
        &self.selected
    }

    pub fn discarded(&self) -> &BitSet {
        &self.discarded
    }

    pub fn into_selected(self) -> BitSet {
        self.selected
    }

    pub fn is_selected(&self, v: usize) -> bool {
        self.selected[v]
    }

    pub fn is_discarded(&self, v: usize) -> bool {
        self.discarded[v]
    }

    pub fn is_available(&self, v: usize) -> bool {
        !self.selected[v] && !self.discarded[v]
    }

    /// Some vertex is both selected and discarded.
    pub fn is_contradictory(&self) -> bool {
        self.selected.intersects_with(&self.discarded)
    }

    /// `V - S - D`
    pub fn available(&self) -> BitSet {
        let mut available = BitSet::new_all_set(self.order());
        available.and_not(&self.selected);
        available.and_not(&self.discarded);
        available
    }

    /// `V - D`, the vertices a completion may still use.
    pub fn usable(&self) -> BitSet {
        self.discarded.complement()
    }

    pub fn select(&mut self, v: usize) {
        self.selected.set_bit(v);
    }

    pub fn discard(&mut self, v: usize) {
        self.discarded.set_bit(v);
    }

    /// Copy of `self` with `select` added to the selected and `discard` to the discarded
    /// vertices. Callers list vertices to select in an order that keeps the selection
    /// connected.
    pub fn fork<I, J>(&self, select: I, discard: J) -> Self
    where
        I: IntoIterator<Item = usize>,
        J: IntoIterator<Item = usize>,
    {
        let mut child = self.clone();
        select.into_iter().for_each(|v| child.select(v));
        discard.into_iter().for_each(|v| child.discard(v));
        child
    }
}
