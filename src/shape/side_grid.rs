use crate::math::Real;
use crate::shape::{SideColumn, SideElement, SideNode, SideNodeId, SideNodePair};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The zonal cross-section of a mesh at one longitude.
///
/// Owns every side node (stored column by column), the south/north pairs
/// of columns produced by the intersected mesh elements, and the
/// quadrilateral [`SideElement`]s assembled from them.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SideGrid {
    lon0: Real,
    columns: Vec<SideColumn>,
    pairs: Vec<SideNodePair>,
    elements: Vec<SideElement>,
}

impl SideGrid {
    /// An empty cross-section at longitude `lon0`.
    pub fn new(lon0: Real) -> Self {
        Self {
            lon0,
            columns: vec![],
            pairs: vec![],
            elements: vec![],
        }
    }

    /// The longitude of this cross-section.
    #[inline]
    pub fn lon0(&self) -> Real {
        self.lon0
    }

    /// All the columns of side nodes.
    #[inline]
    pub fn columns(&self) -> &[SideColumn] {
        &self.columns
    }

    /// The number of columns of side nodes.
    #[inline]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// The column with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `column` is out of bounds.
    #[inline]
    pub fn column(&self, column: u32) -> &SideColumn {
        &self.columns[column as usize]
    }

    /// The side node with the given identifier, if it exists.
    #[inline]
    pub fn get(&self, id: SideNodeId) -> Option<&SideNode> {
        self.columns.get(id.column as usize)?.get(id.layer)
    }

    /// The side node with the given identifier.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not identify a node of this grid.
    #[inline]
    pub fn node(&self, id: SideNodeId) -> &SideNode {
        &self.columns[id.column as usize].nodes()[id.layer as usize]
    }

    /// The node directly below `id`, or `None` at the bottom of its column.
    #[inline]
    pub fn below(&self, id: SideNodeId) -> Option<SideNodeId> {
        let below = id.next_layer();
        self.get(below).map(|_| below)
    }

    /// The pairs of columns, in the order of the mesh elements that produced
    /// them.
    #[inline]
    pub fn pairs(&self) -> &[SideNodePair] {
        &self.pairs
    }

    /// The quadrilateral elements of this cross-section.
    #[inline]
    pub fn elements(&self) -> &[SideElement] {
        &self.elements
    }

    /// Consumes this grid and returns its elements.
    pub fn into_elements(self) -> Vec<SideElement> {
        self.elements
    }

    /// The sum of the areas of all the elements, in square metres.
    pub fn total_area(&self) -> Real {
        self.elements.iter().map(|e| e.area()).sum()
    }

    /// Stores the two columns bounding one element intersection and pairs
    /// them south to north.
    pub fn push_pair(&mut self, column1: SideColumn, column2: SideColumn) -> SideNodePair {
        let id1 = self.columns.len() as u32;
        let id2 = id1 + 1;
        let pair = SideNodePair::new(id1, column1.surface(), id2, column2.surface());

        self.columns.push(column1);
        self.columns.push(column2);
        self.pairs.push(pair);
        pair
    }

    /// Builds the side elements of every pair, replacing any previously
    /// assembled.
    ///
    /// Each pair is walked down both columns at once, one element per layer,
    /// until either column ends.
    pub fn assemble(&mut self) {
        #[cfg(not(feature = "parallel"))]
        let elements = self
            .pairs
            .iter()
            .flat_map(|pair| self.pair_elements(pair))
            .collect();
        #[cfg(feature = "parallel")]
        let elements = self
            .pairs
            .par_iter()
            .flat_map_iter(|pair| self.pair_elements(pair))
            .collect();

        self.elements = elements;
    }

    fn pair_elements(&self, pair: &SideNodePair) -> Vec<SideElement> {
        let south = self.column(pair.south);
        let north = self.column(pair.north);
        let num_layers = south.len().min(north.len()) as u32;

        if south.len() != north.len() {
            log::trace!(
                "truncating columns {} and {} to {} layers",
                pair.south,
                pair.north,
                num_layers
            );
        }

        (1..num_layers)
            .map(|bottom| {
                let top = bottom - 1;
                let ids = [
                    SideNodeId::new(pair.south, top),
                    SideNodeId::new(pair.north, top),
                    SideNodeId::new(pair.north, bottom),
                    SideNodeId::new(pair.south, bottom),
                ];
                SideElement::new(ids, ids.map(|id| self.node(id)))
            })
            .collect()
    }
}
