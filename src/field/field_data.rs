use crate::field::FieldValue;
use crate::math::{DMatrix, DVector, Real};

/// The rank of a field: one snapshot, or a timeseries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum FieldRank {
    /// One value per node.
    Snapshot,
    /// One value per node and per time index.
    Timeseries,
}

/// Errors raised when field data and the mesh or another field disagree.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// A node id beyond the end of the field was requested.
    #[error("node {node} is out of range for a field of {num_nodes} nodes")]
    NodeOutOfRange {
        /// The requested node.
        node: u32,
        /// The number of nodes in the field.
        num_nodes: usize,
    },
    /// The field holds fewer node values than the mesh has nodes.
    #[error("the field holds {found} node values but the mesh has {expected} nodes")]
    TooFewNodes {
        /// The number of mesh nodes.
        expected: usize,
        /// The number of node values in the field.
        found: usize,
    },
    /// Two fields combined elementwise have different shapes.
    #[error("shape mismatch: expected {expected:?} (times, nodes), found {found:?}")]
    ShapeMismatch {
        /// The shape of the first operand.
        expected: (usize, usize),
        /// The shape of the second operand.
        found: (usize, usize),
    },
    /// The operation requires a field of a different rank.
    #[error("expected a {expected:?} field, found a {found:?} field")]
    RankMismatch {
        /// The rank the operation requires.
        expected: FieldRank,
        /// The rank of the given field.
        found: FieldRank,
    },
    /// A timeseries must contain at least one time index.
    #[error("a timeseries must contain at least one time index")]
    EmptyTimeseries,
}

/// Model output at every node of the mesh, indexed by node id.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum FieldData {
    /// One value per node.
    Snapshot(DVector<Real>),
    /// A `num_times × num_nodes` matrix: row `t` holds every node value at
    /// time index `t`.
    Timeseries(DMatrix<Real>),
}

impl FieldData {
    /// A snapshot field from one value per node.
    pub fn snapshot(values: Vec<Real>) -> Self {
        FieldData::Snapshot(DVector::from_vec(values))
    }

    /// A timeseries field from a `num_times × num_nodes` matrix.
    pub fn timeseries(values: DMatrix<Real>) -> Self {
        FieldData::Timeseries(values)
    }

    /// A timeseries field from one row of node values per time index.
    pub fn from_rows(rows: &[Vec<Real>]) -> Result<Self, FieldError> {
        let num_nodes = rows.first().ok_or(FieldError::EmptyTimeseries)?.len();

        if let Some(row) = rows.iter().find(|row| row.len() != num_nodes) {
            return Err(FieldError::ShapeMismatch {
                expected: (rows.len(), num_nodes),
                found: (rows.len(), row.len()),
            });
        }

        Ok(FieldData::Timeseries(DMatrix::from_fn(
            rows.len(),
            num_nodes,
            |t, node| rows[t][node],
        )))
    }

    /// Whether this is a snapshot or a timeseries.
    #[inline]
    pub fn rank(&self) -> FieldRank {
        match self {
            FieldData::Snapshot(_) => FieldRank::Snapshot,
            FieldData::Timeseries(_) => FieldRank::Timeseries,
        }
    }

    /// The number of nodes this field covers.
    #[inline]
    pub fn num_nodes(&self) -> usize {
        match self {
            FieldData::Snapshot(values) => values.len(),
            FieldData::Timeseries(values) => values.ncols(),
        }
    }

    /// The number of time indices, 1 for a snapshot.
    #[inline]
    pub fn num_times(&self) -> usize {
        match self {
            FieldData::Snapshot(_) => 1,
            FieldData::Timeseries(values) => values.nrows(),
        }
    }

    /// The `(num_times, num_nodes)` shape of this field.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.num_times(), self.num_nodes())
    }

    /// Checks that this field holds a value for each of the `num_nodes`
    /// nodes of a mesh.
    pub fn check_covers(&self, num_nodes: usize) -> Result<(), FieldError> {
        if self.num_nodes() < num_nodes {
            Err(FieldError::TooFewNodes {
                expected: num_nodes,
                found: self.num_nodes(),
            })
        } else {
            Ok(())
        }
    }

    /// The value of this field at the given node: a scalar for a snapshot,
    /// the whole time series of that node otherwise.
    pub fn sample(&self, node: u32) -> Result<FieldValue, FieldError> {
        if node as usize >= self.num_nodes() {
            return Err(FieldError::NodeOutOfRange {
                node,
                num_nodes: self.num_nodes(),
            });
        }

        Ok(match self {
            FieldData::Snapshot(values) => FieldValue::scalar(values[node as usize]),
            FieldData::Timeseries(values) => {
                FieldValue::series(values.column(node as usize).into_owned())
            }
        })
    }

    /// The value of a snapshot field at the given node.
    pub fn scalar(&self, node: u32) -> Result<Real, FieldError> {
        match self {
            FieldData::Snapshot(values) => {
                values
                    .get(node as usize)
                    .copied()
                    .ok_or(FieldError::NodeOutOfRange {
                        node,
                        num_nodes: values.len(),
                    })
            }
            FieldData::Timeseries(_) => Err(FieldError::RankMismatch {
                expected: FieldRank::Snapshot,
                found: FieldRank::Timeseries,
            }),
        }
    }

    /// Averages this field over its time axis.
    ///
    /// A snapshot is returned unchanged.
    pub fn time_mean(&self) -> Result<FieldData, FieldError> {
        match self {
            FieldData::Snapshot(_) => Ok(self.clone()),
            FieldData::Timeseries(values) => {
                if values.nrows() == 0 {
                    return Err(FieldError::EmptyTimeseries);
                }

                let num_times = values.nrows() as Real;
                Ok(FieldData::Snapshot(DVector::from_iterator(
                    values.ncols(),
                    values.column_iter().map(|col| col.sum() / num_times),
                )))
            }
        }
    }

    /// The magnitude `sqrt(u² + v²)` of the velocity field `(u, v)`.
    pub fn speed(u: &FieldData, v: &FieldData) -> Result<FieldData, FieldError> {
        u.zip_map(v, |u, v| (u * u + v * v).sqrt())
    }

    /// The elementwise difference `self - other`.
    pub fn difference(&self, other: &FieldData) -> Result<FieldData, FieldError> {
        self.zip_map(other, |a, b| a - b)
    }

    fn zip_map(
        &self,
        other: &FieldData,
        f: impl Fn(Real, Real) -> Real,
    ) -> Result<FieldData, FieldError> {
        if self.shape() != other.shape() {
            return Err(FieldError::ShapeMismatch {
                expected: self.shape(),
                found: other.shape(),
            });
        }

        match (self, other) {
            (FieldData::Snapshot(a), FieldData::Snapshot(b)) => {
                Ok(FieldData::Snapshot(a.zip_map(b, f)))
            }
            (FieldData::Timeseries(a), FieldData::Timeseries(b)) => {
                Ok(FieldData::Timeseries(a.zip_map(b, f)))
            }
            _ => Err(FieldError::RankMismatch {
                expected: self.rank(),
                found: other.rank(),
            }),
        }
    }
}
