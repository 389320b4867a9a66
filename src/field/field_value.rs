use crate::field::FieldRank;
use crate::math::{DVector, Real};

/// The value of a field at one point: a scalar, or a whole time series.
///
/// Both cases are stored as a vector (of length 1 for scalars) so that
/// interpolation and averaging share one implementation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct FieldValue {
    rank: FieldRank,
    values: DVector<Real>,
}

impl FieldValue {
    /// A scalar value, as sampled from a snapshot.
    pub fn scalar(value: Real) -> Self {
        Self {
            rank: FieldRank::Snapshot,
            values: DVector::from_element(1, value),
        }
    }

    /// A time series, as sampled from a timeseries.
    pub fn series(values: DVector<Real>) -> Self {
        Self {
            rank: FieldRank::Timeseries,
            values,
        }
    }

    /// The rank of the field this value was sampled from.
    #[inline]
    pub fn rank(&self) -> FieldRank {
        self.rank
    }

    /// `true` if this value was sampled from a snapshot.
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.rank == FieldRank::Snapshot
    }

    /// The scalar value, or `None` for a time series.
    #[inline]
    pub fn as_scalar(&self) -> Option<Real> {
        if self.is_scalar() {
            Some(self.values[0])
        } else {
            None
        }
    }

    /// The values: one for a scalar, one per time index otherwise.
    #[inline]
    pub fn as_slice(&self) -> &[Real] {
        self.values.as_slice()
    }

    /// The number of time indices, 1 for a scalar.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` if this value holds no value, which never happens for sampled values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Interpolates linearly toward `other`, given the distance `d1` from
    /// `self` to the interpolation point and the total distance `d_total`
    /// between `self` and `other`.
    ///
    /// Computes `self + (other - self) / d_total * d1`.
    pub fn interpolate(&self, other: &FieldValue, d1: Real, d_total: Real) -> FieldValue {
        debug_assert_eq!(self.rank, other.rank);
        Self {
            rank: self.rank,
            values: &self.values + (&other.values - &self.values) / d_total * d1,
        }
    }

    /// The arithmetic mean of the given values.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn mean(values: &[&FieldValue]) -> FieldValue {
        assert!(!values.is_empty(), "Cannot average zero field values.");

        let mut sum = values[0].values.clone();
        for value in &values[1..] {
            debug_assert_eq!(value.rank, values[0].rank);
            sum += &value.values;
        }

        Self {
            rank: values[0].rank,
            values: sum / (values.len() as Real),
        }
    }
}
