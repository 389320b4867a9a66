use crate::analysis::IceShelfRegion;
use crate::field::{FieldData, FieldError, FieldRank};
use crate::math::Real;
use crate::mesh::Mesh;

/// A volume-averaged temperature and salinity.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TsAverage {
    /// Average temperature.
    pub temperature: Real,
    /// Average salinity.
    pub salinity: Real,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
struct TsIntegral {
    volume: Real,
    temperature: Real,
    salinity: Real,
}

impl TsIntegral {
    fn add(&mut self, other: &TsIntegral) {
        self.volume += other.volume;
        self.temperature += other.temperature;
        self.salinity += other.salinity;
    }

    fn average(&self) -> Option<TsAverage> {
        (self.volume > 0.0).then(|| TsAverage {
            temperature: self.temperature / self.volume,
            salinity: self.salinity / self.volume,
        })
    }
}

/// Integrates temperature and salinity over the water column below the
/// ice-shelf fronts of a set of regions.
///
/// A front element has one or two of its three surface nodes in a cavity.
/// Below each front element lying inside a region, every prism down to the
/// first missing node contributes its volume, and the mean of its six corner
/// values weighted by that volume.
#[derive(Clone, Debug)]
pub struct FrontAccumulator {
    regions: Vec<IceShelfRegion>,
    integrals: Vec<TsIntegral>,
}

impl FrontAccumulator {
    /// An accumulator with zero integrals for each of `regions`.
    pub fn new(regions: Vec<IceShelfRegion>) -> Self {
        let integrals = vec![TsIntegral::default(); regions.len()];
        Self { regions, integrals }
    }

    /// The regions integrated over.
    pub fn regions(&self) -> &[IceShelfRegion] {
        &self.regions
    }

    /// Resets every integral to zero.
    pub fn reset(&mut self) {
        self.integrals.fill(TsIntegral::default());
    }

    /// Adds the prisms below every front element of `mesh` to the integrals
    /// of the regions containing that element.
    ///
    /// Both fields must be snapshots, typically time means.
    pub fn accumulate(
        &mut self,
        mesh: &Mesh,
        temp: &FieldData,
        salt: &FieldData,
    ) -> Result<(), FieldError> {
        for field in [temp, salt] {
            if field.rank() != FieldRank::Snapshot {
                return Err(FieldError::RankMismatch {
                    expected: FieldRank::Snapshot,
                    found: field.rank(),
                });
            }
            field.check_covers(mesh.num_nodes())?;
        }

        for element in mesh.elements().filter(|e| e.is_front()) {
            let in_region: Vec<usize> = self
                .regions
                .iter()
                .enumerate()
                .filter(|(_, region)| region.contains_element(&element))
                .map(|(i, _)| i)
                .collect();

            if in_region.is_empty() {
                continue;
            }

            let area = element.area();
            let mut column = TsIntegral::default();
            let mut top = element.nodes();

            while let [Some(a), Some(b), Some(c)] = top.map(|n| mesh.below(n)) {
                let bottom = [a, b, c];
                let mut dz = 0.0;
                let mut temp_sum = 0.0;
                let mut salt_sum = 0.0;

                for (up, down) in top.iter().zip(bottom.iter()) {
                    dz += (down.depth - up.depth).abs();
                    temp_sum += temp.scalar(up.id)? + temp.scalar(down.id)?;
                    salt_sum += salt.scalar(up.id)? + salt.scalar(down.id)?;
                }

                let volume = area * dz / 3.0;
                column.add(&TsIntegral {
                    volume,
                    temperature: temp_sum / 6.0 * volume,
                    salinity: salt_sum / 6.0 * volume,
                });
                top = bottom;
            }

            for i in in_region {
                self.integrals[i].add(&column);
            }
        }

        Ok(())
    }

    /// The volume-averaged temperature and salinity of each region, `None`
    /// for regions where no volume was integrated.
    pub fn averages(&self) -> Vec<Option<TsAverage>> {
        let averages: Vec<_> = self.integrals.iter().map(|i| i.average()).collect();

        for (region, average) in self.regions.iter().zip(&averages) {
            if average.is_none() {
                log::debug!("no front volume found in region {}", region.name);
            }
        }

        averages
    }
}

/// Yearly volume averages of temperature and salinity for a set of regions.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct FrontTimeseries {
    years: Vec<i32>,
    rows: Vec<Vec<Option<TsAverage>>>,
}

impl FrontTimeseries {
    /// An empty timeseries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the current averages of `accumulator` for `year`.
    pub fn push_year(&mut self, year: i32, accumulator: &FrontAccumulator) {
        self.years.push(year);
        self.rows.push(accumulator.averages());
    }

    /// The recorded years.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// The averages of every region, for each recorded year.
    pub fn rows(&self) -> &[Vec<Option<TsAverage>>] {
        &self.rows
    }

    /// The average temperature of the given region, for each recorded year.
    pub fn temperature(&self, region: usize) -> Vec<Option<Real>> {
        self.series(region, |avg| avg.temperature)
    }

    /// The average salinity of the given region, for each recorded year.
    pub fn salinity(&self, region: usize) -> Vec<Option<Real>> {
        self.series(region, |avg| avg.salinity)
    }

    fn series(&self, region: usize, f: impl Fn(&TsAverage) -> Real) -> Vec<Option<Real>> {
        self.rows
            .iter()
            .map(|row| row.get(region).copied().flatten().map(|avg| f(&avg)))
            .collect()
    }
}
