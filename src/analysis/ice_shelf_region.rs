use crate::math::Real;
use crate::mesh::Element;
use smallvec::{smallvec, SmallVec};

/// An axis-aligned box in (longitude, latitude), bounds included.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct LonLatBox {
    /// Western bound, in degrees.
    pub lon_min: Real,
    /// Eastern bound, in degrees.
    pub lon_max: Real,
    /// Southern bound, in degrees.
    pub lat_min: Real,
    /// Northern bound, in degrees.
    pub lat_max: Real,
}

impl LonLatBox {
    /// Creates a box from its longitude range then its latitude range.
    pub const fn new(lon_min: Real, lon_max: Real, lat_min: Real, lat_max: Real) -> Self {
        Self {
            lon_min,
            lon_max,
            lat_min,
            lat_max,
        }
    }

    /// Does this box contain the point `(lon, lat)`?
    #[inline]
    pub fn contains(&self, lon: Real, lat: Real) -> bool {
        lon >= self.lon_min && lon <= self.lon_max && lat >= self.lat_min && lat <= self.lat_max
    }

    /// Does this box contain all the corners of `element`?
    pub fn contains_element(&self, element: &Element) -> bool {
        element.nodes().iter().all(|n| self.contains(n.lon, n.lat))
    }
}

/// A named region of the Antarctic coast, covered by one or more boxes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct IceShelfRegion {
    /// A human-readable name.
    pub name: String,
    /// The boxes covering this region.
    pub bounds: SmallVec<[LonLatBox; 2]>,
}

impl IceShelfRegion {
    /// A region covered by a single box.
    pub fn new(name: impl Into<String>, bounds: LonLatBox) -> Self {
        Self {
            name: name.into(),
            bounds: smallvec![bounds],
        }
    }

    /// Adds a box to this region.
    pub fn with_box(mut self, bounds: LonLatBox) -> Self {
        self.bounds.push(bounds);
        self
    }

    /// Does `element` lie entirely inside one of the boxes of this region?
    pub fn contains_element(&self, element: &Element) -> bool {
        self.bounds.iter().any(|b| b.contains_element(element))
    }

    /// The major Antarctic ice-shelf fronts.
    ///
    /// Region 0 gathers every front south of 30°S. The Ross region, last,
    /// straddles the antimeridian and is covered by two boxes. Boxes touching
    /// the antimeridian extend to ±181° so that elements crossing it are kept.
    pub fn antarctic_fronts() -> Vec<IceShelfRegion> {
        const REGIONS: [(&str, LonLatBox); 23] = [
            ("All ice shelf fronts", LonLatBox::new(-181.0, 181.0, -90.0, -30.0)),
            ("Larsen D", LonLatBox::new(-62.67, -59.33, -73.03, -69.37)),
            ("Larsen C", LonLatBox::new(-65.5, -60.0, -69.35, -66.13)),
            ("Wilkins & George VI & Stange", LonLatBox::new(-79.17, -66.67, -74.17, -69.5)),
            ("Ronne-Filchner", LonLatBox::new(-85.0, -28.33, -83.5, -74.67)),
            ("Abbot", LonLatBox::new(-104.17, -88.83, -73.28, -71.67)),
            ("Pine Island Glacier", LonLatBox::new(-102.5, -99.17, -75.5, -74.17)),
            ("Thwaites", LonLatBox::new(-108.33, -103.33, -75.5, -74.67)),
            ("Dotson", LonLatBox::new(-114.5, -111.5, -75.33, -73.67)),
            ("Getz", LonLatBox::new(-135.67, -114.33, -74.9, -73.0)),
            ("Nickerson", LonLatBox::new(-149.17, -140.0, -76.42, -75.17)),
            ("Sulzberger", LonLatBox::new(-155.0, -145.0, -78.0, -76.41)),
            ("Mertz", LonLatBox::new(144.0, 146.62, -67.83, -66.67)),
            ("Totten & Moscow University", LonLatBox::new(115.0, 123.33, -67.17, -66.5)),
            ("Shackleton", LonLatBox::new(94.17, 102.5, -66.67, -64.83)),
            ("West", LonLatBox::new(80.83, 89.17, -67.83, -66.17)),
            ("Amery", LonLatBox::new(65.0, 75.0, -73.67, -68.33)),
            ("Prince Harald", LonLatBox::new(33.83, 37.67, -69.83, -68.67)),
            ("Baudouin & Borchgrevink", LonLatBox::new(19.0, 33.33, -71.67, -68.33)),
            ("Lazarev", LonLatBox::new(12.9, 16.17, -70.5, -69.33)),
            ("Nivl", LonLatBox::new(9.33, 12.88, -70.75, -69.83)),
            ("Fimbul & Jelbart & Ekstrom", LonLatBox::new(-10.05, 7.6, -71.83, -69.33)),
            ("Brunt & Riiser-Larsen", LonLatBox::new(-28.33, -10.33, -76.33, -71.5)),
        ];

        let mut regions: Vec<_> = REGIONS
            .iter()
            .map(|(name, bounds)| IceShelfRegion::new(*name, *bounds))
            .collect();
        regions.push(
            IceShelfRegion::new("Ross", LonLatBox::new(-181.0, -146.67, -85.0, -77.77))
                .with_box(LonLatBox::new(158.33, 181.0, -84.5, -77.0)),
        );
        regions
    }
}
