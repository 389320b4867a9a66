use sidegrid::analysis::{FrontAccumulator, FrontTimeseries, IceShelfRegion};
use sidegrid::field::FieldData;
use sidegrid::mesh::{Mesh, MeshBuilder};

const LARSEN_C: usize = 2;
const AMERY: usize = 16;

// Element 0: Larsen C front, one cavity node, one full prism then a missing
// node below corner 2.
// Element 1: Amery front, two cavity nodes, one 40 m prism.
// Element 2: inside the Larsen C cavity, not a front.
fn fronts() -> Mesh {
    let mut builder = MeshBuilder::new();

    let l0 = builder.add_node(-63.0, -68.0, 0.0);
    let l1 = builder.add_node(-62.0, -68.0, 0.0);
    let l2 = builder.add_node(-63.0, -67.0, 0.0);
    builder.set_cavity(l0, true);
    let _ = builder.add_column_below(l0, &[10.0, 30.0]);
    let _ = builder.add_column_below(l1, &[10.0, 30.0]);
    let _ = builder.add_column_below(l2, &[10.0]);
    let _ = builder.add_element([l0, l1, l2]);

    let a: Vec<_> = [(70.0, -70.0), (71.0, -70.0), (70.0, -69.0)]
        .iter()
        .map(|(lon, lat)| builder.add_node(*lon, *lat, 0.0))
        .collect();
    builder.set_cavity(a[0], true);
    builder.set_cavity(a[1], true);
    for n in &a {
        let _ = builder.add_node_below(*n, 40.0);
    }
    let _ = builder.add_element([a[0], a[1], a[2]]);

    let c: Vec<_> = [(-64.0, -68.0), (-63.5, -68.0), (-64.0, -67.5)]
        .iter()
        .map(|(lon, lat)| builder.add_node(*lon, *lat, 0.0))
        .collect();
    for n in &c {
        builder.set_cavity(*n, true);
        let _ = builder.add_node_below(*n, 100.0);
    }
    let _ = builder.add_element([c[0], c[1], c[2]]);

    builder.build().unwrap()
}

// Node ids: Larsen C surface 0-2, below 3-7 (3, 4 under 0; 5, 6 under 1;
// 7 under 2), Amery surface 8-10 with 11-13 below, cavity 14-19.
fn temperature() -> FieldData {
    let mut values: Vec<_> = (0..8).map(|i| i as f64).collect();
    values.extend([10.0; 6]);
    values.extend([-100.0; 6]);
    FieldData::snapshot(values)
}

fn salinity() -> FieldData {
    let mut values: Vec<_> = (0..8).map(|i| 34.0 + i as f64 / 10.0).collect();
    values.extend([35.0; 6]);
    values.extend([0.0; 6]);
    FieldData::snapshot(values)
}

#[test]
fn hand_computed_prisms() {
    let mesh = fronts();
    let mut acc = FrontAccumulator::new(IceShelfRegion::antarctic_fronts());
    acc.accumulate(&mesh, &temperature(), &salinity()).unwrap();
    let averages = acc.averages();

    // The only prism below Larsen C has corners 0, 1, 2, 3, 5, 7.
    let larsen = averages[LARSEN_C].unwrap();
    assert_relative_eq!(larsen.temperature, 3.0, epsilon = 1.0e-12);
    assert_relative_eq!(larsen.salinity, 34.3, epsilon = 1.0e-12);

    let amery = averages[AMERY].unwrap();
    assert_relative_eq!(amery.temperature, 10.0, epsilon = 1.0e-12);
    assert_relative_eq!(amery.salinity, 35.0, epsilon = 1.0e-12);

    // All fronts: weighted by the prism volumes.
    let v_larsen = mesh.element(0).area() * 10.0;
    let v_amery = mesh.element(1).area() * 40.0;
    let expected = (3.0 * v_larsen + 10.0 * v_amery) / (v_larsen + v_amery);
    assert_relative_eq!(averages[0].unwrap().temperature, expected, max_relative = 1.0e-12);

    // Every other region is empty.
    let empty = averages.iter().filter(|avg| avg.is_none()).count();
    assert_eq!(empty, averages.len() - 3);
}

#[test]
fn yearly_timeseries() {
    let mesh = fronts();
    let mut acc = FrontAccumulator::new(IceShelfRegion::antarctic_fronts());
    let mut series = FrontTimeseries::new();

    for year in 1992..1995 {
        let shift = (year - 1992) as f64;
        let temp = temperature().difference(&FieldData::snapshot(vec![-shift; 20])).unwrap();

        acc.reset();
        acc.accumulate(&mesh, &temp, &salinity()).unwrap();
        series.push_year(year, &acc);
    }

    assert_eq!(series.years(), &[1992, 1993, 1994]);

    let larsen = series.temperature(LARSEN_C);
    for (k, avg) in larsen.iter().enumerate() {
        assert_relative_eq!(avg.unwrap(), 3.0 + k as f64, epsilon = 1.0e-12);
    }

    assert!(series.salinity(1).iter().all(|s| s.is_none()));
    assert_eq!(series.rows().len(), 3);
}
