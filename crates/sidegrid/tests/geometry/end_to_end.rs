use sidegrid::field::FieldData;
use sidegrid::math::{DEG_TO_RAD, EARTH_RADIUS};
use sidegrid::mesh::{Mesh, MeshBuilder};
use sidegrid::shape::SideNodeId;
use sidegrid::transformation::{build_sidegrid, SliceParameters};

// Surface nodes 0, 1, 2, each with two nodes below it at 10 m and 20 m.
pub fn crossed_mesh() -> Mesh {
    let mut builder = MeshBuilder::new();
    let corners = [(-1.0, -60.0), (1.0, -61.0), (1.0, -59.0)]
        .map(|(lon, lat)| builder.add_node(lon, lat, 0.0));
    for n in corners {
        let _ = builder.add_column_below(n, &[10.0, 20.0]);
    }
    let _ = builder.add_element(corners);
    builder.build().unwrap()
}

// Every node of a column carries the value of its surface node.
pub fn column_values(surface: [f64; 3]) -> Vec<f64> {
    let [a, b, c] = surface;
    vec![a, b, c, a, a, b, b, c, c]
}

#[test]
fn regular_crossing_slice() {
    let mesh = crossed_mesh();
    let field = FieldData::snapshot(column_values([1.0, 2.0, 3.0]));
    let grid = build_sidegrid(&mesh, &field, &SliceParameters::new(0.0, -50.0)).unwrap();

    assert_eq!(grid.pairs().len(), 1);
    assert_eq!(grid.num_columns(), 2);

    let pair = grid.pairs()[0];
    let south = grid.node(SideNodeId::new(pair.south, 0));
    let north = grid.node(SideNodeId::new(pair.north, 0));
    assert_eq!(south.lon, 0.0);
    assert_relative_eq!(south.lat, -60.5, epsilon = 1.0e-12);
    assert_relative_eq!(south.var.as_scalar().unwrap(), 1.5, epsilon = 1.0e-12);
    assert_relative_eq!(north.lat, -59.5, epsilon = 1.0e-12);
    assert_relative_eq!(north.var.as_scalar().unwrap(), 2.0, epsilon = 1.0e-12);

    // One element per layer.
    assert_eq!(grid.elements().len(), 2);
    let elt = &grid.elements()[0];
    assert_eq!(elt.y, [-60.5, -59.5, -59.5, -60.5]);
    assert_eq!(elt.z, [0.0, 0.0, -10.0, -10.0]);
    assert_relative_eq!(elt.var.as_scalar().unwrap(), 1.75, epsilon = 1.0e-12);

    let width = DEG_TO_RAD * EARTH_RADIUS;
    assert_relative_eq!(elt.area(), width * 10.0, max_relative = 1.0e-10);
    assert_relative_eq!(elt.area_degrees(), 10.0, max_relative = 1.0e-10);
    assert_relative_eq!(grid.total_area(), width * 20.0, max_relative = 1.0e-10);

    let bottom = &grid.elements()[1];
    assert_eq!(bottom.snodes()[3], SideNodeId::new(pair.south, 2));
    assert_eq!(grid.below(bottom.snodes()[3]), None);
}

#[test]
fn latitude_window_excludes_elements() {
    let mesh = crossed_mesh();
    let field = FieldData::snapshot(column_values([1.0, 2.0, 3.0]));

    let north_of_window = SliceParameters::new(0.0, -65.0);
    let grid = build_sidegrid(&mesh, &field, &north_of_window).unwrap();
    assert!(grid.pairs().is_empty());
    assert!(grid.elements().is_empty());

    let south_of_window = SliceParameters::new(0.0, -40.0).with_lat_min(-55.0);
    let grid = build_sidegrid(&mesh, &field, &south_of_window).unwrap();
    assert!(grid.pairs().is_empty());
}

#[test]
fn other_meridians_miss_the_element() {
    let mesh = crossed_mesh();
    let field = FieldData::snapshot(column_values([1.0, 2.0, 3.0]));
    let grid = build_sidegrid(&mesh, &field, &SliceParameters::new(10.0, -50.0)).unwrap();
    assert!(grid.pairs().is_empty());
}
