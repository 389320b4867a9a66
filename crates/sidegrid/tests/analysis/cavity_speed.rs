use sidegrid::analysis::{cavity_surface_means, front_contour_segments};
use sidegrid::field::FieldData;
use sidegrid::mesh::{Mesh, MeshBuilder};
use sidegrid::utils::circumpolar_xy;

// A fan of three elements around node 0, plus one element east of the edge
// 1-2. Nodes 0, 1, 2, 3 are in a cavity and nodes 1 and 2 are coastal.
fn cavity_mesh() -> Mesh {
    let mut builder = MeshBuilder::new();
    let n0 = builder.add_node(0.0, -80.0, 0.0);
    let n1 = builder.add_node(1.0, -80.0, 0.0);
    let n2 = builder.add_node(1.0, -79.0, 0.0);
    let n3 = builder.add_node(0.0, -79.0, 0.0);
    let n4 = builder.add_node(-1.0, -79.0, 0.0);
    let n5 = builder.add_node(2.0, -79.5, 0.0);
    for n in [n0, n1, n2, n3] {
        builder.set_cavity(n, true);
    }
    builder.set_coastal(n1, true);
    builder.set_coastal(n2, true);

    let _ = builder.add_element([n0, n1, n2]);
    let _ = builder.add_element([n0, n2, n3]);
    let _ = builder.add_element([n0, n3, n4]);
    let _ = builder.add_element([n1, n5, n2]);
    builder.build().unwrap()
}

#[test]
fn mean_speed_in_cavities() {
    let mesh = cavity_mesh();
    // Two time indices of (u, v), with speeds 5 then 10 at node 0.
    let u = FieldData::from_rows(&[
        vec![3.0, 0.0, 1.0, 2.0, 7.0, 0.0],
        vec![6.0, 0.0, 1.0, 2.0, 7.0, 0.0],
    ])
    .unwrap();
    let v = FieldData::from_rows(&[
        vec![4.0, 1.0, 0.0, 0.0, 7.0, 0.0],
        vec![8.0, 1.0, 0.0, 0.0, 7.0, 0.0],
    ])
    .unwrap();

    let speed = FieldData::speed(&u, &v).unwrap().time_mean().unwrap();
    let means = cavity_surface_means(&mesh, &speed).unwrap();

    assert_eq!(means.len(), 2);
    assert_eq!(means[0].0, 0);
    assert_relative_eq!(means[0].1, (7.5 + 1.0 + 1.0) / 3.0, epsilon = 1.0e-12);
    assert_eq!(means[1].0, 1);
    assert_relative_eq!(means[1].1, (7.5 + 1.0 + 2.0) / 3.0, epsilon = 1.0e-12);
}

#[test]
fn speed_change_between_experiments() {
    let control = FieldData::snapshot(vec![1.0, 2.0, 3.0]);
    let scenario = FieldData::snapshot(vec![1.5, 2.0, 2.0]);
    let change = scenario.difference(&control).unwrap();
    assert_eq!(change, FieldData::snapshot(vec![0.5, 0.0, -1.0]));

    let mismatched = FieldData::snapshot(vec![1.0, 2.0]);
    assert!(scenario.difference(&mismatched).is_err());
}

#[test]
fn contour_skips_coastal_edges() {
    let mesh = cavity_mesh();
    let segments = front_contour_segments(&mesh);

    // The edge 1-2 of the last element is coastal.
    assert_eq!(segments.len(), 1);
    let expected_a = circumpolar_xy(0.0, -80.0);
    let expected_b = circumpolar_xy(0.0, -79.0);
    assert_relative_eq!(segments[0].a, expected_a, epsilon = 1.0e-12);
    assert_relative_eq!(segments[0].b, expected_b, epsilon = 1.0e-12);
    assert_relative_eq!(segments[0].length(), 1.0, epsilon = 1.0e-12);
    assert_relative_eq!(segments[0].center().y, 10.5, epsilon = 1.0e-12);
}
