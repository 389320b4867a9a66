use sidegrid::analysis::IceShelfRegion;
use sidegrid::math::Real;
use sidegrid::mesh::{Mesh, MeshBuilder};

fn triangle_at(lon: Real, lat: Real) -> Mesh {
    let mut builder = MeshBuilder::new();
    let a = builder.add_node(lon, lat, 0.0);
    let b = builder.add_node(lon + 0.5, lat, 0.0);
    let c = builder.add_node(lon, lat + 0.2, 0.0);
    let _ = builder.add_element([a, b, c]);
    builder.build().unwrap()
}

fn regions_containing(mesh: &Mesh) -> Vec<String> {
    let element = mesh.element(0);
    IceShelfRegion::antarctic_fronts()
        .into_iter()
        .filter(|region| region.contains_element(&element))
        .map(|region| region.name)
        .collect()
}

#[test]
fn amery_front() {
    let names = regions_containing(&triangle_at(70.0, -70.0));
    assert_eq!(names, vec!["All ice shelf fronts", "Amery"]);
}

#[test]
fn ross_is_split_across_the_antimeridian() {
    let west = regions_containing(&triangle_at(-170.0, -80.0));
    assert_eq!(west, vec!["All ice shelf fronts", "Ross"]);

    let east = regions_containing(&triangle_at(170.0, -80.0));
    assert_eq!(east, vec!["All ice shelf fronts", "Ross"]);

    // Elements copied across the antimeridian reach 181°.
    let crossing = regions_containing(&triangle_at(180.2, -80.0));
    assert_eq!(crossing, vec!["All ice shelf fronts", "Ross"]);

    // Between the two boxes of the Ross region.
    let outside = regions_containing(&triangle_at(-140.0, -80.0));
    assert_eq!(outside, vec!["All ice shelf fronts"]);
}

#[test]
fn elements_straddling_a_boundary_are_excluded() {
    // Amery spans longitudes 65 to 75.
    let names = regions_containing(&triangle_at(74.8, -70.0));
    assert_eq!(names, vec!["All ice shelf fronts"]);
}

#[test]
fn northern_elements_are_in_no_region() {
    assert!(regions_containing(&triangle_at(0.0, -20.0)).is_empty());
}
