use oorandom::Rand64;
use sidegrid::field::FieldData;
use sidegrid::mesh::{Mesh, MeshBuilder};
use sidegrid::shape::{SideGrid, SideNodeId};
use sidegrid::transformation::{build_sidegrid, SliceParameters};

const NLON: u32 = 8;
const NLAT: u32 = 12;

// A jittered lon/lat grid split into triangles, with water columns of random
// depth below each surface node.
fn random_mesh(rng: &mut Rand64) -> Mesh {
    let mut builder = MeshBuilder::new();
    let mut surface = vec![];

    for j in 0..NLAT {
        for i in 0..NLON {
            let lon = i as f64 - 4.0 + (rng.rand_float() - 0.5) * 0.6;
            let lat = -75.0 + j as f64 + (rng.rand_float() - 0.5) * 0.6;
            surface.push(builder.add_node(lon, lat, 0.0));
        }
    }

    for id in &surface {
        let num_layers = rng.rand_range(0..6);
        let depths: Vec<_> = (1..=num_layers).map(|l| l as f64 * 25.0).collect();
        let _ = builder.add_column_below(*id, &depths);
    }

    for j in 0..NLAT - 1 {
        for i in 0..NLON - 1 {
            let sw = surface[(j * NLON + i) as usize];
            let se = surface[(j * NLON + i + 1) as usize];
            let nw = surface[((j + 1) * NLON + i) as usize];
            let ne = surface[((j + 1) * NLON + i + 1) as usize];
            let _ = builder.add_element([sw, se, ne]);
            let _ = builder.add_element([sw, ne, nw]);
        }
    }

    builder.build().unwrap()
}

fn random_field(rng: &mut Rand64, mesh: &Mesh) -> FieldData {
    FieldData::snapshot((0..mesh.num_nodes()).map(|_| rng.rand_float()).collect())
}

fn check_invariants(grid: &SideGrid) {
    let mut num_elements = 0;

    for pair in grid.pairs() {
        let south = grid.column(pair.south);
        let north = grid.column(pair.north);

        // Pairs go from south to north.
        assert!(south.surface().lat <= north.surface().lat);

        // Columns are chains ending at their last layer.
        for column in [pair.south, pair.north] {
            let len = grid.column(column).len() as u32;
            for layer in 0..len - 1 {
                assert_eq!(
                    grid.below(SideNodeId::new(column, layer)),
                    Some(SideNodeId::new(column, layer + 1))
                );
            }
            assert_eq!(grid.below(SideNodeId::new(column, len - 1)), None);
        }

        num_elements += south.len().min(north.len()) - 1;
    }

    assert_eq!(grid.elements().len(), num_elements);

    for element in grid.elements() {
        let [ts, tn, bn, bs] = *element.snodes();

        // Consecutive corners share a layer or a column.
        assert_eq!(ts.layer, tn.layer);
        assert_eq!(tn.column, bn.column);
        assert_eq!(bn.layer, bs.layer);
        assert_eq!(bs.column, ts.column);
        assert_eq!(bs.layer, ts.layer + 1);

        assert!(element.y[0] <= element.y[1]);
        assert!(element.area() >= 0.0);
        assert!(element.area_degrees() >= 0.0);
    }
}

#[test]
fn random_grids_satisfy_the_slice_invariants() {
    let mut rng = Rand64::new(0x5eed);

    for k in 0..20 {
        let mesh = random_mesh(&mut rng);
        let field = random_field(&mut rng, &mesh);
        let lon0 = -2.5 + k as f64 * 0.25;
        let params = SliceParameters::new(lon0, -60.0).with_lat_min(-80.0);

        let grid = build_sidegrid(&mesh, &field, &params).unwrap();
        assert!(!grid.pairs().is_empty());
        check_invariants(&grid);

        for column in grid.columns() {
            assert!(column.nodes().iter().all(|n| n.var.is_scalar()));
        }
    }
}
