use config::constants::{EPSILON, NORMAL_UNIT_TOLERANCE};
use glam::DVec3;
use std::f64::consts::{PI, TAU};
use torus_mesh::{create_torus, create_torus_smooth, MeshError, SurfaceParameters};

fn sample_params() -> Vec<SurfaceParameters> {
    let mut band = SurfaceParameters::full_torus(12, 5, 0.4, 0.075);
    band.longitude_start = PI / 3.0;
    band.longitude_length = PI;

    let mut ribbon = SurfaceParameters::full_torus(64, 8, 1.6, 0.075);
    ribbon.meridian_length = PI / 2.0;

    vec![
        SurfaceParameters::full_torus(3, 3, 1.0, 0.5),
        SurfaceParameters::full_torus(4, 4, 1.0, 0.3),
        SurfaceParameters::full_torus(128, 64, 6.0 / 5.0, 1.0 / 3.0),
        SurfaceParameters::full_torus(7, 13, 2.0, 3.0),
        band,
        ribbon,
    ]
}

#[test]
fn buffer_lengths_match_grid() {
    for params in sample_params() {
        let mesh = create_torus(&params).unwrap();
        let expected_vertices =
            (params.width_segments as usize + 1) * (params.height_segments as usize + 1);
        assert_eq!(mesh.positions().len(), expected_vertices);
        assert_eq!(mesh.uvs().len(), expected_vertices);
        assert_eq!(
            mesh.indices().len(),
            params.width_segments as usize * params.height_segments as usize * 6
        );
    }
}

#[test]
fn all_indices_in_range() {
    for params in sample_params() {
        let mesh = create_torus(&params).unwrap();
        let vertex_count = mesh.vertex_count() as u32;
        assert!(mesh.indices().iter().all(|&i| i < vertex_count));
    }
}

#[test]
fn normals_are_unit_length() {
    for params in sample_params() {
        let mesh = create_torus_smooth(&params).unwrap();
        for n in mesh.normals().unwrap() {
            assert!((1.0 - n.length()).abs() < NORMAL_UNIT_TOLERANCE);
        }
    }
}

#[test]
fn full_torus_triangles_face_outward() {
    let params = SurfaceParameters::default();
    let mesh = create_torus(&params).unwrap();

    for tri in mesh.indices().chunks_exact(3) {
        let p0 = mesh.position(tri[0]);
        let p1 = mesh.position(tri[1]);
        let p2 = mesh.position(tri[2]);
        let centroid = (p0 + p1 + p2) / 3.0;

        let axis_dir = DVec3::new(centroid.x, centroid.y, 0.0).normalize();
        let outward = centroid - axis_dir * params.major_radius;
        let face_normal = (p1 - p0).cross(p2 - p0);

        assert!(face_normal.dot(outward) > 0.0);
    }
}

#[test]
fn reference_vertices_on_equators() {
    let params = SurfaceParameters::full_torus(4, 4, 1.0, 0.3);
    let mesh = create_torus(&params).unwrap();

    // Grid (0, 0): outer equator
    assert!((mesh.position(0) - DVec3::new(1.3, 0.0, 0.0)).length() < EPSILON);
    // Grid (0, 2): inner equator (row stride is width_segments + 1 = 5)
    assert!((mesh.position(10) - DVec3::new(0.7, 0.0, 0.0)).length() < EPSILON);
}

#[test]
fn closed_sweep_keeps_open_seam() {
    let params = SurfaceParameters::full_torus(16, 8, 1.0, 0.3);
    let mesh = create_torus(&params).unwrap();
    let stride = params.width_segments + 1;

    for iy in 0..=params.height_segments {
        let first = iy * stride;
        let last = first + params.width_segments;
        assert!((mesh.position(first) - mesh.position(last)).length() < EPSILON);
        assert!((mesh.uv(last).x - mesh.uv(first).x - 1.0).abs() < EPSILON);
    }
}

#[test]
fn partial_band_stays_in_angular_range() {
    let mut params = SurfaceParameters::full_torus(16, 8, 1.0, 0.3);
    params.longitude_length = PI;
    let mesh = create_torus(&params).unwrap();

    for p in mesh.positions() {
        // Recover the longitude angle; the embedding negates it in y.
        let phi = (-p.y).atan2(p.x);
        let phi = if phi < 0.0 { phi + TAU } else { phi };
        // Angles at the closed end wrap to ~2π; accept both representations.
        assert!(phi <= PI + EPSILON || (TAU - phi) < EPSILON);
    }
}

#[test]
fn rebuilds_are_bit_identical() {
    for params in sample_params() {
        let first = create_torus_smooth(&params).unwrap();
        let second = create_torus_smooth(&params).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn uvs_are_monotonic_over_the_grid() {
    let params = SurfaceParameters::full_torus(16, 8, 1.0, 0.3);
    let mesh = create_torus(&params).unwrap();
    let stride = params.width_segments + 1;

    for iy in 0..=params.height_segments {
        for ix in 0..params.width_segments {
            let idx = iy * stride + ix;
            assert!(mesh.uv(idx + 1).x > mesh.uv(idx).x);
        }
    }
    for ix in 0..=params.width_segments {
        for iy in 0..params.height_segments {
            let idx = iy * stride + ix;
            assert!(mesh.uv(idx + stride).y > mesh.uv(idx).y);
        }
    }
}

#[test]
fn invalid_parameters_are_rejected() {
    let invalid = [
        SurfaceParameters {
            width_segments: 0,
            ..SurfaceParameters::default()
        },
        SurfaceParameters {
            height_segments: 0,
            ..SurfaceParameters::default()
        },
        SurfaceParameters {
            major_radius: 0.0,
            ..SurfaceParameters::default()
        },
        SurfaceParameters {
            minor_radius: -1.0,
            ..SurfaceParameters::default()
        },
        SurfaceParameters {
            meridian_length: 0.0,
            ..SurfaceParameters::default()
        },
        SurfaceParameters {
            longitude_length: 0.0,
            ..SurfaceParameters::default()
        },
    ];

    for params in invalid {
        match create_torus(&params) {
            Err(MeshError::InvalidParameter { .. }) => {}
            other => panic!("expected InvalidParameter, got {:?}", other.map(|_| ())),
        }
    }
}

#[test]
fn self_intersecting_radii_are_accepted() {
    let params = SurfaceParameters::full_torus(8, 8, 0.3, 0.5);
    let mesh = create_torus(&params).unwrap();
    assert!(mesh.validate());
}
