use std::sync::Arc;

use pcblayout_rs::{
    parts, rectangle, BoardEntity, Component, Connection, Error, Pcb, Pin, Point, Route, Waypoint,
};

const EPS: f32 = 1e-4;

fn one_pin_component(x: f32, y: f32, rotation: f32) -> Component {
    let pins: Arc<[Pin]> = Arc::from(vec![Pin::named(
        1.0,
        0.0,
        rectangle(-0.1, 0.1, -0.1, 0.1),
        "A",
    )]);
    Component::new(x, y, rotation, "T1", pins)
}

#[test]
fn test_bound_pin_unrotated() {
    let c = one_pin_component(2.0, 3.0, 0.0);
    let p = c.pin_named("A").expect("pin A exists");
    assert!((p.x() - 3.0).abs() < EPS, "x was {}", p.x());
    assert!((p.y() - 3.0).abs() < EPS, "y was {}", p.y());
}

#[test]
fn test_bound_pin_rotated_90() {
    // A pin at local (1, 0) on a component rotated 90 degrees CCW lands
    // one unit above the component origin.
    let c = one_pin_component(2.0, 3.0, 90.0);
    let p = c.pin_at(0).expect("pin 0 exists");
    assert!((p.x() - 2.0).abs() < EPS, "x was {}", p.x());
    assert!((p.y() - 4.0).abs() < EPS, "y was {}", p.y());
}

#[test]
fn test_full_turn_matches_unrotated() {
    let flat = one_pin_component(0.5, -0.25, 0.0);
    let turned = one_pin_component(0.5, -0.25, 360.0);
    let a = flat.pin_at(0).unwrap().position();
    let b = turned.pin_at(0).unwrap().position();
    assert!((a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS,
        "360 degree rotation moved the pin: {:?} vs {:?}", a, b);
}

#[test]
fn test_bound_pin_tracks_component_moves() {
    let mut c = one_pin_component(0.0, 0.0, 0.0);
    assert!((c.pin_at(0).unwrap().x() - 1.0).abs() < EPS);
    c.x = 5.0;
    c.rotation = 180.0;
    let p = c.pin_at(0).unwrap();
    assert!((p.x() - 4.0).abs() < EPS, "x was {}", p.x());
    assert!(p.y().abs() < EPS, "y was {}", p.y());
}

#[test]
fn test_pin_lookup_failures() {
    let c = parts::header_isp(0.0, 0.0, 0.0, "J1");

    let by_name = c.pin_named("NOPE");
    assert!(
        matches!(&by_name, Err(Error::UnknownPinName(n)) if n == "NOPE"),
        "expected UnknownPinName, got {:?}",
        by_name.err()
    );

    let by_index = c.pin_at(999);
    assert!(
        matches!(
            &by_index,
            Err(Error::PinIndexOutOfRange { index: 999, count: 6 })
        ),
        "expected PinIndexOutOfRange, got {:?}",
        by_index.err()
    );
}

#[test]
fn test_component_pads_rotation() {
    // 1206 resistor pads span x ±(0.06 + 0.032), y ±0.034 when flat;
    // rotating the part 90 degrees swaps the extents.
    let flat = parts::resistor_1206(0.0, 0.0, 0.0, "R1");
    let (min, max) = flat.pads().bounding_box().expect("two pads");
    assert!((min.x + 0.092).abs() < EPS && (max.x - 0.092).abs() < EPS,
        "flat x extents [{}, {}]", min.x, max.x);
    assert!((min.y + 0.034).abs() < EPS && (max.y - 0.034).abs() < EPS,
        "flat y extents [{}, {}]", min.y, max.y);

    let turned = parts::resistor_1206(1.0, 0.0, 90.0, "R1");
    let (min, max) = turned.pads().bounding_box().expect("two pads");
    assert!((min.x - (1.0 - 0.034)).abs() < EPS && (max.x - (1.0 + 0.034)).abs() < EPS,
        "turned x extents [{}, {}]", min.x, max.x);
    assert!((min.y + 0.092).abs() < EPS && (max.y - 0.092).abs() < EPS,
        "turned y extents [{}, {}]", min.y, max.y);
}

#[test]
fn test_add_dispatches_on_kind() {
    let mut pcb = Pcb::new(0.0, 0.0, 2.0, 1.0);
    pcb.add(parts::capacitor_1206(0.1, 0.1, 0.0, "C1"));
    pcb.add(
        Connection::new(
            0.01,
            vec![
                Waypoint::Fixed(Point::new(0.0, 0.0)),
                Waypoint::Fixed(Point::new(1.0, 0.0)),
            ],
        )
        .unwrap(),
    );
    pcb.add(BoardEntity::Component(parts::resistor_1206(
        0.5, 0.1, 0.0, "R1",
    )));

    assert_eq!(pcb.components().len(), 2);
    assert_eq!(pcb.connections().len(), 1);
}

#[test]
fn test_conflicting_route_flags() {
    let mut pcb = Pcb::new(0.0, 0.0, 2.0, 1.0);
    let r1 = pcb.add_component(parts::resistor_1206(0.2, 0.2, 0.0, "R1"));
    let r2 = pcb.add_component(parts::resistor_1206(0.8, 0.8, 0.0, "R2"));
    let p0 = pcb.pad_at(r1, 0).unwrap();
    let p1 = pcb.pad_at(r2, 1).unwrap();

    let both = Route {
        horizontal_first: true,
        vertical_first: true,
    };
    let result = pcb.connect(p0, p1, 0.01, both);
    assert!(
        matches!(&result, Err(Error::ConflictingRoute)),
        "expected ConflictingRoute, got {:?}",
        result.err()
    );
    assert!(
        pcb.connections().is_empty(),
        "failed connect must not append a connection"
    );
}

#[test]
fn test_route_corner_insertion() {
    let mut pcb = Pcb::new(0.0, 0.0, 2.0, 2.0);
    let r1 = pcb.add_component(parts::resistor_1206(0.0, 0.0, 0.0, "R1"));
    let r2 = pcb.add_component(parts::resistor_1206(1.0, 1.0, 0.0, "R2"));
    let p0 = pcb.pad_at(r1, 1).unwrap(); // (0.06, 0)
    let p1 = pcb.pad_at(r2, 0).unwrap(); // (0.94, 1)

    pcb.connect(p0, p1, 0.01, Route::horizontal_first())
        .expect("valid route");
    let conn = &pcb.connections()[0];
    assert_eq!(conn.waypoints().len(), 3, "H route inserts one corner");
    match conn.waypoints()[1] {
        Waypoint::Fixed(corner) => {
            assert!((corner.x - 0.94).abs() < EPS, "corner x was {}", corner.x);
            assert!(corner.y.abs() < EPS, "corner y was {}", corner.y);
        }
        ref other => panic!("corner should be a fixed point, got {:?}", other),
    }

    pcb.connect(p0, p1, 0.01, Route::vertical_first())
        .expect("valid route");
    match pcb.connections()[1].waypoints()[1] {
        Waypoint::Fixed(corner) => {
            assert!((corner.x - 0.06).abs() < EPS, "corner x was {}", corner.x);
            assert!((corner.y - 1.0).abs() < EPS, "corner y was {}", corner.y);
        }
        ref other => panic!("corner should be a fixed point, got {:?}", other),
    }

    pcb.connect(p0, p1, 0.01, Route::direct()).expect("valid route");
    assert_eq!(pcb.connections()[2].waypoints().len(), 2);
}

#[test]
fn test_connect_path_rejects_free_endpoints() {
    let mut pcb = Pcb::new(0.0, 0.0, 2.0, 1.0);
    let r1 = pcb.add_component(parts::resistor_1206(0.2, 0.2, 0.0, "R1"));
    let p0 = pcb.pad_at(r1, 0).unwrap();

    let result = pcb.connect_path(
        0.01,
        vec![p0.into(), Waypoint::Fixed(Point::new(1.0, 1.0))],
    );
    assert!(
        matches!(&result, Err(Error::FreeEndpoint)),
        "expected FreeEndpoint, got {:?}",
        result.err()
    );
    assert!(pcb.connections().is_empty());

    // Free points are fine in the middle of the path.
    let p1 = pcb.pad_at(r1, 1).unwrap();
    pcb.connect_path(
        0.01,
        vec![p0.into(), Waypoint::Fixed(Point::new(0.2, 0.5)), p1.into()],
    )
    .expect("pad endpoints with a fixed midpoint");
    assert_eq!(pcb.connections().len(), 1);
}

#[test]
fn test_traces_follow_component_moves() {
    // Pad waypoints resolve at trace time, so moving a part reroutes.
    let mut pcb = Pcb::new(0.0, 0.0, 4.0, 4.0);
    let r1 = pcb.add_component(parts::resistor_1206(0.0, 0.0, 0.0, "R1"));
    let r2 = pcb.add_component(parts::resistor_1206(2.0, 0.0, 0.0, "R2"));
    let p0 = pcb.pad_at(r1, 1).unwrap();
    let p1 = pcb.pad_at(r2, 0).unwrap();
    pcb.connect(p0, p1, 0.01, Route::direct()).unwrap();

    let before = pcb.traces().unwrap().bounding_box().unwrap();
    pcb.component_mut(r2).unwrap().x = 3.0;
    let after = pcb.traces().unwrap().bounding_box().unwrap();
    assert!(
        after.1.x > before.1.x + 0.9,
        "trace did not follow the moved component: {} -> {}",
        before.1.x,
        after.1.x
    );
}

#[test]
fn test_board_aggregation_and_outline() {
    let mut pcb = Pcb::new(-1.0, -0.5, 2.0, 1.0);
    let u1 = pcb.add_component(parts::attiny44_soic(0.0, 0.0, 0.0, "IC1"));
    let j1 = pcb.add_component(parts::header_isp(0.6, 0.0, 0.0, "J1"));
    pcb.connect(
        pcb.pad_named(u1, "GND").unwrap(),
        pcb.pad_named(j1, "GND").unwrap(),
        0.01,
        Route::vertical_first(),
    )
    .expect("valid route");

    let copper = pcb.traces().expect("board flattens");
    // 14 SOIC pads + 6 header pads + 2 route segments (one corner).
    assert_eq!(copper.polygons.len(), 14 + 6 + 2);

    let (min, max) = pcb.outline().bounding_box().unwrap();
    assert!((min.x + 1.0).abs() < EPS && (max.x - 1.0).abs() < EPS);
    assert!((min.y + 0.5).abs() < EPS && (max.y - 0.5).abs() < EPS);

    assert!(!pcb.labels().is_empty(), "named pins should produce labels");
}

#[test]
fn test_part_presets() {
    assert_eq!(parts::attiny45_soic(0.0, 0.0, 0.0, "U1").pins().len(), 8);
    assert_eq!(parts::attiny44_soic(0.0, 0.0, 0.0, "U1").pins().len(), 14);
    assert_eq!(parts::atmega88_tqfp(0.0, 0.0, 0.0, "U1").pins().len(), 32);
    assert_eq!(parts::usb_mini_b(0.0, 0.0, 0.0, "J1").pins().len(), 9);

    let isp = parts::header_isp(0.0, 0.0, 0.0, "J1");
    let mosi = isp.pin_named("MOSI").expect("MOSI exists");
    assert!((mosi.x() + 0.107).abs() < EPS);

    assert_eq!(parts::resistor_1206(0.0, 0.0, 0.0, "R1").prefix, "R");
    assert_eq!(parts::nmos_sot23(0.0, 0.0, 0.0, "Q1").prefix, "Q");
}

#[test]
fn test_geometry_serializes() {
    let shape = parts::resistor_1206(0.0, 0.0, 0.0, "R1").pads();
    let json = serde_json::to_value(&shape).expect("shape serializes");
    let polys = json["polygons"].as_array().expect("polygons array");
    assert_eq!(polys.len(), 2);
}
