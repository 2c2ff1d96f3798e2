use std::fs::File;
use std::io::BufReader;

use approx::assert_relative_eq;

use crate::error::KmlError;
use crate::geometry::{
    Geometry, GeometryCollection, GeometryType, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, Shape,
};
use crate::io::kml::{
    read_kml, read_kml_from, write_kml, KmlReader, KmlReaderOptions, KmlWriter, KmlWriterOptions,
};
use crate::test::{geometrycollection, linestring, multilinestring, multipoint, point, polygon};

fn assert_round_trip(geom: Geometry) {
    let text = write_kml(&geom, None);
    let parsed = read_kml(&text).unwrap();
    assert_eq!(parsed, geom, "round trip through {text}");
}

fn members(geom: &Geometry) -> &[Geometry] {
    match geom.shape() {
        Shape::GeometryCollection(collection) => collection.geometries(),
        _ => panic!("expected a collection, got {}", geom.geometry_type()),
    }
}

#[test]
fn read_placemark_example() {
    let geom = read_kml(
        "<Placemark><name>A</name><Point><coordinates>1,2</coordinates></Point></Placemark>",
    )
    .unwrap();
    assert_eq!(geom.shape(), &Shape::Point(Point::new(1., 2.)));
    assert_eq!(geom.property("name"), Some("A"));
    assert_eq!(geom.properties().len(), 1);
}

#[test]
fn read_each_kind() {
    let cases = [
        ("<Point><coordinates>1,2</coordinates></Point>", GeometryType::Point),
        (
            "<LineString><coordinates>1,2 3,4</coordinates></LineString>",
            GeometryType::LineString,
        ),
        (
            "<Polygon><outerBoundaryIs><LinearRing><coordinates>0,0 1,0 1,1 0,0</coordinates></LinearRing></outerBoundaryIs></Polygon>",
            GeometryType::Polygon,
        ),
        (
            "<MultiPoint><Point><coordinates>1,2</coordinates></Point></MultiPoint>",
            GeometryType::MultiPoint,
        ),
        (
            "<MultiLineString><LineString><coordinates>1,2 3,4</coordinates></LineString></MultiLineString>",
            GeometryType::MultiLineString,
        ),
        (
            "<MultiPolygon><Polygon/></MultiPolygon>",
            GeometryType::MultiPolygon,
        ),
        (
            "<MultiGeometry><Point><coordinates>1,2</coordinates></Point></MultiGeometry>",
            GeometryType::GeometryCollection,
        ),
    ];
    for (text, geometry_type) in cases {
        let geom = read_kml(text).unwrap();
        assert_eq!(geom.geometry_type(), geometry_type, "{text}");
        assert!(!geom.is_empty(), "{text}");
        assert!(geom.properties().is_empty());
    }
}

#[test]
fn read_is_case_insensitive() {
    let geom = read_kml("<POINT><Coordinates>1,2</Coordinates></POINT>").unwrap();
    assert_eq!(geom, Geometry::from(Point::new(1., 2.)));
}

#[test]
fn unreadable_altitude_keeps_point() {
    for text in [
        "<Point><coordinates>1,2,abc</coordinates></Point>",
        "<Point><coordinates>1,2,</coordinates></Point>",
    ] {
        assert_eq!(
            read_kml(text).unwrap(),
            Geometry::from(Point::new(1., 2.)),
            "{text}"
        );
    }
}

#[test]
fn round_trip() {
    assert_round_trip(point::p2().into());
    assert_round_trip(linestring::ls1().into());
    assert_round_trip(polygon::p0().into());
    assert_round_trip(polygon::p1().into());
    assert_round_trip(geometrycollection::gc0().into());
}

#[test]
fn round_trip_narrowed_multi_geometries() {
    let reader = KmlReader::new(KmlReaderOptions {
        narrow_multi_geometries: true,
        ..Default::default()
    });
    let geoms: [Geometry; 3] = [
        multipoint::mp0().into(),
        multilinestring::mls0().into(),
        MultiPolygon::new(vec![polygon::p0(), polygon::p1()]).into(),
    ];
    for geom in geoms {
        let text = write_kml(&geom, None);
        assert_eq!(reader.read(&text).unwrap(), geom, "{text}");
    }
}

#[test]
fn multi_geometries_read_back_as_collections() {
    let text = write_kml(&multipoint::mp0().into(), None);
    let geom = read_kml(&text).unwrap();
    assert_eq!(
        geom,
        Geometry::from(GeometryCollection::new(vec![
            point::p0().into(),
            point::p1().into()
        ]))
    );
}

#[test]
fn empty_point_round_trip() {
    let text = write_kml(&Point::empty().into(), None);
    assert_eq!(text, "<Point></Point>");
    assert_eq!(read_kml(&text).unwrap(), Geometry::from(Point::empty()));
}

#[test]
fn empty_shapes_round_trip() {
    assert_round_trip(LineString::empty().into());
    assert_round_trip(Polygon::empty().into());
}

#[test]
fn empty_point_with_namespace() {
    assert_eq!(
        write_kml(&Point::empty().into(), Some("gx")),
        "<gx:Point></gx:Point>"
    );
}

#[test]
fn namespace_applies_to_nested_members() {
    let collection = GeometryCollection::new(vec![point::p0().into(), point::p1().into()]);
    let text = write_kml(&collection.into(), Some("gx"));
    assert_eq!(
        text,
        "<gx:MultiGeometry><gx:Point><gx:coordinates>0,1</gx:coordinates></gx:Point><gx:Point><gx:coordinates>1,2</gx:coordinates></gx:Point></gx:MultiGeometry>"
    );
    assert!(!text.contains("<Point>"));
    assert!(!text.contains("<coordinates>"));
}

#[test]
fn namespaced_output_reads_back() {
    let geom = Geometry::from(geometrycollection::gc0());
    let writer = KmlWriter::new(KmlWriterOptions::with_namespace("kml"));
    let text = format!(
        r#"<kml:kml xmlns:kml="http://www.opengis.net/kml/2.2"><kml:Placemark>{}</kml:Placemark></kml:kml>"#,
        writer.write(&geom)
    );
    assert_eq!(read_kml(&text).unwrap(), geom);
}

#[test]
fn polygon_ring_count() {
    let geom = read_kml_from(BufReader::new(
        File::open("fixtures/kml/polygon_holes.kml").unwrap(),
    ))
    .unwrap();
    assert_eq!(geom.property("name"), Some("Square with holes"));
    let Shape::Polygon(poly) = geom.shape() else {
        panic!("expected a polygon, got {}", geom.geometry_type());
    };
    assert_eq!(poly.rings().len(), 3);
    assert_eq!(poly, &polygon::p1());
}

#[test]
fn sibling_placemarks_reduce_to_collection() {
    let geom = read_kml_from(BufReader::new(
        File::open("fixtures/kml/placemarks.kml").unwrap(),
    ))
    .unwrap();
    let members = members(&geom);
    assert_eq!(members.len(), 2);

    let first = &members[0];
    assert_eq!(first.geometry_type(), GeometryType::Point);
    assert_eq!(first.property("name"), Some("Simple placemark"));
    assert_eq!(
        first.property("description"),
        Some("Intelligently places itself at the height of the underlying terrain.")
    );
    let Shape::Point(p) = first.shape() else {
        unreachable!()
    };
    assert_relative_eq!(p.x().unwrap(), -122.0822035425683);
    assert_relative_eq!(p.y().unwrap(), 37.42228990140251);

    let second = &members[1];
    assert_eq!(second.property("name"), Some("Tessellated"));
    assert_eq!(second.property("description"), None);
    let Shape::LineString(line) = second.shape() else {
        panic!("expected a line string, got {}", second.geometry_type());
    };
    assert_eq!(line.num_coords(), 2);
    assert_relative_eq!(line.coords()[1].x, -112.0870267752693);
}

#[test]
fn single_placemark_is_not_wrapped() {
    let geom = read_kml(
        "<kml><Document><Placemark><LineString><coordinates>0,1 1,2</coordinates></LineString></Placemark></Document></kml>",
    )
    .unwrap();
    assert_eq!(geom, Geometry::from(linestring::ls0()));
}

#[test]
fn properties_shared_by_every_geometry_of_a_placemark() {
    let geom = read_kml(
        "<Placemark>
            <Point><coordinates>0,1</coordinates></Point>
            <description>both</description>
            <Point><coordinates>1,2</coordinates></Point>
        </Placemark>",
    )
    .unwrap();
    let members = members(&geom);
    assert_eq!(members.len(), 2);
    for member in members {
        assert_eq!(member.property("description"), Some("both"));
    }
}

#[test]
fn multi_geometry_in_placemark() {
    let geom = read_kml_from(BufReader::new(
        File::open("fixtures/kml/multigeometry.kml").unwrap(),
    ))
    .unwrap();
    assert_eq!(geom.property("name"), Some("SF Marathon"));
    let types: Vec<_> = members(&geom)
        .iter()
        .map(Geometry::geometry_type)
        .collect();
    assert_eq!(
        types,
        vec![
            GeometryType::LineString,
            GeometryType::Point,
            GeometryType::LineString
        ]
    );
}

#[test]
fn no_geometry_is_empty_collection() {
    let geom = read_kml("<kml><Document><name>Nothing here</name></Document></kml>").unwrap();
    assert_eq!(geom, Geometry::from(GeometryCollection::default()));

    let geom = read_kml("<Placemark><name>No shape</name></Placemark>").unwrap();
    assert_eq!(geom, Geometry::from(GeometryCollection::default()));
}

#[test]
fn malformed_document() {
    match read_kml("<Placemark><Point></Placemark>") {
        Err(KmlError::MalformedDocument { text, .. }) => {
            assert_eq!(text, "<Placemark><Point></Placemark>")
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn malformed_polygon_aborts_read() {
    let text = "<Document>
        <Placemark><Point><coordinates>1,2</coordinates></Point></Placemark>
        <Placemark><Polygon><outerBoundaryIs/></Polygon></Placemark>
    </Document>";
    assert!(matches!(
        read_kml(text),
        Err(KmlError::MalformedPolygon(_))
    ));
}

#[test]
fn typed_multi_collections_write_as_multi_geometry() {
    let geom = Geometry::from(MultiLineString::new(vec![linestring::ls0()]));
    assert_eq!(
        write_kml(&geom, None),
        "<MultiGeometry><LineString><coordinates>0,1 1,2</coordinates></LineString></MultiGeometry>"
    );
    let geom = Geometry::from(MultiPoint::default());
    assert_eq!(write_kml(&geom, None), "<MultiGeometry></MultiGeometry>");
}
