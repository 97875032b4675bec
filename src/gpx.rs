//! GPX 1.1 serialization of decoded tracks
//!
//! Output is plain text built with `write!`, one element per line, using
//! locale-independent formatting throughout.

use crate::types::{Track, TrackPoint};
use std::fmt::Write;

/// Creator identity written to the `gpx` root element
pub const GPX_CREATOR: &str = "Recon Instruments MOD / Flight HUD";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes" ?>"#;

const GPX_NAMESPACES: &str = concat!(
    r#"xmlns="http://www.topografix.com/GPX/1/1" "#,
    r#"xmlns:gpxx="http://www.garmin.com/xmlschemas/GpxExtensions/v3" "#,
    r#"xmlns:gpxtpx="http://www.garmin.com/xmlschemas/TrackPointExtension/v1""#,
);

const GPX_SCHEMA_LOCATION: &str = concat!(
    "http://www.topografix.com/GPX/1/1 http://www.topografix.com/GPX/1/1/gpx.xsd ",
    "http://www.garmin.com/xmlschemas/GpxExtensions/v3 http://www.garmin.com/xmlschemas/GpxExtensionsv3.xsd ",
    "http://www.garmin.com/xmlschemas/TrackPointExtension/v1 http://www.garmin.com/xmlschemas/TrackPointExtensionv1.xsd",
);

/// Render tracks as a complete GPX document
///
/// Tracks without points are skipped. The output depends only on the input,
/// so serializing the same tracks twice gives identical text.
pub fn write_gpx(tracks: &[Track]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_document(&mut out, tracks);
    out
}

fn write_document(out: &mut String, tracks: &[Track]) -> std::fmt::Result {
    writeln!(out, "{XML_DECLARATION}")?;
    writeln!(
        out,
        r#"<gpx {GPX_NAMESPACES} creator="{GPX_CREATOR}" version="1.1" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="{GPX_SCHEMA_LOCATION}">"#
    )?;

    for track in tracks.iter().filter(|t| !t.is_empty()) {
        write_track(out, track)?;
    }

    writeln!(out, "</gpx>")
}

fn write_track(out: &mut String, track: &Track) -> std::fmt::Result {
    writeln!(out, "  <trk>")?;
    writeln!(out, "    <name>{}</name>", track.name())?;
    writeln!(out, "    <desc>{}</desc>", track.date_description())?;
    writeln!(out, "    <trkseg>")?;
    for point in &track.points {
        write_point(out, track, point)?;
    }
    writeln!(out, "    </trkseg>")?;
    writeln!(out, "  </trk>")
}

fn write_point(out: &mut String, track: &Track, point: &TrackPoint) -> std::fmt::Result {
    writeln!(
        out,
        r#"      <trkpt lat="{:.6}" lon="{:.6}">"#,
        point.latitude, point.longitude
    )?;
    writeln!(out, "        <ele>{}</ele>", point.altitude)?;
    writeln!(out, "        <name>{:.1} km/h</name>", point.speed_kmh)?;
    writeln!(out, "        <time>{}</time>", track.timestamp_of(point))?;
    writeln!(out, "      </trkpt>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tracks() -> Vec<Track> {
        let mut track = Track::new(1, 2013, 6, 15);
        track.points.push(TrackPoint {
            latitude: 45.08833333,
            longitude: -122.5000833,
            altitude: 1520,
            speed_kmh: 30.0,
            hour: 14,
            minute: 3,
            second: 9,
        });
        vec![track]
    }

    #[test]
    fn test_write_gpx_document() {
        let gpx = write_gpx(&sample_tracks());
        let expected_body = "  <trk>
    <name>Track 1</name>
    <desc>06-15-2013</desc>
    <trkseg>
      <trkpt lat=\"45.088333\" lon=\"-122.500083\">
        <ele>1520</ele>
        <name>30.0 km/h</name>
        <time>2013-06-15T14:03:09Z</time>
      </trkpt>
    </trkseg>
  </trk>
</gpx>
";

        assert!(gpx.starts_with(XML_DECLARATION));
        assert!(gpx.contains(r#"creator="Recon Instruments MOD / Flight HUD""#));
        assert!(gpx.contains(r#"version="1.1""#));
        assert!(gpx.contains(r#"xmlns="http://www.topografix.com/GPX/1/1""#));
        assert!(gpx.ends_with(expected_body), "unexpected body:\n{gpx}");
    }

    #[test]
    fn test_write_gpx_is_deterministic() {
        let tracks = sample_tracks();
        assert_eq!(write_gpx(&tracks), write_gpx(&tracks));
    }

    #[test]
    fn test_empty_tracks_are_omitted() {
        let mut tracks = vec![Track::new(1, 2013, 6, 14)];
        tracks.extend(sample_tracks().into_iter().map(|mut t| {
            t.sequence_number = 2;
            t
        }));

        let gpx = write_gpx(&tracks);
        assert_eq!(gpx.matches("<trk>").count(), 1);
        assert!(!gpx.contains("Track 1"));
        assert!(gpx.contains("<name>Track 2</name>"));
    }

    #[test]
    fn test_no_tracks_gives_bare_document() {
        let gpx = write_gpx(&[]);
        assert_eq!(gpx.lines().count(), 3);
        assert!(gpx.ends_with("</gpx>\n"));
    }

    #[test]
    fn test_tracks_and_points_keep_input_order() {
        let mut first = sample_tracks().remove(0);
        let mut second_point = first.points[0].clone();
        second_point.second = 10;
        first.points.push(second_point);
        let mut second = first.clone();
        second.sequence_number = 2;

        let gpx = write_gpx(&[first, second]);
        let t1 = gpx.find("Track 1").unwrap();
        let t2 = gpx.find("Track 2").unwrap();
        assert!(t1 < t2);
        let s09 = gpx.find("T14:03:09Z").unwrap();
        let s10 = gpx.find("T14:03:10Z").unwrap();
        assert!(s09 < s10);
    }
}
