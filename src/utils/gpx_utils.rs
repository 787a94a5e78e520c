//! GPX output
//!
//! Writes located photos as GPX 1.1 waypoints with the quick-xml writer.

use std::fmt::Display;
use std::io::Write;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::coordinate::GeoCoordinate;
use crate::exif::errors::{GeoTagError, GeoTagResult};

const GPX_NAMESPACE: &str = "http://www.topografix.com/GPX/1/1";

/// A named position written as one `<wpt>`
#[derive(Debug, Clone)]
pub struct Waypoint {
    pub name: String,
    pub coordinate: GeoCoordinate,
}

fn xml_error<E: Display>(e: E) -> GeoTagError {
    GeoTagError::GenericError(format!("XML write error: {}", e))
}

/// Writes a `<tag>text</tag>` element
fn write_text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> GeoTagResult<()> {
    writer.write_event(Event::Start(BytesStart::new(tag))).map_err(xml_error)?;
    writer.write_event(Event::Text(BytesText::new(text))).map_err(xml_error)?;
    writer.write_event(Event::End(BytesEnd::new(tag))).map_err(xml_error)?;
    Ok(())
}

/// Writes a GPX document with one waypoint per entry
///
/// # Arguments
/// * `out` - Destination
/// * `waypoints` - Positions to write
/// * `precision` - Decimal places for latitude and longitude
pub fn write_gpx<W: Write>(out: W, waypoints: &[Waypoint], precision: usize) -> GeoTagResult<()> {
    let mut writer = Writer::new_with_indent(out, b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None))).map_err(xml_error)?;

    let mut gpx = BytesStart::new("gpx");
    gpx.push_attribute(("version", "1.1"));
    gpx.push_attribute(("creator", "geotagkit"));
    gpx.push_attribute(("xmlns", GPX_NAMESPACE));
    writer.write_event(Event::Start(gpx)).map_err(xml_error)?;

    for waypoint in waypoints {
        let lat = format!("{:.*}", precision, waypoint.coordinate.latitude);
        let lon = format!("{:.*}", precision, waypoint.coordinate.longitude);

        let mut wpt = BytesStart::new("wpt");
        wpt.push_attribute(("lat", lat.as_str()));
        wpt.push_attribute(("lon", lon.as_str()));
        writer.write_event(Event::Start(wpt)).map_err(xml_error)?;

        if let Some(altitude) = waypoint.coordinate.altitude {
            write_text_element(&mut writer, "ele", &format!("{:.1}", altitude))?;
        }
        write_text_element(&mut writer, "name", &waypoint.name)?;

        writer.write_event(Event::End(BytesEnd::new("wpt"))).map_err(xml_error)?;
    }

    writer.write_event(Event::End(BytesEnd::new("gpx"))).map_err(xml_error)?;
    writer.into_inner().flush()?;
    Ok(())
}
