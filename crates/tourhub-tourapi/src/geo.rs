//! Conversion from the upstream's fixed-point coordinate encoding to WGS84.

/// The upstream scales WGS84 degrees by 10^7 and sends them as integers
/// (`"1270000000"` is 127.0 degrees east).
const COORD_SCALE: f64 = 10_000_000.0;

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lng: f64,
    pub lat: f64,
}

/// Converts raw fixed-point `mapx`/`mapy` strings into a [`GeoPoint`].
///
/// Pure and deterministic; no I/O.
///
/// # Panics
///
/// Panics if either input is not numeric. Malformed coordinates are a
/// data-contract violation, not a runtime condition; callers must not
/// silently swallow them.
#[must_use]
pub fn to_geo(mapx: &str, mapy: &str) -> GeoPoint {
    let x: f64 = mapx
        .trim()
        .parse()
        .unwrap_or_else(|_| panic!("malformed mapx coordinate: {mapx:?}"));
    let y: f64 = mapy
        .trim()
        .parse()
        .unwrap_or_else(|_| panic!("malformed mapy coordinate: {mapy:?}"));
    GeoPoint {
        lng: x / COORD_SCALE,
        lat: y / COORD_SCALE,
    }
}
