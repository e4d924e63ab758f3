//! The upstream's fixed content-type (category) table.

/// One upstream content category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentType {
    /// The id the upstream expects in `contentTypeId` query parameters.
    pub id: &'static str,
    pub name: &'static str,
}

/// Every category the upstream defines, in its enumeration order.
///
/// The order is load-bearing: stats sorts are stable, so equal counts keep
/// this ordering.
pub static CONTENT_TYPES: [ContentType; 8] = [
    ContentType { id: "12", name: "Attractions" },
    ContentType { id: "14", name: "Cultural facilities" },
    ContentType { id: "15", name: "Festivals and events" },
    ContentType { id: "25", name: "Travel courses" },
    ContentType { id: "28", name: "Leisure sports" },
    ContentType { id: "32", name: "Lodging" },
    ContentType { id: "38", name: "Shopping" },
    ContentType { id: "39", name: "Restaurants" },
];
