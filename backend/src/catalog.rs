//! Static UK climbing-region catalog
//!
//! Read-only reference data, loaded once at process start. Each region
//! carries a representative coordinate for forecast lookups, its rock
//! types (first listed wins for temperature-band selection) and external
//! forecast-site identifiers for link generation.

use shared::{Coordinate, Region, RegionExternal};

#[allow(clippy::too_many_arguments)]
fn region(
    id: &str,
    name: &str,
    area: &str,
    lat: f64,
    lon: f64,
    rocks: &[&str],
    tags: &[&str],
    met_office_id: &str,
    bbc_id: &str,
) -> Region {
    Region {
        id: id.to_string(),
        name: name.to_string(),
        area: Some(area.to_string()),
        coordinate: Coordinate::new(lat, lon),
        rocks: rocks.iter().map(|s| s.to_string()).collect(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
        external: RegionExternal {
            met_office_id: Some(met_office_id.to_string()),
            bbc_id: Some(bbc_id.to_string()),
            windy_zoom: None,
        },
    }
}

/// The full region catalog, in display order. Catalog order is also the
/// tie-break order for equal scores.
pub fn uk_regions() -> Vec<Region> {
    vec![
        // --- Peak District ---
        region(
            "peak-n",
            "North Peaks",
            "Peaks & Manchester",
            53.45,
            -1.88,
            &["grit"],
            &["moorland", "exposed"],
            "gcw858zgz",
            "2648405",
        ),
        region(
            "peak-c",
            "Central Peaks",
            "Peaks & Manchester",
            53.34,
            -1.63,
            &["grit", "limestone"],
            &["quick-dry"],
            "gcqz6kgdx",
            "2647338",
        ),
        region(
            "peak-sw",
            "South West Peaks",
            "Peaks & Manchester",
            53.17,
            -2.03,
            &["grit"],
            &["quick-dry", "wind-exposed"],
            "gcqw1upty",
            "2644684",
        ),
        region(
            "peak-se",
            "South East Peaks",
            "Peaks & Manchester",
            53.25,
            -1.61,
            &["grit"],
            &[],
            "gcqyhqyus",
            "2642910",
        ),
        region(
            "chew",
            "Chew Valley",
            "Peaks & Manchester",
            53.53,
            -1.99,
            &["grit"],
            &[],
            "gcw8dkf8n",
            "2647974",
        ),
        region(
            "lancs-quarries",
            "Lancashire Quarries",
            "Peaks & Manchester",
            53.65,
            -2.55,
            &["quarried grit"],
            &[],
            "gcw1hpk10",
            "2653086",
        ),
        // --- North Wales ---
        region(
            "nwales-n",
            "Snowdonia North",
            "North Wales",
            53.12,
            -4.05,
            &["rhyolite", "slate"],
            &["mountain"],
            "gcmn4jg3d",
            "2644172",
        ),
        region(
            "nwales-s",
            "Snowdonia South",
            "North Wales",
            52.95,
            -3.94,
            &["rhyolite", "slate"],
            &["mountain"],
            "gcmhp9k7v",
            "2651154",
        ),
        region(
            "nwales-coast",
            "Coastal (Gogarth & Ormes)",
            "North Wales",
            53.31,
            -4.63,
            &["limestone"],
            &["sea-cliff"],
            "gcmr2gmc8",
            "2644120",
        ),
        region(
            "nwales-clwyd",
            "Clwyd Limestone",
            "North Wales",
            53.05,
            -3.16,
            &["limestone"],
            &[],
            "gcmtrfeqn",
            "2644021",
        ),
        // --- Lake District ---
        region(
            "lakes-n",
            "North Lakes",
            "Lake District",
            54.62,
            -3.13,
            &["rhyolite"],
            &["mountain"],
            "gcty8njjs",
            "2645756",
        ),
        region(
            "lakes-c",
            "Central Lakes",
            "Lake District",
            54.45,
            -3.1,
            &["rhyolite"],
            &["mountain"],
            "gctvssktt",
            "2657360",
        ),
        region(
            "lakes-s",
            "South Lakes",
            "Lake District",
            54.35,
            -3.1,
            &["rhyolite"],
            &["mountain"],
            "gctvmgsm7",
            "2633851",
        ),
        // --- Yorkshire ---
        region(
            "york-dales-w",
            "Dales West",
            "Yorkshire & Northumberland",
            54.07,
            -2.16,
            &["limestone"],
            &[],
            "gcw7s4y98",
            "2638192",
        ),
        region(
            "york-dales-e",
            "Dales East",
            "Yorkshire & Northumberland",
            53.92,
            -1.7,
            &["grit"],
            &[],
            "gcwg8jffz",
            "2640579",
        ),
        region(
            "york-dales-s",
            "Dales South",
            "Yorkshire & Northumberland",
            53.92,
            -1.82,
            &["grit"],
            &[],
            "gcwdy8cc8",
            "2646272",
        ),
        region(
            "york-moors",
            "North York Moors",
            "Yorkshire & Northumberland",
            54.4,
            -0.9,
            &["sandstone"],
            &[],
            "gcxtfnft4",
            "2634135",
        ),
        region(
            "northumberland",
            "Northumberland",
            "Yorkshire & Northumberland",
            55.27,
            -1.93,
            &["sandstone"],
            &[],
            "gcyefpzze",
            "2633606",
        ),
        // --- South & West Wales ---
        region(
            "pembroke",
            "Pembroke",
            "South & West Wales",
            51.62,
            -5.0,
            &["limestone"],
            &["sea-cliff"],
            "gchqwynv8",
            "2647311",
        ),
        region(
            "gower",
            "Gower",
            "South & West Wales",
            51.57,
            -4.17,
            &["limestone"],
            &["sea-cliff"],
            "gcjjwm34p",
            "2636432",
        ),
        region(
            "wye",
            "Wye Valley",
            "South & West Wales",
            51.83,
            -2.63,
            &["limestone"],
            &[],
            "gcnjg1jby",
            "2653256",
        ),
        // --- Scotland ---
        region(
            "scotland-nw",
            "North West Highlands",
            "Scotland",
            58.0,
            -5.0,
            &["gneiss", "sandstone"],
            &["mountain"],
            "gfk36edd",
            "72635199",
        ),
        region(
            "scotland-c",
            "Central Highlands",
            "Scotland",
            56.8,
            -4.9,
            &["granite"],
            &["mountain"],
            "gfh75zeru",
            "2649169",
        ),
        region(
            "scotland-cairngorms",
            "Cairngorms",
            "Scotland",
            57.1,
            -3.67,
            &["granite"],
            &["mountain"],
            "gfjm2yj30",
            "2656752",
        ),
        region(
            "scotland-skye",
            "Skye & Hebrides",
            "Scotland",
            57.3,
            -6.2,
            &["gabbro", "gneiss"],
            &["sea-cliff", "mountain"],
            "gf5we59j0",
            "2640006",
        ),
        region(
            "scotland-aberdeen",
            "Aberdeenshire",
            "Scotland",
            57.1,
            -2.3,
            &["granite"],
            &["sea-cliff"],
            "gfjudctuv",
            "2656565",
        ),
        region(
            "scotland-centralbelt",
            "Central Belt Dolerite",
            "Scotland",
            55.9,
            -3.6,
            &["dolerite"],
            &[],
            "gcvwr3zrw",
            "2650225",
        ),
        // --- South West England ---
        region(
            "avon-cheddar",
            "Cheddar",
            "South West England",
            51.28,
            -2.76,
            &["limestone"],
            &[],
            "gcn58z5jb",
            "2653281",
        ),
        region(
            "dartmoor",
            "Dartmoor",
            "South West England",
            50.58,
            -3.95,
            &["granite"],
            &[],
            "gbvpt1q20",
            "2639885",
        ),
        region(
            "west-cornwall",
            "West Cornwall",
            "South West England",
            50.17,
            -5.55,
            &["granite"],
            &["sea-cliff"],
            "gbuj45b27",
            "2640377",
        ),
        region(
            "north-devon-cornwall",
            "North Devon & Cornwall",
            "South West England",
            51.21,
            -4.63,
            &["culm", "granite"],
            &["sea-cliff"],
            "gchc0ssk0",
            "2654380",
        ),
        // --- South Coast England ---
        region(
            "dorset-portland",
            "Portland",
            "South Coast England",
            50.54,
            -2.44,
            &["limestone"],
            &[],
            "gbyr86r5p",
            "6692041",
        ),
        region(
            "dorset-swanage",
            "Swanage",
            "South Coast England",
            50.6,
            -1.95,
            &["limestone"],
            &["sea-cliff"],
            "gbyxgkv5y",
            "2636445",
        ),
        region(
            "southern-sandstone",
            "Southern Sandstone",
            "South Coast England",
            51.1,
            0.15,
            &["sandstone"],
            &["fragile"],
            "u104yh627",
            "2639022",
        ),
    ]
}
