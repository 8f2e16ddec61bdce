//! Built-in icon catalogs for the three library tabs.

/// Asset kind recorded for every marker image, built-in or uploaded.
pub const MARKER_KIND: &str = "marker";

/// A fixed, immutable icon set served from the icon CDN.
pub struct IconCatalog {
    pub title: &'static str,
    /// Folder name under the CDN base URL.
    pub folder: &'static str,
    pub kind: &'static str,
    /// Size suffix baked into the published file names ("" = none).
    pub size: &'static str,
    /// Attribution text shown in the disclaimer row while the tab is active.
    pub disclaimer: &'static str,
    pub icons: &'static [&'static str],
}

impl IconCatalog {
    /// URL of one icon in this catalog, e.g. `{base}/maki-icons/bus-18.svg`.
    pub fn icon_url(&self, base: &str, icon: &str) -> String {
        let base = base.trim_end_matches('/');
        if self.size.is_empty() {
            format!("{}/{}/{}.svg", base, self.folder, icon)
        } else {
            format!("{}/{}/{}-{}.svg", base, self.folder, icon, self.size)
        }
    }
}

pub static MAKI_ICONS: IconCatalog = IconCatalog {
    title: "Maki icons",
    folder: "maki-icons",
    kind: MARKER_KIND,
    size: "18",
    disclaimer: "Maki icons by Mapbox, released under CC0. No attribution required.",
    icons: &[
        "airport",
        "aquarium",
        "art-gallery",
        "bakery",
        "bank",
        "bar",
        "beer",
        "bicycle",
        "bus",
        "cafe",
        "campsite",
        "car",
        "cemetery",
        "cinema",
        "circle",
        "clothing-store",
        "college",
        "dog-park",
        "embassy",
        "fire-station",
        "fuel",
        "garden",
        "golf",
        "grocery",
        "harbor",
        "heart",
        "heliport",
        "hospital",
        "library",
        "lighthouse",
        "lodging",
        "marker",
        "monument",
        "museum",
        "music",
        "park",
        "pharmacy",
        "pitch",
        "police",
        "post",
        "prison",
        "rail",
        "restaurant",
        "rocket",
        "school",
        "shop",
        "stadium",
        "swimming",
        "theatre",
        "town-hall",
        "zoo",
    ],
};

pub static SIMPLE_ICONS: IconCatalog = IconCatalog {
    title: "Simple icons",
    folder: "simpleicon",
    kind: MARKER_KIND,
    size: "",
    disclaimer: "Simple icons from the SJJB map icon collection, released under CC0.",
    icons: &[
        "arrow-down",
        "arrow-up",
        "asterisk",
        "check",
        "circle",
        "circle-outline",
        "cross",
        "diamond",
        "dot",
        "flag",
        "heart",
        "hexagon",
        "house",
        "lightning",
        "minus",
        "pentagon",
        "plus",
        "ring",
        "square",
        "square-outline",
        "star",
        "star-outline",
        "triangle",
        "triangle-down",
    ],
};

pub static PIN_ICONS: IconCatalog = IconCatalog {
    title: "Pin icons",
    folder: "pin-maps",
    kind: MARKER_KIND,
    size: "",
    disclaimer: "Pin icons adapted from the Map Icons Collection by Nicolas Mollet (CC BY SA 3.0).",
    icons: &[
        "pin-classic",
        "pin-dot",
        "pin-flag",
        "pin-heart",
        "pin-home",
        "pin-number",
        "pin-outline",
        "pin-round",
        "pin-square",
        "pin-star",
        "pin-tall",
        "pin-wide",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_url_with_size_suffix() {
        let url = MAKI_ICONS.icon_url("https://cdn.example.com/icons", "bus");
        assert_eq!(url, "https://cdn.example.com/icons/maki-icons/bus-18.svg");
    }

    #[test]
    fn test_icon_url_without_size_suffix() {
        let url = SIMPLE_ICONS.icon_url("https://cdn.example.com/icons", "star");
        assert_eq!(url, "https://cdn.example.com/icons/simpleicon/star.svg");
    }

    #[test]
    fn test_icon_url_trims_trailing_slash() {
        let url = PIN_ICONS.icon_url("https://cdn.example.com/icons/", "pin-dot");
        assert_eq!(url, "https://cdn.example.com/icons/pin-maps/pin-dot.svg");
    }

    #[test]
    fn test_catalogs_are_marker_kind_and_non_empty() {
        for catalog in [&MAKI_ICONS, &SIMPLE_ICONS, &PIN_ICONS] {
            assert_eq!(catalog.kind, MARKER_KIND);
            assert!(!catalog.icons.is_empty());
            assert!(!catalog.disclaimer.is_empty());
        }
    }
}
