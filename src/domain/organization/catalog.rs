//! Built-in department reference table.

use once_cell::sync::Lazy;

use super::{OrganizationKind, OrganizationProfile};

/// Profile selected when nothing else is configured.
pub const DEFAULT_ORGANIZATION_ID: &str = "lapd-wide";

// (id, name, officers, kind, tier, description)
type Row = (&'static str, &'static str, u32, OrganizationKind, Option<u8>, &'static str);

const ROWS: &[Row] = &[
    ("lapd-wide", "LAPD-Wide (All Personnel)", 8738, OrganizationKind::Enterprise, None, "All sworn officers across 21 divisions"),
    ("ops-central", "Central Bureau", 1800, OrganizationKind::Bureau, None, "Downtown LA, East LA, Lincoln Heights"),
    ("ops-south", "South Bureau", 2100, OrganizationKind::Bureau, None, "South LA, Watts, San Pedro"),
    ("ops-west", "West Bureau", 1600, OrganizationKind::Bureau, None, "Hollywood, Beverly Hills-adjacent"),
    ("ops-valley", "Valley Bureau", 2200, OrganizationKind::Bureau, None, "San Fernando Valley"),
    ("div-77th", "77th Street Division", 420, OrganizationKind::Division, Some(1), "High-activity area, highest call volume"),
    ("div-newton", "Newton Division", 380, OrganizationKind::Division, Some(1), "Central-South LA"),
    ("div-hollywood", "Hollywood Division", 350, OrganizationKind::Division, Some(1), "Tourism hub, entertainment district"),
    ("div-southeast", "Southeast Division", 400, OrganizationKind::Division, Some(1), "Watts, high-need community"),
    ("div-southwest", "Southwest Division", 380, OrganizationKind::Division, Some(1), "Baldwin Hills, Crenshaw"),
    ("div-central", "Central Division", 340, OrganizationKind::Division, Some(2), "Downtown LA, Skid Row"),
    ("div-rampart", "Rampart Division", 320, OrganizationKind::Division, Some(2), "MacArthur Park, Westlake"),
    ("div-wilshire", "Wilshire Division", 300, OrganizationKind::Division, Some(2), "Miracle Mile, Koreatown"),
    ("div-van-nuys", "Van Nuys Division", 380, OrganizationKind::Division, Some(2), "Central Valley hub"),
    ("div-north-hollywood", "North Hollywood Division", 340, OrganizationKind::Division, Some(2), "NoHo Arts District"),
    ("div-pacific", "Pacific Division", 280, OrganizationKind::Division, Some(3), "Venice Beach, Marina del Rey"),
    ("div-west-la", "West LA Division", 260, OrganizationKind::Division, Some(3), "Westwood, UCLA, Brentwood"),
    ("div-harbor", "Harbor Division", 280, OrganizationKind::Division, Some(3), "Port of LA, San Pedro"),
    ("div-devonshire", "Devonshire Division", 300, OrganizationKind::Division, Some(3), "Northwest Valley"),
    ("div-foothill", "Foothill Division", 320, OrganizationKind::Division, Some(3), "Pacoima, Sylmar"),
    ("div-olympic", "Olympic Division", 290, OrganizationKind::Division, Some(3), "Pico-Union, 2028 Olympic venues"),
    ("metro", "Metropolitan Division", 400, OrganizationKind::Specialized, None, "SWAT, K-9, Critical Response"),
    ("detective-bureau", "Detective Bureau", 800, OrganizationKind::Specialized, None, "Robbery-Homicide, Major Crimes"),
];

static BUILT_IN: Lazy<Vec<OrganizationProfile>> = Lazy::new(|| {
    ROWS.iter()
        .map(|&(id, name, officers, kind, tier, description)| OrganizationProfile {
            id: id.to_string(),
            name: name.to_string(),
            officers,
            kind,
            tier,
            description: description.to_string(),
        })
        .collect()
});

/// Returns the built-in profiles in display order.
pub fn built_in_organizations() -> &'static [OrganizationProfile] {
    &BUILT_IN
}

/// Looks up a built-in profile by id.
pub fn find_built_in(id: &str) -> Option<&'static OrganizationProfile> {
    BUILT_IN.iter().find(|p| p.id == id)
}
