use crate::flight_control::common::geo::Coordinate;
use strum_macros::{Display, EnumIter};

/// The navaid classes the host database distinguishes, with the short tags
/// the panel shows in status lines.
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavaidKind {
    #[strum(to_string = "UKN")]
    Unknown,
    #[strum(to_string = "APT")]
    Airport,
    #[strum(to_string = "NDB")]
    Ndb,
    #[strum(to_string = "VOR")]
    Vor,
    #[strum(to_string = "ILS")]
    Ils,
    #[strum(to_string = "LOC")]
    Localizer,
    #[strum(to_string = "GS")]
    GlideSlope,
    #[strum(to_string = "OM")]
    OuterMarker,
    #[strum(to_string = "MM")]
    MiddleMarker,
    #[strum(to_string = "IM")]
    InnerMarker,
    #[strum(to_string = "FIX")]
    Fix,
    #[strum(to_string = "DME")]
    Dme,
    #[strum(to_string = "L/L")]
    LatLon,
}

/// Opaque handle into the host's navaid table. Scans resume from a handle,
/// so a search can pick up where the previous match left off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavaidRef(u32);

impl NavaidRef {
    pub const fn new(raw: u32) -> Self { Self(raw) }

    pub const fn raw(self) -> u32 { self.0 }
}

/// One record from the host's navaid table.
#[derive(Debug, Clone, PartialEq)]
pub struct Navaid {
    kind: NavaidKind,
    coords: Coordinate,
    ident: String,
    name: String,
}

impl Navaid {
    pub fn new(kind: NavaidKind, coords: Coordinate, ident: &str, name: &str) -> Self {
        Self {
            kind,
            coords,
            ident: ident.to_string(),
            name: name.to_string(),
        }
    }

    pub fn kind(&self) -> NavaidKind { self.kind }

    pub fn coords(&self) -> Coordinate { self.coords }

    pub fn ident(&self) -> &str { &self.ident }

    pub fn name(&self) -> &str { &self.name }
}

/// One flight-plan entry. An empty slot carries the (0, 0) coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct FmsEntry {
    kind: NavaidKind,
    ident: String,
    coords: Coordinate,
}

impl FmsEntry {
    pub fn new(kind: NavaidKind, ident: &str, coords: Coordinate) -> Self {
        Self {
            kind,
            ident: ident.to_string(),
            coords,
        }
    }

    pub fn kind(&self) -> NavaidKind { self.kind }

    pub fn ident(&self) -> &str { &self.ident }

    pub fn coords(&self) -> Coordinate { self.coords }
}

/// The host's navigation database: a scannable navaid table plus the
/// flight-plan entries of the FMS.
pub trait NavDatabase {
    /// Handle of the first navaid in the table, `None` for an empty table.
    fn first_navaid(&self) -> Option<NavaidRef>;

    /// Handle of the navaid following `from`, `None` at the end of the table.
    fn next_navaid(&self, from: NavaidRef) -> Option<NavaidRef>;

    /// Resolves a handle to its record. `None` for a stale or foreign handle.
    fn navaid(&self, nav_ref: NavaidRef) -> Option<Navaid>;

    /// Number of entries in the flight plan.
    fn fms_entry_count(&self) -> usize;

    /// Index of the entry the FMS currently flies toward.
    fn destination_fms_entry(&self) -> usize;

    /// Index of the entry the FMS currently shows.
    fn displayed_fms_entry(&self) -> usize;

    /// Flight-plan entry at `index`, `None` out of range.
    fn fms_entry(&self, index: usize) -> Option<FmsEntry>;
}
