use crate::flight_control::common::geo::{Coordinate, EARTH_RADIUS_NM, METERS_PER_NM};
use crate::flight_control::common::vec3d::Vec3D;
use crate::host::data_access::{FlightData, FuelSystem, WorldPosition};
use crate::host::navigation::{FmsEntry, Navaid, NavDatabase, NavaidRef};

/// Meters per degree of latitude on the spherical Earth the offline model uses.
const METERS_PER_DEG: f64 = EARTH_RADIUS_NM * METERS_PER_NM * std::f64::consts::PI / 180.0;

/// In-memory host for tests and development.
///
/// Implements all three capability traits against simple state: the world to
/// local conversion is an equirectangular tangent plane anchored at a
/// reference coordinate, with the simulator's axis convention (x east, y up,
/// z south) and local y equal to meters MSL. Good enough for the few hundred
/// nautical miles a warp covers, not a geodesy engine.
pub struct OfflineHost {
    anchor: Coordinate,
    aircraft: Vec3D<f64>,
    ground_speed: f64,
    tanks: Vec<f64>,
    flows: Vec<f64>,
    navaids: Vec<Navaid>,
    fms: Vec<FmsEntry>,
    destination_entry: usize,
    displayed_entry: usize,
}

impl OfflineHost {
    /// Creates a host with the aircraft parked at the given world fix, not
    /// moving, with empty tanks and no navigation data.
    pub fn new(lat: f64, lon: f64, elevation: f64) -> Self {
        Self {
            anchor: Coordinate::new(lat, lon),
            aircraft: Vec3D::new(0.0, elevation, 0.0),
            ground_speed: 0.0,
            tanks: Vec::new(),
            flows: Vec::new(),
            navaids: Vec::new(),
            fms: Vec::new(),
            destination_entry: 0,
            displayed_entry: 0,
        }
    }

    pub fn set_ground_speed(&mut self, mps: f64) { self.ground_speed = mps; }

    pub fn set_tanks(&mut self, tanks: Vec<f64>) { self.tanks = tanks; }

    pub fn set_fuel_flows(&mut self, flows: Vec<f64>) { self.flows = flows; }

    pub fn push_navaid(&mut self, navaid: Navaid) { self.navaids.push(navaid); }

    pub fn push_fms_entry(&mut self, entry: FmsEntry) { self.fms.push(entry); }

    pub fn set_destination_entry(&mut self, index: usize) { self.destination_entry = index; }

    pub fn set_displayed_entry(&mut self, index: usize) { self.displayed_entry = index; }
}

impl FlightData for OfflineHost {
    fn local_position(&self) -> Vec3D<f64> { self.aircraft }

    fn world_position(&self) -> WorldPosition { self.local_to_world(self.aircraft) }

    fn ground_speed(&self) -> f64 { self.ground_speed }

    fn world_to_local(&self, coords: Coordinate, altitude: f64) -> Vec3D<f64> {
        let east = (coords.lon() - self.anchor.lon())
            * METERS_PER_DEG
            * self.anchor.lat().to_radians().cos();
        let north = (coords.lat() - self.anchor.lat()) * METERS_PER_DEG;
        Vec3D::new(east, altitude, -north)
    }

    fn local_to_world(&self, local: Vec3D<f64>) -> WorldPosition {
        let lon = self.anchor.lon()
            + local.x() / (METERS_PER_DEG * self.anchor.lat().to_radians().cos());
        let lat = self.anchor.lat() - local.z() / METERS_PER_DEG;
        WorldPosition::new(Coordinate::new(lat, lon), local.y())
    }

    fn set_local_position(&mut self, position: Vec3D<f64>) { self.aircraft = position; }
}

impl FuelSystem for OfflineHost {
    fn tank_masses(&self) -> Vec<f64> { self.tanks.clone() }

    fn set_tank_masses(&mut self, masses: &[f64]) {
        for (slot, mass) in self.tanks.iter_mut().zip(masses) {
            *slot = *mass;
        }
    }

    fn fuel_flows(&self) -> Vec<f64> { self.flows.clone() }
}

#[allow(clippy::cast_possible_truncation)]
impl NavDatabase for OfflineHost {
    fn first_navaid(&self) -> Option<NavaidRef> {
        if self.navaids.is_empty() { None } else { Some(NavaidRef::new(0)) }
    }

    fn next_navaid(&self, from: NavaidRef) -> Option<NavaidRef> {
        let next = from.raw() as usize + 1;
        if next < self.navaids.len() { Some(NavaidRef::new(next as u32)) } else { None }
    }

    fn navaid(&self, nav_ref: NavaidRef) -> Option<Navaid> {
        self.navaids.get(nav_ref.raw() as usize).cloned()
    }

    fn fms_entry_count(&self) -> usize { self.fms.len() }

    fn destination_fms_entry(&self) -> usize { self.destination_entry }

    fn displayed_fms_entry(&self) -> usize { self.displayed_entry }

    fn fms_entry(&self, index: usize) -> Option<FmsEntry> { self.fms.get(index).cloned() }
}
