use crate::flight_control::common::{geo::Coordinate, vec3d::Vec3D};

/// A world-space fix: geographic coordinate plus elevation in meters MSL.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPosition {
    coords: Coordinate,
    elevation: f64,
}

impl WorldPosition {
    pub const fn new(coords: Coordinate, elevation: f64) -> Self { Self { coords, elevation } }

    pub const fn coords(&self) -> Coordinate { self.coords }

    pub const fn elevation(&self) -> f64 { self.elevation }
}

/// Read/write access to the aircraft's kinematic state and the host's
/// conversions between world coordinates and its local cartesian frame
/// (meters, x east, y up, z south).
pub trait FlightData {
    /// Aircraft position in the local frame.
    fn local_position(&self) -> Vec3D<f64>;

    /// Aircraft position in world coordinates.
    fn world_position(&self) -> WorldPosition;

    /// Ground speed in meters per second.
    fn ground_speed(&self) -> f64;

    /// Converts a world fix at the given altitude to the local frame.
    fn world_to_local(&self, coords: Coordinate, altitude: f64) -> Vec3D<f64>;

    /// Converts a local position back to a world fix.
    fn local_to_world(&self, local: Vec3D<f64>) -> WorldPosition;

    /// Teleports the aircraft to the given local-frame position.
    fn set_local_position(&mut self, position: Vec3D<f64>);
}

/// Access to the airframe's fuel tanks and engine fuel flows.
pub trait FuelSystem {
    /// Tank masses in kg, ordered as the airframe lays its tanks out.
    fn tank_masses(&self) -> Vec<f64>;

    /// Writes updated tank masses back to the airframe.
    fn set_tank_masses(&mut self, masses: &[f64]);

    /// Per-engine fuel flow in kg per second.
    fn fuel_flows(&self) -> Vec<f64>;
}
