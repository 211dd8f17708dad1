use crate::flight_control::common::geo::{Coordinate, METERS_PER_NM};
use crate::flight_control::common::vec3d::Vec3D;
use crate::flight_control::fuel::{FuelError, drain_tanks, fuel_usage};
use crate::host::data_access::{FlightData, FuelSystem};
use crate::logger::DebugTrace;
use strum_macros::Display;

#[derive(Debug, Display, PartialEq, Eq, Clone, Copy)]
pub enum WarpError {
    /// No destination has been selected yet.
    #[strum(to_string = "Nowhere to warp to")]
    NothingToWarpTo,
    /// The destination coincides with the aircraft position.
    #[strum(to_string = "Already at the destination")]
    AlreadyAtDestination,
    /// Fuel burn was requested but the aircraft is not moving.
    #[strum(to_string = "Cannot estimate fuel burn while standing still")]
    Standstill,
    #[strum(to_string = "{0}")]
    Fuel(FuelError),
}

impl std::error::Error for WarpError {}

impl From<FuelError> for WarpError {
    fn from(value: FuelError) -> Self { WarpError::Fuel(value) }
}

/// Warp settings for a single jump, taken from the panel fields and the
/// fuel-burn checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarpParameters {
    standoff_nm: u32,
    max_warp_nm: u32,
    burn_fuel: bool,
}

impl WarpParameters {
    pub const fn new(standoff_nm: u32, max_warp_nm: u32, burn_fuel: bool) -> Self {
        Self {
            standoff_nm,
            max_warp_nm,
            burn_fuel,
        }
    }

    pub const fn standoff_nm(&self) -> u32 { self.standoff_nm }

    pub const fn max_warp_nm(&self) -> u32 { self.max_warp_nm }

    pub const fn burn_fuel(&self) -> bool { self.burn_fuel }
}

/// The scaled displacement toward a destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Displacement {
    vector: Vec3D<f64>,
    distance_nm: f64,
    traveled_nm: f64,
    factor: f64,
}

impl Displacement {
    /// The local-frame warp vector to add to the aircraft position.
    pub const fn vector(&self) -> Vec3D<f64> { self.vector }

    /// Full distance to the destination in nautical miles.
    pub const fn distance_nm(&self) -> f64 { self.distance_nm }

    /// Distance actually jumped, capped by the maximum and cut short by the
    /// standoff. Negative when the destination is closer than the standoff.
    pub const fn traveled_nm(&self) -> f64 { self.traveled_nm }

    /// Fraction of the way to the destination the warp covers.
    pub const fn factor(&self) -> f64 { self.factor }
}

/// Scales the delta vector toward a destination into the actual warp step.
///
/// The jump covers `min(max_nm, distance - standoff_nm)` nautical miles, so
/// the aircraft comes out `standoff_nm` short of the destination unless the
/// cap bites first. A destination closer than the standoff yields a negative
/// traveled distance and a jump away from it, back onto the standoff ring.
///
/// # Arguments
/// * `delta` - Local-frame vector from the aircraft to the destination, meters.
/// * `standoff_nm` - Distance to stay short of the destination.
/// * `max_nm` - Longest allowed jump.
///
/// # Returns
/// * `Ok(Displacement)` with the scaled vector and its bookkeeping.
/// * `Err(WarpError::AlreadyAtDestination)` when the delta has zero length and
///   no direction exists to scale.
pub fn warp_displacement(
    delta: Vec3D<f64>,
    standoff_nm: f64,
    max_nm: f64,
) -> Result<Displacement, WarpError> {
    let distance_nm = delta.abs() / METERS_PER_NM;
    if distance_nm == 0.0 {
        return Err(WarpError::AlreadyAtDestination);
    }
    let traveled_nm = max_nm.min(distance_nm - standoff_nm);
    let factor = traveled_nm / distance_nm;
    Ok(Displacement {
        vector: delta * factor,
        distance_nm,
        traveled_nm,
        factor,
    })
}

/// Result of an executed warp, for the panel status line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarpSummary {
    traveled_nm: f64,
    burnt_kg: f64,
}

impl WarpSummary {
    pub const fn traveled_nm(&self) -> f64 { self.traveled_nm }

    pub const fn burnt_kg(&self) -> f64 { self.burnt_kg }
}

/// Executes warps against a host: resolves the destination into the local
/// frame, scales the jump, debits fuel, and repositions the aircraft.
///
/// Borrows the host services and the debug trace for the duration of one
/// panel event.
pub struct WarpComputer<'a, H> {
    host: &'a mut H,
    trace: &'a mut DebugTrace,
}

impl<'a, H: FlightData + FuelSystem> WarpComputer<'a, H> {
    pub fn new(host: &'a mut H, trace: &'a mut DebugTrace) -> Self { Self { host, trace } }

    /// Warps the aircraft toward `destination`.
    ///
    /// The aircraft keeps its pre-warp elevation over the new location. With
    /// fuel burn enabled the tanks are debited before the aircraft moves, and
    /// any fuel failure aborts the warp with the aircraft untouched.
    pub fn warp(
        &mut self,
        destination: Coordinate,
        params: &WarpParameters,
    ) -> Result<WarpSummary, WarpError> {
        let local = self.host.local_position();
        let world = self.host.world_position();
        let ground_speed = self.host.ground_speed();

        self.trace.line("Preparing warp");
        // the destination is resolved at the aircraft's local height, matching
        // how the jump vector is applied
        let wpt = self.host.world_to_local(destination, local.y());
        let delta = local.to(&wpt);

        let disp = warp_displacement(
            delta,
            f64::from(params.standoff_nm()),
            f64::from(params.max_warp_nm()),
        )?;
        self.trace.line(&format!(
            "Distance {:.2}nm, warp factor {}",
            disp.traveled_nm(),
            disp.factor()
        ));

        // convert the jumped position back to world, then re-anchor it at the
        // pre-warp MSL elevation
        let raw_target = self.host.local_to_world(local + disp.vector());
        let target = self.host.world_to_local(raw_target.coords(), world.elevation());

        let burnt_kg = if params.burn_fuel() {
            self.burn_for(disp.traveled_nm(), ground_speed)?
        } else {
            0.0
        };

        self.host.set_local_position(target);
        Ok(WarpSummary {
            traveled_nm: disp.traveled_nm(),
            burnt_kg,
        })
    }

    fn burn_for(&mut self, traveled_nm: f64, ground_speed: f64) -> Result<f64, WarpError> {
        let mut tanks = self.host.tank_masses();
        let mut total_fuel = 0.0;
        for (i, tank) in tanks.iter().enumerate() {
            total_fuel += tank;
            self.trace.line(&format!("Tank #{i}: {tank} kg"));
        }

        let flows = self.host.fuel_flows();
        let mut total_flow = 0.0;
        for (i, flow) in flows.iter().enumerate() {
            total_flow += flow;
            self.trace.line(&format!("Engine #{i}: {flow} kg/sec"));
        }
        self.trace
            .line(&format!("Total fuel: {total_fuel:.2}kg Total fuel flow: {total_flow:.2}"));

        let usage =
            fuel_usage(traveled_nm, ground_speed, total_flow).ok_or(WarpError::Standstill)?;
        let time_saved = traveled_nm * METERS_PER_NM / ground_speed;
        self.trace.line(&format!(
            "Fuel to burn for {traveled_nm:.2}nm in {time_saved:.2}sec : {usage:.2}kg"
        ));

        self.trace.line(&format!("Tanks before: {tanks:?}"));
        let burnt = drain_tanks(&mut tanks, usage)?;
        self.trace.line(&format!("Tanks after: {tanks:?}"));
        self.host.set_tank_masses(&tanks);
        Ok(burnt)
    }
}
