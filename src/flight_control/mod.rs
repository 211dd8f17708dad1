pub(crate) mod common;
mod fuel;
mod warp_computer;

pub use common::geo::{Coordinate, EARTH_RADIUS_NM, METERS_PER_NM};
pub use common::vec3d::Vec3D;
pub use fuel::{FuelError, drain_tanks, fuel_usage};
pub use warp_computer::{
    Displacement, WarpComputer, WarpError, WarpParameters, WarpSummary, warp_displacement,
};

#[cfg(test)]
mod tests;
