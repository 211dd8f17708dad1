pub(crate) mod data_access;
pub(crate) mod navigation;
pub(crate) mod offline;

pub use data_access::{FlightData, FuelSystem, WorldPosition};
pub use navigation::{FmsEntry, Navaid, NavDatabase, NavaidKind, NavaidRef};
pub use offline::OfflineHost;
