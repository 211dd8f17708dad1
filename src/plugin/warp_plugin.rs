use crate::flight_control::{WarpComputer, WarpError, WarpParameters};
use crate::host::data_access::{FlightData, FuelSystem};
use crate::host::navigation::NavDatabase;
use crate::logger::DebugTrace;
use crate::plugin::navaid_search::{Destination, NavSearch, SearchError, SearchHit};
use crate::prefs::Preferences;
use crate::{error, info};
use std::path::PathBuf;

/// The panel-facing side of the plugin.
///
/// Owns the host connection, the preferences, the search state and the
/// currently selected destination, and turns panel events into a status
/// line. Every handler leaves its outcome in [`status`](Self::status), the
/// way the panel caption shows it.
pub struct WarpPlugin<H> {
    host: H,
    prefs: Preferences,
    prefs_path: PathBuf,
    search: NavSearch,
    destination: Option<Destination>,
    status: String,
    trace: DebugTrace,
}

impl<H: FlightData + FuelSystem + NavDatabase> WarpPlugin<H> {
    /// Brings the plugin up: loads (and heals) the preference file and opens
    /// the debug trace. `None` for `trace_path` keeps the trace console-only.
    pub fn start(host: H, prefs_path: PathBuf, trace_path: Option<PathBuf>) -> Self {
        info!("Starting {} v{}", crate::PLUGIN_NAME, crate::PLUGIN_VERSION);
        let prefs = Preferences::load(&prefs_path);
        let trace = DebugTrace::open(trace_path.as_deref());
        Self {
            host,
            prefs,
            prefs_path,
            search: NavSearch::new(),
            destination: None,
            status: format!("Welcome to {}", crate::PLUGIN_NAME),
            trace,
        }
    }

    /// Shuts the plugin down. Preferences are already on disk at this point;
    /// the burn-fuel toggle is session state and is not persisted here.
    pub fn stop(mut self) {
        self.trace.line("Stopped");
    }

    /// Looks `query` up in the navaid table and makes the first hit the
    /// destination. An empty query selects the waypoint the flight plan
    /// currently flies toward instead.
    pub fn find(&mut self, query: &str) {
        if query.is_empty() {
            self.trace_fms_state();
        }
        let own_coords = self.host.world_position().coords();
        match self.search.find(&self.host, own_coords, query) {
            Ok(hit) => self.adopt_hit(hit),
            Err(err) => self.reject_search(&err),
        }
    }

    /// Advances the previous identifier search to its next hit.
    pub fn next_match(&mut self) {
        let own_coords = self.host.world_position().coords();
        match self.search.next_match(&self.host, own_coords) {
            Ok(hit) => self.adopt_hit(hit),
            Err(err) => self.reject_search(&err),
        }
    }

    /// Warps toward the selected destination. `standoff_field` and
    /// `max_field` are the raw panel field texts; parsed values are adopted
    /// into the preferences, which are saved once the warp went through.
    pub fn warp(&mut self, standoff_field: &str, max_field: &str) {
        let Some(destination) = self.destination.clone() else {
            self.set_status(WarpError::NothingToWarpTo.to_string());
            return;
        };
        let Some(standoff_nm) = parse_field(standoff_field) else {
            self.set_status(format!("{standoff_field} is not a valid value"));
            return;
        };
        let Some(max_warp_nm) = parse_field(max_field) else {
            self.set_status(format!("{max_field} is not a valid value"));
            return;
        };
        self.prefs.set_standoff_nm(standoff_nm);
        self.prefs.set_max_warp_nm(max_warp_nm);

        let params = WarpParameters::new(standoff_nm, max_warp_nm, self.prefs.burn_fuel());
        let result =
            WarpComputer::new(&mut self.host, &mut self.trace).warp(destination.coords(), &params);
        match result {
            Ok(summary) => {
                self.set_status(format!(
                    "Warped {:.2}nm using {:.0}kg",
                    summary.traveled_nm(),
                    summary.burnt_kg()
                ));
                self.save_prefs();
            }
            Err(err) => self.set_status(err.to_string()),
        }
    }

    /// Blanks the status line and forgets the search. The destination stays
    /// selected, so a warp right after clearing still works.
    pub fn clear_status(&mut self) {
        self.search.reset();
        self.status = " ".to_string();
    }

    /// The burn toggle is session state; it reaches the preference file only
    /// through the next successful warp or a translucency change.
    pub fn set_burn_fuel(&mut self, burn_fuel: bool) {
        self.prefs.set_burn_fuel(burn_fuel);
    }

    pub fn set_translucent(&mut self, translucent: bool) {
        self.prefs.set_translucent(translucent);
        self.save_prefs();
    }

    /// Puts the warp fields back to their defaults and persists them.
    pub fn reset_defaults(&mut self) {
        self.prefs.reset_warp_defaults();
        self.save_prefs();
    }

    pub fn status(&self) -> &str { &self.status }

    pub fn destination(&self) -> Option<&Destination> { self.destination.as_ref() }

    pub fn prefs(&self) -> &Preferences { &self.prefs }

    pub fn host(&self) -> &H { &self.host }

    pub fn host_mut(&mut self) -> &mut H { &mut self.host }

    fn adopt_hit(&mut self, hit: SearchHit) {
        match hit {
            SearchHit::Navaid {
                destination,
                distance_nm,
            } => {
                self.set_status(format!(
                    "{} [{}] at {distance_nm:.1} nm is {}",
                    destination.ident(),
                    destination.kind(),
                    destination.name()
                ));
                self.destination = Some(destination);
            }
            SearchHit::Fms {
                index,
                destination,
                distance_nm,
            } => {
                self.set_status(format!(
                    "FMS[{index}] is {} [{}] at {distance_nm:.1} nm",
                    destination.ident(),
                    destination.kind()
                ));
                self.destination = Some(destination);
            }
        }
    }

    fn reject_search(&mut self, err: &SearchError) {
        match err {
            // a definitive miss forgets any previously selected destination
            SearchError::NotFound { .. }
            | SearchError::Exhausted { .. }
            | SearchError::FmsEntryUnset => self.destination = None,
            SearchError::NoPreviousSearch | SearchError::FmsEmpty => {}
        }
        self.set_status(err.to_string());
    }

    fn save_prefs(&mut self) {
        if let Err(err) = self.prefs.save(&self.prefs_path) {
            error!("Failed to write preferences to {}: {err}", self.prefs_path.display());
        }
    }

    fn trace_fms_state(&mut self) {
        let entries = self.host.fms_entry_count();
        let destination = self.host.destination_fms_entry();
        let displayed = self.host.displayed_fms_entry();
        self.trace.line(&format!(
            "FMS entries: {entries}, destination entry: {destination}, displayed entry: {displayed}"
        ));
    }

    fn set_status(&mut self, status: String) { self.status = status; }
}

fn parse_field(text: &str) -> Option<u32> { text.trim().parse().ok() }
