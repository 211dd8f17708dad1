use crate::flight_control::common::geo::Coordinate;
use crate::host::navigation::{NavDatabase, NavaidKind, NavaidRef};
use strum_macros::Display;

#[derive(Debug, Display, PartialEq, Eq, Clone)]
pub enum SearchError {
    /// No navaid in the whole table carries the queried identifier.
    #[strum(to_string = "{ident} not found")]
    NotFound { ident: String },
    /// `next` without a match to resume from.
    #[strum(to_string = "No previous search")]
    NoPreviousSearch,
    /// The scan ran past the last matching navaid.
    #[strum(to_string = "No more entries for {ident}")]
    Exhausted { ident: String },
    /// The flight plan has no entries at all.
    #[strum(to_string = "You're not heading to a FMS waypoint")]
    FmsEmpty,
    /// The destination flight-plan slot is blank.
    #[strum(to_string = "You're not heading to a FMS waypoint")]
    FmsEntryUnset,
}

impl std::error::Error for SearchError {}

/// A selected warp target.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    ident: String,
    name: String,
    kind: NavaidKind,
    coords: Coordinate,
}

impl Destination {
    pub fn ident(&self) -> &str { &self.ident }

    pub fn name(&self) -> &str { &self.name }

    pub fn kind(&self) -> NavaidKind { self.kind }

    pub fn coords(&self) -> Coordinate { self.coords }
}

/// A successful lookup, with the distance from the aircraft for display.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchHit {
    Navaid {
        destination: Destination,
        distance_nm: f64,
    },
    Fms {
        index: usize,
        destination: Destination,
        distance_nm: f64,
    },
}

/// Identifier search over the host's navaid table, with a resumable cursor.
///
/// An empty query falls through to the FMS and selects the entry the flight
/// plan currently flies toward. A non-empty query scans the table from the
/// top; `next_match` resumes behind the previous hit until the table runs
/// out. Identifiers compare case-insensitively.
#[derive(Debug, Default)]
pub struct NavSearch {
    query: String,
    cursor: Option<NavaidRef>,
}

impl NavSearch {
    pub fn new() -> Self { Self::default() }

    /// The uppercased identifier of the last search.
    pub fn query(&self) -> &str { &self.query }

    /// Whether a match exists to resume from.
    pub fn has_match(&self) -> bool { self.cursor.is_some() }

    /// Drops the query and the resume cursor.
    pub fn reset(&mut self) {
        self.query.clear();
        self.cursor = None;
    }

    /// Starts a fresh search. Any previous resume cursor is dropped up front,
    /// so a failed search leaves nothing to resume.
    pub fn find(
        &mut self,
        db: &impl NavDatabase,
        own_coords: Coordinate,
        query: &str,
    ) -> Result<SearchHit, SearchError> {
        self.cursor = None;
        self.query = query.to_uppercase();
        if self.query.is_empty() {
            return self.fms_destination(db, own_coords);
        }
        self.scan(db, own_coords, db.first_navaid()).ok_or_else(|| SearchError::NotFound {
            ident: self.query.clone(),
        })
    }

    /// Resumes the previous search behind the last hit.
    pub fn next_match(
        &mut self,
        db: &impl NavDatabase,
        own_coords: Coordinate,
    ) -> Result<SearchHit, SearchError> {
        let Some(cursor) = self.cursor else {
            return Err(SearchError::NoPreviousSearch);
        };
        self.cursor = None;
        let resume = db.next_navaid(cursor);
        self.scan(db, own_coords, resume).ok_or_else(|| SearchError::Exhausted {
            ident: self.query.clone(),
        })
    }

    fn fms_destination(
        &self,
        db: &impl NavDatabase,
        own_coords: Coordinate,
    ) -> Result<SearchHit, SearchError> {
        if db.fms_entry_count() < 1 {
            return Err(SearchError::FmsEmpty);
        }
        let index = db.destination_fms_entry();
        let entry = db.fms_entry(index).ok_or(SearchError::FmsEmpty)?;
        if entry.coords().is_unset() {
            return Err(SearchError::FmsEntryUnset);
        }
        let destination = Destination {
            ident: entry.ident().to_string(),
            name: entry.ident().to_string(),
            kind: entry.kind(),
            coords: entry.coords(),
        };
        let distance_nm = own_coords.distance_nm(&entry.coords());
        Ok(SearchHit::Fms {
            index,
            destination,
            distance_nm,
        })
    }

    fn scan(
        &mut self,
        db: &impl NavDatabase,
        own_coords: Coordinate,
        start: Option<NavaidRef>,
    ) -> Option<SearchHit> {
        let mut cursor = start;
        while let Some(nav_ref) = cursor {
            if let Some(aid) = db.navaid(nav_ref) {
                if aid.ident().to_uppercase() == self.query {
                    self.cursor = Some(nav_ref);
                    let destination = Destination {
                        ident: self.query.clone(),
                        name: aid.name().to_string(),
                        kind: aid.kind(),
                        coords: aid.coords(),
                    };
                    let distance_nm = own_coords.distance_nm(&aid.coords());
                    return Some(SearchHit::Navaid {
                        destination,
                        distance_nm,
                    });
                }
            }
            cursor = db.next_navaid(nav_ref);
        }
        None
    }
}
