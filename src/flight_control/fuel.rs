use crate::flight_control::common::geo::METERS_PER_NM;
use strum_macros::Display;

#[derive(Debug, Display, PartialEq, Eq, Clone, Copy)]
pub enum FuelError {
    /// The requested burn exceeds everything left in the tanks.
    #[strum(to_string = "Not enough fuel, you're in trouble...")]
    Insufficient,
}

impl std::error::Error for FuelError {}

/// Estimates the fuel a skipped leg would have burned.
///
/// # Arguments
/// * `traveled_nm` - Length of the skipped leg in nautical miles.
/// * `ground_speed` - Current ground speed in meters per second.
/// * `total_flow` - Combined fuel flow of all engines in kg per second.
///
/// # Returns
/// * `Some(kg)` with the burn for the time the leg would have taken.
/// * `None` when the ground speed is zero or negative and no time estimate exists.
pub fn fuel_usage(traveled_nm: f64, ground_speed: f64, total_flow: f64) -> Option<f64> {
    if ground_speed <= 0.0 {
        return None;
    }
    let travel_meters = traveled_nm * METERS_PER_NM;
    let time_saved = travel_meters / ground_speed;
    Some(time_saved * total_flow)
}

/// Debits `usage` kg of fuel from the tanks, draining from the center outward.
///
/// A single center tank (odd tank count, index `(n - 1) / 2`) empties first,
/// then symmetric left/right pairs working outward. Within a pair: a pair that
/// cannot cover the remainder is emptied and the cursors step outward; a tank
/// whose excess over its twin covers the remainder pays alone; otherwise the
/// pair is evened out. This models airframes whose tank arrays are laid out
/// symmetrically around an optional center tank, with center fuel fed first.
///
/// # Arguments
/// * `tanks` - Tank masses in kg, mutated in place on success only.
/// * `usage` - The amount to debit in kg.
///
/// # Returns
/// * `Ok(kg)` with the amount burnt, equal to `usage`.
/// * `Err(FuelError::Insufficient)` when `usage` exceeds the combined contents;
///   the tanks are left untouched.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn drain_tanks(tanks: &mut [f64], usage: f64) -> Result<f64, FuelError> {
    let total: f64 = tanks.iter().sum();
    if usage > total {
        return Err(FuelError::Insufficient);
    }

    let mut remaining = usage;
    let mut tl: isize;
    let mut tr: isize;
    if tanks.len() % 2 == 1 {
        let center = (tanks.len() - 1) / 2;
        if tanks[center] > remaining {
            tanks[center] -= remaining;
            remaining = 0.0;
        } else {
            remaining -= tanks[center];
            tanks[center] = 0.0;
        }
        tl = center as isize - 1;
        tr = center as isize + 1;
    } else {
        tr = (tanks.len() / 2) as isize;
        tl = tr - 1;
    }

    while remaining > 0.0 && tl >= 0 {
        let l = tl as usize;
        let r = tr as usize;
        // pair cannot cover the remainder, empty it and step outward
        if tanks[l] + tanks[r] < remaining {
            remaining -= tanks[l] + tanks[r];
            tanks[l] = 0.0;
            tanks[r] = 0.0;
            tl -= 1;
            tr += 1;
            continue;
        }
        // enough excess on one side, take it all from there
        if tanks[l] - tanks[r] > remaining {
            tanks[l] -= remaining;
            break;
        }
        if tanks[r] - tanks[l] > remaining {
            tanks[r] -= remaining;
            break;
        }
        // even the pair out
        let delta = tanks[l] - tanks[r];
        tanks[l] -= (remaining + delta) / 2.0;
        tanks[r] -= (remaining - delta) / 2.0;
        break;
    }

    Ok(usage)
}
