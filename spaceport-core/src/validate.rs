//! Payload validation and identifier parsing.

use chrono::{DateTime, Datelike};

use crate::domain::{Ship, ShipDraft, ShipType};
use crate::error::{Result, ShipError};
use crate::rating::compute_rating;

/// Maximum accepted length for name and planet, in characters.
pub const MAX_TEXT_LEN: usize = 50;
/// Inclusive lower speed bound.
pub const SPEED_MIN: f64 = 0.01;
/// Inclusive upper speed bound.
pub const SPEED_MAX: f64 = 0.99;
/// Inclusive lower crew size bound.
pub const CREW_SIZE_MIN: i32 = 1;
/// Inclusive upper crew size bound.
pub const CREW_SIZE_MAX: i32 = 9999;
/// Earliest accepted production instant: 2799-12-31T00:00:00Z, epoch ms.
pub const PROD_DATE_MIN_MS: i64 = 26_192_160_000_000;
/// Latest accepted production instant: 3020-01-01T00:00:00Z, epoch ms.
pub const PROD_DATE_MAX_MS: i64 = 33_134_745_600_000;

/// A validated ship that has not been stored yet: every field checked,
/// usage flag defaulted, rating derived.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShip {
    /// Ship name.
    pub name: String,
    /// Home planet.
    pub planet: String,
    /// Ship category.
    pub ship_type: ShipType,
    /// Production instant as epoch milliseconds.
    pub prod_date: i64,
    /// Cruise speed.
    pub speed: f64,
    /// Crew size.
    pub crew_size: i32,
    /// Usage flag.
    pub is_used: bool,
    /// Derived rating.
    pub rating: f64,
}

impl NewShip {
    /// Attach a store-assigned identifier, producing a full record.
    pub fn into_ship(self, id: i64) -> Ship {
        Ship {
            id,
            name: self.name,
            planet: self.planet,
            ship_type: self.ship_type,
            prod_date: self.prod_date,
            speed: self.speed,
            crew_size: self.crew_size,
            is_used: self.is_used,
            rating: self.rating,
        }
    }
}

impl TryFrom<ShipDraft> for NewShip {
    type Error = ShipError;

    fn try_from(draft: ShipDraft) -> Result<Self> {
        let name = draft.name.ok_or(ShipError::BadRequest)?;
        if !text_in_bounds(&name) {
            return Err(ShipError::BadRequest);
        }
        let planet = draft.planet.ok_or(ShipError::BadRequest)?;
        if !text_in_bounds(&planet) {
            return Err(ShipError::BadRequest);
        }
        let ship_type = draft.ship_type.ok_or(ShipError::BadRequest)?;
        let prod_date = draft.prod_date.ok_or(ShipError::BadRequest)?;
        if !(PROD_DATE_MIN_MS..=PROD_DATE_MAX_MS).contains(&prod_date) {
            return Err(ShipError::BadRequest);
        }
        let speed = draft.speed.ok_or(ShipError::BadRequest)?;
        if !(SPEED_MIN..=SPEED_MAX).contains(&speed) {
            return Err(ShipError::BadRequest);
        }
        let crew_size = draft.crew_size.ok_or(ShipError::BadRequest)?;
        if !(CREW_SIZE_MIN..=CREW_SIZE_MAX).contains(&crew_size) {
            return Err(ShipError::BadRequest);
        }
        let is_used = draft.is_used.unwrap_or(false);
        let rating = compute_rating(speed, is_used, prod_year(prod_date)?);

        Ok(Self {
            name,
            planet,
            ship_type,
            prod_date,
            speed,
            crew_size,
            is_used,
            rating,
        })
    }
}

/// Parse a path-supplied ship identifier.
///
/// Only strings parsing as a positive integer are accepted; the empty
/// string, "0", negatives, and unparseable input are all rejected.
pub fn parse_ship_id(raw: &str) -> Result<i64> {
    let id = raw.parse::<i64>().map_err(|_| ShipError::BadRequest)?;
    if id <= 0 {
        return Err(ShipError::BadRequest);
    }
    Ok(id)
}

fn text_in_bounds(text: &str) -> bool {
    let length = text.chars().count();
    (1..=MAX_TEXT_LEN).contains(&length)
}

/// UTC calendar year of an epoch-millisecond instant.
fn prod_year(prod_date: i64) -> Result<i32> {
    DateTime::from_timestamp_millis(prod_date)
        .map(|instant| instant.year())
        .ok_or(ShipError::BadRequest)
}

#[cfg(test)]
mod tests {
    use super::{
        MAX_TEXT_LEN, NewShip, PROD_DATE_MAX_MS, PROD_DATE_MIN_MS, parse_ship_id,
    };
    use crate::domain::{ShipDraft, ShipType};
    use crate::error::ShipError;
    use chrono::{TimeZone, Utc};

    fn year_ms(year: i32) -> i64 {
        Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
            .single()
            .expect("valid date")
            .timestamp_millis()
    }

    fn full_draft() -> ShipDraft {
        ShipDraft {
            name: Some("Intrepid".to_string()),
            planet: Some("Earth".to_string()),
            ship_type: Some(ShipType::Transport),
            prod_date: Some(year_ms(3000)),
            speed: Some(0.5),
            crew_size: Some(100),
            is_used: None,
        }
    }

    #[test]
    fn prod_date_bounds_match_the_calendar_constants() {
        let min = Utc.with_ymd_and_hms(2799, 12, 31, 0, 0, 0)
            .single()
            .expect("valid date");
        assert_eq!(min.timestamp_millis(), PROD_DATE_MIN_MS);
        let max = Utc.with_ymd_and_hms(3020, 1, 1, 0, 0, 0)
            .single()
            .expect("valid date");
        assert_eq!(max.timestamp_millis(), PROD_DATE_MAX_MS);
    }

    #[test]
    fn full_draft_validates_and_derives_rating() {
        let ship = NewShip::try_from(full_draft()).expect("valid draft");
        assert_eq!(ship.name, "Intrepid");
        assert!(!ship.is_used);
        // 80 * 0.5 / (3019 - 3000 + 1) = 2.0
        assert_eq!(ship.rating, 2.0);
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        for draft in [
            ShipDraft { name: None, ..full_draft() },
            ShipDraft { planet: None, ..full_draft() },
            ShipDraft { ship_type: None, ..full_draft() },
            ShipDraft { prod_date: None, ..full_draft() },
            ShipDraft { speed: None, ..full_draft() },
            ShipDraft { crew_size: None, ..full_draft() },
        ] {
            assert_eq!(NewShip::try_from(draft), Err(ShipError::BadRequest));
        }
    }

    #[test]
    fn name_length_boundary_is_inclusive() {
        let at_limit = ShipDraft {
            name: Some("n".repeat(MAX_TEXT_LEN)),
            ..full_draft()
        };
        assert!(NewShip::try_from(at_limit).is_ok());

        let over_limit = ShipDraft {
            name: Some("n".repeat(MAX_TEXT_LEN + 1)),
            ..full_draft()
        };
        assert_eq!(NewShip::try_from(over_limit), Err(ShipError::BadRequest));

        let empty = ShipDraft {
            planet: Some(String::new()),
            ..full_draft()
        };
        assert_eq!(NewShip::try_from(empty), Err(ShipError::BadRequest));
    }

    #[test]
    fn speed_bounds_are_inclusive() {
        for speed in [0.01, 0.99] {
            let draft = ShipDraft { speed: Some(speed), ..full_draft() };
            assert!(NewShip::try_from(draft).is_ok());
        }
        for speed in [0.009, 0.991, -0.5] {
            let draft = ShipDraft { speed: Some(speed), ..full_draft() };
            assert_eq!(NewShip::try_from(draft), Err(ShipError::BadRequest));
        }
    }

    #[test]
    fn crew_size_bounds_are_inclusive() {
        for crew_size in [1, 9999] {
            let draft = ShipDraft { crew_size: Some(crew_size), ..full_draft() };
            assert!(NewShip::try_from(draft).is_ok());
        }
        for crew_size in [0, 10_000, -3] {
            let draft = ShipDraft { crew_size: Some(crew_size), ..full_draft() };
            assert_eq!(NewShip::try_from(draft), Err(ShipError::BadRequest));
        }
    }

    #[test]
    fn prod_date_accepts_both_boundary_instants_only() {
        for prod_date in [PROD_DATE_MIN_MS, PROD_DATE_MAX_MS] {
            let draft = ShipDraft { prod_date: Some(prod_date), ..full_draft() };
            assert!(NewShip::try_from(draft).is_ok());
        }
        for prod_date in [PROD_DATE_MIN_MS - 1, PROD_DATE_MAX_MS + 1, 0, -1] {
            let draft = ShipDraft { prod_date: Some(prod_date), ..full_draft() };
            assert_eq!(NewShip::try_from(draft), Err(ShipError::BadRequest));
        }
    }

    #[test]
    fn is_used_defaults_to_false_and_halves_rating_when_set() {
        let unused = NewShip::try_from(full_draft()).expect("valid draft");
        assert!(!unused.is_used);

        let used = NewShip::try_from(ShipDraft {
            is_used: Some(true),
            ..full_draft()
        })
        .expect("valid draft");
        assert!(used.is_used);
        assert_eq!(used.rating, unused.rating / 2.0);
    }

    #[test]
    fn into_ship_attaches_the_identifier() {
        let ship = NewShip::try_from(full_draft())
            .expect("valid draft")
            .into_ship(42);
        assert_eq!(ship.id, 42);
        assert_eq!(ship.name, "Intrepid");
    }

    #[test]
    fn identifiers_must_be_positive_integers() {
        assert_eq!(parse_ship_id("1"), Ok(1));
        assert_eq!(parse_ship_id("007"), Ok(7));
        assert_eq!(parse_ship_id("999999"), Ok(999_999));
        for raw in ["", "0", "-5", "abc", "1.5", " 1", "99999999999999999999"] {
            assert_eq!(parse_ship_id(raw), Err(ShipError::BadRequest), "id {raw:?}");
        }
    }
}
