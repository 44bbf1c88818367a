//! Stop code to numeric stop ID mapping.

use crate::domain::{StopCode, StopId};
use crate::error::TableMiss;

/// Station and terminal codes that are not numeric in the feed.
///
/// Station codes live in 9000-9999; the remaining codes use 100000 and up
/// or historical IDs, so none collide with ordinary digit-coded stops.
pub const STOP_CODE_OVERRIDES: &[(&str, u32)] = &[
    ("UN", 9021),
    ("EX", 9022),
    ("BL", 9023),
    ("MI", 9031),
    ("KP", 9032),
    ("LO", 9033),
    ("WE", 9041),
    ("ET", 9042),
    ("OR", 9051),
    ("OL", 9052),
    ("DA", 9061),
    ("SC", 9062),
    ("EG", 9063),
    ("AG", 9071),
    ("GU", 9081),
    ("RO", 9091),
    ("PO", 9111),
    ("DI", 9113),
    ("CO", 9114),
    ("CL", 9121),
    ("ER", 9123),
    ("OA", 9131),
    ("BO", 9141),
    ("AP", 9151),
    ("BU", 9161),
    ("AL", 9171),
    ("HA", 9181),
    ("YO", 9191),
    ("SR", 9211),
    ("ME", 9221),
    ("LS", 9231),
    ("ML", 9241),
    ("KI", 9271),
    ("MA", 9311),
    ("BE", 9321),
    ("BR", 9331),
    ("MO", 9341),
    ("GE", 9351),
    ("AC", 9371),
    ("GL", 9391),
    ("EA", 9441),
    ("LA", 9601),
    ("RI", 9612),
    ("MP", 9613),
    ("RU", 9614),
    ("KC", 9621),
    ("AU", 9631),
    ("NE", 9641),
    ("BD", 9651),
    ("BA", 9681),
    ("AD", 9691),
    ("MK", 9701),
    ("UI", 9712),
    ("MR", 9721),
    ("CE", 9722),
    ("MJ", 9731),
    ("ST", 9741),
    ("LI", 9742),
    ("KE", 9771),
    ("PIN", 9911),
    ("AJ", 9921),
    ("WH", 9939),
    ("OS", 9941),
    ("USBT", 52),
    ("PA", 311),
    ("JAMES STR", 100001),
    ("NI", 100003),
    ("SCTH", 100005),
    ("DW", 100006),
];

/// Map a feed stop code to its numeric stop ID.
///
/// Digit-only codes map to themselves. Other codes must appear in
/// [`STOP_CODE_OVERRIDES`]; codes are matched exactly, case included.
///
/// # Examples
///
/// ```
/// use go_bus_feed::domain::StopCode;
/// use go_bus_feed::remap::stop_numeric_id;
///
/// let code = StopCode::parse("02112").unwrap();
/// assert_eq!(stop_numeric_id(&code).unwrap().get(), 2112);
///
/// let union = StopCode::parse("UN").unwrap();
/// assert_eq!(stop_numeric_id(&union).unwrap().get(), 9021);
///
/// let unknown = StopCode::parse("ZZ").unwrap();
/// assert!(stop_numeric_id(&unknown).is_err());
/// ```
pub fn stop_numeric_id(code: &StopCode) -> Result<StopId, TableMiss> {
    let miss = || TableMiss::StopCode {
        code: code.as_str().to_string(),
    };

    if code.is_numeric() {
        // Digit codes too long for an ID have nowhere to go
        return code.as_str().parse().map(StopId::new).map_err(|_| miss());
    }

    STOP_CODE_OVERRIDES
        .iter()
        .find(|(known, _)| *known == code.as_str())
        .map(|(_, id)| StopId::new(*id))
        .ok_or_else(miss)
}
