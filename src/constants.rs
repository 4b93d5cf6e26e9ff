// DOM hooks the landing page markup provides.

pub const GLOBE_CANVAS_ID: &str = "cyber-globe";
pub const DISCLAIMER_MODAL_ID: &str = "disclaimer-modal";
pub const DISCLAIMER_ACCEPT_ID: &str = "disclaimer-accept";
pub const OPERATOR_CARD_SELECTOR: &str = ".operator-card";

// Card attributes: index assigned at wiring, glitch kind written per tick.
pub const CARD_INDEX_ATTR: &str = "data-card-index";
pub const CARD_GLITCH_ATTR: &str = "data-glitch";

// Start observing cards slightly before they scroll into view.
pub const CARD_OBSERVER_ROOT_MARGIN: &str = "100px";
pub const CARD_TICK_INTERVAL_MS: i32 = 40;
