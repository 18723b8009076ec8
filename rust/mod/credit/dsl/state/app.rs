//! Shell state: the current location, stored at `app/location`.

use credit_flux::Location;
use credit_flux_derive::state;

/// Where the console is. Bookmarkable selectors (the business tab) live in
/// its query string.
#[state("app/location")]
pub struct AppLocation(pub Location);
