//! Pure presentation helpers shared by every view. No I/O, no state.

pub mod format;
pub mod labels;
pub mod pager;
pub mod ring;
pub mod score;

pub use format::{format_currency, format_date, format_datetime, format_score};
pub use labels::{Badge, Tone};
pub use pager::{PageTurn, Pager};
pub use ring::{RingGeometry, RingSize};
pub use score::{bar_width, ScoreBand};
