mod component;
mod now;
mod timezone;
mod tz;

pub use component::{DayRdfOp, HoursRdfOp, MinutesRdfOp, MonthRdfOp, SecondsRdfOp, YearRdfOp};
pub use now::NowRdfOp;
pub use timezone::TimezoneRdfOp;
pub use tz::TzRdfOp;
