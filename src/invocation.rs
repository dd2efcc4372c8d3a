use smartstring::alias::{String as SmartString};

use chrono::NaiveDate;

use crate::aggregate::DateFilter;


/// Country selecting the locality report on the command line.
pub static LOCALITY_SELECTOR: &'static str = "US";

// `%B` also accepts abbreviated month names.
static DATE_FORMATS: [&'static str; 8] = [
	"%Y-%m-%d",
	"%m-%d-%Y",
	"%Y/%m/%d",
	"%m/%d/%Y",
	"%Y%m%d",
	"%B %d %Y",
	"%B %d, %Y",
	"%d %B %Y",
];


/// Lenient date parsing for command line arguments.
///
/// Numeric dates with the year last are always read month first, US
/// style, like the daily report file names: `03/04/2020` is March 4th.
/// Day-first input has to spell the month (`4 March 2020`).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
	let s = s.trim();
	DATE_FORMATS.iter().find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
	Countries,
	Localities{country: SmartString, dates: DateFilter},
}

impl Invocation {
	/// Interpret `[SELECTOR] [DATE]` (program name excluded).
	///
	/// Only the locality selector looks at the date; an unparseable date
	/// means all dates.
	pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
		match args.first().map(|s| s.as_ref()) {
			Some(selector) if selector == LOCALITY_SELECTOR => {
				let date = args.get(1).and_then(|s| parse_date(s.as_ref()));
				Self::Localities{
					country: selector.into(),
					dates: date.into(),
				}
			},
			_ => Self::Countries,
		}
	}
}
