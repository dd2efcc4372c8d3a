use std::collections::HashMap;

use smartstring::alias::{String as SmartString};


/// Countries reported by the country-level table, in column order.
pub static INTERESTING_COUNTRIES: [&'static str; 7] = [
	"Iceland", "Italy", "UK", "US", "Brazil", "Germany", "France",
];

static COUNTRY_ALIASES: [(&'static str, &'static str); 1] = [
	("United Kingdom", "UK"),
];

static SUBDIVISIONS: [(&'static str, &'static str); 55] = [
	("Alaska", "AK"),
	("Alabama", "AL"),
	("Arkansas", "AR"),
	("American Samoa", "AS"),
	("Arizona", "AZ"),
	("California", "CA"),
	("Colorado", "CO"),
	("Connecticut", "CT"),
	("District of Columbia", "DC"),
	("Delaware", "DE"),
	("Florida", "FL"),
	("Georgia", "GA"),
	("Guam", "GU"),
	("Hawaii", "HI"),
	("Iowa", "IA"),
	("Idaho", "ID"),
	("Illinois", "IL"),
	("Indiana", "IN"),
	("Kansas", "KS"),
	("Kentucky", "KY"),
	("Louisiana", "LA"),
	("Massachusetts", "MA"),
	("Maryland", "MD"),
	("Maine", "ME"),
	("Michigan", "MI"),
	("Minnesota", "MN"),
	("Missouri", "MO"),
	("Mississippi", "MS"),
	("Montana", "MT"),
	("North Carolina", "NC"),
	("North Dakota", "ND"),
	("Nebraska", "NE"),
	("New Hampshire", "NH"),
	("New Jersey", "NJ"),
	("New Mexico", "NM"),
	("Nevada", "NV"),
	("New York", "NY"),
	("Ohio", "OH"),
	("Oklahoma", "OK"),
	("Oregon", "OR"),
	("Pennsylvania", "PA"),
	("Puerto Rico", "PR"),
	("Rhode Island", "RI"),
	("South Carolina", "SC"),
	("South Dakota", "SD"),
	("Tennessee", "TN"),
	("Texas", "TX"),
	("Utah", "UT"),
	("Virginia", "VA"),
	("Virgin Islands", "VI"),
	("Vermont", "VT"),
	("Washington", "WA"),
	("Wisconsin", "WI"),
	("West Virginia", "WV"),
	("Wyoming", "WY"),
];

// The census county list is the canonical spelling; these map the daily
// report spelling onto it.
static LOCALITY_ALIASES: [(&'static str, &'static str); 10] = [
	("Baltimore City", "Baltimore city"), // MD
	("Desoto", "DeSoto"), // MS, FL
	("Fairfax City", "Fairfax"), // VA
	("Franklin City", "Franklin"), // VA
	("Kansas City", "Jackson"), // MO, mostly in Jackson county
	("LeSeur", "Le Sueur"), // MN
	("New York City", "New York"),
	("Richmond City", "Richmond"), // VA
	("Roanoke City", "Roanoke"), // VA
	("St. Louis City", "St Louis city"), // MO
];

static UNASSIGNED_PREFIXES: [&'static str; 4] = [
	"unassigned", "unknown", "out-of", "out of",
];

static COUNTY_SUFFIX: &'static str = " county";


/// Immutable lookup tables used to canonicalize names found in the daily
/// reports.
#[derive(Debug, Clone)]
pub struct NameTables {
	interesting_countries: Vec<&'static str>,
	country_aliases: HashMap<&'static str, &'static str>,
	subdivision_codes: HashMap<&'static str, &'static str>,
	subdivision_names: HashMap<&'static str, &'static str>,
	locality_aliases: HashMap<&'static str, &'static str>,
}

impl NameTables {
	pub fn new() -> Self {
		Self{
			interesting_countries: INTERESTING_COUNTRIES.to_vec(),
			country_aliases: COUNTRY_ALIASES.iter().copied().collect(),
			subdivision_codes: SUBDIVISIONS.iter().copied().collect(),
			subdivision_names: SUBDIVISIONS.iter().map(|(name, code)| (*code, *name)).collect(),
			locality_aliases: LOCALITY_ALIASES.iter().copied().collect(),
		}
	}

	pub fn interesting_countries(&self) -> &[&'static str] {
		&self.interesting_countries[..]
	}

	pub fn is_interesting(&self, country: &str) -> bool {
		self.interesting_countries.iter().any(|c| *c == country)
	}

	/// Iterate over all `(full name, code)` subdivision pairs.
	pub fn subdivisions(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
		self.subdivision_codes.iter().map(|(name, code)| (*name, *code))
	}

	pub fn resolve_country_alias<'a>(&'a self, name: &'a str) -> &'a str {
		match self.country_aliases.get(name) {
			Some(alias) => *alias,
			None => name,
		}
	}

	/// Map a subdivision name (or code) to its two-letter code.
	///
	/// Names of the form `"City, ST"` are reduced to their last token first.
	pub fn encode_subdivision<'a>(&'a self, name: &'a str) -> Option<&'a str> {
		let name = trim_to_last_token(name);
		match self.subdivision_codes.get(name) {
			Some(code) => Some(*code),
			None if self.subdivision_names.contains_key(name) => Some(name),
			None => None,
		}
	}

	/// Map a subdivision code (or name) to its full name.
	pub fn decode_subdivision<'a>(&'a self, name: &'a str) -> Option<&'a str> {
		let name = trim_to_last_token(name);
		match self.subdivision_names.get(name) {
			Some(full) => Some(*full),
			None if self.subdivision_codes.contains_key(name) => Some(name),
			None => None,
		}
	}

	pub fn resolve_locality_alias(&self, name: Option<&str>) -> Option<SmartString> {
		let name = name?;
		let name = self.locality_aliases.get(name).copied().unwrap_or(name);
		let mut result: SmartString = name.chars().filter(|c| *c != '.' && *c != '\'').collect();
		if has_suffix_ignore_case(&result, COUNTY_SUFFIX) {
			result.truncate(result.len() - COUNTY_SUFFIX.len());
		}
		Some(result)
	}
}

impl Default for NameTables {
	fn default() -> Self {
		Self::new()
	}
}


/// True for placeholder localities such as "Unassigned" or "Out of NY".
pub fn is_unassigned(locality: &str) -> bool {
	UNASSIGNED_PREFIXES.iter().any(|prefix| has_prefix_ignore_case(locality, prefix))
}

fn trim_to_last_token(name: &str) -> &str {
	if !name.contains(',') {
		return name
	}
	name.split(|c| c == ',' || c == ' ')
		.filter(|token| token.len() > 0)
		.last()
		.unwrap_or(name)
}

fn has_prefix_ignore_case(s: &str, prefix: &str) -> bool {
	match s.get(..prefix.len()) {
		Some(head) => head.eq_ignore_ascii_case(prefix),
		None => false,
	}
}

fn has_suffix_ignore_case(s: &str, suffix: &str) -> bool {
	if s.len() < suffix.len() {
		return false
	}
	match s.get((s.len() - suffix.len())..) {
		Some(tail) => tail.eq_ignore_ascii_case(suffix),
		None => false,
	}
}
