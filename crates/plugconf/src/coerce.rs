//! Total conversion between stored raw strings and caller-facing types.
//!
//! Decoding is deliberately infallible: a missing or unparseable raw value
//! produces the target type's declared fallback instead of an error. This
//! means non-optional targets cannot distinguish "value absent" from "value
//! present but not parseable" — both yield the fallback.

/// Decodes a raw stored value into a concrete target type.
///
/// Every implementation is total. The fallback for each target:
/// empty string for strings, 0 for numbers, `false` for `bool`,
/// `None` for optional targets.
pub trait ConfigDecode: Sized {
	fn decode(raw: Option<&str>) -> Self;
}

/// Encodes a value into its canonical stored string form.
///
/// Booleans serialize as "1"/"0", absent optionals as the empty string,
/// everything else in its natural display form.
pub trait ConfigEncode {
	fn encode(&self) -> Box<str>;
}

impl ConfigDecode for String {
	fn decode(raw: Option<&str>) -> Self {
		raw.unwrap_or_default().to_owned()
	}
}

impl ConfigDecode for Box<str> {
	fn decode(raw: Option<&str>) -> Self {
		raw.unwrap_or_default().into()
	}
}

impl ConfigDecode for Option<String> {
	fn decode(raw: Option<&str>) -> Self {
		raw.map(ToOwned::to_owned)
	}
}

impl ConfigDecode for Option<Box<str>> {
	fn decode(raw: Option<&str>) -> Self {
		raw.map(Into::into)
	}
}

impl ConfigDecode for i32 {
	fn decode(raw: Option<&str>) -> Self {
		raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
	}
}

impl ConfigDecode for i64 {
	fn decode(raw: Option<&str>) -> Self {
		raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
	}
}

impl ConfigDecode for f64 {
	fn decode(raw: Option<&str>) -> Self {
		raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0.0)
	}
}

impl ConfigDecode for bool {
	// Booleans are stored as integers: 0 is false, anything else is true
	fn decode(raw: Option<&str>) -> Self {
		raw.and_then(|s| s.trim().parse::<i64>().ok()).is_some_and(|n| n != 0)
	}
}

impl ConfigDecode for Option<i32> {
	fn decode(raw: Option<&str>) -> Self {
		raw.and_then(|s| s.trim().parse().ok())
	}
}

impl ConfigDecode for Option<i64> {
	fn decode(raw: Option<&str>) -> Self {
		raw.and_then(|s| s.trim().parse().ok())
	}
}

impl ConfigDecode for Option<f64> {
	fn decode(raw: Option<&str>) -> Self {
		raw.and_then(|s| s.trim().parse().ok())
	}
}

impl ConfigDecode for Option<bool> {
	fn decode(raw: Option<&str>) -> Self {
		raw.and_then(|s| s.trim().parse::<i64>().ok()).map(|n| n != 0)
	}
}

impl ConfigEncode for bool {
	fn encode(&self) -> Box<str> {
		if *self { "1".into() } else { "0".into() }
	}
}

impl ConfigEncode for &str {
	fn encode(&self) -> Box<str> {
		(*self).into()
	}
}

impl ConfigEncode for String {
	fn encode(&self) -> Box<str> {
		self.as_str().into()
	}
}

impl ConfigEncode for Box<str> {
	fn encode(&self) -> Box<str> {
		self.clone()
	}
}

impl ConfigEncode for i32 {
	fn encode(&self) -> Box<str> {
		self.to_string().into()
	}
}

impl ConfigEncode for i64 {
	fn encode(&self) -> Box<str> {
		self.to_string().into()
	}
}

impl ConfigEncode for f64 {
	fn encode(&self) -> Box<str> {
		self.to_string().into()
	}
}

impl<T: ConfigEncode> ConfigEncode for Option<T> {
	fn encode(&self) -> Box<str> {
		match self {
			Some(value) => value.encode(),
			None => "".into(),
		}
	}
}


// vim: ts=4
