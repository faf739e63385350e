use std::ops::Deref;

use serde::Deserialize;

/// A duration written as whitespace separated parts like `"1d 2h"` or `"500ms"`.
///
/// Supported units are `ms`, `s`, `m`, `h` and `d`. A bare number counts as seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::str::FromStr for Duration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .try_fold(std::time::Duration::ZERO, |acc, part| {
                let unit_start = part
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or(part.len());
                let (value, unit) = part.split_at(unit_start);
                let value = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid duration part {part:?}"))?;
                let part = match unit {
                    "ms" => Some(std::time::Duration::from_millis(value)),
                    "" | "s" => Some(std::time::Duration::from_secs(value)),
                    "m" => value.checked_mul(60).map(std::time::Duration::from_secs),
                    "h" => value
                        .checked_mul(60 * 60)
                        .map(std::time::Duration::from_secs),
                    "d" => value
                        .checked_mul(24 * 60 * 60)
                        .map(std::time::Duration::from_secs),
                    _ => return Err(format!("Invalid duration unit {unit:?}")),
                }
                .ok_or_else(|| "Duration overflow".to_owned())?;
                acc.checked_add(part)
                    .ok_or_else(|| "Duration overflow".to_owned())
            })
            .map(Self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration() {
        for (input, expected) in [
            ("13s", Some(13_000)),
            ("42m", Some(42 * 60 * 1000)),
            ("7h", Some(7 * 60 * 60 * 1000)),
            ("20d", Some(20 * 24 * 60 * 60 * 1000)),
            ("500ms", Some(500)),
            ("10", Some(10_000)),
            ("", Some(0)),
            ("1d 2h 3m 4s 5ms", Some((((24 + 2) * 60 + 3) * 60 + 4) * 1000 + 5)),
            ("xyz", None),
            ("7dd", None),
            ("s", None),
            ("-1s", None),
            ("18446744073709551615d", None),
            ("307445734561825861m", None),
            ("18446744073709551615s 1s", None),
        ] {
            let input = serde_json::Value::String(input.into());
            let output = serde_json::from_value::<Duration>(input)
                .ok()
                .map(|x| x.0.as_millis());
            assert_eq!(output, expected);
        }
    }
}
