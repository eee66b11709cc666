// Time expression pre-pass.
//
// "22.00" is the time ten p.m., not the decimal 22.0; this stage rewrites
// recognized clock times into plain hour/minute integers before the number
// converter runs. Minute 30 becomes "buçuk" (half past) and zero minutes
// are dropped entirely ("saat 22.00" reads as "saat 22").

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// Times with an explicit "saat" prefix: "saat 22.00", "saat 9:45".
    static ref SAAT_TIME_RE: Regex = Regex::new(r"(\bsaat\s+)(\d{1,2})[.:](\d{2})\b").unwrap();
    /// Standalone clock times: "22.00", "9:45".
    static ref BARE_TIME_RE: Regex = Regex::new(r"\b(\d{1,2})[.:](\d{2})\b").unwrap();
    /// Full date shapes (01.09.2023). Dates win over times, so bare-time
    /// matches inside one of these spans are skipped.
    static ref DATE_SHAPE_RE: Regex =
        Regex::new(r"\b(\d{1,2})[./-](\d{1,2})[./-]\d{2,4}\b").unwrap();
}

fn is_valid_time(hours: &str, minutes: &str) -> bool {
    let h: u32 = match hours.parse() {
        Ok(v) => v,
        Err(_) => return false,
    };
    let m: u32 = match minutes.parse() {
        Ok(v) => v,
        Err(_) => return false,
    };
    h <= 23 && m <= 59
}

fn spoken_time(hours: &str, minutes: &str) -> String {
    match minutes {
        "00" => hours.to_string(),
        "30" => format!("{hours} buçuk"),
        _ => format!("{hours} {minutes}"),
    }
}

/// Byte ranges of plausible dd.mm.yyyy dates. A range like "12.30-13.30"
/// has the right shape but 30 is not a month, so it does not qualify.
fn date_spans(text: &str) -> Vec<(usize, usize)> {
    DATE_SHAPE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let day: u32 = caps[1].parse().ok()?;
            let month: u32 = caps[2].parse().ok()?;
            if (1..=31).contains(&day) && (1..=12).contains(&month) {
                let m = caps.get(0)?;
                Some((m.start(), m.end()))
            } else {
                None
            }
        })
        .collect()
}

/// Rewrite clock-time expressions as separated hour/minute integers.
///
/// Patterns that fail the 0-23 / 0-59 validity check are left untouched;
/// they are most likely decimals or something else entirely. Matches that
/// fall inside a date span stay verbatim too, since dates outrank times.
pub fn normalize_times(text: &str) -> String {
    let replaced = SAAT_TIME_RE.replace_all(text, |caps: &Captures| {
        if is_valid_time(&caps[2], &caps[3]) {
            format!("{}{}", &caps[1], spoken_time(&caps[2], &caps[3]))
        } else {
            caps[0].to_string()
        }
    });

    let dates = date_spans(&replaced);
    let mut output = String::with_capacity(replaced.len());
    let mut tail = 0;
    for caps in BARE_TIME_RE.captures_iter(&replaced) {
        // captures_iter guarantees group 0.
        let Some(whole) = caps.get(0) else { continue };
        let in_date = dates
            .iter()
            .any(|&(start, end)| whole.start() < end && whole.end() > start);
        if in_date || !is_valid_time(&caps[1], &caps[2]) {
            continue;
        }
        output.push_str(&replaced[tail..whole.start()]);
        output.push_str(&spoken_time(&caps[1], &caps[2]));
        tail = whole.end();
    }
    output.push_str(&replaced[tail..]);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saat_prefixed_times() {
        assert_eq!(normalize_times("saat 22.00 sularında"), "saat 22 sularında");
        assert_eq!(normalize_times("saat 9.45 gibi"), "saat 9 45 gibi");
    }

    #[test]
    fn half_past_becomes_bucuk() {
        assert_eq!(normalize_times("saat 22.30'da"), "saat 22 buçuk'da");
        assert_eq!(normalize_times("13.30 uçağı"), "13 buçuk uçağı");
    }

    #[test]
    fn zero_minutes_omitted() {
        assert_eq!(normalize_times("14.00 itibariyle"), "14 itibariyle");
        assert_eq!(normalize_times("18:00'de"), "18'de");
    }

    #[test]
    fn colon_separator() {
        assert_eq!(normalize_times("22:15 treni"), "22 15 treni");
    }

    #[test]
    fn date_component_not_a_time() {
        // 01.09 would be a valid clock reading, but the third component
        // marks the whole thing as a date.
        assert_eq!(
            normalize_times("01.09.2023 tarihinde"),
            "01.09.2023 tarihinde"
        );
    }

    #[test]
    fn hyphenated_range_is_two_times() {
        // Shape-wise "12.30-13" could open a date, but 30 is no month.
        assert_eq!(
            normalize_times("mola 12.30-13.30 arasında"),
            "mola 12 buçuk-13 buçuk arasında"
        );
    }

    #[test]
    fn invalid_times_untouched() {
        // 45 is not a valid hour, 75 not a valid minute.
        assert_eq!(normalize_times("45.99 olasılık"), "45.99 olasılık");
        assert_eq!(normalize_times("12.75 lira"), "12.75 lira");
    }

    #[test]
    fn apostrophe_suffix_survives() {
        assert_eq!(normalize_times("22.15'te başlar"), "22 15'te başlar");
    }
}
