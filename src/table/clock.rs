/// Converts a 24-hour `HH:MM` (optionally `HH:MM:SS`) string to `h:MM AM/PM`.
/// Input that does not parse is returned unchanged.
pub fn to_twelve_hour(raw: &str) -> String {
    match parse_clock(raw) {
        Some((hours, minutes)) => {
            let suffix = if hours >= 12 { "PM" } else { "AM" };
            let display_hours = match hours % 12 {
                0 => 12,
                other => other,
            };
            format!("{display_hours}:{minutes:02} {suffix}")
        }
        None => raw.to_string(),
    }
}

fn parse_clock(raw: &str) -> Option<(u32, u32)> {
    let mut parts = raw.trim().split(':');
    let hours = numeric(parts.next()?)?;
    let minutes = numeric(parts.next()?)?;
    // The service sends seconds (and sometimes fractions) on time fields.
    if let Some(seconds) = parts.next() {
        let valid = !seconds.is_empty() && seconds.chars().all(|c| c.is_ascii_digit() || c == '.');
        if !valid {
            return None;
        }
    }
    if parts.next().is_some() || hours > 23 || minutes > 59 {
        return None;
    }
    Some((hours, minutes))
}

fn numeric(part: &str) -> Option<u32> {
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
