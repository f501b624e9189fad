use crate::display::join_list;

/// Renders elapsed playtime as a comma-separated phrase, e.g.
/// `"1 hour, 1 minute, 1 second, 3661000 milliseconds"`.
///
/// The milliseconds component is the rounded total duration, not the
/// sub-second remainder, matching how Starbound itself prints durations.
/// Negative input is unspecified: the hour/minute/second thresholds all
/// fail, so only the milliseconds component renders.
pub fn format_playtime(seconds: f64) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(4);

    if seconds >= 3600.0 {
        let hours = (seconds / 3600.0) as i64;
        parts.push(format!("{hours} hour{}", plural(hours)));
    }
    if seconds >= 60.0 {
        let minutes = ((seconds / 60.0) % 60.0) as i64;
        parts.push(format!("{minutes} minute{}", plural(minutes)));
    }
    if seconds >= 1.0 {
        let secs = (seconds % 60.0) as i64;
        parts.push(format!("{secs} second{}", plural(secs)));
    }
    let millis = (seconds * 1000.0).round() as i64;
    parts.push(format!("{millis} millisecond{}", plural(millis)));

    join_list(&parts, ", ")
}

fn plural(value: i64) -> &'static str {
    if value == 1 { "" } else { "s" }
}
