//! AdDate parsing: noisy Persian-calendar year/month cells to Gregorian dates.
//!
//! Source cells look like "1398-07", "07/1398", or "98-07" (abbreviated
//! era), sometimes with a typographic minus sign. Parsing is a total
//! function: every malformed input reduces to missing, never to an error.

use chrono::NaiveDate;
use crate::utils::non_blank;

/// Days per Jalali month (Esfand's leap day is irrelevant at day 1).
const JALALI_MONTH_DAYS: [i64; 12] = [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

/// Clean an AdDate cell into a Gregorian date, or missing.
///
/// Normalizes the typographic minus (U+2212) and '/' to '-', expects
/// exactly two integer parts, swaps a transposed month/year pair, lifts
/// two-digit years into the 1300 era, and converts Jalali (year, month, 1)
/// to the Gregorian calendar.
pub fn clean_ad_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = non_blank(raw)?;
    let normalized = raw.trim().replace(['\u{2212}', '/'], "-");

    let mut parts = normalized.split('-');
    let (first, second) = (parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let mut year: i64 = first.trim().parse().ok()?;
    let mut month: i64 = second.trim().parse().ok()?;

    // "07-1398" style transposition: the large part is the year.
    if year < 12 && month > 12 {
        std::mem::swap(&mut year, &mut month);
    }
    if year < 1300 {
        year += 1300;
    }

    jalali_to_gregorian(year, month, 1)
}

/// Convert a Jalali calendar date to the Gregorian calendar.
///
/// Returns `None` when the Jalali date itself is invalid or the result is
/// outside chrono's range.
pub fn jalali_to_gregorian(jy: i64, jm: i64, jd: i64) -> Option<NaiveDate> {
    if !(1..=12).contains(&jm) || !(1..=31).contains(&jd) || !(979..=3000).contains(&jy) {
        return None;
    }
    if jd > JALALI_MONTH_DAYS[(jm - 1) as usize] + i64::from(jm == 12) {
        return None;
    }

    let jy = jy - 979;
    let mut j_day_no = 365 * jy + (jy / 33) * 8 + ((jy % 33) + 3) / 4;
    j_day_no += JALALI_MONTH_DAYS[..(jm - 1) as usize].iter().sum::<i64>();
    j_day_no += jd - 1;

    let mut g_day_no = j_day_no + 79;

    let mut gy = 1600 + 400 * (g_day_no / 146097);
    g_day_no %= 146097;

    let mut leap = true;
    if g_day_no >= 36525 {
        g_day_no -= 1;
        gy += 100 * (g_day_no / 36524);
        g_day_no %= 36524;
        if g_day_no >= 365 {
            g_day_no += 1;
        } else {
            leap = false;
        }
    }

    gy += 4 * (g_day_no / 1461);
    g_day_no %= 1461;

    if g_day_no >= 366 {
        leap = false;
        g_day_no -= 1;
        gy += g_day_no / 365;
        g_day_no %= 365;
    }

    let month_days = [
        31,
        if leap { 29 } else { 28 },
        31,
        30,
        31,
        30,
        31,
        31,
        30,
        31,
        30,
        31,
    ];

    let mut gm = 0usize;
    while gm < 12 && g_day_no >= month_days[gm] {
        g_day_no -= month_days[gm];
        gm += 1;
    }

    NaiveDate::from_ymd_opt(gy as i32, (gm + 1) as u32, (g_day_no + 1) as u32)
}
