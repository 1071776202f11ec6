/// Renders a volume in milliliters for display.
///
/// Values from 1000 up are shown in liters with one decimal, smaller ones as
/// whole milliliters. A liter value that sits exactly halfway between two
/// tenths rounds up.
///
/// ```
/// use water_log::format::format_amount;
///
/// assert_eq!(format_amount(999), "999 мл");
/// assert_eq!(format_amount(1500), "1.5 л");
/// ```
pub fn format_amount(milliliters: u64) -> String {
    if milliliters >= 1000 {
        // Only multiples of 125 ml divide into an exact binary fraction of a
        // liter, so those are the only true halfway ties.
        if milliliters % 100 == 50 && milliliters % 125 == 0 {
            let tenths = milliliters / 100 + 1;
            return format!("{}.{} л", tenths / 10, tenths % 10);
        }
        format!("{:.1} л", milliliters as f64 / 1000.0)
    } else {
        format!("{milliliters} мл")
    }
}
