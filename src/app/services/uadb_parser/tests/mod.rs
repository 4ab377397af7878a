//! Test fixtures for the UADB parser
//!
//! Line builders reproducing the UADB column layout so tests stay readable.


/// Build an `H` header line. `day` and `hour` are passed as raw strings so
/// tests can exercise the 99 quirks.
pub fn header_line(
    usi: i64,
    ident: &str,
    year: i32,
    month: u32,
    day: &str,
    hour: &str,
    numlev: usize,
) -> String {
    format!(
        "H {usi:>12} {ident:>6} {id_flag:>2} {src:>3} {version:>5} {date_flag:>2} \
         {year:04} {month:>2} {day:>2} {hour:>4} {loc:>3} {lat:>9} {lon:>10} \
         {ele:>6} {stype:>2} {numlev:>4} {pvers:>8}",
        id_flag = 2,
        src = 100,
        version = "2.01",
        date_flag = 1,
        month = format!("{month:02}"),
        loc = 3,
        lat = "24.5500",
        lon = "-81.7500",
        ele = "6.0",
        stype = 21,
        pvers = "NCDC1001",
    )
}

/// Build a data line from physical values (pressure in hPa, as reported).
pub fn data_line(ltyp: i64, press_hpa: f64, gph: f64, temp: f64, rh: f64, wdir: f64, wspd: f64) -> String {
    format!(
        "{ltyp:>4} {press_hpa:>8.1} {gph:>8.1} {temp:>6.1} {rh:>6.1} {wdir:>6.1} {wspd:>6.1}"
    )
}
