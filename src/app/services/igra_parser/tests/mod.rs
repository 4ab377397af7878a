//! Test fixtures for the IGRA v2 parser
//!
//! Line builders that reproduce the exact column layout of the format
//! description, so individual tests stay readable.


/// Build a `#` header line with the given station, date and level count.
#[allow(clippy::too_many_arguments)]
pub fn header_line(
    ident: &str,
    year: i32,
    month: u32,
    day: u32,
    hour: &str,
    reltime: &str,
    numlev: usize,
    lat_scaled: i64,
    lon_scaled: i64,
) -> String {
    format!(
        "#{ident:<11} {year:04} {month:02} {day:02} {hour:>2} {reltime:>4} {numlev:>4} \
         {p_src:<8} {np_src:<8} {lat_scaled:>7} {lon_scaled:>8}",
        p_src = "ncdc-gts",
        np_src = "ncdc-gts",
    )
}

/// Build a data line from raw integer field values (tenths where the format
/// reports tenths), with blank QA flag columns.
#[allow(clippy::too_many_arguments)]
pub fn data_line(
    lvltyp1: u8,
    lvltyp2: u8,
    etime: i64,
    press: i64,
    gph: i64,
    temp_tenths: i64,
    rh_tenths: i64,
    dpdp_tenths: i64,
    wdir: i64,
    wspd_tenths: i64,
) -> String {
    format!(
        "{lvltyp1}{lvltyp2} {etime:>5} {press:>6} {gph:>5} {temp_tenths:>5} {rh_tenths:>5} \
         {dpdp_tenths:>5} {wdir:>5} {wspd_tenths:>5}"
    )
}

/// A pressure-level data line with all-missing ancillary fields.
pub fn sparse_data_line(press: i64, temp_tenths: i64) -> String {
    data_line(2, 0, -9999, press, -9999, temp_tenths, -9999, -9999, -9999, -9999)
}
