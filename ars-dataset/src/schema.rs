//! Column names of the cleaned sample table.
//!
//! Single source of truth for the loader; the names match the file produced
//! by the upstream cleaning step.

/// Total arsenic concentration (mg/L), numeric.
pub const ARSENIC: &str = "as_tot_float";

/// Date the sample was taken.
pub const SAMPLE_DATE: &str = "fecha_realizacion_dt";

/// Water body type label ("Subterránea", "Superficial", ...).
pub const WATER_BODY: &str = "sub_o_sup";

/// Calendar year of the sample.
pub const YEAR: &str = "ano";

/// NOM-127-SSA1-2021 arsenic exceedance flag (1 = exceeds).
pub const EXCEEDS: &str = "supNOM127SSA12021_As";

/// Every column the loader requires.
pub const REQUIRED: [&str; 5] = [ARSENIC, SAMPLE_DATE, WATER_BODY, YEAR, EXCEEDS];

/// Default input file name.
pub const DEFAULT_INPUT: &str = "tlm_conagua_limpio.parquet";
