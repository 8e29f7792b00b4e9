//! Fixed markers, column names and unit factors of the SimpleDyno run format.

/// Exact (trimmed) line that ends the header section and opens the data section.
pub const DATA_START: &str = "PRIMARY_CHANNEL_CURVE_FIT_DATA";

/// Line prefix that closes the data section.
pub const DATA_END: &str = "FULL_SET_COAST_DOWN_FIT_DATA";

/// Line prefix of the column header row inside the data section.
pub const HEADER_ROW_PREFIX: &str = "Time_(Sec)";

pub const RPM_COLUMN: &str = "RPM1_Motor_(rad/s)";
pub const TORQUE_COLUMN: &str = "Motor_Torque_(N.m)";
pub const POWER_COLUMN: &str = "Power_(W)";

/// Header keys collected into [`RawConfig`](super::model::RawConfig).
pub const CONFIG_KEYS: [&str; 4] = ["Gear_Ratio", "Roller_Diameter", "Roller_Mass", "Actual_MOI"];

/// rad/s → revolutions per minute.
pub const RAD_S_TO_RPM: f64 = 9.5493;

/// Watts in one mechanical horsepower.
pub const WATTS_PER_HP: f64 = 745.7;

/// Samples below this speed are instrument noise and are dropped.
pub const MIN_RPM: f64 = 5500.0;

/// Default RPM bucket width for aggregated curves.
pub const DEFAULT_BIN_WIDTH: u32 = 500;
