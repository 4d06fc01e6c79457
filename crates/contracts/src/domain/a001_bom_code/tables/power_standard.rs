//! Power standard annotations found on drawings and nameplates.
//!
//! Reference data only: no schema section is built from this table.

pub(crate) const POWER_STANDARD_CODES: &[(&str, &str)] = &[
    ("0", "标注错误（无此配置）"),
    ("A", "220V/50HZ、双110V/60HZ"),
    ("B", "220-240V/50Hz英插"),
    ("C", "220-240V/50Hz澳插（15A）"),
    ("D", "220-240V/50Hz欧插（13A/16A）"),
    ("E", "380V/50HZ"),
    ("F", "220-240V/50Hz澳插（10A）"),
    ("G", "110V/60Hz美插 带转换器"),
    ("H", "110V/60Hz美插带漏保"),
    ("I", "220/60Hz"),
    ("J", "220/50Hz国插带漏保（16A）"),
    ("K", "220-240V/50Hz欧插带漏保（16A）"),
    ("L", "220V/60Hz带美插带漏保"),
    ("M", "110V/60HZ"),
];
