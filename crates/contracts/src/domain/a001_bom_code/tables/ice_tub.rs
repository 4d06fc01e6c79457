//! 冰水缸 option tables.

use crate::enums::BomFamily;

use super::super::schema::CodeSchema;
use super::super::section::{CodeSection, OptionTable};

const COLOR_HOLE_CODES: &[(&str, &str)] = &[
    ("A1", "进口云彩白 + 无喷嘴/ 白色/开孔 + 无喷嘴"),
    ("A2", "进口云彩白 + 标准孔"),
    ("B1", "进口云彩黑 + 无喷嘴"),
    ("B2", "进口云彩黑 + 标准孔"),
    ("M1", "国产全白 + 无喷嘴"),
    ("M2", "国产全白 + 标准孔"),
    ("Q1", "内缸黑色+外缸白色 + 无喷嘴"),
    ("Q2", "内缸黑色+外缸白色 + 标准孔"),
    ("R1", "内缸白色+外缸黑色 + 无喷嘴"),
    ("R2", "内缸白色+外缸黑色 + 标准孔"),
];

const NOZZLE_CODES: &[(&str, &str)] = &[
    ("00", "无喷嘴"),
    ("1A", "眉毛喷嘴/标准孔"),
];

const POWER_CODES: &[(&str, &str)] = &[
    ("0", "无电源标准"),
    ("A", "220-240V/50Hz"),
    ("B", "双110V/60Hz"),
    ("C", "220-240V/50Hz英插"),
    ("E", "220-240V/50Hz欧插（16A）"),
    ("F", "380V/50HZ"),
    ("G", "220-240V/50Hz澳插（10A）"),
    ("H", "单110V/60Hz美插（配漏保转换器）"),
    ("I", "单110V/60Hz美插带漏保"),
    ("L", "220-240V/50Hz欧插带漏保（16A）"),
    ("M", "220V/60Hz美插"),
    ("N", "220V/60Hz美插带漏保/菲律宾"),
];

const CONTROL_CODES: &[(&str, &str)] = &[
    ("00", "无控制器"),
    ("1A", "P16B162+PB557-02"),
    ("1B", "P16B162+PB565-000"),
    ("1E", "P68B123-001+PB565-001+4KW"),
    ("3A", "P16B162+PB557-02（美标）"),
    ("3B", "P16B162+PB565-000（美标）"),
    ("3C", "P68B123-001+PB565-001+4KW（美标/面板带Joyonway商标）"),
    ("3D", "P16B162+PB565-000（欧标/美标通用/带WIFI功能/带客户logo）"),
    ("3E", "P16B162+PB565-000（欧标/美标通用/带WIFI功能/带客户logo）(停用）"),
    ("3F", "P16B162+PB565-000（欧标/美标通用/带WIFI功能/带贝拉乔logo）"),
    ("5D", "P68B123-001+PB565-001+4KW（欧标/美标通用/带WIFI功能/带客户logo）"),
    ("5E", "P68B123-001+PB565-001+4KW（美标）"),
    ("5F", "P68B123-001+PB565-001+4KW（欧标/美标通用/带WIFI功能/带贝拉乔logo）"),
];

const WATER_PUMP_CODES: &[(&str, &str)] = &[
    ("00", "无水泵"),
    ("1B", "2个循环泵+1个单速2HPLX"),
    ("1C", "1个循环泵"),
    ("2B", "冰水区1个循环+按摩区1个双速2HPLX"),
    ("3C", "1个循环泵（美标/单110V）"),
    ("3D", "1个循环泵（美标/单110V/大功率）"),
    ("3F", "2个循环泵+1个单速2HPLX（美标/单110V）"),
    ("3I", "1个循环泵（220V/60HZ）"),
    ("4B", "冰水区1个循环+按摩区1个双速2HPLX（美标/单110V）"),
    ("4D", "冰水区1个循环+按摩区1个双速2HPLX（美标/单110V）/管路带防冻功能"),
];

const AIR_PUMP_CODES: &[(&str, &str)] = &[
    ("0", "无风泵"),
];

const SANITATION_CODES: &[(&str, &str)] = &[
    ("0", "无消毒系统"),
    ("A", "臭氧"),
    ("B", "UV"),
    ("H", "臭氧（美标）"),
    ("N", "UV（美标）"),
];

const MULTIMEDIA_CODES: &[(&str, &str)] = &[
    ("0", "无多媒体"),
    ("G", "普兰简配蓝牙+共振喇叭"),
    ("S", "普兰简配蓝牙+共振喇叭（美标）"),
    ("U", "普兰豪配蓝牙+低音炮（美标）"),
];

const LIGHTING_CODES: &[(&str, &str)] = &[
    ("0", "无灯光系统"),
    ("A", "水底灯"),
    ("D", "水底灯+阀带灯+缸边灯+转角灯"),
    ("T", "水底灯+贝拉乔logo灯"),
];

const BOTTOM_INSULATION_CODES: &[(&str, &str)] = &[
    ("0", "无支架"),
    ("A", "玻璃纤维/单底支架"),
    ("B", "玻璃纤维/半三明治底支架"),
    ("C", "玻璃纤维/全三明治底支架"),
    ("K", "单底镀锌支架"),
    ("L", "无底支架（停用）"),
    ("P", "玻璃纤维/全三明治底支架(配镀锌支架)"),
];

const SIDE_INSULATION_CODES: &[(&str, &str)] = &[
    ("0", "无缸侧保温"),
    ("A", "四面保温板"),
    ("C", "电机面保温板"),
];

const BODY_INSULATION_CODES: &[(&str, &str)] = &[
    ("0", "无缸体保温"),
    ("A", "户外缸单层发泡"),
    ("B", "SPA区单泡+冰水区满泡"),
    ("C", "SPA区满泡+冰水区满泡"),
];

const SKIRT_CODES: &[(&str, &str)] = &[
    ("0", "无裙边"),
    ("A", "灰色木纹铝塑板裙边/外缸"),
    ("B", "实木裙边（刷木蜡油）"),
    ("N", "灰色/铝板贴膜聚氨酯裙边"),
    ("O", "双面色/黑橡木网纹铝板聚氨酯裙边"),
    ("P", "棕色/铝板贴膜聚氨酯裙边"),
    ("S", "实木裙边（普通）"),
    ("X", "单面色/黑橡木网纹铝板聚氨酯裙边"),
];

const CORNER_CODES: &[(&str, &str)] = &[
    ("0", "无转角"),
    ("D", "灰色铝转角"),
    ("F", "棕色铝转角"),
    ("P", "黑橡木PS转角"),
    ("Q", "黑橡木铝转角"),
];

const STAIR_CODES: &[(&str, &str)] = &[
    ("0", "无台阶"),
    ("A", "PS/灰色一级台阶"),
    ("B", "实木台阶（刷木蜡油）"),
    ("L", "实木台阶（普通）"),
];

const COVER_CODES: &[(&str, &str)] = &[
    ("0", "无缸盖"),
    ("I", "黑色防水织布四叠缸盖"),
];

const EXTERNAL_CODES: &[(&str, &str)] = &[
    ("0", "无热泵"),
    ("K", "带Balboa热泵"),
    ("L", "带Balboa热泵（美标/单110V）"),
    ("N", "带Balboa热泵（220V/60HZ）"),
];

const PACKAGING_CODES: &[(&str, &str)] = &[
    ("A", "木托盘包装（平放）"),
    ("B", "空缸木托盘叠装"),
    ("G", "全夹板包装（平放）"),
    ("H", "全夹板包装/夹板带客户Logo（平放）"),
    ("Z", "木托盘包装（客户定制）"),
];

pub(crate) fn schema() -> CodeSchema {
    CodeSchema::new(
        BomFamily::IceTub,
        vec![
            CodeSection::leaf(
                "colorHole",
                "第1+2位（缸体颜色+开孔配置）",
                2,
                OptionTable::from_static(COLOR_HOLE_CODES),
            ),
            CodeSection::leaf(
                "nozzle",
                "第3+4位（喷嘴配置）",
                2,
                OptionTable::from_static(NOZZLE_CODES),
            ),
            CodeSection::leaf(
                "powerStandard",
                "第5位（电源标准）",
                1,
                OptionTable::from_static(POWER_CODES),
            ),
            CodeSection::leaf(
                "controlSystem",
                "第6+7位（控制系统）",
                2,
                OptionTable::from_static(CONTROL_CODES),
            ),
            CodeSection::leaf(
                "waterPump",
                "第8+9位（水泵配置）",
                2,
                OptionTable::from_static(WATER_PUMP_CODES),
            ),
            CodeSection::leaf(
                "airPump",
                "第10位（风泵配置）",
                1,
                OptionTable::from_static(AIR_PUMP_CODES),
            ),
            CodeSection::leaf(
                "sanitation",
                "第11位（消毒系统）",
                1,
                OptionTable::from_static(SANITATION_CODES),
            ),
            CodeSection::leaf(
                "multimedia",
                "第12位（多媒体）",
                1,
                OptionTable::from_static(MULTIMEDIA_CODES),
            ),
            CodeSection::leaf(
                "lighting",
                "第13位（灯光配置）",
                1,
                OptionTable::from_static(LIGHTING_CODES),
            ),
            CodeSection::leaf(
                "bottomInsulation",
                "第14位（支架+底保温）",
                1,
                OptionTable::from_static(BOTTOM_INSULATION_CODES),
            ),
            CodeSection::leaf(
                "sideInsulation",
                "第15位（侧保温配置）",
                1,
                OptionTable::from_static(SIDE_INSULATION_CODES),
            ),
            CodeSection::leaf(
                "bodyInsulation",
                "第16位（缸体保温）",
                1,
                OptionTable::from_static(BODY_INSULATION_CODES),
            ),
            CodeSection::leaf(
                "skirt",
                "第17位（裙边）",
                1,
                OptionTable::from_static(SKIRT_CODES),
            ),
            CodeSection::leaf(
                "corner",
                "第18位（转角）",
                1,
                OptionTable::from_static(CORNER_CODES),
            ),
            CodeSection::leaf(
                "stairs",
                "第19位（台阶）",
                1,
                OptionTable::from_static(STAIR_CODES),
            ),
            CodeSection::leaf(
                "cover",
                "第20位（缸盖/缸罩）",
                1,
                OptionTable::from_static(COVER_CODES),
            ),
            CodeSection::leaf(
                "externalHeating",
                "第21位（外加热/吊杆/划桨/其他配置）",
                1,
                OptionTable::from_static(EXTERNAL_CODES),
            ),
            CodeSection::leaf(
                "packaging",
                "第22位（包装）",
                1,
                OptionTable::from_static(PACKAGING_CODES),
            ),
        ],
    )
}
